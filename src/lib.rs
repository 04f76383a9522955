pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod page;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::{RunReport, run};
pub use client::{HttpClient, SubmitClient};
pub use config::Config;
pub use controller::FormController;
pub use page::Page;
pub use state::{Outcome, SubmitState};
