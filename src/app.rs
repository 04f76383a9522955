use crate::client::HttpClient;
use crate::config::Config;
use crate::controller::FormController;
use crate::page::{Page, ReadingForm};
use crate::state::Outcome;
use crate::ui::render_page;
use tracing::warn;

pub struct RunReport {
    pub outcome: Outcome,
    pub html: String,
}

/// Loads the stats, fills the form from `name=value` pairs, submits once.
pub async fn run(config: Config, pairs: &[(String, String)]) -> RunReport {
    let client = HttpClient::new(config.base_url);
    let mut controller = FormController::new(client, Page::new(ReadingForm::default()));

    controller.load_stats().await;

    let form = &mut controller.page_mut().form;
    for (name, value) in pairs {
        if !form.set(name, value.as_str()) {
            warn!("ignoring unknown field '{name}'");
        }
    }

    let outcome = controller.submit().await;
    RunReport {
        outcome,
        html: render_page(controller.page()),
    }
}

pub fn parse_pairs<I: IntoIterator<Item = String>>(args: I) -> Vec<(String, String)> {
    args.into_iter()
        .filter_map(|arg| match arg.split_once('=') {
            Some((name, value)) => Some((name.trim().to_string(), value.to_string())),
            None => {
                warn!("ignoring argument without '=': {arg}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_split_on_first_equals() {
        let pairs = parse_pairs(["systolic1=120".to_string(), "bogus".to_string(), "note=a=b".to_string()]);
        assert_eq!(
            pairs,
            vec![
                ("systolic1".to_string(), "120".to_string()),
                ("note".to_string(), "a=b".to_string()),
            ]
        );
    }
}
