use crate::page::SubmitButton;

pub const IDLE_LABEL: &str = "Save Readings";
pub const BUSY_LABEL: &str = "Saving...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Rejected { message: String },
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Done(Outcome),
}

impl SubmitState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

pub fn render_button(state: &SubmitState, button: &mut SubmitButton) {
    let busy = state.is_busy();
    button.disabled = busy;
    button.label = if busy { BUSY_LABEL } else { IDLE_LABEL }.to_string();
}
