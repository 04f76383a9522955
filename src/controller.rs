use crate::client::{Reply, SubmitClient};
use crate::errors::ClientError;
use crate::models::{ReadingSubmission, SubmissionResult, SubmitFailure, SubmitSuccess};
use crate::page::Page;
use crate::state::{Outcome, SubmitState, render_button};
use tracing::{error, info, warn};

pub const GENERIC_ERROR: &str = "Error submitting readings. Please try again.";

/// Drives one reading form: collect, submit, render.
pub struct FormController<C> {
    client: C,
    page: Page,
    state: SubmitState,
}

impl<C: SubmitClient> FormController<C> {
    pub fn new(client: C, page: Page) -> Self {
        let mut controller = Self {
            client,
            page,
            state: SubmitState::Idle,
        };
        controller.transition(SubmitState::Idle);
        controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Primes the stats cards from the collaborator. A failure leaves the
    /// page as it was.
    pub async fn load_stats(&mut self) {
        match self.client.fetch_stats().await {
            Ok(stats) => self.page.stats.update_stats_display(&stats),
            Err(err) => warn!("failed to load stats: {err}"),
        }
    }

    pub async fn submit(&mut self) -> Outcome {
        self.transition(SubmitState::Submitting);

        let submission = ReadingSubmission::from_entries(self.page.form.entries());
        let reply = self.client.submit(&submission).await;
        let outcome = match reply {
            Ok(reply) => self.apply_reply(reply),
            Err(err) => self.fail(err),
        };

        self.transition(SubmitState::Done(outcome.clone()));
        outcome
    }

    fn apply_reply(&mut self, reply: Reply) -> Outcome {
        if reply.is_success() {
            let success: SubmitSuccess = match serde_json::from_value(reply.body) {
                Ok(success) => success,
                Err(err) => return self.fail(err.into()),
            };
            info!(
                classification = %success.classification.name,
                risk = success.classification.risk.as_deref().unwrap_or("unknown"),
                description = success.classification.description.as_deref().unwrap_or(""),
                message = success.message.as_deref().unwrap_or(""),
                "readings saved"
            );

            let stats = success.stats.clone();
            self.page
                .result
                .display_result(&SubmissionResult::Success(success));
            if let Some(stats) = &stats {
                self.page.stats.update_stats_display(stats);
            }
            self.page.form.reset();
            return Outcome::Saved;
        }

        let failure: SubmitFailure = serde_json::from_value(reply.body).unwrap_or_default();
        let message = failure
            .error
            .unwrap_or_else(|| format!("Request failed with status {}", reply.status));
        warn!(status = reply.status, %message, "readings rejected");

        self.page.result.display_result(&SubmissionResult::Failure {
            error: message.clone(),
        });
        Outcome::Rejected { message }
    }

    fn fail(&mut self, err: ClientError) -> Outcome {
        error!("Error: {err}");
        self.page.result.display_result(&SubmissionResult::Failure {
            error: GENERIC_ERROR.to_string(),
        });
        Outcome::Failed
    }

    fn transition(&mut self, state: SubmitState) {
        render_button(&state, &mut self.page.button);
        self.state = state;
    }
}
