use tracing::{debug, error};

use super::backend::{ApplicationStore, IdentityService};
use super::domain::{ApplicationDraft, DraftField};
use super::service::{
    ApplicationIntakeService, SubmissionError, SubmissionReceipt, SUBMISSION_RECEIVED_MESSAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
}

/// Result of driving one submission through the form.
#[derive(Debug)]
pub enum SubmitOutcome {
    Received(SubmissionReceipt),
    Failed(SubmissionError),
    /// A submission was already in flight; nothing was sent.
    AlreadySubmitting,
}

/// State behind one rendered application form: the draft, the submission phase and whatever
/// notice the page should show next.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    draft: ApplicationDraft,
    phase: SubmissionPhase,
    error_message: Option<&'static str>,
    acknowledgement: Option<&'static str>,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::with_draft(ApplicationDraft::default())
    }

    pub fn with_draft(draft: ApplicationDraft) -> Self {
        Self {
            draft,
            phase: SubmissionPhase::Idle,
            error_message: None,
            acknowledgement: None,
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    /// Hand out the pending acknowledgement. It is only ever returned once.
    pub fn take_acknowledgement(&mut self) -> Option<&'static str> {
        self.acknowledgement.take()
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.update_field(field, value);
    }

    /// Enter `Submitting` and return the snapshot to send, or `None` when a submission is
    /// already in flight.
    pub fn begin_submission(&mut self) -> Option<ApplicationDraft> {
        if self.phase == SubmissionPhase::Submitting {
            return None;
        }
        self.phase = SubmissionPhase::Submitting;
        self.error_message = None;
        self.acknowledgement = None;
        Some(self.draft.clone())
    }

    /// Return to `Idle`. Success clears the draft and queues the acknowledgement; failure keeps
    /// the draft so the applicant can retry without retyping.
    pub fn finish_submission(&mut self, result: &Result<SubmissionReceipt, SubmissionError>) {
        match result {
            Ok(_) => {
                self.draft = ApplicationDraft::default();
                self.acknowledgement = Some(SUBMISSION_RECEIVED_MESSAGE);
            }
            Err(err) => {
                self.error_message = Some(err.user_message());
            }
        }
        self.phase = SubmissionPhase::Idle;
    }

    pub async fn submit<I, S>(&mut self, service: &ApplicationIntakeService<I, S>) -> SubmitOutcome
    where
        I: IdentityService + 'static,
        S: ApplicationStore + 'static,
    {
        let Some(snapshot) = self.begin_submission() else {
            debug!("submission already in flight; ignoring");
            return SubmitOutcome::AlreadySubmitting;
        };

        let result = service.submit(&snapshot).await;
        if let Err(err) = &result {
            error!(stage = err.stage(), error = %err, "error submitting application");
        }
        self.finish_submission(&result);

        match result {
            Ok(receipt) => SubmitOutcome::Received(receipt),
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}
