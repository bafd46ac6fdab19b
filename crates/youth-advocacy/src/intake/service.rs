use std::sync::Arc;

use tracing::{info, warn};

use super::backend::{ApplicationStore, AuthError, IdentityService, InsertError};
use super::credential::CredentialGenerator;
use super::domain::{AccountId, ApplicationDraft, ApplicationRow, DraftError, FieldOfWork};
use crate::config::IntakeConfig;

/// Shown to the applicant for every failed submission, whatever the cause.
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "There was an error submitting your application. Please try again.";

/// Acknowledgement shown once an application has been stored.
pub const SUBMISSION_RECEIVED_MESSAGE: &str =
    "Thank you for your application! We will contact you soon.";

/// Runs the two-step signup: create the applicant account, then insert the application row
/// that references it.
///
/// The two writes are not atomic. When the insert fails the account stays behind with no
/// application attached, and nothing here detects or repairs that.
pub struct ApplicationIntakeService<I, S> {
    identity: Arc<I>,
    store: Arc<S>,
    credentials: CredentialGenerator,
}

impl<I, S> ApplicationIntakeService<I, S>
where
    I: IdentityService + 'static,
    S: ApplicationStore + 'static,
{
    pub fn new(identity: Arc<I>, store: Arc<S>, config: IntakeConfig) -> Self {
        Self {
            identity,
            store,
            credentials: CredentialGenerator::new(config.credential_length),
        }
    }

    /// Submit a snapshot of the draft. The store is only called once the identity service has
    /// produced an account identifier.
    pub async fn submit(
        &self,
        draft: &ApplicationDraft,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let details = draft.validate()?;
        let field_of_work = details.field_of_work;

        let credential = self.credentials.generate();
        let account_id = self
            .identity
            .create_account(&details.email, &credential)
            .await?
            .ok_or(SubmissionError::MissingIdentity)?;
        info!(%account_id, "applicant account created");

        let row = ApplicationRow::new(details, account_id.clone());
        if let Err(error) = self.store.insert_application(&row).await {
            warn!(%account_id, %error, "account created but application row was not stored");
            return Err(error.into());
        }
        info!(%account_id, field_of_work = field_of_work.as_str(), "application stored");

        Ok(SubmissionReceipt {
            account_id,
            field_of_work,
        })
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub account_id: AccountId,
    pub field_of_work: FieldOfWork,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("invalid draft: {0}")]
    InvalidDraft(#[from] DraftError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("identity service returned no account identifier")]
    MissingIdentity,
    #[error(transparent)]
    Insert(#[from] InsertError),
}

impl SubmissionError {
    /// Step of the flow that failed, for logs only.
    pub fn stage(&self) -> &'static str {
        match self {
            SubmissionError::InvalidDraft(_) => "validation",
            SubmissionError::Auth(_) | SubmissionError::MissingIdentity => "account_creation",
            SubmissionError::Insert(_) => "application_insert",
        }
    }

    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}
