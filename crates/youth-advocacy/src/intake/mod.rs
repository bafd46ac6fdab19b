//! Application intake for the landing page form.
//!
//! An applicant's draft is turned into two writes against the hosted backend: an account is
//! created first, then an `applications` row referencing it is inserted. The backend is reached
//! through the [`IdentityService`] and [`ApplicationStore`] traits so the flow can run against
//! [`SupabaseClient`] in production and in-memory doubles in tests.

pub mod backend;
pub(crate) mod controller;
pub mod credential;
pub mod domain;
pub mod router;
pub mod service;
pub mod supabase;

#[cfg(test)]
mod tests;

pub use backend::{ApplicationStore, AuthError, IdentityService, InsertError};
pub use controller::{ApplicationForm, SubmissionPhase, SubmitOutcome};
pub use credential::{Credential, CredentialGenerator};
pub use domain::{
    AccountId, ApplicantDetails, ApplicationDraft, ApplicationRow, DraftError, DraftField,
    FieldOfWork,
};
pub use router::application_router;
pub use service::{
    ApplicationIntakeService, SubmissionError, SubmissionReceipt, SUBMISSION_FAILED_MESSAGE,
    SUBMISSION_RECEIVED_MESSAGE,
};
pub use supabase::{SupabaseClient, SupabaseClientError};
