use async_trait::async_trait;

use super::credential::Credential;
use super::domain::{AccountId, ApplicationRow};

/// Account creation on the hosted identity service.
///
/// `Ok(None)` means the service accepted the request but handed back nothing that identifies
/// the new account.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn create_account(
        &self,
        email: &str,
        credential: &Credential,
    ) -> Result<Option<AccountId>, AuthError>;
}

/// Write access to the hosted `applications` table.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn insert_application(&self, row: &ApplicationRow) -> Result<(), InsertError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("identity service rejected signup ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("identity service unreachable: {0}")]
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("application store rejected row ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("application store unreachable: {0}")]
    Unreachable(String),
}
