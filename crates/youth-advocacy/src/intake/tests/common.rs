use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::config::IntakeConfig;
use crate::intake::backend::{ApplicationStore, AuthError, IdentityService, InsertError};
use crate::intake::credential::Credential;
use crate::intake::domain::{AccountId, ApplicationDraft, ApplicationRow};
use crate::intake::service::ApplicationIntakeService;

pub(super) type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub(super) fn amara_draft() -> ApplicationDraft {
    ApplicationDraft {
        full_name: "Amara Obi".to_string(),
        email: "amara@example.com".to_string(),
        phone: "+254700000000".to_string(),
        high_school: "Nairobi High".to_string(),
        university: String::new(),
        field_of_work: "technology".to_string(),
    }
}

pub(super) struct RecordingIdentity {
    response: Result<Option<AccountId>, AuthError>,
    signups: Mutex<Vec<(String, String)>>,
    log: CallLog,
}

impl RecordingIdentity {
    pub(super) fn signups(&self) -> Vec<(String, String)> {
        self.signups.lock().expect("identity mutex poisoned").clone()
    }
}

#[async_trait]
impl IdentityService for RecordingIdentity {
    async fn create_account(
        &self,
        email: &str,
        credential: &Credential,
    ) -> Result<Option<AccountId>, AuthError> {
        self.log
            .lock()
            .expect("log mutex poisoned")
            .push("create_account");
        self.signups
            .lock()
            .expect("identity mutex poisoned")
            .push((email.to_string(), credential.expose().to_string()));
        self.response.clone()
    }
}

pub(super) struct RecordingStore {
    response: Result<(), InsertError>,
    rows: Mutex<Vec<ApplicationRow>>,
    log: CallLog,
}

impl RecordingStore {
    pub(super) fn rows(&self) -> Vec<ApplicationRow> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl ApplicationStore for RecordingStore {
    async fn insert_application(&self, row: &ApplicationRow) -> Result<(), InsertError> {
        self.log
            .lock()
            .expect("log mutex poisoned")
            .push("insert_application");
        self.rows
            .lock()
            .expect("store mutex poisoned")
            .push(row.clone());
        self.response.clone()
    }
}

pub(super) type TestService = ApplicationIntakeService<RecordingIdentity, RecordingStore>;

pub(super) struct Harness {
    pub(super) service: Arc<TestService>,
    pub(super) identity: Arc<RecordingIdentity>,
    pub(super) store: Arc<RecordingStore>,
    pub(super) log: CallLog,
}

pub(super) fn harness(
    identity: Result<Option<AccountId>, AuthError>,
    store: Result<(), InsertError>,
) -> Harness {
    let log = CallLog::default();
    let identity = Arc::new(RecordingIdentity {
        response: identity,
        signups: Mutex::default(),
        log: log.clone(),
    });
    let store = Arc::new(RecordingStore {
        response: store,
        rows: Mutex::default(),
        log: log.clone(),
    });
    let service = Arc::new(ApplicationIntakeService::new(
        identity.clone(),
        store.clone(),
        IntakeConfig::default(),
    ));

    Harness {
        service,
        identity,
        store,
        log,
    }
}

pub(super) fn happy_harness() -> Harness {
    harness(Ok(Some(AccountId("u-1".to_string()))), Ok(()))
}

pub(super) fn rejected_signup() -> AuthError {
    AuthError::Rejected {
        status: 422,
        message: "User already registered".to_string(),
    }
}

pub(super) fn rejected_insert() -> InsertError {
    InsertError::Rejected {
        status: 409,
        message: "duplicate key value violates unique constraint".to_string(),
    }
}

impl Harness {
    pub(super) fn calls(&self) -> Vec<&'static str> {
        self.log.lock().expect("log mutex poisoned").clone()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
