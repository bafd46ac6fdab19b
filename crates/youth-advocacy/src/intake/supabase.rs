//! Supabase REST adapter for the identity service and the applications table.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::backend::{ApplicationStore, AuthError, IdentityService, InsertError};
use super::credential::Credential;
use super::domain::{AccountId, ApplicationRow};
use crate::config::BackendConfig;

const MAX_ERROR_MESSAGE_LEN: usize = 200;

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    applications_table: String,
}

impl SupabaseClient {
    pub fn from_config(config: &BackendConfig) -> Result<Self, SupabaseClientError> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(&config.anon_key)?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))?;
        bearer.set_sensitive(true);
        headers.insert("apikey", api_key);
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            applications_table: config.applications_table.clone(),
        })
    }

    fn signup_url(&self) -> String {
        format!("{}/auth/v1/signup", self.base_url)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.applications_table)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SupabaseClientError {
    #[error("anon key is not a valid header value")]
    InvalidKey(#[from] InvalidHeaderValue),
    #[error("unable to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// GoTrue answers with the user object itself, or with a session wrapping it under `user`
/// when email confirmation is disabled.
#[derive(Debug, Default, Deserialize)]
struct SignupResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    user: Option<SignupUser>,
}

#[derive(Debug, Default, Deserialize)]
struct SignupUser {
    #[serde(default)]
    id: Option<String>,
}

impl SignupResponse {
    fn account_id(self) -> Option<AccountId> {
        self.user
            .and_then(|user| user.id)
            .or(self.id)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(AccountId)
    }
}

#[async_trait]
impl IdentityService for SupabaseClient {
    async fn create_account(
        &self,
        email: &str,
        credential: &Credential,
    ) -> Result<Option<AccountId>, AuthError> {
        let response = self
            .http
            .post(self.signup_url())
            .json(&SignupRequest {
                email,
                password: credential.expose(),
            })
            .send()
            .await
            .map_err(|err| AuthError::Unreachable(err.to_string()))?;

        let status = response.status();
        let body = read_body(response)
            .await
            .map_err(|err| AuthError::Unreachable(err.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        match serde_json::from_str::<SignupResponse>(&body) {
            Ok(parsed) => Ok(parsed.account_id()),
            Err(err) => {
                warn!(%err, "signup succeeded with an unreadable body");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ApplicationStore for SupabaseClient {
    async fn insert_application(&self, row: &ApplicationRow) -> Result<(), InsertError> {
        let response = self
            .http
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await
            .map_err(|err| InsertError::Unreachable(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(table = %self.applications_table, "application row inserted");
            return Ok(());
        }

        let body = read_body(response)
            .await
            .map_err(|err| InsertError::Unreachable(err.to_string()))?;
        Err(InsertError::Rejected {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

async fn read_body(response: Response) -> Result<String, reqwest::Error> {
    response.text().await
}

/// Pull a human readable message out of a Supabase error body.
fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["msg", "error_description", "message", "error"]
            .into_iter()
            .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
    });

    let message = from_json.unwrap_or_else(|| body.trim().to_string());
    if message.is_empty() {
        return "no details provided".to_string();
    }
    message.chars().take(MAX_ERROR_MESSAGE_LEN).collect()
}
