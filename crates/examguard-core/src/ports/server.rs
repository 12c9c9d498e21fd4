//! Server communication port.
//!
//! Exam-configuration retrieval is delegated to an exam server. Only the
//! contract lives here; the protocol client is implemented elsewhere and the
//! resolution service never depends on it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// An exam offered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    /// Learning management system the exam belongs to.
    pub lms: String,
    pub name: String,
    pub url: String,
}

/// Information required to re-establish a connection with the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    /// Serialized API discovery document.
    pub api: Option<String>,
    pub connection_token: Option<String>,
    pub oauth2_token: Option<String>,
}

/// Server settings taken from the exam configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    pub server_url: Option<String>,
    pub client_name: Option<String>,
    pub client_secret: Option<String>,
    pub institution: Option<String>,
    /// Timeout of a single request, in milliseconds.
    pub request_timeout_ms: u64,
    /// Number of attempts per request before giving up.
    pub request_attempts: u32,
    /// Pause between two attempts, in milliseconds.
    pub request_attempt_interval_ms: u64,
}

impl ServerSettings {
    /// Settings with the request defaults used when the configuration omits them.
    pub const fn with_defaults() -> Self {
        Self {
            server_url: None,
            client_name: None,
            client_secret: None,
            institution: None,
            request_timeout_ms: 30_000,
            request_attempts: 5,
            request_attempt_interval_ms: 2_000,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Response of a single server operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerResponse<T> {
    pub success: bool,
    pub value: Option<T>,
    pub message: Option<String>,
}

impl<T> ServerResponse<T> {
    pub const fn ok(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            value: None,
            message: Some(message.into()),
        }
    }

    /// Convert into a `Result`, treating a successful response without a value as an error.
    pub fn into_result(self) -> Result<T, ServerError> {
        match (self.success, self.value) {
            (true, Some(value)) => Ok(value),
            (true, None) => Err(ServerError::MissingValue),
            (false, _) => Err(ServerError::Rejected(
                self.message
                    .unwrap_or_else(|| "no message provided".to_string()),
            )),
        }
    }
}

impl ServerResponse<()> {
    /// Successful response of an operation without a payload.
    pub const fn done() -> Self {
        Self::ok(())
    }
}

/// Errors derived from a failed [`ServerResponse`].
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Server rejected the request: {0}")]
    Rejected(String),

    #[error("Server response did not contain a value")]
    MissingValue,
}

/// Communication with an exam server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServerProxy: Send + Sync {
    /// Attempt to establish a connection with the server.
    async fn connect(&self) -> ServerResponse<()>;

    async fn disconnect(&self) -> ServerResponse<()>;

    /// All exams currently available.
    async fn get_available_exams(&self) -> ServerResponse<Vec<Exam>>;

    /// Location of the configuration file for `exam`.
    async fn get_configuration_for(&self, exam: &Exam) -> ServerResponse<Url>;

    /// Information required to reconnect to this server later.
    fn get_connection_info(&self) -> ConnectionInfo;

    /// Set up the server settings used for communication.
    fn initialize(&self, settings: ServerSettings);

    /// Resume an existing session with known tokens and exam.
    fn initialize_with_session(
        &self,
        api: String,
        connection_token: String,
        exam_id: String,
        oauth2_token: String,
        settings: ServerSettings,
    );

    async fn send_session_identifier(&self, identifier: &str) -> ServerResponse<()>;

    fn start_connectivity(&self);

    fn stop_connectivity(&self);
}
