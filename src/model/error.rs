use serde::{Deserialize, Serialize};

/// Error body returned by the server on failed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppError {
    /// Translation id, e.g. `api.channel.create_channel.direct_channel.app_error`
    pub id: String,
    pub message: String,
    pub detailed_error: String,
    pub request_id: String,
    pub status_code: u16,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.id.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({})", self.message, self.id)
        }
    }
}

/// Body of endpoints that answer with `{"status": "OK"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusOk {
    pub status: String,
}

impl StatusOk {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}
