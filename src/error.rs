use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Everything the dashboard handler can surface to the panel. The formatter
/// itself is total, so all of these originate in config or the fetch.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Error: AIRTABLE_TOKEN environment variable not set")]
    MissingToken,

    /// Airtable answered with an explicit error payload.
    #[error("Airtable error: {0}")]
    Upstream(String),

    /// The query succeeded but matched zero records.
    #[error("No records found in {0} table")]
    NoData(String),

    #[error("Error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl DashboardError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoData(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Failures render as one-line plain text, the only thing a 480px e-ink
// panel can usefully show.
impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
