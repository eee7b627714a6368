use thiserror::Error;

/// Failure of a single request against the users API.
///
/// The variants only matter for logging; the UI collapses all of them into
/// one message per [`RequestKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// The operation a request belongs to. Each kind owns one user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl RequestKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            RequestKind::Fetch => "Failed to fetch users",
            RequestKind::Create => "Failed to add user",
            RequestKind::Update => "Failed to update user",
            RequestKind::Delete => "Failed to delete user",
        }
    }
}
