/// Failures talking to the lottery backend.
#[derive(Debug)]
pub enum UpstreamError {
    /// Backend unreachable, or its body was not JSON.
    Unavailable(reqwest::Error),
    /// Backend answered with a non-success status.
    Rejected(reqwest::StatusCode),
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "backend unavailable: {}", e),
            Self::Rejected(status) => write!(f, "backend rejected request: {}", status),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable(e) => Some(e),
            Self::Rejected(_) => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unavailable(e)
    }
}
