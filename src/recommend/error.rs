use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendErrorKind {
    InvalidRequest,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendError {
    pub kind: RecommendErrorKind,
    pub message: String,
}

impl RecommendError {
    pub fn new(kind: RecommendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RecommendError {}

pub fn invalid_request(message: impl Into<String>) -> RecommendError {
    RecommendError::new(RecommendErrorKind::InvalidRequest, message)
}

pub fn internal_error(message: impl Into<String>) -> RecommendError {
    RecommendError::new(RecommendErrorKind::Internal, message)
}
