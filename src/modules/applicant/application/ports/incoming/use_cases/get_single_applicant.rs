use async_trait::async_trait;
use std::fmt;

use crate::modules::applicant::application::ports::outgoing::ApplicantResult;

#[derive(Debug, Clone)]
pub enum GetSingleApplicantError {
    RepositoryError(String),
}

impl fmt::Display for GetSingleApplicantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleApplicantError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

// `Ok(None)` means "no such applicant"; it is not an error.
#[async_trait]
pub trait GetSingleApplicantUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Option<ApplicantResult>, GetSingleApplicantError>;
}
