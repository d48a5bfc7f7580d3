use async_trait::async_trait;
use std::fmt;

use crate::modules::applicant::application::ports::outgoing::{ApplicantResult, NewApplicantData};

#[derive(Debug, Clone)]
pub enum UpdateApplicantError {
    RepositoryError(String),
}

impl fmt::Display for UpdateApplicantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateApplicantError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

// `Ok(None)` means "no such applicant"; it is not an error.
#[async_trait]
pub trait UpdateApplicantUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        data: NewApplicantData,
    ) -> Result<Option<ApplicantResult>, UpdateApplicantError>;
}
