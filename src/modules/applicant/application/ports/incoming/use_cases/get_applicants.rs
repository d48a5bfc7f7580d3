use async_trait::async_trait;
use std::fmt;

use crate::modules::applicant::application::ports::outgoing::ApplicantResult;

#[derive(Debug, Clone)]
pub enum GetApplicantsError {
    RepositoryError(String),
}

impl fmt::Display for GetApplicantsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetApplicantsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetApplicantsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ApplicantResult>, GetApplicantsError>;
}
