use async_trait::async_trait;
use std::fmt;

use crate::modules::applicant::application::ports::outgoing::{ApplicantResult, NewApplicantData};

#[derive(Debug, Clone)]
pub enum CreateApplicantError {
    RepositoryError(String),
}

impl fmt::Display for CreateApplicantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateApplicantError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CreateApplicantUseCase: Send + Sync {
    async fn execute(&self, data: NewApplicantData)
        -> Result<ApplicantResult, CreateApplicantError>;
}
