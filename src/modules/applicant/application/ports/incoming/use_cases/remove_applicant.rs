use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub enum RemoveApplicantError {
    RepositoryError(String),
}

impl fmt::Display for RemoveApplicantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveApplicantError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

// `Ok(false)` means "no such applicant"; it is not an error.
#[async_trait]
pub trait RemoveApplicantUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<bool, RemoveApplicantError>;
}
