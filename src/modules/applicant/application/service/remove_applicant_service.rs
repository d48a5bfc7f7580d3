use async_trait::async_trait;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    RemoveApplicantError, RemoveApplicantUseCase,
};
use crate::modules::applicant::application::ports::outgoing::{
    ApplicantRepository, ApplicantRepositoryError,
};

pub struct RemoveApplicantService<R>
where
    R: ApplicantRepository,
{
    applicant_repository: R,
}

impl<R> RemoveApplicantService<R>
where
    R: ApplicantRepository,
{
    pub fn new(applicant_repository: R) -> Self {
        Self {
            applicant_repository,
        }
    }
}

#[async_trait]
impl<R> RemoveApplicantUseCase for RemoveApplicantService<R>
where
    R: ApplicantRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<bool, RemoveApplicantError> {
        self.applicant_repository
            .remove_applicant(id)
            .await
            .map_err(|e| match e {
                ApplicantRepositoryError::DatabaseError(msg) => {
                    RemoveApplicantError::RepositoryError(msg)
                }
            })
    }
}
