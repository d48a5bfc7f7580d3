use async_trait::async_trait;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    GetApplicantsError, GetApplicantsUseCase,
};
use crate::modules::applicant::application::ports::outgoing::{
    ApplicantRepository, ApplicantRepositoryError, ApplicantResult,
};

pub struct GetApplicantsService<R>
where
    R: ApplicantRepository,
{
    applicant_repository: R,
}

impl<R> GetApplicantsService<R>
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
impl<R> GetApplicantsUseCase for GetApplicantsService<R>
where
    R: ApplicantRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ApplicantResult>, GetApplicantsError> {
        self.applicant_repository
            .list_applicants()
            .await
            .map_err(|e| match e {
                ApplicantRepositoryError::DatabaseError(msg) => {
                    GetApplicantsError::RepositoryError(msg)
                }
            })
    }
}
