use async_trait::async_trait;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    UpdateApplicantError, UpdateApplicantUseCase,
};
use crate::modules::applicant::application::ports::outgoing::{
    ApplicantRepository, ApplicantRepositoryError, ApplicantResult, NewApplicantData,
};

pub struct UpdateApplicantService<R>
where
    R: ApplicantRepository,
{
    applicant_repository: R,
}

impl<R> UpdateApplicantService<R>
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
impl<R> UpdateApplicantUseCase for UpdateApplicantService<R>
where
    R: ApplicantRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        data: NewApplicantData,
    ) -> Result<Option<ApplicantResult>, UpdateApplicantError> {
        self.applicant_repository
            .update_applicant(id, data)
            .await
            .map_err(|e| match e {
                ApplicantRepositoryError::DatabaseError(msg) => {
                    UpdateApplicantError::RepositoryError(msg)
                }
            })
    }
}
