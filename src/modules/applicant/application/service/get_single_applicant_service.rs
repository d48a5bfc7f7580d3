use async_trait::async_trait;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    GetSingleApplicantError, GetSingleApplicantUseCase,
};
use crate::modules::applicant::application::ports::outgoing::{
    ApplicantRepository, ApplicantRepositoryError, ApplicantResult,
};

pub struct GetSingleApplicantService<R>
where
    R: ApplicantRepository,
{
    applicant_repository: R,
}

impl<R> GetSingleApplicantService<R>
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
impl<R> GetSingleApplicantUseCase for GetSingleApplicantService<R>
where
    R: ApplicantRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<Option<ApplicantResult>, GetSingleApplicantError> {
        self.applicant_repository
            .get_applicant(id)
            .await
            .map_err(|e| match e {
                ApplicantRepositoryError::DatabaseError(msg) => {
                    GetSingleApplicantError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::applicant::application::ports::outgoing::NewApplicantData;

    #[derive(Clone)]
    struct MockApplicantRepo {
        get_result: Result<Option<ApplicantResult>, ApplicantRepositoryError>,
    }

    #[async_trait]
    impl ApplicantRepository for MockApplicantRepo {
        async fn list_applicants(&self) -> Result<Vec<ApplicantResult>, ApplicantRepositoryError> {
            unimplemented!()
        }

        async fn get_applicant(
            &self,
            _id: i32,
        ) -> Result<Option<ApplicantResult>, ApplicantRepositoryError> {
            self.get_result.clone()
        }

        async fn add_applicant(
            &self,
            _data: NewApplicantData,
        ) -> Result<ApplicantResult, ApplicantRepositoryError> {
            unimplemented!()
        }

        async fn update_applicant(
            &self,
            _id: i32,
            _data: NewApplicantData,
        ) -> Result<Option<ApplicantResult>, ApplicantRepositoryError> {
            unimplemented!()
        }

        async fn remove_applicant(&self, _id: i32) -> Result<bool, ApplicantRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_found_passes_through() {
        let service = GetSingleApplicantService::new(MockApplicantRepo {
            get_result: Ok(Some(ApplicantResult {
                id: 7,
                name: "Ada".to_string(),
                skills: vec![],
            })),
        });

        let result = service.execute(7).await.unwrap();

        assert_eq!(result.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_not_found_is_none_not_error() {
        let service = GetSingleApplicantService::new(MockApplicantRepo {
            get_result: Ok(None),
        });

        let result = service.execute(999).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_maps_database_error() {
        let service = GetSingleApplicantService::new(MockApplicantRepo {
            get_result: Err(ApplicantRepositoryError::DatabaseError("db down".into())),
        });

        let result = service.execute(7).await;

        assert!(matches!(
            result,
            Err(GetSingleApplicantError::RepositoryError(_))
        ));
    }
}
