use async_trait::async_trait;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    CreateApplicantError, CreateApplicantUseCase,
};
use crate::modules::applicant::application::ports::outgoing::{
    ApplicantRepository, ApplicantRepositoryError, ApplicantResult, NewApplicantData,
};

pub struct CreateApplicantService<R>
where
    R: ApplicantRepository,
{
    applicant_repository: R,
}

impl<R> CreateApplicantService<R>
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
impl<R> CreateApplicantUseCase for CreateApplicantService<R>
where
    R: ApplicantRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: NewApplicantData,
    ) -> Result<ApplicantResult, CreateApplicantError> {
        self.applicant_repository
            .add_applicant(data)
            .await
            .map_err(|e| match e {
                ApplicantRepositoryError::DatabaseError(msg) => {
                    CreateApplicantError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::applicant::application::ports::outgoing::{NewSkillData, SkillResult};

    #[derive(Clone)]
    struct MockApplicantRepo {
        add_result: Result<ApplicantResult, ApplicantRepositoryError>,
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
            unimplemented!()
        }

        async fn add_applicant(
            &self,
            _data: NewApplicantData,
        ) -> Result<ApplicantResult, ApplicantRepositoryError> {
            self.add_result.clone()
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

    fn input() -> NewApplicantData {
        NewApplicantData {
            name: "Ada".to_string(),
            skills: vec![NewSkillData {
                name: "Math".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_returns_created_applicant() {
        let service = CreateApplicantService::new(MockApplicantRepo {
            add_result: Ok(ApplicantResult {
                id: 1,
                name: "Ada".to_string(),
                skills: vec![SkillResult {
                    id: 1,
                    name: "Math".to_string(),
                }],
            }),
        });

        let result = service.execute(input()).await.unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.skills[0].name, "Math");
    }

    #[tokio::test]
    async fn test_maps_database_error() {
        let service = CreateApplicantService::new(MockApplicantRepo {
            add_result: Err(ApplicantRepositoryError::DatabaseError("db down".into())),
        });

        let result = service.execute(input()).await;

        assert!(matches!(
            result,
            Err(CreateApplicantError::RepositoryError(_))
        ));
    }
}
