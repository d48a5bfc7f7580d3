use async_trait::async_trait;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    CreateApplicantError, CreateApplicantUseCase, GetApplicantsError, GetApplicantsUseCase,
    GetSingleApplicantError, GetSingleApplicantUseCase, RemoveApplicantError,
    RemoveApplicantUseCase, UpdateApplicantError, UpdateApplicantUseCase,
};
use crate::modules::applicant::application::ports::outgoing::{ApplicantResult, NewApplicantData};

// Inert defaults for handler tests that only exercise one use case.

pub struct StubGetApplicantsUseCase;

#[async_trait]
impl GetApplicantsUseCase for StubGetApplicantsUseCase {
    async fn execute(&self) -> Result<Vec<ApplicantResult>, GetApplicantsError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleApplicantUseCase;

#[async_trait]
impl GetSingleApplicantUseCase for StubGetSingleApplicantUseCase {
    async fn execute(
        &self,
        _id: i32,
    ) -> Result<Option<ApplicantResult>, GetSingleApplicantError> {
        Ok(None)
    }
}

pub struct StubCreateApplicantUseCase;

#[async_trait]
impl CreateApplicantUseCase for StubCreateApplicantUseCase {
    async fn execute(
        &self,
        data: NewApplicantData,
    ) -> Result<ApplicantResult, CreateApplicantError> {
        Ok(ApplicantResult {
            id: 1,
            name: data.name,
            skills: vec![],
        })
    }
}

pub struct StubUpdateApplicantUseCase;

#[async_trait]
impl UpdateApplicantUseCase for StubUpdateApplicantUseCase {
    async fn execute(
        &self,
        _id: i32,
        _data: NewApplicantData,
    ) -> Result<Option<ApplicantResult>, UpdateApplicantError> {
        Ok(None)
    }
}

pub struct StubRemoveApplicantUseCase;

#[async_trait]
impl RemoveApplicantUseCase for StubRemoveApplicantUseCase {
    async fn execute(&self, _id: i32) -> Result<bool, RemoveApplicantError> {
        Ok(false)
    }
}
