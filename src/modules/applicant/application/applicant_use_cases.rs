use std::sync::Arc;

use crate::modules::applicant::application::ports::incoming::use_cases::{
    CreateApplicantUseCase, GetApplicantsUseCase, GetSingleApplicantUseCase,
    RemoveApplicantUseCase, UpdateApplicantUseCase,
};

#[derive(Clone)]
pub struct ApplicantUseCases {
    pub get_list: Arc<dyn GetApplicantsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleApplicantUseCase + Send + Sync>,
    pub create: Arc<dyn CreateApplicantUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateApplicantUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveApplicantUseCase + Send + Sync>,
}
