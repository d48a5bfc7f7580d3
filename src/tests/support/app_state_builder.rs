use actix_web::web;
use std::sync::Arc;

use crate::modules::applicant::application::applicant_use_cases::ApplicantUseCases;
use crate::modules::applicant::application::ports::incoming::use_cases::{
    CreateApplicantUseCase, GetApplicantsUseCase, GetSingleApplicantUseCase,
    RemoveApplicantUseCase, UpdateApplicantUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_list: Arc<dyn GetApplicantsUseCase + Send + Sync>,
    get_single: Arc<dyn GetSingleApplicantUseCase + Send + Sync>,
    create: Arc<dyn CreateApplicantUseCase + Send + Sync>,
    update: Arc<dyn UpdateApplicantUseCase + Send + Sync>,
    remove: Arc<dyn RemoveApplicantUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_list: Arc::new(StubGetApplicantsUseCase),
            get_single: Arc::new(StubGetSingleApplicantUseCase),
            create: Arc::new(StubCreateApplicantUseCase),
            update: Arc::new(StubUpdateApplicantUseCase),
            remove: Arc::new(StubRemoveApplicantUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_applicants_use_case(
        mut self,
        use_case: impl GetApplicantsUseCase + 'static,
    ) -> Self {
        self.get_list = Arc::new(use_case);
        self
    }

    pub fn with_get_single_applicant_use_case(
        mut self,
        use_case: impl GetSingleApplicantUseCase + 'static,
    ) -> Self {
        self.get_single = Arc::new(use_case);
        self
    }

    pub fn with_create_applicant_use_case(
        mut self,
        use_case: impl CreateApplicantUseCase + 'static,
    ) -> Self {
        self.create = Arc::new(use_case);
        self
    }

    pub fn with_update_applicant_use_case(
        mut self,
        use_case: impl UpdateApplicantUseCase + 'static,
    ) -> Self {
        self.update = Arc::new(use_case);
        self
    }

    pub fn with_remove_applicant_use_case(
        mut self,
        use_case: impl RemoveApplicantUseCase + 'static,
    ) -> Self {
        self.remove = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            applicant: ApplicantUseCases {
                get_list: self.get_list,
                get_single: self.get_single,
                create: self.create,
                update: self.update,
                remove: self.remove,
            },
        })
    }
}
