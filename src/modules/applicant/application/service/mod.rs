pub mod create_applicant_service;
pub mod get_applicants_service;
pub mod get_single_applicant_service;
pub mod remove_applicant_service;
pub mod update_applicant_service;

pub use create_applicant_service::CreateApplicantService;
pub use get_applicants_service::GetApplicantsService;
pub use get_single_applicant_service::GetSingleApplicantService;
pub use remove_applicant_service::RemoveApplicantService;
pub use update_applicant_service::UpdateApplicantService;
