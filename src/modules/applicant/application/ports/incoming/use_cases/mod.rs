pub mod create_applicant;
pub mod get_applicants;
pub mod get_single_applicant;
pub mod remove_applicant;
pub mod update_applicant;

pub use create_applicant::{CreateApplicantError, CreateApplicantUseCase};
pub use get_applicants::{GetApplicantsError, GetApplicantsUseCase};
pub use get_single_applicant::{GetSingleApplicantError, GetSingleApplicantUseCase};
pub use remove_applicant::{RemoveApplicantError, RemoveApplicantUseCase};
pub use update_applicant::{UpdateApplicantError, UpdateApplicantUseCase};
