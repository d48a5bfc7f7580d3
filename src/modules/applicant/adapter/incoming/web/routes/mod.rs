pub mod create_applicant;
pub mod get_applicants;
pub mod get_single_applicant;
pub mod remove_applicant;
pub mod update_applicant;

pub use create_applicant::create_applicant_handler;
pub use get_applicants::get_applicants_handler;
pub use get_single_applicant::get_single_applicant_handler;
pub use remove_applicant::remove_applicant_handler;
pub use update_applicant::update_applicant_handler;
