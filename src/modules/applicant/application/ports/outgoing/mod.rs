pub mod applicant_repository;

pub use applicant_repository::{
    ApplicantRepository, ApplicantRepositoryError, ApplicantResult, NewApplicantData, NewSkillData,
    SkillResult,
};
