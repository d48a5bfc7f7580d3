use async_trait::async_trait;
use serde::Serialize;

// Input DTO for creating or updating an applicant. Carries no identifiers:
// the store assigns skill and applicant ids, never the caller.
#[derive(Debug, Clone)]
pub struct NewApplicantData {
    pub name: String,
    pub skills: Vec<NewSkillData>,
}

#[derive(Debug, Clone)]
pub struct NewSkillData {
    pub name: String,
}

// Output DTO for every operation that returns applicant data, with
// store-assigned identifiers and skills eagerly populated.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantResult {
    pub id: i32,
    pub name: String,
    pub skills: Vec<SkillResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResult {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplicantRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Mediates between the applicant model and the persistent store.
///
/// "Not found" is an ordinary outcome, signalled through `Option`/`bool`
/// rather than an error variant; only store failures surface as
/// [`ApplicantRepositoryError`].
#[async_trait]
pub trait ApplicantRepository: Send + Sync {
    /// All applicants ordered by id, each with its skills populated.
    async fn list_applicants(&self) -> Result<Vec<ApplicantResult>, ApplicantRepositoryError>;

    /// The applicant with `id` and its skills, or `None` if no row matches.
    async fn get_applicant(
        &self,
        id: i32,
    ) -> Result<Option<ApplicantResult>, ApplicantRepositoryError>;

    /// Creates the applicant row and one skill row per input entry in a
    /// single transaction.
    async fn add_applicant(
        &self,
        data: NewApplicantData,
    ) -> Result<ApplicantResult, ApplicantRepositoryError>;

    /// Replaces the applicant's name and entire skill set in a single
    /// transaction. Skill ids are not stable across updates: the old rows
    /// are deleted and fresh ones inserted.
    async fn update_applicant(
        &self,
        id: i32,
        data: NewApplicantData,
    ) -> Result<Option<ApplicantResult>, ApplicantRepositoryError>;

    /// Deletes the applicant's skill rows, then the applicant row, in a
    /// single transaction. Returns `false` if no applicant matched.
    async fn remove_applicant(&self, id: i32) -> Result<bool, ApplicantRepositoryError>;
}
