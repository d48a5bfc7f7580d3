use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::applicant::adapter::outgoing::sea_orm_entity::{applicants, skills};
use crate::modules::applicant::application::ports::outgoing::{
    ApplicantRepository, ApplicantRepositoryError, ApplicantResult, NewApplicantData, NewSkillData,
    SkillResult,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ApplicantRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicantRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApplicantRepository for ApplicantRepositoryPostgres {
    async fn list_applicants(&self) -> Result<Vec<ApplicantResult>, ApplicantRepositoryError> {
        let applicant_rows = applicants::Entity::find()
            .order_by_asc(applicants::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Every skill row belongs to some applicant in the list, so a single
        // ordered scan grouped in memory eager-loads all of them.
        let skill_rows = skills::Entity::find()
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut by_applicant: HashMap<i32, Vec<skills::Model>> = HashMap::new();
        for skill in skill_rows {
            by_applicant.entry(skill.applicant_id).or_default().push(skill);
        }

        Ok(applicant_rows
            .into_iter()
            .map(|applicant| {
                let skills = by_applicant.remove(&applicant.id).unwrap_or_default();
                to_result(applicant, skills)
            })
            .collect())
    }

    async fn get_applicant(
        &self,
        id: i32,
    ) -> Result<Option<ApplicantResult>, ApplicantRepositoryError> {
        let applicant = match applicants::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            Some(model) => model,
            None => return Ok(None),
        };

        let skill_rows = load_skills(&*self.db, id).await.map_err(map_db_err)?;

        Ok(Some(to_result(applicant, skill_rows)))
    }

    async fn add_applicant(
        &self,
        data: NewApplicantData,
    ) -> Result<ApplicantResult, ApplicantRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = applicants::ActiveModel {
            name: Set(data.name),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        let skill_rows = insert_skills(&txn, inserted.id, &data.skills)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(to_result(inserted, skill_rows))
    }

    async fn update_applicant(
        &self,
        id: i32,
        data: NewApplicantData,
    ) -> Result<Option<ApplicantResult>, ApplicantRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = match applicants::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        {
            Some(model) => model,
            // Dropping the transaction rolls it back; nothing was written.
            None => return Ok(None),
        };

        // Wholesale replacement: delete the old skill set and insert the new
        // one, rather than diffing against the previous list. Skill ids are
        // therefore not stable across updates.
        skills::Entity::delete_many()
            .filter(skills::Column::ApplicantId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let mut active: applicants::ActiveModel = existing.into();
        active.name = Set(data.name);
        let updated = active.update(&txn).await.map_err(map_db_err)?;

        let skill_rows = insert_skills(&txn, id, &data.skills)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(Some(to_result(updated, skill_rows)))
    }

    async fn remove_applicant(&self, id: i32) -> Result<bool, ApplicantRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = match applicants::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        {
            Some(model) => model,
            None => return Ok(false),
        };

        // Skills first, then the applicant, so the order never depends on
        // store-level cascade configuration.
        skills::Entity::delete_many()
            .filter(skills::Column::ApplicantId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        existing.delete(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(true)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn load_skills<C>(conn: &C, applicant_id: i32) -> Result<Vec<skills::Model>, DbErr>
where
    C: ConnectionTrait,
{
    skills::Entity::find()
        .filter(skills::Column::ApplicantId.eq(applicant_id))
        .order_by_asc(skills::Column::Id)
        .all(conn)
        .await
}

async fn insert_skills<C>(
    conn: &C,
    applicant_id: i32,
    new_skills: &[NewSkillData],
) -> Result<Vec<skills::Model>, DbErr>
where
    C: ConnectionTrait,
{
    if new_skills.is_empty() {
        return Ok(Vec::new());
    }

    let rows = new_skills.iter().map(|skill| skills::ActiveModel {
        name: Set(skill.name.clone()),
        applicant_id: Set(applicant_id),
        ..Default::default()
    });

    skills::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;

    load_skills(conn, applicant_id).await
}

fn to_result(applicant: applicants::Model, skill_rows: Vec<skills::Model>) -> ApplicantResult {
    ApplicantResult {
        id: applicant.id,
        name: applicant.name,
        skills: skill_rows
            .into_iter()
            .map(|skill| SkillResult {
                id: skill.id,
                name: skill.name,
            })
            .collect(),
    }
}

fn map_db_err(e: DbErr) -> ApplicantRepositoryError {
    ApplicantRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
