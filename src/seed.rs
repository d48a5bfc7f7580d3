use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use tracing::info;

use crate::modules::applicant::adapter::outgoing::sea_orm_entity::{applicants, skills};

const SEED_APPLICANT_NAME: &str = "Christo Swanepoel";
const SEED_SKILLS: [&str; 3] = ["Programming", "Problem solving", "Tenacity"];

/// Seeds the bootstrap data when the database is empty. A store that already
/// holds any applicant or skill row is left untouched.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    if applicants::Entity::find().one(db).await?.is_some() {
        return Ok(());
    }
    if skills::Entity::find().one(db).await?.is_some() {
        return Ok(());
    }

    info!("The database is empty. Seeding...");

    let txn = db.begin().await?;

    let applicant = applicants::ActiveModel {
        name: Set(SEED_APPLICANT_NAME.to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let rows = SEED_SKILLS.iter().map(|name| skills::ActiveModel {
        name: Set(name.to_string()),
        applicant_id: Set(applicant.id),
        ..Default::default()
    });
    skills::Entity::insert_many(rows)
        .exec_without_returning(&txn)
        .await?;

    txn.commit().await?;

    info!(
        "Database seeded with applicant {} and {} skills",
        applicant.id,
        SEED_SKILLS.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_seed_skipped_when_applicants_exist() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![applicants::Model {
                id: 1,
                name: "Existing".to_string(),
            }]])
            .into_connection();

        // No insert results queued: seeding must not write anything.
        assert!(seed_database(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_seed_inserts_applicant_and_skills_when_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<applicants::Model>::new()])
            .append_query_results(vec![Vec::<skills::Model>::new()])
            // INSERT INTO applicants ... RETURNING
            .append_query_results(vec![vec![applicants::Model {
                id: 1,
                name: SEED_APPLICANT_NAME.to_string(),
            }]])
            // INSERT INTO skills (batch)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        assert!(seed_database(&db).await.is_ok());
    }
}
