use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string().not_null())
                    .col(ColumnDef::new(Skills::ApplicantId).integer().not_null())
                    // FK → applicants. Restrict, not cascade: the repository
                    // deletes skill rows explicitly so the deletion order does
                    // not depend on store-level cascade configuration.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_applicant_id")
                            .from(Skills::Table, Skills::ApplicantId)
                            .to(Applicants::Table, Applicants::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all skills for an applicant
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_skills_applicant_id
                ON skills (applicant_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_skills_applicant_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    ApplicantId,
}

#[derive(DeriveIden)]
enum Applicants {
    Table,
    Id,
}
