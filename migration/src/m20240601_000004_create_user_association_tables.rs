use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (join table, target column, target table in the content domain)
const ASSOCIATIONS: [(&str, &str, &str); 4] = [
    ("user_resources", "resource_id", "resources"),
    ("user_social_links", "social_link_id", "social_links"),
    ("user_tasks", "task_id", "tasks"),
    ("user_topics", "topic_id", "topics"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, target_column, target_table) in ASSOCIATIONS {
            manager
                .create_table(join_table(table, target_column, target_table))
                .await?;

            // Reverse lookup: all users linked to a target
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table}_{target_column}"))
                        .table(Alias::new(table))
                        .col(Alias::new(target_column))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, target_column, _) in ASSOCIATIONS.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(format!("idx_{table}_{target_column}"))
                        .table(Alias::new(*table))
                        .to_owned(),
                )
                .await?;

            manager
                .drop_table(Table::drop().table(Alias::new(*table)).to_owned())
                .await?;
        }

        Ok(())
    }
}

fn join_table(table: &str, target_column: &str, target_table: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(ColumnDef::new(Users::UserId).uuid().not_null())
        .col(ColumnDef::new(Alias::new(target_column)).uuid().not_null())
        // Composite primary key
        .primary_key(
            Index::create()
                .col(Users::UserId)
                .col(Alias::new(target_column)),
        )
        // FK → users
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{table}_user_id"))
                .from(Alias::new(table), Users::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        // FK → content target
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk_{table}_{target_column}"))
                .from(Alias::new(table), Alias::new(target_column))
                .to(Alias::new(target_table), Alias::new("id"))
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    UserId,
}
