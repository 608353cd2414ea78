use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportEntityTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportEntityTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SupportEntityTypes::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_support_entity_types_name")
                    .table(SupportEntityTypes::Table)
                    .col(SupportEntityTypes::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_support_entity_types_name")
                    .table(SupportEntityTypes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SupportEntityTypes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SupportEntityTypes {
    Table,
    Id,
    Name,
}
