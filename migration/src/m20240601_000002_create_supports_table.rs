use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // supports: typed organization -> organization link
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Supports::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Supports::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Supports::SupporterTypeId).uuid().not_null())
                    .col(ColumnDef::new(Supports::SupporterEntityId).uuid().not_null())
                    .col(ColumnDef::new(Supports::SupportedTypeId).uuid().not_null())
                    .col(ColumnDef::new(Supports::SupportedEntityId).uuid().not_null())
                    .col(
                        ColumnDef::new(Supports::CreationDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → support_entity_types (supporter side)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supports_supporter_type_id")
                            .from(Supports::Table, Supports::SupporterTypeId)
                            .to(SupportEntityTypes::Table, SupportEntityTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → organizations (supporter side)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supports_supporter_entity_id")
                            .from(Supports::Table, Supports::SupporterEntityId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → support_entity_types (supported side)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supports_supported_type_id")
                            .from(Supports::Table, Supports::SupportedTypeId)
                            .to(SupportEntityTypes::Table, SupportEntityTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → organizations (supported side)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supports_supported_entity_id")
                            .from(Supports::Table, Supports::SupportedEntityId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // All supports given by an organization
        manager
            .create_index(
                Index::create()
                    .name("idx_supports_supporter_entity_id")
                    .table(Supports::Table)
                    .col(Supports::SupporterEntityId)
                    .to_owned(),
            )
            .await?;

        // All supports received by an organization
        manager
            .create_index(
                Index::create()
                    .name("idx_supports_supported_entity_id")
                    .table(Supports::Table)
                    .col(Supports::SupportedEntityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_supports_supporter_entity_id",
            "idx_supports_supported_entity_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Supports::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Supports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Supports {
    Table,
    Id,
    SupporterTypeId,
    SupporterEntityId,
    SupportedTypeId,
    SupportedEntityId,
    CreationDate,
}

#[derive(DeriveIden)]
enum SupportEntityTypes {
    Table,
    Id,
}

/// Owned by the communities domain.
#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}
