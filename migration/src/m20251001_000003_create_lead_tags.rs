use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LeadTags::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(LeadTags::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(LeadTags::Color)
                            .string_len(7)
                            .not_null()
                            .default("#6B7280"),
                    )
                    .col(ColumnDef::new(LeadTags::Description).text())
                    .col(
                        ColumnDef::new(LeadTags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeadTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeadTags {
    Table,
    Id,
    Name,
    Color,
    Description,
    CreatedAt,
}
