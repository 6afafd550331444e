use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create leads table
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Leads::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Leads::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Leads::Source).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Leads::Stage)
                            .string_len(32)
                            .not_null()
                            .default("new"),
                    )
                    .col(
                        ColumnDef::new(Leads::Priority)
                            .string_len(16)
                            .not_null()
                            .default("medium"),
                    )
                    .col(ColumnDef::new(Leads::Score).integer().not_null().default(0))
                    .col(ColumnDef::new(Leads::ContactInfo).json().not_null())
                    .col(ColumnDef::new(Leads::Tags).json().not_null())
                    .col(ColumnDef::new(Leads::ProductInterest).string_len(200))
                    .col(ColumnDef::new(Leads::EstimatedValue).double())
                    .col(ColumnDef::new(Leads::Notes).text())
                    .col(ColumnDef::new(Leads::UtmSource).string_len(100))
                    .col(ColumnDef::new(Leads::UtmMedium).string_len(100))
                    .col(ColumnDef::new(Leads::UtmCampaign).string_len(100))
                    .col(ColumnDef::new(Leads::ReferrerUrl).string_len(500))
                    .col(ColumnDef::new(Leads::AssignedTo).uuid())
                    .col(
                        ColumnDef::new(Leads::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Leads::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Leads::ContactedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Leads::ClosedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_stage_updated_at")
                    .table(Leads::Table)
                    .col(Leads::Stage)
                    .col(Leads::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_created_at")
                    .table(Leads::Table)
                    .col(Leads::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Leads {
    Table,
    Id,
    Name,
    Source,
    Stage,
    Priority,
    Score,
    ContactInfo,
    Tags,
    ProductInterest,
    EstimatedValue,
    Notes,
    UtmSource,
    UtmMedium,
    UtmCampaign,
    ReferrerUrl,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
    ContactedAt,
    ClosedAt,
}
