use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create widgets table
        manager
            .create_table(
                Table::create()
                    .table(Widgets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Widgets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Widgets::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Widgets::WidgetId)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Widgets::ApiKey).string_len(100).not_null())
                    .col(ColumnDef::new(Widgets::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Widgets::Description).text())
                    .col(
                        ColumnDef::new(Widgets::SubmitButtonText)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Widgets::SuccessMessage).text().not_null())
                    .col(ColumnDef::new(Widgets::Fields).json().not_null())
                    .col(
                        ColumnDef::new(Widgets::PrimaryColor)
                            .string_len(7)
                            .not_null()
                            .default("#3b82f6"),
                    )
                    .col(
                        ColumnDef::new(Widgets::ButtonPosition)
                            .string_len(20)
                            .not_null()
                            .default("bottom-right"),
                    )
                    .col(
                        ColumnDef::new(Widgets::AutoOpen)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Widgets::AutoOpenDelay)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(Widgets::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Widgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Widgets::UpdatedAt)
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
            .drop_table(Table::drop().table(Widgets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Widgets {
    Table,
    Id,
    Name,
    WidgetId,
    ApiKey,
    Title,
    Description,
    SubmitButtonText,
    SuccessMessage,
    Fields,
    PrimaryColor,
    ButtonPosition,
    AutoOpen,
    AutoOpenDelay,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
