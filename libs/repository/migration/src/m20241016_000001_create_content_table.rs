use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // auto_increment on SQLite emits AUTOINCREMENT, so ids of deleted
        // rows are never handed out again.
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Content::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Content::Title).text().not_null())
                    .col(ColumnDef::new(Content::Content).text().not_null())
                    .col(ColumnDef::new(Content::Category).text().not_null())
                    .col(ColumnDef::new(Content::CreatedAt).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Content {
    Table,
    Id,
    Title,
    Content,
    Category,
    CreatedAt,
}
