use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(text(Items::Name))
                    .col(text_null(Items::Description))
                    .col(json_binary(Items::Tags).default("[]"))
                    .col(
                        timestamp_with_time_zone(Items::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Items::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing orders by created_at DESC, id DESC
        manager
            .create_index(
                Index::create()
                    .name("idx_items_created_at_id")
                    .table(Items::Table)
                    .col((Items::CreatedAt, IndexOrder::Desc))
                    .col((Items::Id, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        // Tag filter uses jsonb containment (@>)
        manager
            .get_connection()
            .execute_unprepared("CREATE INDEX IF NOT EXISTS idx_items_tags ON items USING GIN (tags)")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Name,
    Description,
    Tags,
    CreatedAt,
    UpdatedAt,
}
