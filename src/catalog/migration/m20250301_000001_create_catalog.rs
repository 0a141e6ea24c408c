use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(pk_auto(Albums::Id))
                    .col(string(Albums::Title))
                    .col(integer_null(Albums::Year))
                    .col(string_null(Albums::CoverUrl))
                    .col(timestamp(Albums::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(pk_auto(Tracks::Id))
                    .col(integer_null(Tracks::AlbumId))
                    .col(string(Tracks::Title))
                    .col(string(Tracks::AudioUrl))
                    .col(double_null(Tracks::Duration))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tracks::Table, Tracks::AlbumId)
                            .to(Albums::Table, Albums::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(pk_auto(Videos::Id))
                    .col(string(Videos::Title))
                    .col(string(Videos::VideoUrl))
                    .col(string_null(Videos::ThumbnailUrl))
                    .col(double_null(Videos::Duration))
                    .col(timestamp(Videos::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lyrics::Table)
                    .if_not_exists()
                    .col(pk_auto(Lyrics::Id))
                    .col(string(Lyrics::Title))
                    .col(text(Lyrics::Text))
                    .col(timestamp(Lyrics::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // tracks first, it references albums
        manager
            .drop_table(Table::drop().table(Tracks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Albums::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lyrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Albums {
    Table,
    Id,
    Title,
    Year,
    CoverUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tracks {
    Table,
    Id,
    AlbumId,
    Title,
    AudioUrl,
    Duration,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
    Title,
    VideoUrl,
    ThumbnailUrl,
    Duration,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Lyrics {
    Table,
    Id,
    Title,
    Text,
    CreatedAt,
}
