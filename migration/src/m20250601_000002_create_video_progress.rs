use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建视频观看进度表，(user, video) 唯一
        manager
            .create_table(
                Table::create()
                    .table(VideoProgress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VideoProgress::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::VideoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::WatchedTime)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(VideoProgress::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VideoProgress::Table, VideoProgress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VideoProgress::Table, VideoProgress::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一索引充当并发写入的冲突屏障
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_video_progress_user_video")
                    .table(VideoProgress::Table)
                    .col(VideoProgress::UserId)
                    .col(VideoProgress::VideoId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoProgress::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum VideoProgress {
    #[sea_orm(iden = "video_progress")]
    Table,
    Id,
    UserId,
    VideoId,
    WatchedTime,
    IsCompleted,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Videos {
    #[sea_orm(iden = "videos")]
    Table,
    Id,
}
