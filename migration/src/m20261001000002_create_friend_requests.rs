use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FriendRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FriendRequests::RequestId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FriendRequests::SenderId).uuid().not_null())
                    .col(ColumnDef::new(FriendRequests::ReceiverId).uuid().not_null())
                    .col(
                        ColumnDef::new(FriendRequests::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(FriendRequests::Content).text().not_null())
                    .col(
                        ColumnDef::new(FriendRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_sender_id")
                            .from(FriendRequests::Table, FriendRequests::SenderId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_receiver_id")
                            .from(FriendRequests::Table, FriendRequests::ReceiverId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Inbox listing
        manager
            .create_index(
                Index::create()
                    .name("idx_friend_requests_receiver")
                    .table(FriendRequests::Table)
                    .col(FriendRequests::ReceiverId)
                    .to_owned(),
            )
            .await?;

        // Pending lookups by sender -> receiver
        manager
            .create_index(
                Index::create()
                    .name("idx_friend_requests_pair_status")
                    .table(FriendRequests::Table)
                    .col(FriendRequests::SenderId)
                    .col(FriendRequests::ReceiverId)
                    .col(FriendRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FriendRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FriendRequests {
    Table,
    RequestId,
    SenderId,
    ReceiverId,
    Status,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
}
