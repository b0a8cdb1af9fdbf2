pub use sea_orm_migration::prelude::*;

mod m20261001000001_create_users;
mod m20261001000002_create_friend_requests;
mod m20261001000003_create_friendships;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001000001_create_users::Migration),
            Box::new(m20261001000002_create_friend_requests::Migration),
            Box::new(m20261001000003_create_friendships::Migration),
        ]
    }
}
