use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::user::Model;
use fake::{Fake, faker::internet::en::SafeEmail};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed demo users
        let _ = Model::create(db, "demo", "demo@example.com").await;
        let _ = Model::create(db, "candidate", "candidate@example.com").await;

        // Random users
        for _ in 0..5 {
            let username = format!("user{:06}", fastrand::u32(..1_000_000));
            let email: String = SafeEmail().fake();
            let _ = Model::create(db, &username, &email).await;
        }
    }
}
