use crate::seed::{Seeder, run_seeder};
use crate::seeds::{problem::ProblemSeeder, user::UserSeeder};
use common::config::Config;
use common::logger::init_logger;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    init_logger(&config.log_level, &config.log_file);
    println!("Seeding {} ({})", config.project_name, config.database_path);

    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(ProblemSeeder), "Problem"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
