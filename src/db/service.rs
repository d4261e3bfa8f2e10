use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(url: &str) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(url).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations finished.");
        Ok(Self { db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
