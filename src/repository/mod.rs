//! Repository layer for database operations

pub mod appointments;
pub mod catalog;
pub mod clients;
pub mod settings;
pub mod staff;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub appointments: appointments::AppointmentsRepository,
    pub clients: clients::ClientsRepository,
    pub catalog: catalog::CatalogRepository,
    pub staff: staff::StaffRepository,
    pub settings: settings::SettingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            catalog: catalog::CatalogRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            settings: settings::SettingsRepository::new(pool.clone()),
            pool,
        }
    }
}
