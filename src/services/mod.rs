//! Business logic services

pub mod agenda;
pub mod appointments;
pub mod booking;
pub mod catalog;
pub mod clients;
pub mod receipts;
pub mod settings;
pub mod staff;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub booking: booking::BookingService,
    pub appointments: appointments::AppointmentsService,
    pub agenda: agenda::AgendaService,
    pub receipts: receipts::ReceiptsService,
    pub clients: clients::ClientsService,
    pub catalog: catalog::CatalogService,
    pub staff: staff::StaffService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            booking: booking::BookingService::new(repository.clone()),
            appointments: appointments::AppointmentsService::new(repository.clone()),
            agenda: agenda::AgendaService::new(repository.clone()),
            receipts: receipts::ReceiptsService::new(repository.clone()),
            clients: clients::ClientsService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            staff: staff::StaffService::new(repository.clone()),
            settings: settings::SettingsService::new(repository),
        }
    }
}
