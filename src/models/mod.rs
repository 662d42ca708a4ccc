//! Data models for the agenda server

pub mod appointment;
pub mod client;
pub mod receipt;
pub mod service;
pub mod settings;
pub mod staff;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentStatus};
pub use client::Client;
pub use receipt::ReceiptDetails;
pub use service::ServiceItem;
pub use settings::{Marker, MarkerKind, Settings};
pub use staff::Staff;
