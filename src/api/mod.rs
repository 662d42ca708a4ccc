//! API handlers for the agenda REST endpoints

pub mod agenda;
pub mod appointments;
pub mod catalog;
pub mod clients;
pub mod health;
pub mod openapi;
pub mod settings;
pub mod staff;
