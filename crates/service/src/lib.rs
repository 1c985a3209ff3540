//! Data-access services for tenders, deliveries and cargo.
//! - Each service owns one table and talks to it through a pooled `DatabaseConnection`.
//! - Entities, input records and validation live in the `models` crate.
//! - Failures surface as typed [`errors::ServiceError`] kinds.

pub mod errors;
pub mod tender_service;
pub mod delivery_service;
pub mod cargo_service;
#[cfg(test)]
pub mod test_support;

pub use cargo_service::CargoService;
pub use delivery_service::DeliveryService;
pub use tender_service::TenderService;
