//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Every value reaches SQL as a bound parameter.
//!
//! # Example
//!
//! ```ignore
//! use invoicing::outbound::persistence::{DbPool, DieselInvoiceRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/invoices")).await?;
//! let invoices = DieselInvoiceRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_invoice_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_invoice_repository::DieselInvoiceRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
