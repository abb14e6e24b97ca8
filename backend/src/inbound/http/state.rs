//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving
//! ports, so they stay testable with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{InvoiceCommand, InvoiceQuery, LoginService, RegistrationCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub invoices: Arc<dyn InvoiceCommand>,
    pub invoices_query: Arc<dyn InvoiceQuery>,
    pub registration: Arc<dyn RegistrationCommand>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(
        invoices: Arc<dyn InvoiceCommand>,
        invoices_query: Arc<dyn InvoiceQuery>,
        registration: Arc<dyn RegistrationCommand>,
        login: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            invoices,
            invoices_query,
            registration,
            login,
        }
    }
}
