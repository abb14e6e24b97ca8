//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

/// Name of the session cookie issued by [`test_session_middleware`].
pub const SESSION_COOKIE: &str = "session";

/// Cookie session middleware with a fresh key and the `Secure` flag off so
/// plain-HTTP test requests carry the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie a response set.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Mocked driving ports; unset ports get a mock with no expectations.
#[derive(Default)]
pub struct MockPorts {
    pub invoices: Option<crate::domain::ports::MockInvoiceCommand>,
    pub invoices_query: Option<crate::domain::ports::MockInvoiceQuery>,
    pub registration: Option<crate::domain::ports::MockRegistrationCommand>,
    pub login: Option<crate::domain::ports::MockLoginService>,
}

impl MockPorts {
    /// Wrap the mocks as handler state.
    pub fn into_state(self) -> actix_web::web::Data<super::state::HttpState> {
        use std::sync::Arc;

        actix_web::web::Data::new(super::state::HttpState::new(
            Arc::new(self.invoices.unwrap_or_default()),
            Arc::new(self.invoices_query.unwrap_or_default()),
            Arc::new(self.registration.unwrap_or_default()),
            Arc::new(self.login.unwrap_or_default()),
        ))
    }
}

/// `Location` header of a response, if any.
pub fn location<B>(res: &ServiceResponse<B>) -> Option<&str> {
    res.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
