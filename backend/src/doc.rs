//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every form action, the invoice listing, and the
//! health probes, together with schema mirrors from
//! [`crate::inbound::http::schemas`] so domain types stay free of utoipa.
//! The document backs Swagger UI in debug builds and the `openapi-dump`
//! binary.

use crate::inbound::http::outcome::MessageResponse;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FormStateSchema, InvoiceFormSchema, InvoiceSummarySchema,
    LoginFormSchema, RegistrationFormSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Private session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the invoicing backend.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Invoicing backend API",
        description = "Form actions for invoices and accounts, the invoice listing, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::invoices::list_invoices,
        crate::inbound::http::invoices::create_invoice,
        crate::inbound::http::invoices::update_invoice,
        crate::inbound::http::invoices::delete_invoice,
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        FormStateSchema,
        MessageResponse,
        InvoiceFormSchema,
        InvoiceSummarySchema,
        RegistrationFormSchema,
        LoginFormSchema
    )),
    tags(
        (name = "invoices", description = "Invoice form actions and listing"),
        (name = "users", description = "Registration, sign-in and sign-out"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
