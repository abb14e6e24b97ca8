//! Account endpoints: sign-up, sign-in, and sign-out.
//!
//! ```text
//! POST /register  username=Ada&email=ada@example.com&password=...&confirmPassword=...
//! POST /login     email=user@nextmail.com&password=123456
//! POST /logout
//! ```

use actix_web::{HttpResponse, post, web};

use crate::domain::navigation::{DASHBOARD_PATH, HOME_PATH};
use crate::domain::{AuthOutcome, FormData};
use crate::inbound::http::ApiResult;
use crate::inbound::http::outcome::{MessageResponse, render, see_other};
use crate::inbound::http::schemas::{
    ErrorSchema, FormStateSchema, LoginFormSchema, RegistrationFormSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Create an account and continue at the sign-in page.
#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegistrationFormSchema, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered; continue at sign-in", headers(("Location" = String, description = "Sign-in path"))),
        (status = 422, description = "Field validation failed or passwords differ", body = FormStateSchema),
        (status = 500, description = "Store refused the account", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(state: web::Data<HttpState>, form: web::Form<FormData>) -> HttpResponse {
    render(state.registration.register(&form).await)
}

/// Check credentials and start a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginFormSchema, content_type = "application/x-www-form-urlencoded"),
    responses(
        (
            status = 303,
            description = "Signed in; continue at the dashboard",
            headers(
                ("Location" = String, description = "Dashboard path"),
                ("Set-Cookie" = String, description = "Session cookie")
            )
        ),
        (status = 401, description = "Credentials refused", body = MessageResponse),
        (status = 503, description = "Credential store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<FormData>,
) -> ApiResult<HttpResponse> {
    match state.login.authenticate(&form).await? {
        AuthOutcome::Authenticated(user_id) => {
            session.persist_user(&user_id)?;
            Ok(see_other(DASHBOARD_PATH))
        }
        AuthOutcome::Rejected(message) => {
            Ok(HttpResponse::Unauthorized().json(MessageResponse::new(message)))
        }
    }
}

/// End the session and return to the home page.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 303, description = "Signed out", headers(("Location" = String, description = "Home path")))
    ),
    tags = ["users"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    see_other(HOME_PATH)
}
