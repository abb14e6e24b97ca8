//! Rendering of form action outcomes.
//!
//! | outcome | status |
//! |---|---|
//! | `Redirect(path)` | 303 with `Location: path` |
//! | `Completed` | 200 `{message}` |
//! | `ValidationFailed` | 422 `{errors, message}` |
//! | `PersistenceFailed` | 500 `{message}` |

use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ActionOutcome;

use super::cache_control::no_store_header;

/// Body carrying a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Deleted Invoice.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `303 See Other` to `path`.
pub fn see_other(path: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, path))
        .insert_header(no_store_header())
        .finish()
}

/// Map an [`ActionOutcome`] onto its HTTP response.
pub fn render(outcome: ActionOutcome) -> HttpResponse {
    match outcome {
        ActionOutcome::Redirect(path) => see_other(path),
        ActionOutcome::Completed { message } => {
            HttpResponse::Ok().json(MessageResponse::new(message))
        }
        ActionOutcome::ValidationFailed(state) => HttpResponse::UnprocessableEntity().json(state),
        ActionOutcome::PersistenceFailed { message } => {
            HttpResponse::InternalServerError().json(MessageResponse::new(message))
        }
    }
}
