//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Only the signed-in user's id lives in the cookie.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes sign-in state operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record `user_id` as signed in, rotating the session key.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Signed-in user, if any. A tampered id reads as signed out.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|raw| {
            UserId::new(raw)
                .inspect_err(|error| warn!(%error, "invalid user id in session cookie"))
                .ok()
        }))
    }

    /// Signed-in user or `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("sign-in required"))
    }

    /// Forget the signed-in user and drop the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    const USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

    async fn sign_in(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = UserId::new(USER_ID).map_err(|err| Error::internal(err.to_string()))?;
        session.persist_user(&id)?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn whoami(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_user_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    async fn sign_out(session: SessionContext) -> HttpResponse {
        session.purge();
        HttpResponse::Ok().finish()
    }

    async fn plant_garbage(session: Session) -> Result<HttpResponse, Error> {
        session
            .insert(USER_ID_KEY, "not-a-uuid")
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(HttpResponse::Ok().finish())
    }

    fn app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .route("/sign-in", web::get().to(sign_in))
            .route("/whoami", web::get().to(whoami))
            .route("/sign-out", web::get().to(sign_out))
            .route("/garbage", web::get().to(plant_garbage))
    }

    #[rstest]
    #[actix_web::test]
    async fn persisted_user_is_read_back() {
        let app = test::init_service(app()).await;
        let set = test::call_service(&app, test::TestRequest::get().uri("/sign-in").to_request())
            .await;
        assert_eq!(set.status(), StatusCode::OK);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(session_cookie(&set))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, USER_ID);
    }

    #[rstest]
    #[case::anonymous(false)]
    #[case::tampered(true)]
    #[actix_web::test]
    async fn missing_or_tampered_user_is_unauthorised(#[case] tamper: bool) {
        let app = test::init_service(app()).await;
        let mut request = test::TestRequest::get().uri("/whoami");
        if tamper {
            let planted =
                test::call_service(&app, test::TestRequest::get().uri("/garbage").to_request())
                    .await;
            request = request.cookie(session_cookie(&planted));
        }
        let res = test::call_service(&app, request.to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn purge_expires_the_cookie() {
        let app = test::init_service(app()).await;
        let set = test::call_service(&app, test::TestRequest::get().uri("/sign-in").to_request())
            .await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/sign-out")
                .cookie(session_cookie(&set))
                .to_request(),
        )
        .await;
        let removal = session_cookie(&res);
        assert_eq!(removal.value(), "");
    }
}
