//! Route guard enforcing the dashboard sign-in policy.
//!
//! Reads the session user and asks [`authorize`] what to do with the path.
//! Redirect verdicts short-circuit with `303 See Other`; the inner service is
//! never called. Must sit inside the session middleware.

use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::LOCATION;
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::domain::authorization::{Access, authorize};
use crate::inbound::http::session::SessionContext;

/// Middleware factory.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use invoicing::middleware::RequireSession;
///
/// let _app = App::new().wrap(RequireSession);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireSession;

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware { service }))
    }
}

/// Service produced by [`RequireSession`].
pub struct RequireSessionMiddleware<S> {
    service: S,
}

fn signed_in(req: &ServiceRequest) -> bool {
    match SessionContext::new(req.get_session()).user_id() {
        Ok(user) => user.is_some(),
        Err(error) => {
            warn!(%error, "session unreadable; treating request as anonymous");
            false
        }
    }
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authorize(req.path(), signed_in(&req)) {
            Access::Allow => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Access::Redirect(target) => {
                debug!(path = req.path(), target, "request redirected by access policy");
                let response = HttpResponse::SeeOther()
                    .insert_header((LOCATION, target))
                    .finish();
                Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use rstest::rstest;

    const USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

    fn guarded_app() -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl actix_web::body::MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(RequireSession)
            .wrap(test_session_middleware())
            .route(
                "/sign-in-as-fixture",
                web::get().to(|session: SessionContext| async move {
                    let id = UserId::new(USER_ID).map_err(|err| {
                        crate::domain::Error::internal(err.to_string())
                    })?;
                    session.persist_user(&id)?;
                    Ok::<_, crate::domain::Error>(HttpResponse::Ok().finish())
                }),
            )
            .default_service(web::to(|| async { HttpResponse::Ok().body("served") }))
    }

    #[rstest]
    #[case("/dashboard")]
    #[case("/dashboard/invoices")]
    #[actix_web::test]
    async fn anonymous_dashboard_requests_go_to_login(#[case] path: &str) {
        let app = test::init_service(guarded_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some("/login")
        );
    }

    #[rstest]
    #[case("/", StatusCode::OK)]
    #[case("/login", StatusCode::OK)]
    #[case("/register", StatusCode::OK)]
    #[actix_web::test]
    async fn anonymous_public_requests_pass(#[case] path: &str, #[case] expected: StatusCode) {
        let app = test::init_service(guarded_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        assert_eq!(res.status(), expected);
    }

    #[rstest]
    #[case("/dashboard/invoices", StatusCode::OK, None)]
    #[case("/login", StatusCode::SEE_OTHER, Some("/dashboard"))]
    #[actix_web::test]
    async fn signed_in_requests_follow_the_policy(
        #[case] path: &str,
        #[case] expected: StatusCode,
        #[case] location: Option<&str>,
    ) {
        let app = test::init_service(guarded_app()).await;
        let sign_in = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/sign-in-as-fixture")
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&sign_in);

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri(path).cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            location
        );
    }
}
