//! Route table for the record endpoints, the greeting and the fallback.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use super::ApiResult;
use super::envelope::Envelope;
use super::resources::{create, delete, get, list, update};
use crate::domain::{Error, Ticket, User};

const GREETING: &str = "Api Event Ticket has connected";

/// Register user, ticket and root routes.
///
/// Callers supply the two services as app data; unmatched paths and methods
/// fall through to the app's default service, see [`not_found`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use event_ticket_api::domain::{ResourceService, Ticket, User};
/// use event_ticket_api::inbound::http::routes::{configure, not_found};
/// use event_ticket_api::outbound::memory::InMemoryRecordRepository;
///
/// let users: ResourceService<User> =
///     ResourceService::new(Arc::new(InMemoryRecordRepository::default()));
/// let tickets: ResourceService<Ticket> =
///     ResourceService::new(Arc::new(InMemoryRecordRepository::default()));
/// let _app = App::new()
///     .app_data(web::Data::new(users))
///     .app_data(web::Data::new(tickets))
///     .configure(configure)
///     .default_service(web::to(not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(greeting))
        .route("/user", web::post().to(create::<User>))
        .route("/user/{id}", web::get().to(get::<User>))
        .route("/user/{id}", web::put().to(update::<User>))
        .route("/user/{id}", web::delete().to(delete::<User>))
        .route("/users", web::get().to(list::<User>))
        .route("/ticket", web::post().to(create::<Ticket>))
        .route("/ticket", web::get().to(list::<Ticket>))
        .route("/ticket/{id}", web::get().to(get::<Ticket>))
        .route("/ticket/{id}", web::put().to(update::<Ticket>))
        .route("/ticket/{id}", web::delete().to(delete::<Ticket>));
}

/// Static greeting served at the root path.
pub async fn greeting() -> HttpResponse {
    Envelope::success(StatusCode::OK, GREETING).respond()
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Route not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn greeting_is_enveloped() {
        let app = test::init_service(App::new().configure(configure)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["data"], GREETING);
        assert_eq!(body["message"], "success");
    }

    #[actix_web::test]
    async fn unknown_routes_are_enveloped_404s() {
        let app = test::init_service(
            App::new()
                .configure(configure)
                .default_service(web::to(not_found)),
        )
        .await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "error");
    }
}
