use axum::{middleware, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin::*, auth::*, book::*, job::*, mail::*, review::*, tag::*},
    middleware::host::enforce_allowed_hosts,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookly", description = "Books, reviews, tags, and job listings"),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Signup, login, token management, email verification, and password reset"),
        (name = ADMIN_TAG, description = "User administration"),
        (name = BOOK_TAG, description = "Books"),
        (name = REVIEW_TAG, description = "Book reviews"),
        (name = TAG_TAG, description = "Book tags"),
        (name = JOB_TAG, description = "Job listings and locations"),
        (name = MAIL_TAG, description = "Outgoing email"),
    )
)]
struct ApiDoc;

/// Registers the `bearer` JWT security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router with API routes, Swagger UI at `/docs`, and the
/// host, CORS, and trace layers.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(signup))
        .routes(routes!(login))
        .routes(routes!(refresh_token))
        .routes(routes!(logout))
        .routes(routes!(get_current_user))
        .routes(routes!(verify_email))
        .routes(routes!(password_reset_request))
        .routes(routes!(password_reset_confirm))
        .routes(routes!(send_mail))
        .routes(routes!(get_all_users))
        .routes(routes!(update_user, delete_user))
        .routes(routes!(get_all_books, create_book))
        .routes(routes!(get_book, update_book, delete_book))
        .routes(routes!(get_user_books))
        .routes(routes!(get_all_reviews))
        .routes(routes!(get_review, update_review, delete_review))
        .routes(routes!(get_book_reviews, create_review))
        .routes(routes!(get_book_review_stats))
        .routes(routes!(get_my_reviews))
        .routes(routes!(get_all_tags, create_tag))
        .routes(routes!(rename_tag, delete_tag))
        .routes(routes!(add_tags_to_book))
        .routes(routes!(get_jobs, create_job))
        .routes(routes!(get_job, update_job, delete_job))
        .routes(routes!(cancel_job))
        .routes(routes!(reactivate_job))
        .routes(routes!(get_locations, create_location))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_allowed_hosts,
        ))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration as StdDuration;

    use axum::{
        body::Body,
        http::{header::HOST, Request, StatusCode},
        response::Response,
    };
    use chrono::Duration;
    use jsonwebtoken::Algorithm;
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        model::api::ErrorDto,
        server::service::{
            auth::{blocklist::TokenBlocklist, password::PasswordService, token::TokenService},
            mail::Mailer,
        },
    };

    async fn app() -> (test_utils::context::TestContext, Router) {
        let test = TestBuilder::new().with_book_tables().build().await.unwrap();
        let state = AppState::new(
            test.db.clone().unwrap(),
            TokenService::new(
                "router-test-secret",
                Algorithm::HS256,
                Duration::minutes(60),
                Duration::days(7),
            ),
            PasswordService::new(4),
            TokenBlocklist::memory(StdDuration::from_secs(60)),
            Mailer::memory("Bookly <noreply@bookly.local>".parse().unwrap(), "localhost"),
            vec!["localhost".to_string()],
        );

        (test, router(state))
    }

    async fn get(app: &Router, uri: &str, host: &str) -> Response {
        let request = Request::builder()
            .uri(uri)
            .header(HOST, host)
            .body(Body::empty())
            .unwrap();

        app.clone().oneshot(request).await.unwrap()
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests the OpenAPI document and Swagger UI are served and list every route group.
    ///
    /// Expected: 200 for the document and `/docs/`, a redirect for `/docs`
    #[tokio::test]
    async fn serves_api_docs() {
        let (_test, app) = app().await;

        let response = get(&app, "/api-docs/openapi.json", "localhost:8000").await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc: serde_json::Value = json(response).await;
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/api/v1/auth/signup",
            "/api/v1/auth/verify/{token}",
            "/api/v1/auth/password-reset-confirm/{token}",
            "/api/v1/send_mail",
            "/api/v1/books/{uid}",
            "/api/v1/locations",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }

        assert_eq!(get(&app, "/docs/", "localhost").await.status(), StatusCode::OK);
        assert!(get(&app, "/docs", "localhost").await.status().is_redirection());
    }

    /// Tests the host allow-list runs before routing.
    ///
    /// Expected: 400 "Invalid host header" for an unknown host, even on the docs route
    #[tokio::test]
    async fn rejects_unknown_host() {
        let (_test, app) = app().await;

        let response = get(&app, "/api-docs/openapi.json", "evil.com").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let dto: ErrorDto = json(response).await;
        assert_eq!(dto.error, "Invalid host header");
    }

    /// Tests protected routes require a bearer token.
    ///
    /// Expected: 403 "Not authenticated"
    #[tokio::test]
    async fn protected_route_requires_token() {
        let (_test, app) = app().await;

        let response = get(&app, "/api/v1/books", "localhost").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let dto: ErrorDto = json(response).await;
        assert_eq!(dto.error, "Not authenticated");
    }
}
