//! Route table, OpenAPI document and the layers wrapped around every request.

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        controller::{auth, event, fallback, region},
        state::AppState,
    },
};

/// Registers the bearer token scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Paralympics API",
        description = "Paralympic Games events and the regions that took part in them."
    ),
    components(schemas(ErrorDto, MessageDto)),
    tags(
        (name = "region", description = "Regions identified by their NOC code"),
        (name = "event", description = "Summer and winter Paralympic Games"),
        (name = "auth", description = "Registration and access tokens")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` with Swagger UI at `/docs`.
/// Unknown paths and unsupported methods answer with the JSON error envelope, and a
/// panicking handler produces a 500 instead of dropping the connection.
pub fn router(state: AppState) -> Router {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(region::get_regions, region::create_region))
        .routes(routes!(
            region::get_region,
            region::delete_region,
            region::update_region
        ))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(
            event::get_event,
            event::delete_event,
            event::update_event
        ))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
