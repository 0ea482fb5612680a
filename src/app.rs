use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    search::screen::ScreenStore,
    services::{
        doctor_service::doctor_service::{DoctorService, DoctorServiceConfig},
        maps_client::maps_service::{MapsService, MapsServiceConfig},
        pharmacy_service::pharmacy_service::{PharmacyService, PharmacyServiceConfig},
        profile_service::profile_service::{ProfileService, ProfileServiceConfig},
    },
    types::{app_config::AppConfig, app_state::AppState},
};

pub fn gen_app(config: &AppConfig) -> Result<Router, reqwest::Error> {
    // one client for every outbound call, so every remote is bounded by the same timeout
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let state = AppState {
        maps_service: MapsService::new(
            MapsServiceConfig {
                api_key: config.google_key.clone(),
                host: config.google_host.clone(),
            },
            client.clone(),
        ),
        doctor_service: Arc::new(DoctorService::new(
            DoctorServiceConfig {
                host: config.doctor_host.clone(),
                schema: config.doctor_schema,
            },
            client.clone(),
        )),
        pharmacy_service: Arc::new(PharmacyService::new(
            PharmacyServiceConfig {
                host: config.pharmacy_host.clone(),
                filter_radius_locally: config.pharmacy_filter_radius_locally,
            },
            client.clone(),
        )),
        profile_service: ProfileService::new(
            ProfileServiceConfig {
                host: config.profile_host.clone(),
            },
            client,
        ),
        screens: ScreenStore::default(),
        default_origins: config.default_origins,
        auth_key: config.auth_key.clone(),
    };

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .layer(CorsLayer::new())
        .layer(TraceLayer::new_for_http())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state))
}

async fn root() -> &'static str {
    "Milo locator is running"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
    pub doctor_server: mockito::ServerGuard,
    pub pharmacy_server: mockito::ServerGuard,
    pub profile_server: mockito::ServerGuard,
}

#[cfg(test)]
pub fn mock_config(
    google: &mockito::ServerGuard,
    doctors: &mockito::ServerGuard,
    pharmacies: &mockito::ServerGuard,
    profiles: &mockito::ServerGuard,
) -> AppConfig {
    use crate::{
        services::doctor_service::doctor_service::DoctorApiSchema,
        types::app_config::DefaultOrigins,
    };

    AppConfig {
        bind_addr: std::net::SocketAddr::from(([127, 0, 0, 1], 0)),
        google_host: google.url(),
        google_key: "key".to_string(),
        doctor_host: doctors.url(),
        doctor_schema: DoctorApiSchema::List,
        pharmacy_host: pharmacies.url(),
        pharmacy_filter_radius_locally: false,
        profile_host: profiles.url(),
        auth_key: None,
        request_timeout: std::time::Duration::from_secs(5),
        default_origins: DefaultOrigins::default(),
    }
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let google_server = mockito::Server::new_async().await;
    let doctor_server = mockito::Server::new_async().await;
    let pharmacy_server = mockito::Server::new_async().await;
    let profile_server = mockito::Server::new_async().await;

    let config = mock_config(
        &google_server,
        &doctor_server,
        &pharmacy_server,
        &profile_server,
    );

    MockApp {
        app: gen_app(&config).unwrap(),
        google_server,
        doctor_server,
        pharmacy_server,
        profile_server,
    }
}

/// Opens a screen of `kind` through the API and returns its initial view.
#[cfg(test)]
pub async fn open_screen(app: &Router, kind: &str) -> crate::search::screen::ScreenView {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/screens")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "kind": kind }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice::<crate::routes::screen_response::ScreenResponse>(&body)
        .unwrap()
        .data
}
