use std::sync::Arc;

use crate::{
    search::screen::ScreenStore,
    services::{
        maps_client::maps_service::MapsService, profile_service::profile_service::ProfileService,
        search_client::SearchClient,
    },
    types::app_config::DefaultOrigins,
};

#[derive(Clone)]
pub struct AppState {
    pub maps_service: MapsService,
    pub doctor_service: Arc<dyn SearchClient>,
    pub pharmacy_service: Arc<dyn SearchClient>,
    pub profile_service: ProfileService,
    pub screens: ScreenStore,
    pub default_origins: DefaultOrigins,
    pub auth_key: Option<String>,
}
