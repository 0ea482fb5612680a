use axum::{
    routing::{get, post, put},
    Router,
};

use crate::types::app_state::AppState;

mod delete_screen;
mod get_doctors;
mod get_pharmacies;
mod get_screen;
mod post_screen;
mod put_profile;
pub mod screen_response;
mod selection;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/screens", post(post_screen::post_screen))
        .route(
            "/screens/:id",
            get(get_screen::get_screen).delete(delete_screen::delete_screen),
        )
        .route("/screens/:id/doctors", get(get_doctors::get_doctors))
        .route(
            "/screens/:id/pharmacies",
            get(get_pharmacies::get_pharmacies),
        )
        .route(
            "/screens/:id/selection",
            put(selection::put_selection).delete(selection::delete_selection),
        )
        .route("/profile", put(put_profile::put_profile))
}
