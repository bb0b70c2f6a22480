use axum::{Router, response::IntoResponse, routing::post};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod api;
mod contact;
mod faq;
mod health;
mod index;
mod pricing;
mod services;

use axum::routing::get;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact_command: marketside_contact::Command,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let layout = template.layout();

    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate { layout }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/services", get(services::page))
        .route("/pricing", get(pricing::page))
        .route("/about", get(about::page))
        .route("/faq", get(faq::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(api::contact::submit))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
