use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Values shared by every page through `base.html`.
pub struct Layout {
    pub site: SiteConfig,
    pub path: String,
    pub is_dev: bool,
}

impl Layout {
    /// Whether a navigation link points at the current page.
    pub fn is_active(&self, href: &str) -> bool {
        self.path == href
    }
}

pub struct Template {
    site: SiteConfig,
    path: String,
}

impl Template {
    pub fn layout(&self) -> Layout {
        Layout {
            site: self.site.clone(),
            path: self.path.to_owned(),
            is_dev: cfg!(debug_assertions),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(path = %self.path, "Failed to render template: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            site: state.config.site.clone(),
            path: parts.uri.path().to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}
