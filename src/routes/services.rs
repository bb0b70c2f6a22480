use axum::response::IntoResponse;

use crate::{
    content::{self, ServiceCard},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub layout: Layout,
    pub services: &'static [ServiceCard],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        layout: template.layout(),
        services: content::SERVICES,
    })
}
