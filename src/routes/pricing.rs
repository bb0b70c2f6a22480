use axum::response::IntoResponse;

use crate::{
    content::{self, PricingTier},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub layout: Layout,
    pub tiers: &'static [PricingTier],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PricingTemplate {
        layout: template.layout(),
        tiers: content::PRICING,
    })
}
