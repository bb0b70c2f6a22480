use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::{
    content::{self, Stat, Testimonial},
    template::{Layout, Template},
    view::Carousel,
};

/// Assumed viewport when the client did not report one.
const DEFAULT_WIDTH: u32 = 1280;

#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub slide: Option<usize>,
    pub width: Option<u32>,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub stats: &'static [Stat],
    pub services: &'static [content::ServiceCard],
    pub testimonials: Vec<&'static Testimonial>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let width = query.width.unwrap_or(DEFAULT_WIDTH);
    let mut carousel = Carousel::new(content::TESTIMONIALS.len(), 1);
    carousel.go_to(query.slide.unwrap_or_default());
    carousel.resize(width);

    let href = |slide: usize| format!("/?slide={slide}&width={width}#testimonials");

    let prev_href = carousel.can_prev().then(|| {
        let mut prev = carousel;
        prev.prev();
        href(prev.index())
    });
    let next_href = carousel.can_next().then(|| {
        let mut next = carousel;
        next.next();
        href(next.index())
    });

    template.render(IndexTemplate {
        layout: template.layout(),
        stats: content::STATS,
        services: content::SERVICES,
        testimonials: content::TESTIMONIALS[carousel.visible()].iter().collect(),
        prev_href,
        next_href,
    })
}
