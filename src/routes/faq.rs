use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::{
    content,
    template::{Layout, Template},
    view::Accordion,
};

#[derive(Deserialize, Default)]
pub struct PageQuery {
    /// Comma separated indices of the expanded entries, e.g. `1,3`.
    pub open: Option<String>,
    pub multiple: Option<bool>,
}

pub struct FaqItemView {
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
    pub toggle_href: String,
}

#[derive(askama::Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub layout: Layout,
    pub items: Vec<FaqItemView>,
}

fn parse_open(raw: Option<&str>) -> Vec<usize> {
    raw.unwrap_or_default()
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn href(accordion: &Accordion) -> String {
    let open = accordion
        .open_indices()
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",");

    match (open.is_empty(), accordion.allow_multiple_open()) {
        (true, false) => "/faq".to_owned(),
        (true, true) => "/faq?multiple=true".to_owned(),
        (false, false) => format!("/faq?open={open}"),
        (false, true) => format!("/faq?open={open}&multiple=true"),
    }
}

fn items(accordion: &Accordion) -> Vec<FaqItemView> {
    content::FAQS
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            let mut next = accordion.clone();
            next.toggle(index);

            FaqItemView {
                question: faq.question,
                answer: faq.answer,
                expanded: accordion.is_expanded(index),
                toggle_href: format!("{}#faq-{index}", href(&next)),
            }
        })
        .collect()
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let accordion = Accordion::with_open(
        content::FAQS.len(),
        query.multiple.unwrap_or(false),
        &parse_open(query.open.as_deref()),
    );

    template.render(FaqTemplate {
        layout: template.layout(),
        items: items(&accordion),
    })
}
