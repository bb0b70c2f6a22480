use axum::response::IntoResponse;

use crate::{
    content::{self, Stat, TeamMember},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub stats: &'static [Stat],
    pub team: &'static [TeamMember],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        layout: template.layout(),
        stats: content::STATS,
        team: content::TEAM,
    })
}
