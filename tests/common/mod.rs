#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use marketside::{
    AppState,
    config::{Config, LoggingConfig, ServerConfig, SiteConfig},
};
use marketside_contact::Branding;
use marketside_notification::{EmailConfig, EmailService, MemoryMailer, Provider};
use tower::ServiceExt;

pub const OPERATOR: &str = "leads@marketside.agency";

pub struct TestApp {
    pub router: Router,
    pub mailer: MemoryMailer,
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig::default(),
        email: EmailConfig {
            provider: Provider::Log,
            contact_address: OPERATOR.to_owned(),
            ..Default::default()
        },
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(mailer: MemoryMailer) -> TestApp {
    let config = config();
    let contact_command = marketside_contact::Command::new(
        EmailService::with_mailer(mailer.clone(), config.email.from_address.to_owned()),
        OPERATOR,
        Branding {
            site_name: config.site.name.to_owned(),
            site_url: config.site.url.to_owned(),
        },
    );

    TestApp {
        router: marketside::server::app(AppState {
            config,
            contact_command,
        }),
        mailer,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: impl Into<String>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.into()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status, "unexpected status for response");
}
