use std::str::FromStr;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use marketside_contact::{Platform, Revenue, Service};
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Layout, Template},
    view::{ContactFormInput, ContactFormState, Field},
};

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch within 24 hours.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or call us directly.";

pub struct Banner {
    pub success: bool,
    pub message: &'static str,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: ContactFormState,
    pub banner: Option<Banner>,
    pub revenues: Vec<&'static str>,
    pub platforms: Vec<&'static str>,
    pub services: Vec<&'static str>,
}

impl ContactTemplate {
    fn new(layout: Layout, form: ContactFormState, banner: Option<Banner>) -> Self {
        Self {
            layout,
            form,
            banner,
            revenues: Revenue::VARIANTS.iter().map(|v| v.as_ref()).collect(),
            platforms: Platform::VARIANTS.iter().map(|v| v.as_ref()).collect(),
            services: Service::VARIANTS.iter().map(|v| v.as_ref()).collect(),
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::new(
        template.layout(),
        ContactFormState::default(),
        None,
    ))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> Response {
    let mut form = ContactFormState::from(input);

    if !form.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            template.render(ContactTemplate::new(template.layout(), form, None)),
        )
            .into_response();
    }

    let (status, form, banner) = match app_state
        .contact_command
        .submit(form.to_submission())
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            ContactFormState::default(),
            Banner {
                success: true,
                message: SUCCESS_MESSAGE,
            },
        ),
        Err(marketside_shared::Error::Validate(err)) => {
            let message = if err.message == marketside_shared::INVALID_EMAIL {
                "Please enter a valid email address"
            } else {
                "This field is required"
            };
            for field in err.fields.iter().filter_map(|f| Field::from_str(f).ok()) {
                form.reject(field, message);
            }

            (
                StatusCode::UNPROCESSABLE_ENTITY,
                form,
                Banner {
                    success: false,
                    message: FAILURE_MESSAGE,
                },
            )
        }
        Err(err) => {
            tracing::error!(err = %err, "Contact form submission failed");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                form,
                Banner {
                    success: false,
                    message: FAILURE_MESSAGE,
                },
            )
        }
    };

    (
        status,
        template.render(ContactTemplate::new(template.layout(), form, Some(banner))),
    )
        .into_response()
}
