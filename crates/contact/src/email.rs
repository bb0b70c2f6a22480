use askama::Template;
use time::OffsetDateTime;

use crate::Submission;

/// Site identity stamped on outgoing emails.
#[derive(Debug, Clone)]
pub struct Branding {
    pub site_name: String,
    pub site_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Template)]
#[template(path = "operator.html")]
struct OperatorHtmlTemplate<'a> {
    submission: &'a Submission,
    services: String,
    site_name: &'a str,
}

#[derive(Template)]
#[template(path = "operator.txt")]
struct OperatorPlainTemplate<'a> {
    submission: &'a Submission,
    services: String,
}

#[derive(Template)]
#[template(path = "confirmation.html")]
struct ConfirmationHtmlTemplate<'a> {
    submission: &'a Submission,
    site_name: &'a str,
    site_url: &'a str,
    year: i32,
}

#[derive(Template)]
#[template(path = "confirmation.txt")]
struct ConfirmationPlainTemplate<'a> {
    submission: &'a Submission,
    site_name: &'a str,
    site_url: &'a str,
    year: i32,
}

pub fn render_operator_email(
    submission: &Submission,
    branding: &Branding,
) -> Result<Rendered, askama::Error> {
    let html = OperatorHtmlTemplate {
        submission,
        services: submission.services_line(),
        site_name: &branding.site_name,
    }
    .render()?;

    let text = OperatorPlainTemplate {
        submission,
        services: submission.services_line(),
    }
    .render()?;

    Ok(Rendered {
        subject: format!(
            "New contact form submission from {}",
            single_line(&submission.name)
        ),
        html,
        text,
    })
}

pub fn render_confirmation_email(
    submission: &Submission,
    branding: &Branding,
) -> Result<Rendered, askama::Error> {
    let year = OffsetDateTime::now_utc().year();

    let html = ConfirmationHtmlTemplate {
        submission,
        site_name: &branding.site_name,
        site_url: &branding.site_url,
        year,
    }
    .render()?;

    let text = ConfirmationPlainTemplate {
        submission,
        site_name: &branding.site_name,
        site_url: &branding.site_url,
        year,
    }
    .render()?;

    Ok(Rendered {
        subject: format!("Thanks for contacting {}", branding.site_name),
        html,
        text,
    })
}

// Header values must not carry line breaks.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branding() -> Branding {
        Branding {
            site_name: "Marketside".to_owned(),
            site_url: "https://marketside.agency".to_owned(),
        }
    }

    fn jane() -> Submission {
        Submission {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            phone: Some("555-0100".to_owned()),
            message: "Interested in Amazon services".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_operator_email_contains_present_fields_only() {
        let rendered = render_operator_email(&jane(), &branding()).unwrap();

        for expected in [
            "Jane Doe",
            "jane@example.com",
            "555-0100",
            "Interested in Amazon services",
        ] {
            assert!(rendered.html.contains(expected), "missing {expected}");
            assert!(rendered.text.contains(expected), "missing {expected}");
        }

        for absent in ["Company", "Monthly Revenue", "Platform", "Services", "undefined", "null"] {
            assert!(!rendered.html.contains(absent), "unexpected {absent}");
            assert!(!rendered.text.contains(absent), "unexpected {absent}");
        }

        assert_eq!(
            rendered.subject,
            "New contact form submission from Jane Doe"
        );
    }

    #[test]
    fn test_operator_email_renders_services_in_order() {
        let submission = Submission {
            services: vec!["PPC Management".to_owned(), "Store Setup".to_owned()],
            company: Some("Acme".to_owned()),
            ..jane()
        };

        let rendered = render_operator_email(&submission, &branding()).unwrap();
        assert!(rendered.html.contains("PPC Management, Store Setup"));
        assert!(rendered.text.contains("Services: PPC Management, Store Setup"));
        assert!(rendered.html.contains("Acme"));
    }

    #[test]
    fn test_user_input_is_html_escaped() {
        let submission = Submission {
            name: "<script>alert(1)</script>".to_owned(),
            message: "<b>hi</b> & bye".to_owned(),
            ..jane()
        };

        let rendered = render_operator_email(&submission, &branding()).unwrap();
        assert!(!rendered.html.contains("<script>"));
        assert!(rendered.html.contains("&#60;script&#62;"));
        assert!(rendered.html.contains("&#60;b&#62;hi"));
        assert!(rendered.html.contains("&#38; bye"));

        let rendered = render_confirmation_email(&submission, &branding()).unwrap();
        assert!(!rendered.html.contains("<script>"));
    }

    #[test]
    fn test_subject_collapses_line_breaks() {
        let submission = Submission {
            name: "Jane\r\nBcc: spam@example.com".to_owned(),
            ..jane()
        };

        let rendered = render_operator_email(&submission, &branding()).unwrap();
        assert_eq!(
            rendered.subject,
            "New contact form submission from Jane Bcc: spam@example.com"
        );
    }

    #[test]
    fn test_confirmation_email_addresses_submitter() {
        let rendered = render_confirmation_email(&jane(), &branding()).unwrap();

        assert_eq!(rendered.subject, "Thanks for contacting Marketside");
        assert!(rendered.html.contains("Hi Jane Doe"));
        assert!(rendered.html.contains("jane@example.com"));
        assert!(rendered.html.contains("555-0100"));
        assert!(!rendered.html.contains("Company"));
        assert!(rendered.text.contains("Hi Jane Doe"));
    }
}
