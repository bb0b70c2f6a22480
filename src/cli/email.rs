use marketside_contact::{Branding, Submission, render_operator_email};
use marketside_notification::EmailService;

/// Sends a sample operator notification through the configured provider.
pub async fn send_test_email(config: crate::config::Config, to: String) -> anyhow::Result<()> {
    let email = EmailService::new(&config.email)?;

    let sample = Submission {
        name: "Test Sender".to_owned(),
        email: config.site.email.to_owned(),
        platform: Some("Amazon".to_owned()),
        services: vec!["PPC Management".to_owned()],
        message: "This is a test message from the marketside CLI.".to_owned(),
        ..Default::default()
    };

    let rendered = render_operator_email(
        &sample,
        &Branding {
            site_name: config.site.name.to_owned(),
            site_url: config.site.url.to_owned(),
        },
    )?;

    email
        .send(
            &to,
            format!("[test] {}", rendered.subject),
            rendered.html,
            Some(rendered.text),
            None,
        )
        .await?;

    tracing::info!(provider = %config.email.provider, "Test email sent to {to}");

    Ok(())
}
