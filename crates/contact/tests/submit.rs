use marketside_contact::{Branding, Command, Receipt, Submission};
use marketside_notification::{EmailService, MemoryMailer};
use marketside_shared::Error;

mod helpers;

#[tokio::test]
async fn test_valid_submission_sends_operator_then_confirmation() -> anyhow::Result<()> {
    let (command, mailer) = helpers::command(MemoryMailer::default());

    let receipt = command
        .submit(Submission {
            phone: Some("555-0100".to_owned()),
            ..helpers::jane()
        })
        .await?;

    assert_eq!(
        receipt,
        Receipt {
            confirmation_sent: true
        }
    );

    let attempts = mailer.attempts();
    assert_eq!(attempts.len(), 2);

    let operator = &attempts[0];
    assert_eq!(operator.to, helpers::OPERATOR);
    assert_eq!(operator.reply_to.as_deref(), Some("jane@example.com"));
    assert!(operator.html.contains("Jane Doe"));
    assert!(operator.html.contains("555-0100"));
    assert!(!operator.html.contains("Company"));

    let confirmation = &attempts[1];
    assert_eq!(confirmation.to, "jane@example.com");
    assert_eq!(confirmation.subject, "Thanks for contacting Marketside");

    Ok(())
}

#[tokio::test]
async fn test_missing_required_fields_make_no_delivery_attempt() {
    let cases = [
        Submission {
            name: String::new(),
            ..helpers::jane()
        },
        Submission {
            email: "   ".to_owned(),
            ..helpers::jane()
        },
        Submission {
            message: "\n".to_owned(),
            ..helpers::jane()
        },
        Submission::default(),
    ];

    for submission in cases {
        let (command, mailer) = helpers::command(MemoryMailer::default());

        match command.submit(submission).await {
            Err(Error::Validate(err)) => assert_eq!(err.message, "Missing required fields"),
            other => panic!("expected validation error, got {other:?}"),
        }

        assert!(mailer.attempts().is_empty());
    }
}

#[tokio::test]
async fn test_operator_failure_skips_confirmation() {
    let (command, mailer) = helpers::command(MemoryMailer::failing_on(1));

    let result = command.submit(helpers::jane()).await;

    assert!(matches!(result, Err(Error::Delivery(_))));
    assert_eq!(mailer.attempts().len(), 1);
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_confirmation_failure_still_accepts_submission() -> anyhow::Result<()> {
    let (command, mailer) = helpers::command(MemoryMailer::failing_on(2));

    let receipt = command.submit(helpers::jane()).await?;

    assert!(!receipt.confirmation_sent);
    assert_eq!(mailer.attempts().len(), 2);
    assert_eq!(mailer.sent().len(), 1);
    assert_eq!(mailer.sent()[0].to, helpers::OPERATOR);

    Ok(())
}

#[tokio::test]
async fn test_services_from_json_keep_their_order() -> anyhow::Result<()> {
    let (command, mailer) = helpers::command(MemoryMailer::default());

    let submission: Submission = serde_json::from_value(serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "Interested in Amazon services",
        "services": ["PPC Management", "Store Setup"]
    }))?;

    command.submit(submission).await?;

    let operator = &mailer.attempts()[0];
    assert!(operator.html.contains("PPC Management, Store Setup"));

    Ok(())
}

#[tokio::test]
async fn test_branding_is_used_in_confirmation() -> anyhow::Result<()> {
    let mailer = MemoryMailer::default();
    let command = Command::new(
        EmailService::with_mailer(mailer.clone(), "Shelfwise <hello@shelfwise.test>"),
        helpers::OPERATOR,
        Branding {
            site_name: "Shelfwise".to_owned(),
            site_url: "https://shelfwise.test".to_owned(),
        },
    );

    command.submit(helpers::jane()).await?;

    let confirmation = &mailer.attempts()[1];
    assert_eq!(confirmation.from, "Shelfwise <hello@shelfwise.test>");
    assert!(confirmation.html.contains("The Shelfwise team"));

    Ok(())
}
