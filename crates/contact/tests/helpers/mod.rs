#![allow(dead_code)]

use marketside_contact::{Branding, Command, Submission};
use marketside_notification::{EmailService, MemoryMailer};

pub const OPERATOR: &str = "leads@marketside.agency";

pub fn command(mailer: MemoryMailer) -> (Command, MemoryMailer) {
    let command = Command::new(
        EmailService::with_mailer(mailer.clone(), "Marketside <noreply@marketside.agency>"),
        OPERATOR,
        Branding {
            site_name: "Marketside".to_owned(),
            site_url: "https://marketside.agency".to_owned(),
        },
    );

    (command, mailer)
}

pub fn jane() -> Submission {
    Submission {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        message: "Interested in Amazon services".to_owned(),
        ..Default::default()
    }
}
