use marketside_notification::EmailService;
use marketside_shared::Error;

use crate::{Branding, Submission, render_confirmation_email, render_operator_email};

/// Outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Whether the acknowledgment reached the provider. Informational only:
    /// a submission is accepted once the operator has been notified.
    pub confirmation_sent: bool,
}

#[derive(Clone)]
pub struct Command {
    pub email: EmailService,
    pub operator_address: String,
    pub branding: Branding,
}

impl Command {
    pub fn new(email: EmailService, operator_address: impl Into<String>, branding: Branding) -> Self {
        Self {
            email,
            operator_address: operator_address.into(),
            branding,
        }
    }

    /// Validates the submission, notifies the operator, then acknowledges the
    /// submitter.
    ///
    /// Nothing is sent when validation fails. A failed operator email aborts
    /// before the confirmation is attempted. A failed confirmation is logged
    /// and reported through [`Receipt::confirmation_sent`].
    #[tracing::instrument(skip_all, fields(platform = input.platform.as_deref()))]
    pub async fn submit(&self, input: Submission) -> marketside_shared::Result<Receipt> {
        let submission = input.normalize();

        if let Err(err) = submission.ensure_valid() {
            tracing::info!(err = %err, "Rejected contact submission");
            return Err(err);
        }

        let operator = match render_operator_email(&submission, &self.branding) {
            Ok(rendered) => rendered,
            Err(err) => marketside_shared::bail!("failed to render operator email: {err}"),
        };

        if let Err(err) = self
            .email
            .send(
                &self.operator_address,
                operator.subject,
                operator.html,
                Some(operator.text),
                Some(submission.email.to_owned()),
            )
            .await
        {
            tracing::error!(err = %err, "Failed to send operator notification");
            return Err(Error::Delivery(err.to_string()));
        }

        let confirmation_sent = match render_confirmation_email(&submission, &self.branding) {
            Ok(confirmation) => match self
                .email
                .send(
                    &submission.email,
                    confirmation.subject,
                    confirmation.html,
                    Some(confirmation.text),
                    None,
                )
                .await
            {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(err = %err, "Failed to send submitter confirmation");
                    false
                }
            },
            Err(err) => {
                tracing::warn!(err = %err, "Failed to render submitter confirmation");
                false
            }
        };

        tracing::info!(confirmation_sent, "Contact submission accepted");

        Ok(Receipt { confirmation_sent })
    }
}
