use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::{DeliveryError, Email, Mailer};

/// Records every attempted email in memory.
///
/// `failing_on(n)` makes the n-th attempt (1-based) fail the way a provider
/// outage would, so callers can exercise their failure paths.
#[derive(Clone, Default)]
pub struct MemoryMailer {
    attempts: Arc<Mutex<Vec<Email>>>,
    fail_on: Option<usize>,
}

impl MemoryMailer {
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            attempts: Arc::default(),
            fail_on: Some(attempt),
        }
    }

    pub fn attempts(&self) -> Vec<Email> {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sent(&self) -> Vec<Email> {
        let mut attempts = self.attempts();
        match self.fail_on {
            Some(n) if n >= 1 && n <= attempts.len() => {
                attempts.remove(n - 1);
            }
            _ => {}
        }

        attempts
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &Email) -> Result<(), DeliveryError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap_or_else(PoisonError::into_inner);
            attempts.push(email.clone());
            attempts.len()
        };

        if self.fail_on == Some(attempt) {
            return Err(DeliveryError::Rejected {
                status: 503,
                body: "simulated provider outage".to_owned(),
            });
        }

        Ok(())
    }
}
