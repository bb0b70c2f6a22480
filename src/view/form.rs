use std::{collections::BTreeMap, sync::LazyLock};

use marketside_contact::Submission;
use regex::Regex;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumString, Display, VariantArray, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Revenue,
    Platform,
    Message,
}

/// Raw urlencoded body of the contact page form.
///
/// `services` repeats once per checked box.
#[derive(Debug, Default, Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub message: String,
}

/// Field-by-field state of the contact form, with per-field messages.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    values: BTreeMap<Field, String>,
    services: Vec<String>,
    errors: BTreeMap<Field, &'static str>,
}

impl ContactFormState {
    /// Updates one field; clears a stale message for it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn get(&self, field: &str) -> &str {
        field
            .parse::<Field>()
            .ok()
            .and_then(|f| self.values.get(&f))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        self.get(field) == value
    }

    pub fn toggle_service(&mut self, service: impl Into<String>) {
        let service = service.into();
        match self.services.iter().position(|s| *s == service) {
            Some(i) => {
                self.services.remove(i);
            }
            None => self.services.push(service),
        }
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    pub fn error(&self, field: &str) -> Option<&'static str> {
        field
            .parse::<Field>()
            .ok()
            .and_then(|f| self.errors.get(&f).copied())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Presence and format checks; returns true when the form can be sent.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        for (field, message) in [
            (Field::Name, "Please enter your name"),
            (Field::Email, "Please enter your email"),
            (Field::Message, "Please tell us about your business"),
        ] {
            if self.value(field).trim().is_empty() {
                self.errors.insert(field, message);
            }
        }

        let email = self.value(Field::Email).trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            self.errors
                .insert(Field::Email, "Please enter a valid email address");
        }

        self.errors.is_empty()
    }

    /// Marks a field invalid after the fact, e.g. from server-side checks.
    pub fn reject(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn to_submission(&self) -> Submission {
        let optional = |field| Some(self.value(field).to_owned());

        Submission {
            name: self.value(Field::Name).to_owned(),
            email: self.value(Field::Email).to_owned(),
            phone: optional(Field::Phone),
            company: optional(Field::Company),
            revenue: optional(Field::Revenue),
            platform: optional(Field::Platform),
            services: self.services.clone(),
            message: self.value(Field::Message).to_owned(),
        }
        .normalize()
    }

    fn value(&self, field: Field) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl From<ContactFormInput> for ContactFormState {
    fn from(input: ContactFormInput) -> Self {
        let mut state = Self::default();
        state.set(Field::Name, input.name);
        state.set(Field::Email, input.email);
        state.set(Field::Phone, input.phone);
        state.set(Field::Company, input.company);
        state.set(Field::Revenue, input.revenue);
        state.set(Field::Platform, input.platform);
        state.set(Field::Message, input.message);
        for service in input.services {
            if !state.has_service(&service) {
                state.toggle_service(service);
            }
        }

        state
    }
}
