use serde::{Deserialize, Deserializer};
use validator::Validate;

/// One inbound contact request. Never persisted.
///
/// Required fields deserialize to an empty string when absent or `null` so
/// that a missing field is reported as a validation error, not a parse error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct Submission {
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1), email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub services: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1))]
    pub message: String,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl Submission {
    /// Trims every field and turns blank optional fields into `None`.
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: present(self.phone),
            company: present(self.company),
            revenue: present(self.revenue),
            platform: present(self.platform),
            services: self
                .services
                .into_iter()
                .filter_map(|s| present(Some(s)))
                .collect(),
            message: self.message.trim().to_owned(),
        }
    }

    /// Required fields first, then the email format.
    pub fn ensure_valid(&self) -> marketside_shared::Result<()> {
        self.validate()?;

        Ok(())
    }

    pub fn services_line(&self) -> String {
        self.services.join(", ")
    }
}
