use serde::{Deserialize, Deserializer, Serialize};

/// Optional fields may be left out, but an explicit `null` is a schema error.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Body of `POST /api/contact`.
///
/// `company` is the honeypot. It is hidden from people and named so that
/// form-filling bots happily populate it. `ts` is the epoch millisecond at
/// which the form was rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
}

impl LeadRequest {
    pub fn phone_or_empty(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }
}
