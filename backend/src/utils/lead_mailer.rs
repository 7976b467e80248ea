use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use sarvian_common::LeadRequest;
use thiserror::Error;

use crate::config::app_config::MailConfig;

pub const LEAD_SUBJECT: &str = "New Website Inquiry — Sarvian Design";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("email provider rejected the message: {0}")]
    Rejected(String),
}

/// Where genuine leads end up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn notify(&self, lead: LeadRequest) -> Result<(), NotifyError>;
}

pub struct ResendNotifier {
    resend: Resend,
    from: String,
    to: String,
}

impl ResendNotifier {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            resend: Resend::new(&config.resend_api_key),
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }
}

#[async_trait]
impl LeadNotifier for ResendNotifier {
    async fn notify(&self, lead: LeadRequest) -> Result<(), NotifyError> {
        let email = CreateEmailBaseOptions::new(self.from.as_str(), [self.to.as_str()], LEAD_SUBJECT)
            .with_reply(&lead.email)
            .with_text(&lead_text(&lead))
            .with_html(&lead_html(&lead));

        let sent = self
            .resend
            .emails
            .send(email)
            .await
            .map_err(|e| NotifyError::Rejected(e.to_string()))?;
        tracing::info!("Lead notification sent: {:?}", sent.id);
        Ok(())
    }
}

pub fn lead_text(lead: &LeadRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}",
        lead.name,
        lead.email,
        lead.phone_or_empty()
    )
}

pub fn lead_html(lead: &LeadRequest) -> String {
    format!(
        r#"<table cellpadding="6" style="font-family:Arial,sans-serif;font-size:14px;line-height:1.6">
  <tr><td><strong>Name:</strong></td><td>{}</td></tr>
  <tr><td><strong>Email:</strong></td><td>{}</td></tr>
  <tr><td><strong>Phone:</strong></td><td>{}</td></tr>
</table>"#,
        escape_html(&lead.name),
        escape_html(&lead.email),
        escape_html(lead.phone_or_empty())
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, phone: Option<&str>) -> LeadRequest {
        LeadRequest {
            name: name.into(),
            email: "jane@example.com".into(),
            phone: phone.map(str::to_string),
            company: None,
            ts: None,
        }
    }

    #[test]
    fn text_body_lists_fields() {
        let body = lead_text(&lead("Jane Doe", Some("(954) 444-4803")));
        assert_eq!(body, "Name: Jane Doe\nEmail: jane@example.com\nPhone: (954) 444-4803");
    }

    #[test]
    fn missing_phone_renders_blank() {
        assert!(lead_text(&lead("Jane Doe", None)).ends_with("Phone: "));
    }

    #[test]
    fn html_body_escapes_values() {
        let html = lead_html(&lead("<b>Jane</b> & Co", None));
        assert!(html.contains("&lt;b&gt;Jane&lt;/b&gt; &amp; Co"));
        assert!(!html.contains("<b>Jane"));
    }
}
