//! Resend email transport - mails each submission to the admin inbox.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use super::{build_client, check_status, map_send_error};
use crate::domain::submission::SheetPayload;
use crate::ports::{DeliveryError, PayloadTransport};

/// Configuration for the Resend API.
#[derive(Debug, Clone)]
pub struct ResendEmailConfig {
    api_key: Secret<String>,
    /// Formatted sender, e.g. `"Quiz <noreply@example.com>"`.
    pub from: String,
    /// Admin inbox receiving every submission.
    pub to: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendEmailConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            to: to.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ResendEmail {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
}

/// Transport sending the admin summary as a plain-text email.
pub struct ResendEmailTransport {
    config: ResendEmailConfig,
    client: Client,
}

impl ResendEmailTransport {
    pub fn new(config: ResendEmailConfig) -> Result<Self, DeliveryError> {
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn compose(&self, payload: &SheetPayload) -> ResendEmail {
        let respondent = payload.respondent_name();
        let subject = if respondent.is_empty() {
            format!("New {} submission", payload.quiz_title)
        } else {
            format!("New {} submission from {}", payload.quiz_title, respondent)
        };

        let text = if payload.admin_email_body.is_empty() {
            format!(
                "Quiz: {}\nSubmitted: {}\nBeing: {} • Flowing: {} • Trusting: {}\n\nAnswers:\n{}",
                payload.quiz_title,
                payload.timestamp,
                payload.being_score,
                payload.flowing_score,
                payload.trusting_score,
                payload.raw_scores_json
            )
        } else {
            payload.admin_email_body.clone()
        };

        ResendEmail {
            from: self.config.from.clone(),
            to: vec![self.config.to.clone()],
            subject,
            text,
        }
    }
}

#[async_trait]
impl PayloadTransport for ResendEmailTransport {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, payload: &SheetPayload) -> Result<(), DeliveryError> {
        let email = self.compose(payload);
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&email)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout))?;
        check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> ResendEmailTransport {
        ResendEmailTransport::new(
            ResendEmailConfig::new("re_test", "Quiz <noreply@example.com>", "admin@example.com")
                .with_base_url("https://api.resend.test/"),
        )
        .unwrap()
    }

    #[test]
    fn emails_url_trims_trailing_slash() {
        assert_eq!(transport().emails_url(), "https://api.resend.test/emails");
    }

    #[test]
    fn compose_uses_admin_body_when_present() {
        let payload = SheetPayload {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            quiz_title: "Hypnotherapy Application".into(),
            admin_email_body: "Full summary".into(),
            ..Default::default()
        };
        let email = transport().compose(&payload);

        assert_eq!(email.subject, "New Hypnotherapy Application submission from Ada Lovelace");
        assert_eq!(email.text, "Full summary");
        assert_eq!(email.to, vec!["admin@example.com".to_string()]);
    }

    #[test]
    fn compose_falls_back_to_scores_for_anonymous_quiz() {
        let payload = SheetPayload {
            quiz_title: "The Three Contradictions Quiz".into(),
            being_score: 5,
            flowing_score: 3,
            trusting_score: 4,
            raw_scores_json: "[]".into(),
            ..Default::default()
        };
        let email = transport().compose(&payload);

        assert_eq!(email.subject, "New The Three Contradictions Quiz submission");
        assert!(email.text.contains("Being: 5 • Flowing: 3 • Trusting: 4"));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = ResendEmailConfig::new("re_secret_value", "a@b.c", "d@e.f");
        assert!(!format!("{:?}", config).contains("re_secret_value"));
    }
}
