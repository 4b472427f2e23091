use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{validate, ContactFormData, FieldErrors};

pub const SERVICE_ID_PLACEHOLDER: &str = "service_your_service_id";
pub const TEMPLATE_ID_PLACEHOLDER: &str = "template_your_template_id";
pub const PUBLIC_KEY_PLACEHOLDER: &str = "your_public_key";

#[cfg(feature = "ssr")]
const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS identifiers. None of them are secrets; a build without the
/// environment variables keeps the placeholders and uses the mailto fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: SERVICE_ID_PLACEHOLDER.to_string(),
            template_id: TEMPLATE_ID_PLACEHOLDER.to_string(),
            public_key: PUBLIC_KEY_PLACEHOLDER.to_string(),
        }
    }
}

impl EmailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("EMAILJS_SERVICE_ID").unwrap_or(SERVICE_ID_PLACEHOLDER),
            option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(TEMPLATE_ID_PLACEHOLDER),
            option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(PUBLIC_KEY_PLACEHOLDER),
        )
    }

    /// Placeholder detection only; the identifiers are not checked with EmailJS.
    pub fn is_configured(&self) -> bool {
        self.service_id != SERVICE_ID_PLACEHOLDER
            && self.template_id != TEMPLATE_ID_PLACEHOLDER
            && self.public_key != PUBLIC_KEY_PLACEHOLDER
    }
}

/// Variables handed to the EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    /// The visitor only controls the form fields; the addressee is fixed and
    /// replies go to the address they entered.
    pub fn from_form(owner_name: &str, data: &ContactFormData) -> Self {
        Self {
            from_email: data.email.clone(),
            subject: data.subject.clone(),
            message: data.message.clone(),
            to_name: owner_name.to_string(),
            reply_to: data.email.clone(),
        }
    }
}

/// Why the server refused to forward a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("invalid contact form: {}", .0.fields().map(|f| f.name()).collect::<Vec<_>>().join(", "))]
    Invalid(FieldErrors),
    #[error("email service is not configured")]
    Unconfigured,
}

/// Server-side gate in front of EmailJS: the form is validated again and the
/// template variables are built here, never taken from the caller.
pub fn relay_params(
    config: &EmailConfig,
    owner_name: &str,
    data: &ContactFormData,
) -> Result<TemplateParams, RelayError> {
    let errors = validate(data);
    if !errors.is_empty() {
        return Err(RelayError::Invalid(errors));
    }
    if !config.is_configured() {
        return Err(RelayError::Unconfigured);
    }
    Ok(TemplateParams::from_form(owner_name, data))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub status: u16,
    pub text: String,
}

impl RemoteResponse {
    pub fn is_delivered(&self) -> bool {
        self.status == http::StatusCode::OK.as_u16()
    }
}

/// The request never produced a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("email transport failed: {0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait EmailTransport {
    async fn send(&self, params: &TemplateParams) -> Result<RemoteResponse, TransportError>;
}

#[cfg(feature = "ssr")]
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Direct client for the EmailJS REST API.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: EmailConfig,
}

#[cfg(feature = "ssr")]
impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn deliver(&self, params: &TemplateParams) -> Result<RemoteResponse, TransportError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };
        tracing::debug!("emailjs: POST {EMAILJS_ENDPOINT} template={}", self.config.template_id);
        let resp = self
            .client
            .post(EMAILJS_ENDPOINT)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status().as_u16();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("emailjs: could not read response body: {e}");
                String::new()
            }
        };
        if status != http::StatusCode::OK.as_u16() {
            tracing::warn!("emailjs returned {status}: {text}");
        }
        Ok(RemoteResponse { status, text })
    }
}

#[cfg(feature = "ssr")]
#[async_trait(?Send)]
impl EmailTransport for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<RemoteResponse, TransportError> {
        self.deliver(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        assert!(!EmailConfig::default().is_configured());
    }

    #[test]
    fn test_any_placeholder_means_unconfigured() {
        assert!(EmailConfig::new("service_x", "template_y", "key_z").is_configured());
        assert!(!EmailConfig::new(SERVICE_ID_PLACEHOLDER, "template_y", "key_z").is_configured());
        assert!(!EmailConfig::new("service_x", TEMPLATE_ID_PLACEHOLDER, "key_z").is_configured());
        assert!(!EmailConfig::new("service_x", "template_y", PUBLIC_KEY_PLACEHOLDER).is_configured());
    }

    fn configured() -> EmailConfig {
        EmailConfig::new("service_x", "template_y", "key_z")
    }

    #[test]
    fn test_relay_rejects_invalid_form() {
        let data = ContactFormData::new("not-an-email", "Hi", "short");
        match relay_params(&configured(), "Owner", &data) {
            Err(RelayError::Invalid(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected invalid form, got {other:?}"),
        }
    }

    #[test]
    fn test_relay_refuses_when_unconfigured() {
        let data = ContactFormData::new("a@b.co", "Hello", "0123456789");
        assert_eq!(
            relay_params(&EmailConfig::default(), "Owner", &data),
            Err(RelayError::Unconfigured)
        );
    }

    #[test]
    fn test_relay_fixes_addressee_and_reply_to() {
        let data = ContactFormData::new("visitor@example.com", "Hello", "0123456789");
        let params = relay_params(&configured(), "Owner", &data).unwrap();
        assert_eq!(params.to_name, "Owner");
        assert_eq!(params.reply_to, "visitor@example.com");
        assert_eq!(params.from_email, "visitor@example.com");
        assert_eq!(params.subject, "Hello");
    }

    #[test]
    fn test_only_200_is_delivered() {
        let resp = |status| RemoteResponse {
            status,
            text: String::new(),
        };
        assert!(resp(200).is_delivered());
        assert!(!resp(201).is_delivered());
        assert!(!resp(400).is_delivered());
        assert!(!resp(500).is_delivered());
    }
}
