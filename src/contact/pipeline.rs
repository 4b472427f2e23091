use std::cell::Cell;

use thiserror::Error;

use super::{mailto_uri, validate, ContactFormData, FieldErrors, MailHandoff};
use crate::{
    email::{EmailConfig, EmailTransport, TemplateParams},
    locale::LocaleCode,
    notify::{NoticeKind, Notifier},
    strings::strings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Validating,
    CheckingConfig,
    FallbackDispatch,
    RemoteDispatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Accepted by the email service.
    Remote,
    /// Handed to the visitor's mail client. Nothing confirms it was sent.
    MailClient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(Delivery),
    ValidationFailure(FieldErrors),
    NetworkFailure,
    RemoteFailure { status: u16, message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    fn notice(&self, locale: LocaleCode) -> (NoticeKind, &'static str) {
        let s = strings(locale);
        match self {
            Self::Success(Delivery::Remote) => (NoticeKind::Success, s.toast_email_sent),
            Self::Success(Delivery::MailClient) => (NoticeKind::Info, s.toast_mail_client_opened),
            Self::ValidationFailure(_) => (NoticeKind::Warning, s.toast_form_invalid),
            Self::NetworkFailure => (NoticeKind::Error, s.toast_network_error),
            Self::RemoteFailure { .. } => (NoticeKind::Error, s.toast_email_error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
}

/// Puts the pipeline back to `Idle` however the attempt ends.
struct IdleOnDrop<'a>(&'a Cell<PipelineState>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(PipelineState::Idle);
    }
}

/// Drives one contact-form submission at a time from validation to a
/// reported result.
pub struct ContactPipeline<T, M, N> {
    config: EmailConfig,
    owner_name: String,
    owner_email: String,
    transport: T,
    mailer: M,
    notifier: N,
    state: Cell<PipelineState>,
}

impl<T, M, N> ContactPipeline<T, M, N>
where
    T: EmailTransport,
    M: MailHandoff,
    N: Notifier,
{
    pub fn new(
        config: EmailConfig,
        owner_name: impl Into<String>,
        owner_email: impl Into<String>,
        transport: T,
        mailer: M,
        notifier: N,
    ) -> Self {
        Self {
            config,
            owner_name: owner_name.into(),
            owner_email: owner_email.into(),
            transport,
            mailer,
            notifier,
            state: Cell::new(PipelineState::Idle),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state.get()
    }

    pub fn is_idle(&self) -> bool {
        self.state.get() == PipelineState::Idle
    }

    /// Runs one attempt and reports it through the notifier: one loading
    /// notice, settled by exactly one update. Rejected without side effects
    /// while another attempt is in flight.
    pub async fn submit(
        &self,
        data: &ContactFormData,
        locale: LocaleCode,
    ) -> Result<SubmissionResult, SubmitError> {
        if !self.is_idle() {
            log::debug!("contact submit ignored, pipeline is {:?}", self.state.get());
            return Err(SubmitError::InFlight);
        }
        self.state.set(PipelineState::Validating);
        let _idle = IdleOnDrop(&self.state);

        let notice = self
            .notifier
            .show(NoticeKind::Loading, strings(locale).toast_sending);
        let result = self.dispatch(data).await;
        let (kind, message) = result.notice(locale);
        self.notifier.update(notice, message, kind);
        Ok(result)
    }

    async fn dispatch(&self, data: &ContactFormData) -> SubmissionResult {
        let errors = validate(data);
        if !errors.is_empty() {
            log::debug!("contact form invalid: {:?}", errors.fields().collect::<Vec<_>>());
            return SubmissionResult::ValidationFailure(errors);
        }

        self.state.set(PipelineState::CheckingConfig);
        if !self.config.is_configured() {
            log::warn!("email service not configured, falling back to mailto");
            self.state.set(PipelineState::FallbackDispatch);
            self.mailer.open(&mailto_uri(&self.owner_email, data));
            return SubmissionResult::Success(Delivery::MailClient);
        }

        self.state.set(PipelineState::RemoteDispatch);
        let params = TemplateParams::from_form(&self.owner_name, data);
        match self.transport.send(&params).await {
            Ok(resp) if resp.is_delivered() => SubmissionResult::Success(Delivery::Remote),
            Ok(resp) => {
                log::warn!("email service rejected message: {} {}", resp.status, resp.text);
                SubmissionResult::RemoteFailure {
                    status: resp.status,
                    message: resp.text,
                }
            }
            Err(e) => {
                log::error!("{e}");
                SubmissionResult::NetworkFailure
            }
        }
    }
}
