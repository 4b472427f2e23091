use std::rc::Rc;

use async_trait::async_trait;
use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use super::{locale::use_locale, toast::use_toaster, Toaster};
use crate::{
    contact::{ContactFormData, ContactPipeline, Field, FieldErrors, MailHandoff, SubmissionResult, SubmitError},
    content::{ContactMethod, CONTACT_EMAIL, CONTACT_LOCATION, PERSONAL_INFO},
    email::{EmailConfig, EmailTransport, RemoteResponse, TemplateParams, TransportError},
    notify::{NoticeKind, Notifier},
    strings::{strings, UiStrings},
};

/// Validates the form again on the server and forwards it to EmailJS.
#[server]
pub async fn relay_contact_email(data: ContactFormData) -> Result<RemoteResponse, ServerFnError> {
    use crate::email::{relay_params, EmailJsClient};

    let config = EmailConfig::from_build_env();
    let params = relay_params(&config, PERSONAL_INFO.name, &data).map_err(|e| {
        tracing::warn!("contact relay refused: {e}");
        ServerFnError::new(e)
    })?;
    EmailJsClient::new(config)
        .deliver(&params)
        .await
        .map_err(ServerFnError::new)
}

struct ServerRelay;

#[async_trait(?Send)]
impl EmailTransport for ServerRelay {
    async fn send(&self, params: &TemplateParams) -> Result<RemoteResponse, TransportError> {
        let data = ContactFormData::new(&params.from_email, &params.subject, &params.message);
        relay_contact_email(data)
            .await
            .map_err(|e| TransportError(e.to_string()))
    }
}

struct SiteMailer;

impl MailHandoff for SiteMailer {
    fn open(&self, uri: &str) {
        #[cfg(feature = "hydrate")]
        if let Err(e) = window().location().set_href(uri) {
            log::error!("could not open mail client: {e:?}");
        }
        #[cfg(not(feature = "hydrate"))]
        log::warn!("mail handoff outside the browser: {uri}");
    }
}

type SitePipeline = ContactPipeline<ServerRelay, SiteMailer, Toaster>;

fn method_text(method: ContactMethod, s: &UiStrings) -> (&'static str, &'static str, &'static str) {
    match method {
        ContactMethod::Email => (s.label_email, s.toast_open_email, "✉"),
        ContactMethod::Phone => (s.label_phone, s.toast_open_phone, "☎"),
        ContactMethod::WhatsApp => (s.label_whatsapp, s.toast_open_whatsapp, "devicon-whatsapp-plain"),
        ContactMethod::LinkedIn => (s.label_linkedin, s.toast_open_linkedin, "devicon-linkedin-plain"),
        ContactMethod::GitHub => (s.label_github, s.toast_open_github, "devicon-github-original"),
    }
}

#[component]
fn MethodIcon(icon: &'static str) -> impl IntoView {
    if icon.starts_with("devicon-") {
        view! { <i class=format!("{icon} text-xl") /> }.into_any()
    } else {
        view! { <span class="text-xl">{icon}</span> }.into_any()
    }
}

#[component]
fn ContactMethods() -> impl IntoView {
    let locale = use_locale();
    let toaster = use_toaster();

    move || {
        let s = strings(locale.get());
        ContactMethod::all()
            .into_iter()
            .map(|method| {
                let (label, toast, icon) = method_text(method, s);
                let external = method.is_external();
                view! {
                    <a
                        href=method.href()
                        target=external.then_some("_blank")
                        rel=external.then_some("noopener noreferrer")
                        class="flex items-center gap-4 p-4 rounded-lg bg-white shadow hover:shadow-md transition-shadow"
                        on:click=move |_| {
                            toaster.show(NoticeKind::Info, toast);
                        }
                    >
                        <MethodIcon icon />
                        <div class="flex flex-col">
                            <span class="text-xs uppercase tracking-wide text-gray-500">
                                {label}
                            </span>
                            <span class="font-medium">{method.value()}</span>
                        </div>
                    </a>
                }
            })
            .collect_view()
    }
}

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    let locale = use_locale();
    move || {
        errors.with(|errors| errors.get(field)).map(|err| {
            view! {
                <p class="mt-1 text-sm text-red-600" role="alert">
                    {err.message(field, locale.get())}
                </p>
            }
        })
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let locale = use_locale();
    let toaster = use_toaster();

    let form = RwSignal::new(ContactFormData::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let pipeline: StoredValue<Rc<SitePipeline>, LocalStorage> =
        StoredValue::new_local(Rc::new(ContactPipeline::new(
            EmailConfig::from_build_env(),
            PERSONAL_INFO.name,
            CONTACT_EMAIL,
            ServerRelay,
            SiteMailer,
            toaster,
        )));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let pipeline = pipeline.get_value();
        if !pipeline.is_idle() {
            return;
        }
        let data = form.get_untracked();
        let code = locale.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            match pipeline.submit(&data, code).await {
                Ok(result) => {
                    match &result {
                        SubmissionResult::ValidationFailure(found) => errors.set(found.clone()),
                        _ => errors.set(FieldErrors::default()),
                    }
                    form.update(|form| {
                        form.settle(&result);
                    });
                    submitting.set(false);
                }
                // the attempt that owns the flag clears it
                Err(SubmitError::InFlight) => {}
            }
        });
    };

    let input = move |field: Field| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            form.update(|form| form.set(field, value));
        }
    };
    let field_class = move |field: Field| {
        move || {
            let border = if errors.with(|e| e.contains(field)) {
                "border-red-500"
            } else {
                "border-gray-300"
            };
            format!("w-full px-4 py-3 rounded-lg border {border} focus:outline-none focus:ring-2 focus:ring-gray-900")
        }
    };

    view! {
        <section id="contact" class="w-full max-w-6xl px-4 py-20 scroll-mt-20">
            <div class="grid gap-12 md:grid-cols-2">
                <div class="flex flex-col gap-6">
                    <h2 class="text-4xl font-bold">
                        {move || strings(locale.get()).lets_talk} " "
                        <span class="text-gray-500">
                            {move || strings(locale.get()).talk_highlight}
                        </span> " " {move || strings(locale.get()).talk_for} " "
                        {move || strings(locale.get()).something_special}
                    </h2>
                    <p class="text-gray-600">{move || strings(locale.get()).contact_description}</p>
                    <p class="text-sm text-gray-500">{move || CONTACT_LOCATION.get(locale.get())}</p>
                    <div class="flex flex-col gap-3">
                        <ContactMethods />
                    </div>
                </div>
                <form class="flex flex-col gap-4 p-6 rounded-xl bg-gray-50 shadow" novalidate=true on:submit=on_submit>
                    <h3 class="text-2xl font-semibold">
                        {move || strings(locale.get()).contact_form_title}
                    </h3>
                    <p class="text-gray-600">
                        {move || strings(locale.get()).contact_form_description}
                    </p>
                    <div>
                        <input
                            type="email"
                            name=Field::Email.name()
                            class=field_class(Field::Email)
                            placeholder=move || strings(locale.get()).email_placeholder
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=input(Field::Email)
                        />
                        <FieldError errors field=Field::Email />
                    </div>
                    <div>
                        <input
                            type="text"
                            name=Field::Subject.name()
                            class=field_class(Field::Subject)
                            placeholder=move || strings(locale.get()).subject_placeholder
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:input=input(Field::Subject)
                        />
                        <FieldError errors field=Field::Subject />
                    </div>
                    <div>
                        <textarea
                            name=Field::Message.name()
                            rows="6"
                            class=field_class(Field::Message)
                            placeholder=move || strings(locale.get()).message_placeholder
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=input(Field::Message)
                        />
                        <FieldError errors field=Field::Message />
                    </div>
                    <button
                        type="submit"
                        class="px-6 py-3 rounded-lg bg-gray-900 text-white font-semibold hover:bg-gray-700 disabled:opacity-50 transition-colors"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            let s = strings(locale.get());
                            if submitting.get() { s.button_sending } else { s.button_send }
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_relay_rejects_invalid_form() {
        let data = ContactFormData::new("bad", "", "short");
        let err = relay_contact_email(data).await.unwrap_err();
        assert!(err.to_string().contains("invalid contact form"), "{err}");
    }

    #[tokio::test]
    async fn test_relay_refuses_without_configuration() {
        if EmailConfig::from_build_env().is_configured() {
            return;
        }
        let data = ContactFormData::new("a@b.co", "Hello", "0123456789");
        let err = relay_contact_email(data).await.unwrap_err();
        assert!(err.to_string().contains("not configured"), "{err}");
    }
}
