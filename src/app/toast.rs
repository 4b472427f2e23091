use std::time::Duration;

use leptos::prelude::*;

use crate::notify::{NoticeId, NoticeKind, Notifier, SETTLED_AUTO_CLOSE};

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: NoticeId,
    kind: NoticeKind,
    message: String,
    closes_after: Option<Duration>,
}

/// Bottom-right toast stack implementing [`Notifier`].
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: NoticeId) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn put(&self, id: NoticeId, kind: NoticeKind, message: &str, closes_after: Option<Duration>) {
        self.toasts.update(|toasts| {
            let toast = Toast {
                id,
                kind,
                message: message.to_string(),
                closes_after,
            };
            match toasts.iter_mut().find(|t| t.id == id) {
                Some(existing) => *existing = toast,
                // already dismissed by the visitor
                None => toasts.push(toast),
            }
        });
        if let Some(after) = closes_after {
            self.schedule_close(id, after);
        }
    }

    // Timers only exist in the browser.
    fn schedule_close(&self, id: NoticeId, after: Duration) {
        #[cfg(feature = "hydrate")]
        {
            let toaster = *self;
            set_timeout(move || toaster.dismiss(id), after);
        }
        #[cfg(not(feature = "hydrate"))]
        log::trace!("notice {id:?} would close after {after:?}");
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn show(&self, kind: NoticeKind, message: &str) -> NoticeId {
        let id = NoticeId(self.next_id.get_value());
        self.next_id.set_value(id.0 + 1);
        self.put(id, kind, message, kind.auto_close());
        id
    }

    fn update(&self, id: NoticeId, message: &str, kind: NoticeKind) {
        self.put(id, kind, message, Some(SETTLED_AUTO_CLOSE));
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Loading => "border-gray-400",
        NoticeKind::Success => "border-green-500",
        NoticeKind::Info => "border-blue-500",
        NoticeKind::Warning => "border-yellow-500",
        NoticeKind::Error => "border-red-500",
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80" aria-live="polite">
            {move || {
                toaster
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                role="status"
                                class=format!(
                                    "flex items-start gap-3 p-4 bg-white rounded-lg shadow-lg border-l-4 text-sm {}",
                                    kind_class(toast.kind),
                                )
                            >
                                {(toast.kind == NoticeKind::Loading)
                                    .then(|| {
                                        view! {
                                            <span class="mt-1 w-3 h-3 rounded-full border-2 border-gray-400 border-t-transparent animate-spin" />
                                        }
                                    })}
                                <p class="flex-1">{toast.message}</p>
                                <button
                                    class="text-gray-400 hover:text-gray-700"
                                    aria-label="Dismiss"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(toaster: &Toaster) -> Vec<(NoticeId, NoticeKind, String, Option<Duration>)> {
        toaster
            .toasts
            .get_untracked()
            .into_iter()
            .map(|t| (t.id, t.kind, t.message, t.closes_after))
            .collect()
    }

    #[test]
    fn test_show_uses_kind_duration() {
        let owner = Owner::new();
        owner.with(|| {
            let toaster = Toaster::new();
            let loading = toaster.show(NoticeKind::Loading, "Sending...");
            let info = toaster.show(NoticeKind::Info, "Opening LinkedIn...");
            let error = toaster.show(NoticeKind::Error, "Network error");
            assert_ne!(loading, info);
            assert_eq!(
                snapshot(&toaster),
                vec![
                    (loading, NoticeKind::Loading, "Sending...".to_string(), None),
                    (info, NoticeKind::Info, "Opening LinkedIn...".to_string(), Some(Duration::from_millis(3000))),
                    (error, NoticeKind::Error, "Network error".to_string(), Some(Duration::from_millis(5000))),
                ]
            );
        });
    }

    #[test]
    fn test_update_settles_in_place() {
        let owner = Owner::new();
        owner.with(|| {
            let toaster = Toaster::new();
            let id = toaster.show(NoticeKind::Loading, "Sending...");
            toaster.update(id, "Failed to send", NoticeKind::Error);
            assert_eq!(
                snapshot(&toaster),
                vec![(id, NoticeKind::Error, "Failed to send".to_string(), Some(SETTLED_AUTO_CLOSE))]
            );
        });
    }

    #[test]
    fn test_update_re_adds_dismissed_notice() {
        let owner = Owner::new();
        owner.with(|| {
            let toaster = Toaster::new();
            let id = toaster.show(NoticeKind::Loading, "Sending...");
            toaster.dismiss(id);
            assert!(snapshot(&toaster).is_empty());

            toaster.update(id, "Email sent", NoticeKind::Success);
            assert_eq!(
                snapshot(&toaster),
                vec![(id, NoticeKind::Success, "Email sent".to_string(), Some(SETTLED_AUTO_CLOSE))]
            );
        });
    }
}
