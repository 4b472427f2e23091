#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_use::{storage::use_local_storage, use_locales as use_preferred_languages};

#[cfg(feature = "hydrate")]
use crate::locale::{KeyValueStore, PREFERENCE_KEY};
use crate::locale::{LocaleCode, LocaleResolver};

/// Active language for every component, backed by a [`LocaleResolver`] once
/// the page is running in the browser.
#[derive(Clone, Copy)]
pub struct Locale {
    active: RwSignal<LocaleCode>,
    resolver: StoredValue<Option<LocaleResolver>, LocalStorage>,
}

impl Locale {
    pub fn get(&self) -> LocaleCode {
        self.active.get()
    }

    pub fn get_untracked(&self) -> LocaleCode {
        self.active.get_untracked()
    }

    pub fn set(&self, code: LocaleCode) {
        let mut handled = false;
        self.resolver.update_value(|resolver| {
            if let Some(resolver) = resolver {
                // observers push the new value into `active`
                resolver.set_active(code);
                handled = true;
            }
        });
        if !handled {
            self.active.set(code);
        }
    }

    pub fn toggle(&self) {
        self.set(self.get_untracked().other());
    }
}

/// One `localStorage` entry held through leptos-use storage signals. An empty
/// value reads as absent.
#[cfg(feature = "hydrate")]
struct StoredPreference {
    key: &'static str,
    value: Signal<String>,
    set_value: WriteSignal<String>,
    clear: Box<dyn Fn()>,
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for StoredPreference {
    fn get(&self, key: &str) -> Option<String> {
        if key != self.key {
            return None;
        }
        Some(self.value.get_untracked()).filter(|v| !v.is_empty())
    }

    fn set(&self, key: &str, value: &str) {
        if key == self.key {
            self.set_value.set(value.to_string());
        } else {
            log::warn!("no storage bound for {key}");
        }
    }

    fn remove(&self, key: &str) {
        if key == self.key {
            (self.clear)();
        }
    }
}

/// Server rendering always starts in `en`; the stored preference and the
/// browser hint are applied after hydration.
pub fn provide_locale() -> Locale {
    let locale = Locale {
        active: RwSignal::new(LocaleCode::default()),
        resolver: StoredValue::new_local(None),
    };
    provide_context(locale);

    #[cfg(feature = "hydrate")]
    {
        let (value, set_value, clear) =
            use_local_storage::<String, FromToStringCodec>(PREFERENCE_KEY);
        let languages = use_preferred_languages();

        Effect::watch(
            || (),
            move |_, _, _| {
                let store = StoredPreference {
                    key: PREFERENCE_KEY,
                    value,
                    set_value,
                    clear: Box::new(clear.clone()),
                };
                let hint = languages.get_untracked().into_iter().next();
                let mut resolver = LocaleResolver::new(Box::new(store), hint.as_deref());
                let active = locale.active;
                resolver.subscribe(move |code| active.set(code));
                log::debug!("active locale: {}", resolver.active());
                active.set(resolver.active());
                locale.resolver.set_value(Some(resolver));
            },
            true,
        );
    }

    locale
}

pub fn use_locale() -> Locale {
    expect_context::<Locale>()
}
