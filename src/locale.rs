use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};

/// Storage key holding the visitor's language choice.
pub const PREFERENCE_KEY: &str = "preferredLanguage";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    #[default]
    En,
    Es,
}

impl LocaleCode {
    pub fn all() -> [LocaleCode; 2] {
        [Self::En, Self::Es]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Reduces a browser language hint (`es-PA`, `en-US`, ...) to a supported code.
    pub fn from_hint(hint: &str) -> Self {
        if hint.to_lowercase().starts_with("es") {
            Self::Es
        } else {
            Self::En
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for LocaleCode {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Plain-text key-value port over whatever persistent storage the host offers.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same map, so a clone outlives a resolver
/// the way browser storage outlives a page.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

type Observer = Box<dyn Fn(LocaleCode)>;

/// Owns the active locale for the whole UI and mediates every change to it.
pub struct LocaleResolver {
    store: Box<dyn KeyValueStore>,
    active: LocaleCode,
    observers: Vec<Observer>,
}

impl LocaleResolver {
    /// Resolves the startup locale: stored preference, then the browser hint,
    /// then `en`. A missing or unreadable preference is replaced by the
    /// detected value.
    pub fn new(store: Box<dyn KeyValueStore>, hint: Option<&str>) -> Self {
        let stored = store
            .get(PREFERENCE_KEY)
            .and_then(|raw| match raw.parse::<LocaleCode>() {
                Ok(code) => Some(code),
                Err(e) => {
                    log::debug!("ignoring stored preference: {e}");
                    None
                }
            });
        let active = match stored {
            Some(code) => code,
            None => {
                let detected = hint.map(LocaleCode::from_hint).unwrap_or_default();
                store.set(PREFERENCE_KEY, detected.as_str());
                detected
            }
        };
        Self {
            store,
            active,
            observers: Vec::new(),
        }
    }

    pub fn active(&self) -> LocaleCode {
        self.active
    }

    /// Always writes and notifies, even when `code` is already active.
    pub fn set_active(&mut self, code: LocaleCode) {
        self.active = code;
        self.store.set(PREFERENCE_KEY, code.as_str());
        for observer in &self.observers {
            observer(code);
        }
    }

    pub fn toggle(&mut self) -> LocaleCode {
        let next = self.active.other();
        self.set_active(next);
        next
    }

    pub fn subscribe(&mut self, observer: impl Fn(LocaleCode) + 'static) {
        self.observers.push(Box::new(observer));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_hint_reduction() {
        for hint in ["es", "es-ES", "es-419", "ES-mx", "Es"] {
            assert_eq!(LocaleCode::from_hint(hint), LocaleCode::Es, "{hint}");
        }
        for hint in ["en", "en-US", "fr-FR", "", "pt-BR", "e", " es"] {
            assert_eq!(LocaleCode::from_hint(hint), LocaleCode::En, "{hint}");
        }
    }

    #[test]
    fn test_startup_priority() {
        // stored preference wins over the hint
        let store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "en");
        let resolver = LocaleResolver::new(Box::new(store.clone()), Some("es-ES"));
        assert_eq!(resolver.active(), LocaleCode::En);

        // no preference: hint decides and is persisted
        let store = MemoryStore::new();
        let resolver = LocaleResolver::new(Box::new(store.clone()), Some("es-AR"));
        assert_eq!(resolver.active(), LocaleCode::Es);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("es"));

        // nothing at all
        let store = MemoryStore::new();
        let resolver = LocaleResolver::new(Box::new(store.clone()), None);
        assert_eq!(resolver.active(), LocaleCode::En);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_corrupt_preference_is_replaced() {
        let store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "klingon");
        let resolver = LocaleResolver::new(Box::new(store.clone()), Some("es"));
        assert_eq!(resolver.active(), LocaleCode::Es);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn test_set_survives_reload() {
        let store = MemoryStore::new();
        let mut resolver = LocaleResolver::new(Box::new(store.clone()), Some("en-US"));
        resolver.set_active(LocaleCode::Es);
        assert_eq!(resolver.active(), LocaleCode::Es);
        drop(resolver);

        let reloaded = LocaleResolver::new(Box::new(store.clone()), Some("en-US"));
        assert_eq!(reloaded.active(), LocaleCode::Es);
    }

    #[test]
    fn test_observers_notified_on_every_set() {
        let calls = Rc::new(Cell::new(0));
        let last = Rc::new(Cell::new(LocaleCode::En));
        let mut resolver = LocaleResolver::new(Box::new(MemoryStore::new()), None);
        for _ in 0..2 {
            let calls = calls.clone();
            let last = last.clone();
            resolver.subscribe(move |code| {
                calls.set(calls.get() + 1);
                last.set(code);
            });
        }

        resolver.set_active(LocaleCode::Es);
        assert_eq!(calls.get(), 2);
        assert_eq!(last.get(), LocaleCode::Es);

        // same value is not short-circuited
        resolver.set_active(LocaleCode::Es);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_toggle() {
        let store = MemoryStore::new();
        let mut resolver = LocaleResolver::new(Box::new(store.clone()), None);
        assert_eq!(resolver.toggle(), LocaleCode::Es);
        assert_eq!(resolver.toggle(), LocaleCode::En);
        assert_eq!(store.get(PREFERENCE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_memory_store_remove() {
        let store = MemoryStore::new();
        store.set("k", "v");
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("es".parse::<LocaleCode>(), Ok(LocaleCode::Es));
        assert!("ES".parse::<LocaleCode>().is_err());
        assert_eq!(LocaleCode::Es.to_string(), "es");
    }
}
