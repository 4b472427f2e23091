use chrono::{DateTime, Utc};
use leptos::prelude::*;

use super::locale::use_locale;
use crate::{content::PERSONAL_INFO, strings::strings};

fn build_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let locale = use_locale();
    let built = build_date(env!("BUILD_TIME"));
    let year = built
        .as_deref()
        .and_then(|d| d.get(..4))
        .unwrap_or_default()
        .to_string();

    view! {
        <footer class="w-full border-t border-gray-200 py-8 text-center text-sm text-gray-500">
            <p>
                "© " {year} " " {PERSONAL_INFO.name} " · "
                {move || strings(locale.get()).footer_made_with}
            </p>
            {built
                .map(|date| {
                    view! {
                        <p class="mt-1 text-xs">
                            {move || strings(locale.get()).footer_built} " " {date.clone()}
                        </p>
                    }
                })}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_date_is_utc_day() {
        assert_eq!(
            build_date("2025-03-01T23:30:00-05:00").as_deref(),
            Some("2025-03-02")
        );
    }

    #[test]
    fn test_build_date_rejects_garbage() {
        assert_eq!(build_date("yesterday"), None);
    }
}
