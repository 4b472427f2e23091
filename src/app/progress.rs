use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::viewport::scroll_progress;

fn page_height() -> f64 {
    if cfg!(feature = "hydrate") {
        document()
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default()
    } else {
        0.0
    }
}

#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let progress = Memo::new(move |_| scroll_progress(scroll_y.get(), page_height(), height.get()));

    view! {
        <div class="fixed top-0 left-0 right-0 h-1 z-[60] bg-transparent">
            <div
                class="h-full bg-gray-900 transition-[width] duration-100"
                style:width=move || format!("{:.2}%", progress.get() * 100.0)
            />
        </div>
    }
}
