use leptos::prelude::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};

use super::{locale::use_locale, toast::use_toaster};
use crate::{
    content::{resume_asset, PERSONAL_INFO},
    locale::LocaleCode,
    notify::{NoticeKind, Notifier},
    strings::{strings, UiStrings},
    viewport::Breakpoint,
};

fn nav_links(s: &UiStrings) -> [(&'static str, &'static str); 5] {
    [
        ("#about", s.nav_about),
        ("#skills", s.nav_skills),
        ("#experience", s.nav_experience),
        ("#about-me", s.nav_about_me),
        ("#contact", s.nav_contact),
    ]
}

#[component]
pub fn Header() -> impl IntoView {
    let locale = use_locale();
    let toaster = use_toaster();
    let (menu_open, set_menu_open) = signal(false);
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let breakpoint = Memo::new(move |_| Breakpoint::from_width(width.get()));

    Effect::watch(
        move || breakpoint.get(),
        move |bp, _, _| {
            if bp.has_desktop_nav() {
                set_menu_open.set(false);
            }
        },
        false,
    );

    let resume_link = move || {
        let code = locale.get();
        let asset = resume_asset(code);
        let label = strings(code).nav_resume;
        view! {
            <a
                href=asset.href
                download=asset.file_name
                class="px-4 py-2 rounded-lg bg-gray-900 text-white hover:bg-gray-700 transition-colors"
                on:click=move |_| {
                    let code = locale.get_untracked();
                    let file = resume_asset(code).file_name;
                    log::info!("resume download: {file}");
                    toaster.show(NoticeKind::Info, &strings(code).resume_download(file));
                    set_menu_open.set(false);
                }
            >
                {label}
            </a>
        }
    };

    let links = move || {
        nav_links(strings(locale.get()))
            .into_iter()
            .map(|(href, label)| {
                view! {
                    <a
                        href=href
                        class="text-sm font-medium text-gray-600 hover:text-gray-900 transition-colors"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-1 left-0 right-0 z-50 bg-white/95 backdrop-blur-md shadow">
            <div class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <a href="#about" class="text-xl font-bold">
                    {PERSONAL_INFO.name}
                </a>
                {move || {
                    if breakpoint.get().has_desktop_nav() {
                        view! {
                            <nav class="flex items-center gap-6">
                                {links}
                                {resume_link}
                                <LanguageSwitcher />
                            </nav>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="flex items-center gap-3">
                                <LanguageSwitcher />
                                <button
                                    class="p-2 rounded-md border border-gray-300"
                                    aria-label=move || strings(locale.get()).menu_toggle
                                    aria-expanded=move || menu_open.get().to_string()
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    "☰"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <Show when=move || menu_open.get() && !breakpoint.get().has_desktop_nav()>
                <nav class="flex flex-col gap-4 px-4 pb-4">{links} {resume_link}</nav>
            </Show>
        </header>
    }
}

#[component]
fn Flag(code: LocaleCode) -> impl IntoView {
    match code {
        LocaleCode::En => view! {
            <svg width="24" height="16" viewBox="0 0 24 16" class="rounded-sm" aria-hidden="true">
                <rect width="24" height="16" fill="#B22234" />
                <rect width="24" height="1.23" y="1.23" fill="#FFFFFF" />
                <rect width="24" height="1.23" y="3.69" fill="#FFFFFF" />
                <rect width="24" height="1.23" y="6.15" fill="#FFFFFF" />
                <rect width="24" height="1.23" y="8.62" fill="#FFFFFF" />
                <rect width="24" height="1.23" y="11.08" fill="#FFFFFF" />
                <rect width="24" height="1.23" y="13.54" fill="#FFFFFF" />
                <rect width="9.6" height="8.62" fill="#3C3B6E" />
            </svg>
        }
        .into_any(),
        LocaleCode::Es => view! {
            <svg width="24" height="16" viewBox="0 0 24 16" class="rounded-sm" aria-hidden="true">
                <rect width="24" height="4" fill="#AA151B" />
                <rect width="24" height="8" y="4" fill="#F1BF00" />
                <rect width="24" height="4" y="12" fill="#AA151B" />
            </svg>
        }
        .into_any(),
    }
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let locale = use_locale();
    let tooltip = move || {
        let code = locale.get();
        strings(code).switch_language_tooltip(code)
    };

    view! {
        <button
            class="flex items-center gap-2 px-3 py-2 rounded-lg border border-gray-300 bg-white hover:bg-gray-100 shadow-sm transition-all"
            aria-label=tooltip
            title=tooltip
            on:click=move |_| locale.toggle()
        >
            {move || view! { <Flag code=locale.get() /> }}
            <span class="text-sm font-semibold uppercase tracking-wider">
                {move || locale.get().as_str()}
            </span>
        </button>
    }
}
