use leptos::prelude::*;
use leptos_meta::Title;

use super::{contact::ContactSection, locale::use_locale};
use crate::{
    content::{skills_in, SkillCategory, SocialKind, EXPERIENCE, PERSONAL_INFO, SOCIAL_LINKS, STATS},
    strings::strings,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <Title text=move || PERSONAL_INFO.title.get(locale.get()) />
        <Hero />
        <AboutMe />
        <Skills />
        <Experience />
        <ContactSection />
    }
}

fn social_icon(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "devicon-github-original",
        SocialKind::LinkedIn => "devicon-linkedin-plain",
    }
}

#[component]
fn Hero() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="about" class="w-full max-w-6xl px-4 pt-32 pb-20 scroll-mt-20">
            <p class="text-lg text-gray-500">{move || strings(locale.get()).hero_greeting}</p>
            <h1 class="text-5xl md:text-6xl font-bold my-2">{PERSONAL_INFO.name}</h1>
            <h2 class="text-2xl text-gray-600">{move || PERSONAL_INFO.title.get(locale.get())}</h2>
            <p class="mt-2 text-sm text-gray-500">
                {move || {
                    let code = locale.get();
                    format!(
                        "{} {}",
                        strings(code).hero_location,
                        PERSONAL_INFO.location.get(code),
                    )
                }}
            </p>
            <div class="mt-6 max-w-3xl space-y-4 text-gray-700 leading-relaxed">
                {move || {
                    PERSONAL_INFO
                        .bio
                        .get(locale.get())
                        .split("\n\n")
                        .map(|para| view! { <p>{para}</p> })
                        .collect_view()
                }}
            </div>
            <div class="mt-6 flex gap-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-3xl text-gray-700 hover:text-gray-900"
                            >
                                <i class=social_icon(link.kind) />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <dl class="mt-10 grid grid-cols-2 md:grid-cols-4 gap-6">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="flex flex-col">
                                <dt class="order-2 text-sm text-gray-500">
                                    {move || stat.label.get(locale.get())}
                                </dt>
                                <dd class="text-3xl font-bold">{stat.value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

#[component]
fn AboutMe() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="about-me" class="w-full max-w-6xl px-4 py-20 scroll-mt-20">
            <h2 class="text-3xl font-bold mb-6">
                {move || strings(locale.get()).section_about_me}
            </h2>
            <p class="max-w-3xl text-gray-700 leading-relaxed">
                {move || PERSONAL_INFO.about_me.get(locale.get())}
            </p>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="skills" class="w-full max-w-6xl px-4 py-20 scroll-mt-20">
            <h2 class="text-3xl font-bold">{move || strings(locale.get()).section_skills}</h2>
            <p class="mt-2 mb-8 text-gray-600">
                {move || strings(locale.get()).skills_description}
            </p>
            <div class="grid gap-8 md:grid-cols-2">
                {SkillCategory::all()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div>
                                <h3 class="text-xl font-semibold mb-4">{category.label()}</h3>
                                <ul class="flex flex-wrap gap-3">
                                    {skills_in(category)
                                        .map(|skill| {
                                            view! {
                                                <li class="flex items-center gap-2 px-3 py-2 rounded-lg border border-gray-200 bg-white">
                                                    <i class=format!("{} text-xl", skill.icon) />
                                                    <span class="text-sm">{skill.name}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section id="experience" class="w-full max-w-6xl px-4 py-20 scroll-mt-20">
            <h2 class="text-3xl font-bold mb-8">
                {move || strings(locale.get()).section_experience}
            </h2>
            <ol class="flex flex-col gap-8">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <li class="p-6 rounded-xl bg-white shadow">
                                <div class="flex items-center gap-4">
                                    <img src=job.logo alt=job.company class="w-12 h-12 object-contain" />
                                    <div class="flex-1">
                                        <h3 class="text-xl font-semibold">
                                            {move || job.position.get(locale.get())}
                                        </h3>
                                        <p class="text-gray-600">{job.company}</p>
                                    </div>
                                    <span class="text-sm text-gray-500">
                                        {move || job.period.get(locale.get())}
                                    </span>
                                </div>
                                <ul class="mt-4 list-disc pl-6 space-y-1 text-gray-700">
                                    {move || {
                                        job.bullets(locale.get())
                                            .into_iter()
                                            .map(|line| view! { <li>{line}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                                <a
                                    href=job.website
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block mt-4 text-sm font-medium underline"
                                >
                                    {move || strings(locale.get()).visit_website}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
