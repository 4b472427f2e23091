mod contact;
mod footer;
mod header;
mod homepage;
mod locale;
mod progress;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use header::Header;
use homepage::HomePage;
use progress::ScrollProgressBar;
use toast::ToastStack;

pub use locale::{provide_locale, Locale};
pub use toast::Toaster;

use crate::content::PERSONAL_INFO;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let locale = provide_locale();
    provide_context(Toaster::new());

    view! {
        <Html {..} lang=move || locale.get().as_str() />
        <Title formatter=|title| format!("{} - {title}", PERSONAL_INFO.name) />

        <Router>
            <ScrollProgressBar />
            <Header />
            <main class="flex flex-col items-center w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <ToastStack />
        </Router>
    }
}
