mod certificates;
mod contact;
mod courses;
mod education;
mod events;
mod experience;
mod hero;
mod nav;
mod projects;
mod reveal;
mod scroll_to_top;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use contact::Contact;
use courses::Courses;
use education::Education;
use events::Events;
use experience::Experience;
use hero::Hero;
use nav::Nav;
use projects::Projects;
use scroll_to_top::ScrollToTop;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Saudamini Roy - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrolling page of sections.
#[component]
fn HomePage() -> impl IntoView {
    let built = &env!("BUILD_TIME")[..10];
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background">
            <Nav />
            <main>
                <Hero />
                <Education />
                <Experience />
                <Skills />
                <Projects />
                <Events />
                <Courses />
                <Contact />
            </main>
            <footer class="py-6 text-center text-xs text-muted-foreground">
                "© 2026 Saudamini Roy · built " {built}
            </footer>
            <ScrollToTop />
        </div>
    }
}
