use leptos::prelude::*;

use crate::content;

use super::reveal::{reveal_class, stagger_delay, use_reveal};

#[component]
pub fn Projects() -> impl IntoView {
    let (section_ref, visible) = use_reveal();

    view! {
        <section
            id="projects"
            class="py-20 px-2 sm:px-6 lg:px-8 bg-secondary/30"
            node_ref=section_ref
        >
            <div class="container mx-auto px-1 sm:px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Projects"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {content::projects()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "flex flex-col bg-card border border-border rounded-xl p-6 transition-all duration-700 hover:shadow-lg {}",
                                            reveal_class(visible()),
                                        )
                                    }
                                    style=stagger_delay(index)
                                >
                                    <h3 class="text-base sm:text-xl font-semibold">
                                        {project.title.clone()}
                                    </h3>
                                    <p class="text-xs sm:text-sm text-muted-foreground mt-1 sm:mt-2 mb-4">
                                        {project.description.clone()}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|technology| {
                                                view! {
                                                    <span class="text-[10px] sm:text-xs bg-primary/10 text-primary px-2 py-1 rounded">
                                                        {technology.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex items-center gap-4 mt-auto">
                                        {project
                                            .github
                                            .clone()
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="flex items-center gap-x-1.5 text-sm text-foreground/80 hover:text-primary"
                                                    >
                                                        <i class="devicon-github-plain" />
                                                        "Code"
                                                    </a>
                                                }
                                            })}
                                        {project
                                            .demo
                                            .clone()
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer nofollow"
                                                        class="flex items-center gap-x-1.5 text-sm text-foreground/80 hover:text-primary"
                                                    >
                                                        <i class="extra-link" />
                                                        "Demo"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
