use leptos::prelude::*;

use super::reveal::{reveal_class, use_reveal};

#[component]
pub fn Contact() -> impl IntoView {
    let (section_ref, visible) = use_reveal();

    view! {
        <section id="contact" class="py-20 px-4 sm:px-6 lg:px-8" node_ref=section_ref>
            <div class="container mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Contact"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class=move || {
                    format!(
                        "max-w-2xl mx-auto text-center transition-all duration-700 {}",
                        reveal_class(visible()),
                    )
                }>
                    <div class="bg-card border border-border rounded-xl p-8">
                        <p class="text-lg mb-6 text-foreground/80">
                            "Whether you want to talk about a project, an event, or just say hi, my inbox is open."
                        </p>
                        <div class="flex flex-col items-start gap-y-3 max-w-xs mx-auto mb-8">
                            <div class="flex items-center gap-x-1.5">
                                <i class="extra-email text-primary" />
                                <a href="mailto:saudaminiroy.cst@gmail.com" target="_blank" rel="noreferrer">
                                    "saudaminiroy.cst@gmail.com"
                                </a>
                            </div>
                            <div class="flex items-center gap-x-1.5">
                                <i class="extra-location text-primary" />
                                <div>"Kolkata, India"</div>
                            </div>
                        </div>
                        <div class="flex justify-center gap-4">
                            <a
                                href="https://github.com/saudamini-roy"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-2xl text-foreground/80 hover:text-primary"
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain" />
                            </a>
                            <a
                                href="https://linkedin.com/in/saudamini-roy"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-2xl text-foreground/80 hover:text-primary"
                                aria-label="LinkedIn Profile"
                            >
                                <i class="devicon-linkedin-plain" />
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
