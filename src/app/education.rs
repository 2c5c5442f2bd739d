use leptos::prelude::*;

use crate::content;

use super::reveal::{reveal_class, stagger_delay, use_reveal};

#[component]
pub fn Education() -> impl IntoView {
    let (section_ref, visible) = use_reveal();

    view! {
        <section id="education" class="py-16 sm:py-20 px-2 sm:px-6 lg:px-8" node_ref=section_ref>
            <div class="container mx-auto px-0 sm:px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Education"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3 max-w-6xl mx-auto px-4">
                    {content::education()
                        .iter()
                        .enumerate()
                        .map(|(index, edu)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "group relative bg-card border border-border rounded-xl p-5 sm:p-7 w-[92%] max-w-md mx-auto hover:border-primary/50 transition-all duration-500 {}",
                                            reveal_class(visible()),
                                        )
                                    }
                                    style=stagger_delay(index)
                                >
                                    <div class="relative space-y-3 sm:space-y-4">
                                        <div class="flex items-center justify-between">
                                            <span class="text-[11px] sm:text-sm font-bold text-primary uppercase tracking-wider">
                                                {edu.title.clone()}
                                            </span>
                                            <i class="extra-graduation text-primary/60 group-hover:text-primary transition-colors" />
                                        </div>
                                        <div class="space-y-1 sm:space-y-3">
                                            <h3 class="text-base sm:text-xl font-semibold text-foreground">
                                                {edu.institution.clone()}
                                            </h3>
                                            <p class="text-xs sm:text-base text-muted-foreground">
                                                {edu.degree.clone()}
                                            </p>
                                            <p class="text-xs sm:text-base text-foreground/80">
                                                {edu.detail().map(str::to_owned)}
                                            </p>
                                        </div>
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
