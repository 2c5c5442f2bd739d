use leptos::prelude::*;

use crate::content::{self, CertificateSource};
use crate::gallery::Gallery;

use super::certificates::{CertificateDialog, ViewCertificateButton};
use super::reveal::{reveal_class, stagger_delay, use_reveal};

fn icon_class(kind: &str) -> &'static str {
    if kind == "hackathon" {
        "extra-trophy"
    } else {
        "extra-award"
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let (section_ref, visible) = use_reveal();
    let gallery = RwSignal::new(Gallery::new());

    view! {
        <section
            id="experience"
            class="py-16 sm:py-20 px-2 sm:px-6 lg:px-8 bg-secondary/30"
            node_ref=section_ref
        >
            <div class="container mx-auto px-0 sm:px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Experience"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto px-4">
                    {content::experience()
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            view! {
                                <div
                                    class=move || {
                                        format!(
                                            "bg-card border border-border rounded-xl p-6 transition-all duration-700 hover:shadow-lg {}",
                                            reveal_class(visible()),
                                        )
                                    }
                                    style=stagger_delay(index)
                                >
                                    <div class="flex items-start justify-between mb-4">
                                        <h3 class="flex-1 text-base sm:text-xl font-semibold mb-1 sm:mb-2">
                                            {exp.title.clone()}
                                        </h3>
                                        <div class="w-8 h-8 sm:w-12 sm:h-12 rounded-lg bg-primary/10 flex items-center justify-center">
                                            <i class=format!("{} text-primary", icon_class(&exp.kind)) />
                                        </div>
                                    </div>
                                    <p class="text-xs sm:text-sm text-muted-foreground mb-2 sm:mb-4">
                                        {exp.description.clone()}
                                    </p>
                                    <div class="flex items-center justify-between gap-2 sm:gap-4">
                                        <span class="text-xs sm:text-sm text-muted-foreground capitalize">
                                            {exp.kind.clone()}
                                        </span>
                                        {exp
                                            .has_gallery()
                                            .then(|| {
                                                view! {
                                                    <ViewCertificateButton
                                                        gallery
                                                        title=exp.title.clone()
                                                        refs=exp.certificate_refs()
                                                    />
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <CertificateDialog gallery />
        </section>
    }
}
