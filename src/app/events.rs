use leptos::prelude::*;

use crate::content::{self, CertificateSource};
use crate::gallery::Gallery;

use super::certificates::{CertificateDialog, ViewCertificateButton};
use super::reveal::{reveal_class, stagger_delay, use_reveal};

#[component]
pub fn Events() -> impl IntoView {
    let (section_ref, visible) = use_reveal();
    let gallery = RwSignal::new(Gallery::new());

    view! {
        <section
            id="events"
            class="py-20 px-3 sm:px-6 lg:px-8 bg-secondary/30"
            node_ref=section_ref
        >
            <div class="container mx-auto px-2 sm:px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Events Attended"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class="grid md:grid-cols-2 gap-6 max-w-5xl mx-auto">
                    {content::events()
                        .iter()
                        .enumerate()
                        .map(|(index, event)| {
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
                                        <div class="flex-1">
                                            <h3 class="text-base sm:text-xl font-semibold mb-2">
                                                {event.title.clone()}
                                            </h3>
                                            <p class="text-xs sm:text-sm text-muted-foreground">
                                                {event.description.clone()}
                                            </p>
                                        </div>
                                        <div class="w-8 h-8 sm:w-12 sm:h-12 rounded-lg bg-accent/10 flex items-center justify-center">
                                            <i class="extra-award text-accent" />
                                        </div>
                                    </div>
                                    <div class="flex items-center justify-between gap-4">
                                        <span class="text-xs sm:text-sm text-muted-foreground">
                                            "Event Participation"
                                        </span>
                                        {event
                                            .has_gallery()
                                            .then(|| {
                                                view! {
                                                    <ViewCertificateButton
                                                        gallery
                                                        title=event.title.clone()
                                                        refs=event.certificate_refs()
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
