//! The certificate dialog shared by every section that ships certificates.
//! Sections own a `RwSignal<Gallery>` and wire their cards up with
//! [`ViewCertificateButton`]; the dialog renders whatever that gallery is
//! showing.

use leptos::{either::Either, prelude::*};

use crate::assets::{self, AssetBinding};
use crate::gallery::{Gallery, GalleryView};

/// Card button that opens the gallery for one record.
#[component]
pub fn ViewCertificateButton(
    gallery: RwSignal<Gallery>,
    title: String,
    refs: Vec<String>,
) -> impl IntoView {
    view! {
        <button
            class="text-[10px] sm:text-xs bg-primary/10 text-primary px-2 sm:px-3 py-1 rounded-full font-medium hover:bg-primary/20 transition-colors cursor-pointer"
            on:click=move |_| gallery.update(|g| g.open(title.clone(), refs.clone()))
        >
            "View Certificate"
        </button>
    }
}

/// Modal gallery over the current [`Gallery`] state.  Renders nothing while
/// the gallery is closed.
#[component]
pub fn CertificateDialog(gallery: RwSignal<Gallery>) -> impl IntoView {
    view! { {move || gallery.get().view().map(|current| dialog_view(gallery, current))} }
}

fn dialog_view(gallery: RwSignal<Gallery>, current: GalleryView) -> impl IntoView {
    let position_label =
        (current.total > 1).then(|| format!("{} of {}", current.position, current.total));

    let image = match (current.asset.as_deref(), current.failed) {
        (Some(reference), false) => match assets::resolve(reference) {
            AssetBinding::Resolved(url) => {
                let alt = format!("Certificate {} for {}", current.position, current.owner);
                let owner = current.owner.clone();
                let index = current.position - 1;
                Either::Left(view! {
                    <img
                        src=url
                        alt=alt
                        class="max-w-full max-h-[70vh] object-contain rounded-lg shadow-lg"
                        // load errors arrive async; the gallery drops the
                        // report unless this image is still the one showing
                        on:error=move |_| gallery.update(|g| g.mark_failed(&owner, index))
                    />
                })
            }
            AssetBinding::Unresolved => Either::Right(placeholder(current.owner.clone())),
        },
        _ => Either::Right(placeholder(current.owner.clone())),
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
            on:click=move |_| gallery.update(|g| g.close())
        >
            <div
                class="relative w-full max-w-4xl max-h-[90vh] overflow-y-auto bg-card border border-border rounded-xl shadow-2xl p-6"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold text-foreground">
                        "Certificate - " {current.owner.clone()}
                    </h3>
                    <div class="flex items-center gap-4">
                        {position_label
                            .map(|label| {
                                view! { <span class="text-sm text-muted-foreground">{label}</span> }
                            })}
                        <button
                            class="p-1 text-muted-foreground hover:text-foreground transition-colors"
                            aria-label="Close"
                            on:click=move |_| gallery.update(|g| g.close())
                        >
                            <svg
                                viewBox="0 0 24 24"
                                class="w-5 h-5"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                            >
                                <path d="M18 6 6 18M6 6l12 12" />
                            </svg>
                        </button>
                    </div>
                </div>
                <div class="relative flex items-center justify-center p-4">
                    {current
                        .has_previous
                        .then(|| {
                            view! {
                                <button
                                    class="absolute left-4 z-10 p-2 bg-black/50 hover:bg-black/70 rounded-full text-white transition-colors"
                                    aria-label="Previous certificate"
                                    on:click=move |_| gallery.update(|g| g.previous())
                                >
                                    <svg
                                        viewBox="0 0 24 24"
                                        class="w-6 h-6"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="2"
                                    >
                                        <path d="m15 18-6-6 6-6" />
                                    </svg>
                                </button>
                            }
                        })}
                    {image}
                    {current
                        .has_next
                        .then(|| {
                            view! {
                                <button
                                    class="absolute right-4 z-10 p-2 bg-black/50 hover:bg-black/70 rounded-full text-white transition-colors"
                                    aria-label="Next certificate"
                                    on:click=move |_| gallery.update(|g| g.next())
                                >
                                    <svg
                                        viewBox="0 0 24 24"
                                        class="w-6 h-6"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="2"
                                    >
                                        <path d="m9 18 6-6-6-6" />
                                    </svg>
                                </button>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

fn placeholder(owner: String) -> impl IntoView {
    view! {
        <div class="text-center space-y-4 py-8">
            <svg
                viewBox="0 0 24 24"
                class="w-16 h-16 mx-auto text-primary"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
            >
                <circle cx="12" cy="8" r="6" />
                <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
            </svg>
            <h3 class="text-xl font-semibold">"Certificate of Participation"</h3>
            <p class="text-muted-foreground">"For " {owner}</p>
            <p class="text-sm text-muted-foreground mt-4">
                "Certificate image could not be loaded."
            </p>
        </div>
    }
}
