use leptos::{either::Either, prelude::*};

use crate::content::{self, CertificateSource};
use crate::gallery::Gallery;

use super::certificates::{CertificateDialog, ViewCertificateButton};
use super::reveal::{reveal_class, stagger_delay, use_reveal};

#[component]
pub fn Courses() -> impl IntoView {
    let (section_ref, visible) = use_reveal();
    let gallery = RwSignal::new(Gallery::new());

    view! {
        <section id="courses" class="py-20 px-4 sm:px-6 lg:px-8" node_ref=section_ref>
            <div class="container mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Courses"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-12">
                        <div class="flex items-center justify-center space-x-4 mb-8">
                            <div class="w-14 h-14 rounded-xl bg-accent/10 flex items-center justify-center">
                                <i class="extra-book text-accent text-2xl" />
                            </div>
                            <h3 class="text-2xl font-bold text-foreground">"Online Learning"</h3>
                        </div>
                    </div>
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {content::courses()
                            .iter()
                            .enumerate()
                            .map(|(index, course)| {
                                let action = if course.has_gallery() {
                                    Either::Left(
                                        view! {
                                            <ViewCertificateButton
                                                gallery
                                                title=course.title.clone()
                                                refs=course.certificate_refs()
                                            />
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <div class="flex items-center space-x-1 text-xs text-accent bg-accent/10 px-2 py-1 rounded">
                                                <i class="extra-clock" />
                                                <span>"In Progress"</span>
                                            </div>
                                        },
                                    )
                                };
                                view! {
                                    <div
                                        class=move || {
                                            format!(
                                                "p-6 bg-card border border-border rounded-xl hover:shadow-lg transition-all duration-700 {}",
                                                reveal_class(visible()),
                                            )
                                        }
                                        style=stagger_delay(index)
                                    >
                                        <div class="flex items-start justify-between mb-3">
                                            <h4 class="text-lg font-semibold text-foreground">
                                                {course.title.clone()}
                                            </h4>
                                        </div>
                                        <p class="text-sm text-muted-foreground mb-4">
                                            {course.instructor.clone()}
                                        </p>
                                        <div class="flex items-center justify-center">{action}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="text-center mt-12">
                    <p class="text-xl text-foreground/80 italic">"That's all about me !!"</p>
                </div>
            </div>
            <CertificateDialog gallery />
        </section>
    }
}
