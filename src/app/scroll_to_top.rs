use leptos::prelude::*;
use leptos_use::use_window_scroll;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();

    view! {
        {move || {
            (scroll_y() > 300.0)
                .then(|| {
                    view! {
                        <button
                            class="fixed bottom-6 right-6 z-40 p-3 bg-primary/90 hover:bg-primary text-background rounded-full shadow-lg transition-colors"
                            aria-label="Scroll to top"
                            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
                        >
                            <svg
                                viewBox="0 0 24 24"
                                class="w-5 h-5"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                            >
                                <path d="m18 15-6-6-6 6" />
                            </svg>
                        </button>
                    }
                })
        }}
    }
}
