use leptos::prelude::*;
use leptos_use::use_window_scroll;

const LINKS: [(&str, &str); 8] = [
    ("#hero", "Home"),
    ("#education", "Education"),
    ("#experience", "Experience"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#events", "Events"),
    ("#courses", "Courses"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let nav_class = move || {
        if scroll_y() > 50.0 {
            "fixed top-0 inset-x-0 z-40 bg-background/90 backdrop-blur border-b border-border shadow transition-colors"
        } else {
            "fixed top-0 inset-x-0 z-40 bg-transparent transition-colors"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#hero" class="text-lg font-bold text-primary">
                        "Saudamini Roy"
                    </a>
                    <div class="hidden md:flex items-center gap-6">
                        {LINKS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-sm text-foreground/80 hover:text-primary transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden p-2 text-foreground"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg
                            viewBox="0 0 24 24"
                            class="w-6 h-6"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                        >
                            <path d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                </div>
                {move || {
                    menu_open()
                        .then(|| {
                            view! {
                                <div class="md:hidden pb-4 flex flex-col gap-2">
                                    {LINKS
                                        .iter()
                                        .map(|&(href, label)| {
                                            view! {
                                                <a
                                                    href=href
                                                    class="block px-2 py-1 text-sm text-foreground/80 hover:text-primary"
                                                    on:click=move |_| set_menu_open(false)
                                                >
                                                    {label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
        </nav>
    }
}
