use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let (visible, set_visible) = signal(false);
    // the hero animates in on load rather than on scroll
    Effect::new(move |_| set_visible(true));

    let slide = move |from: &'static str| {
        if visible() {
            "opacity-100 translate-x-0".to_string()
        } else {
            format!("opacity-0 {from}")
        }
    };

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-20">
            <div class="container mx-auto">
                <div class="grid lg:grid-cols-2 gap-8 lg:gap-12 items-center">
                    <div class=move || {
                        format!(
                            "flex justify-center lg:justify-end transition-all duration-1000 {}",
                            slide("-translate-x-10"),
                        )
                    }>
                        <div class="relative">
                            <div class="absolute inset-0 bg-gradient-to-br from-primary to-accent rounded-2xl blur-2xl opacity-30" />
                            <div class="relative w-80 h-80 sm:w-96 sm:h-96 rounded-2xl overflow-hidden border-2 border-primary/30 shadow-2xl">
                                <img
                                    src="/images/profile.svg"
                                    alt="Saudamini Roy"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                        </div>
                    </div>
                    <div class=move || {
                        format!(
                            "space-y-6 text-center lg:text-left transition-all duration-1000 delay-300 {}",
                            slide("translate-x-10"),
                        )
                    }>
                        <div class="space-y-2">
                            <p class="text-sm sm:text-base text-primary font-medium tracking-wide uppercase">
                                "Hello! My name is"
                            </p>
                            <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-foreground">
                                "Saudamini Roy"
                            </h1>
                        </div>
                        <div class="space-y-4">
                            <h2 class="text-lg sm:text-xl text-muted-foreground font-medium">
                                "A bit about me"
                            </h2>
                            <p class="text-base sm:text-lg text-foreground/80 leading-relaxed max-w-2xl mx-auto lg:mx-0">
                                "I am a second-year B.Tech student at the University of Engineering and Management (UEM), Kolkata, specializing in Computer Science and Technology (CST)."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
