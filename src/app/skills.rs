use leptos::prelude::*;

use crate::content;

use super::reveal::use_reveal;

const CIRCLE_RADIUS: f64 = 42.0;

fn icon_class(name: &str) -> &'static str {
    match name {
        "Code" => "extra-code",
        "Database" => "extra-database",
        "Wrench" => "extra-wrench",
        "Users" => "extra-users",
        "Brain" => "extra-brain",
        _ => "extra-code",
    }
}

// stroke-dashoffset leaves exactly `level` percent of the circle drawn
fn dash_offset(level: u8, circumference: f64) -> f64 {
    circumference * (1.0 - f64::from(level.min(100)) / 100.0)
}

#[component]
fn SkillBar(name: String, level: u8, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex justify-between mb-2">
                <span class="text-sm font-medium text-foreground">{name}</span>
                <span class="text-xs text-primary font-semibold">{format!("{level}%")}</span>
            </div>
            <div class="h-2 bg-secondary/50 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-primary to-accent rounded-full transition-all duration-1000 ease-out"
                    style:width=move || {
                        if visible() { format!("{level}%") } else { "0%".to_string() }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn CircularProgress(name: String, level: u8, visible: Signal<bool>) -> impl IntoView {
    let circumference = std::f64::consts::TAU * CIRCLE_RADIUS;
    view! {
        <div class="flex flex-col items-center">
            <div class="relative w-28 h-28 sm:w-32 sm:h-32">
                <svg class="transform -rotate-90 w-full h-full" viewBox="0 0 120 120">
                    <circle
                        cx="60"
                        cy="60"
                        r="42"
                        stroke="currentColor"
                        stroke-width="7"
                        fill="none"
                        class="text-secondary"
                    />
                    <circle
                        cx="60"
                        cy="60"
                        r="42"
                        stroke="currentColor"
                        stroke-width="7"
                        fill="none"
                        stroke-dasharray=circumference.to_string()
                        stroke-dashoffset=move || {
                            let offset = if visible() {
                                dash_offset(level, circumference)
                            } else {
                                circumference
                            };
                            offset.to_string()
                        }
                        class="text-primary transition-all duration-1000 ease-out"
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-lg sm:text-xl font-bold text-primary">
                        {format!("{level}%")}
                    </span>
                </div>
            </div>
            <span class="mt-3 text-xs sm:text-sm font-medium text-foreground">{name}</span>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let (section_ref, visible) = use_reveal();
    let data = content::skills();

    view! {
        <section id="skills" class="py-20 px-3 sm:px-6 lg:px-8" node_ref=section_ref>
            <div class="container mx-auto max-w-6xl px-2 sm:px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-foreground mb-4">
                        "Skills"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full" />
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {data
                        .skill_categories
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="p-6 bg-card border border-border rounded-xl">
                                    <div class="flex items-center space-x-3 mb-6">
                                        <div class="w-10 h-10 rounded-lg bg-primary/10 flex items-center justify-center">
                                            <i class=format!(
                                                "{} text-primary",
                                                icon_class(&category.icon),
                                            ) />
                                        </div>
                                        <h3 class="text-base font-bold">{category.title.clone()}</h3>
                                    </div>
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <SkillBar
                                                    name=skill.name.clone()
                                                    level=skill.level
                                                    visible
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-8 sm:gap-12 mb-16">
                    {data
                        .circle_skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <CircularProgress
                                    name=skill.name.clone()
                                    level=skill.level
                                    visible
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-3">
                    {data
                        .tools_and_technologies
                        .iter()
                        .map(|tool| {
                            view! {
                                <span class="text-xs sm:text-sm bg-secondary/50 border border-border px-3 py-1 rounded-full">
                                    {tool.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
