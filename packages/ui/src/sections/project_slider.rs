//! Latest-projects slider: one query for the five newest open projects, then
//! a circular cursor over the result. Navigation is disabled with fewer than
//! two projects; a failed fetch renders the same as no projects at all.

use api::Project;
use dioxus::prelude::*;

use crate::carousel::Carousel;
use crate::components::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Skeleton,
};
use crate::format::{client_display_name, format_budget, format_deadline};
use crate::icons::{
    FaCalendar, FaChevronLeft, FaChevronRight, FaEye, FaLocationDot, FaPaperPlane,
};
use crate::Icon;

#[component]
pub fn ProjectSlider() -> Element {
    let projects = use_resource(|| async {
        api::fetch_open_projects().await.unwrap_or_else(|error| {
            tracing::error!("failed to load projects: {error}");
            Vec::new()
        })
    });

    rsx! {
        section { class: "bg-background py-20",
            div { class: "container mx-auto px-4",
                match projects() {
                    None => rsx! {
                        {heading("Zadnjih 5 objavljenih projekata")}
                        div { class: "relative mx-auto max-w-4xl",
                            Card {
                                CardHeader {
                                    Skeleton { class: "mb-4 h-8" }
                                    Skeleton { class: "mb-2 h-4" }
                                    Skeleton { class: "h-4 w-3/4" }
                                }
                                CardContent {
                                    Skeleton { class: "h-20" }
                                }
                            }
                        }
                    },
                    Some(list) if list.is_empty() => rsx! {
                        {heading("Trenutno nema objavljenih projekata. Budi prvi!")}
                    },
                    Some(list) => rsx! {
                        {heading("Zadnjih 5 objavljenih projekata")}
                        SliderInner { projects: list }
                    },
                }
            }
        }
    }
}

fn heading(subtitle: &'static str) -> Element {
    rsx! {
        div { class: "mb-12 text-center",
            h2 { class: "m-0 mb-4 text-4xl font-bold text-foreground md:text-5xl",
                "Najnoviji projekti"
            }
            p { class: "m-0 text-xl text-foreground-secondary", "{subtitle}" }
        }
    }
}

#[component]
fn SliderInner(projects: Vec<Project>) -> Element {
    let mut carousel = use_signal(|| Carousel::new(projects.len()));

    let cursor = carousel();
    let index = cursor.index().min(projects.len() - 1);
    let current = projects[index].clone();
    let arrows_disabled = !cursor.can_navigate();

    rsx! {
        div { class: "relative mx-auto max-w-4xl",
            button {
                r#type: "button",
                class: "absolute left-0 top-1/2 -translate-x-4 -translate-y-1/2 rounded-full border border-border/20 bg-surface p-2 text-foreground cursor-pointer transition-all duration-200 hover:border-primary/30 disabled:cursor-not-allowed disabled:opacity-50",
                style: "z-index: 10",
                disabled: arrows_disabled,
                onclick: move |_| carousel.write().prev(),
                Icon { icon: FaChevronLeft, width: 20, height: 20 }
            }
            button {
                r#type: "button",
                class: "absolute right-0 top-1/2 translate-x-4 -translate-y-1/2 rounded-full border border-border/20 bg-surface p-2 text-foreground cursor-pointer transition-all duration-200 hover:border-primary/30 disabled:cursor-not-allowed disabled:opacity-50",
                style: "z-index: 10",
                disabled: arrows_disabled,
                onclick: move |_| carousel.write().next(),
                Icon { icon: FaChevronRight, width: 20, height: 20 }
            }

            ProjectCard { project: current }

            div { class: "mt-6 flex justify-center gap-2",
                for i in 0..cursor.len() {
                    IndicatorDot {
                        key: "{i}",
                        index: i,
                        active: i == index,
                        onclick: move |target| carousel.write().jump_to(target),
                    }
                }
            }
        }
    }
}

#[component]
fn IndicatorDot(index: usize, active: bool, onclick: EventHandler<usize>) -> Element {
    let class = if active {
        "h-2 w-8 rounded-full border-none bg-primary cursor-pointer transition-all duration-300"
    } else {
        "h-2 w-2 rounded-full border-none bg-foreground-muted cursor-pointer transition-all duration-300 hover:bg-primary/50"
    };

    rsx! {
        button {
            r#type: "button",
            class: class,
            onclick: move |_| onclick.call(index),
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let budget = format_budget(&project);
    let budget_kind = match project.budget_type {
        api::BudgetType::Fixed => "Fiksno",
        api::BudgetType::Hourly => "Satnica",
    };
    let deadline = format_deadline(project.deadline);
    let location = project
        .profiles
        .location
        .clone()
        .unwrap_or_else(|| "Remote".to_string());
    let client = client_display_name(&project.profiles);
    let extra_skills = project.skills_required.len().saturating_sub(4);

    rsx! {
        Card { class: "shadow-card transition-all duration-300 hover:border-primary/30",
            CardHeader {
                div { class: "flex flex-col gap-4 md:flex-row md:items-start md:justify-between",
                    div { class: "flex-1",
                        CardTitle { class: "mb-2 text-2xl", "{project.title}" }
                        p { class: "m-0 mb-4 text-foreground-secondary", "{project.description}" }

                        div { class: "mb-4 flex flex-wrap gap-2",
                            for skill in project.skills_required.iter().take(4) {
                                Badge { class: "border border-primary/20 bg-primary/10 text-primary", "{skill}" }
                            }
                            if extra_skills > 0 {
                                Badge { class: "bg-muted/50 text-foreground-muted", "+{extra_skills} više" }
                            }
                        }
                    }

                    div { class: "text-right",
                        div { class: "mb-1 text-2xl font-bold text-primary", "{budget}" }
                        div { class: "text-sm text-foreground-secondary", "{budget_kind}" }
                    }
                }
            }

            CardContent {
                div { class: "mb-6 grid grid-cols-1 gap-4 md:grid-cols-3",
                    div { class: "flex items-center gap-2 text-foreground-secondary",
                        Icon { icon: FaCalendar, width: 16, height: 16 }
                        span { class: "text-sm", "Rok: {deadline}" }
                    }
                    div { class: "flex items-center gap-2 text-foreground-secondary",
                        Icon { icon: FaLocationDot, width: 16, height: 16 }
                        span { class: "text-sm", "{location}" }
                    }
                    div { class: "flex items-center gap-2 text-foreground-secondary",
                        span { class: "text-sm", "Klijent: {client}" }
                    }
                }

                div { class: "flex flex-col gap-3 sm:flex-row",
                    Button { variant: ButtonVariant::Primary, class: "flex-1",
                        Icon { icon: FaPaperPlane, width: 16, height: 16 }
                        "Pošalji ponudu"
                    }
                    Button { variant: ButtonVariant::Outline,
                        Icon { icon: FaEye, width: 16, height: 16 }
                        "Pogledaj projekt"
                    }
                }
            }
        }
    }
}
