//! Freelancer leaderboard: the top eight profiles by rating, completed-count
//! as tiebreaker, fetched once on mount. The period tabs are presentational
//! only; the underlying query does not change with the selection.

use api::FreelancerProfile;
use dioxus::prelude::*;

use crate::components::{Badge, Button, ButtonVariant, Card, CardContent, CardHeader, Skeleton};
use crate::format::{format_hourly_rate, format_money, freelancer_display_name, initials};
use crate::icons::{FaAward, FaCrown, FaLocationDot, FaMessage, FaStar, FaTrophy};
use crate::Icon;

const GRID: &str = "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Period {
    Week,
    Month,
    All,
}

#[component]
pub fn Leaderboard() -> Element {
    let freelancers = use_resource(|| async {
        api::fetch_top_freelancers().await.unwrap_or_else(|error| {
            tracing::error!("failed to load freelancers: {error}");
            Vec::new()
        })
    });

    let mut active_period = use_signal(|| Period::Month);

    rsx! {
        section { class: "bg-background-secondary py-20",
            div { class: "container mx-auto px-4",
                div { class: "mb-12 text-center",
                    h2 { class: "m-0 mb-4 text-4xl font-bold text-foreground md:text-5xl",
                        "Ljestvica najboljih"
                    }
                    p { class: "m-0 mb-8 text-xl text-foreground-secondary",
                        "Najbolji freelanceri na BalkanX platformi"
                    }

                    div { class: "mx-auto grid max-w-md grid-cols-3 gap-1 rounded-lg bg-surface p-1",
                        button {
                            r#type: "button",
                            class: period_class(active_period() == Period::Week),
                            onclick: move |_| active_period.set(Period::Week),
                            "Tjedno"
                        }
                        button {
                            r#type: "button",
                            class: period_class(active_period() == Period::Month),
                            onclick: move |_| active_period.set(Period::Month),
                            "Mjesečno"
                        }
                        button {
                            r#type: "button",
                            class: period_class(active_period() == Period::All),
                            onclick: move |_| active_period.set(Period::All),
                            "Sveukupno"
                        }
                    }
                }

                match freelancers() {
                    None => rsx! {
                        div { class: GRID,
                            for i in 0..8 {
                                Card { key: "{i}",
                                    CardHeader {
                                        div { class: "flex items-center gap-3",
                                            Skeleton { class: "h-12 w-12 rounded-full" }
                                            div { class: "flex-1",
                                                Skeleton { class: "mb-2 h-4" }
                                                Skeleton { class: "h-3 w-2/3" }
                                            }
                                        }
                                    }
                                    CardContent {
                                        Skeleton { class: "h-16" }
                                    }
                                }
                            }
                        }
                    },
                    Some(list) => rsx! {
                        div { class: "mt-8 {GRID}",
                            for (rank, freelancer) in list.into_iter().enumerate() {
                                FreelancerCard { key: "{freelancer.id}", rank, freelancer }
                            }
                        }
                    },
                }
            }
        }
    }
}

fn period_class(active: bool) -> &'static str {
    if active {
        "rounded-md border-none bg-muted px-3 py-1.5 text-sm font-medium text-foreground cursor-pointer"
    } else {
        "rounded-md border-none bg-transparent px-3 py-1.5 text-sm font-medium text-foreground-secondary cursor-pointer hover:text-foreground"
    }
}

#[component]
fn FreelancerCard(rank: usize, freelancer: FreelancerProfile) -> Element {
    let name = freelancer_display_name(&freelancer);
    let avatar_initials = initials(&name);
    let location = freelancer
        .location
        .clone()
        .unwrap_or_else(|| "Remote".to_string());
    let rating = format!("{:.1}", freelancer.rating);
    let rate = format_hourly_rate(freelancer.hourly_rate);
    let earned = format_money(freelancer.total_earned);
    let extra_skills = freelancer.skills.len().saturating_sub(3);
    let highlight = if rank < 3 { "ring-2 ring-primary/20" } else { "" };
    let (availability_dot, availability_label) = if freelancer.is_available() {
        ("h-2 w-2 rounded-full bg-green-500", "Dostupan")
    } else {
        ("h-2 w-2 rounded-full bg-yellow-500", "Zauzet")
    };
    let avatar = match freelancer.avatar_url.clone().filter(|url| !url.is_empty()) {
        Some(url) => rsx! {
            img {
                src: "{url}",
                alt: "{name}",
                class: "h-12 w-12 rounded-full object-cover",
            }
        },
        None => rsx! {
            div { class: "flex h-12 w-12 items-center justify-center rounded-full bg-gradient-primary text-sm font-semibold text-primary-foreground",
                "{avatar_initials}"
            }
        },
    };

    rsx! {
        Card {
            class: "group cursor-pointer transition-all duration-300 hover:border-primary/30 hover:shadow-elegant {highlight}",
            CardHeader {
                div { class: "flex items-start justify-between",
                    div { class: "flex items-center gap-3",
                        div { class: "relative",
                            {avatar}
                            div { class: "absolute -top-1 -right-1 rounded-full bg-surface p-1",
                                {rank_icon(rank)}
                            }
                        }
                        div { class: "min-w-0 flex-1",
                            h3 { class: "m-0 truncate font-semibold text-foreground", "{name}" }
                            div { class: "flex items-center gap-1 text-sm text-foreground-secondary",
                                Icon { icon: FaLocationDot, width: 12, height: 12 }
                                span { class: "truncate", "{location}" }
                            }
                        }
                    }
                    {rank_badge(rank)}
                }

                div { class: "flex items-center gap-2",
                    div { class: "flex items-center gap-1",
                        span { class: "text-yellow-400", Icon { icon: FaStar, width: 16, height: 16 } }
                        span { class: "font-medium text-foreground", "{rating}" }
                    }
                    span { class: "text-sm text-foreground-secondary",
                        "({freelancer.reviews_count} recenzija)"
                    }
                }
            }

            CardContent { class: "flex flex-col gap-4",
                div { class: "flex flex-wrap gap-1",
                    for skill in freelancer.skills.iter().take(3) {
                        Badge { class: "bg-primary/10 text-primary", "{skill}" }
                    }
                    if extra_skills > 0 {
                        Badge { class: "bg-muted/50 text-foreground-muted", "+{extra_skills}" }
                    }
                }

                div { class: "grid grid-cols-2 gap-4 text-sm",
                    div {
                        div { class: "text-foreground-secondary", "Projekti" }
                        div { class: "font-semibold text-foreground", "{freelancer.projects_completed}" }
                    }
                    div {
                        div { class: "text-foreground-secondary", "Satnica" }
                        div { class: "font-semibold text-foreground", "{rate}" }
                    }
                }

                div { class: "rounded-lg border border-primary/20 bg-primary/10 p-3 text-center",
                    div { class: "mb-1 text-sm text-foreground-secondary", "Ukupni prihod" }
                    div { class: "text-lg font-bold text-primary", "{earned}" }
                }

                div { class: "flex gap-2",
                    Button { variant: ButtonVariant::Primary, class: "flex-1", "Angažiraj" }
                    Button { variant: ButtonVariant::Outline,
                        Icon { icon: FaMessage, width: 16, height: 16 }
                    }
                }

                div { class: "flex items-center justify-center gap-2",
                    div { class: availability_dot }
                    span { class: "text-xs text-foreground-secondary", "{availability_label}" }
                }
            }
        }
    }
}

fn rank_icon(rank: usize) -> Element {
    let position = rank + 1;
    match rank {
        0 => rsx! { span { class: "text-yellow-500", Icon { icon: FaCrown, width: 16, height: 16 } } },
        1 => rsx! { span { class: "text-gray-400", Icon { icon: FaTrophy, width: 16, height: 16 } } },
        2 => rsx! { span { class: "text-orange-500", Icon { icon: FaAward, width: 16, height: 16 } } },
        _ => rsx! { span { class: "text-sm font-bold text-foreground-secondary", "#{position}" } },
    }
}

fn rank_badge(rank: usize) -> Element {
    match rank {
        0 => rsx! { Badge { class: "bg-gradient-gold text-white", "Top Rated" } },
        1 => rsx! { Badge { class: "bg-gradient-silver text-white", "Pro" } },
        2 => rsx! { Badge { class: "bg-gradient-bronze text-white", "Expert" } },
        _ => rsx! {},
    }
}
