//! Category grid. Fetches once on mount; while the query is outstanding an
//! eight-card skeleton grid mirrors the eventual layout. A failed fetch is
//! logged and rendered exactly like an empty result.

use api::Category;
use dioxus::prelude::*;

use crate::components::{Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};
use crate::glyph::CategoryGlyph;

const GRID: &str = "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4";

#[component]
pub fn Categories() -> Element {
    let categories = use_resource(|| async {
        api::fetch_categories().await.unwrap_or_else(|error| {
            tracing::error!("failed to load categories: {error}");
            Vec::new()
        })
    });

    rsx! {
        section { class: "bg-background-secondary py-20",
            div { class: "container mx-auto px-4",
                div { class: "mb-12 text-center",
                    h2 { class: "m-0 mb-4 text-4xl font-bold text-foreground md:text-5xl",
                        "Kategorije usluga"
                    }
                    p { class: "m-0 mx-auto max-w-2xl text-xl text-foreground-secondary",
                        "Pronađi stručnjake u svim područjima poslovanja"
                    }
                }

                match categories() {
                    None => rsx! {
                        div { class: GRID,
                            for i in 0..8 {
                                Card { key: "{i}",
                                    CardHeader {
                                        Skeleton { class: "mb-4 h-12 w-12 rounded-lg" }
                                        Skeleton { class: "mb-2 h-6" }
                                        Skeleton { class: "h-4" }
                                    }
                                    CardContent {
                                        Skeleton { class: "h-4" }
                                    }
                                }
                            }
                        }
                    },
                    Some(list) => rsx! {
                        div { class: GRID,
                            for category in list {
                                CategoryCard { key: "{category.id}", category }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: Category) -> Element {
    let glyph = CategoryGlyph::from_name(category.icon.as_deref().unwrap_or_default());
    let active = category.active_projects_count.unwrap_or(0);
    let description = category.description.unwrap_or_default();

    rsx! {
        Card {
            class: "group cursor-pointer transition-all duration-300 hover:scale-105 hover:border-primary/30 hover:shadow-elegant",
            CardHeader {
                div { class: "mb-4 flex h-12 w-12 items-center justify-center rounded-lg bg-gradient-primary text-primary-foreground transition-all duration-300 group-hover:shadow-glow",
                    {glyph.render(24)}
                }
                CardTitle { class: "transition-colors group-hover:text-primary", "{category.name}" }
                CardDescription { "{description}" }
            }
            CardContent {
                div { class: "flex items-center justify-between",
                    span { class: "text-sm text-foreground-muted", "{active} aktivnih projekata" }
                    div { class: "h-2 w-2 animate-pulse rounded-full bg-primary" }
                }
            }
        }
    }
}
