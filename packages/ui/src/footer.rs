use dioxus::prelude::*;

use crate::icons::FaHeart;
use crate::Icon;

struct LinkColumn {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        title: "Platforma",
        links: &[
            ("/kategorije", "Kategorije"),
            ("/projekti", "Projekti"),
            ("/freelanceri", "Freelanceri"),
            ("/kako-funkcionira", "Kako funkcionira"),
        ],
    },
    LinkColumn {
        title: "Podrška",
        links: &[
            ("/pomoc", "Pomoć"),
            ("/kontakt", "Kontakt"),
            ("/blog", "Blog"),
            ("/cijene", "Cijene"),
        ],
    },
    LinkColumn {
        title: "Pravno",
        links: &[
            ("/uvjeti", "Uvjeti korištenja"),
            ("/privatnost", "Privatnost"),
            ("/kolacici", "Kolačići"),
        ],
    },
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "border-t border-border/20 bg-surface",
            div { class: "container mx-auto px-4 py-8",
                div { class: "grid grid-cols-1 gap-8 md:grid-cols-4",
                    div {
                        img {
                            src: "https://anowork.pro/slike/logo.png",
                            alt: "BalkanX Logo",
                            class: "mb-4 h-8 w-auto",
                        }
                        p { class: "m-0 text-sm text-foreground-secondary",
                            "Dom najboljih freelancera na Balkanu. Povezujemo talente s projektima."
                        }
                    }

                    for column in &COLUMNS {
                        div {
                            h3 { class: "m-0 mb-4 font-semibold text-foreground", "{column.title}" }
                            ul { class: "m-0 flex list-none flex-col gap-2 p-0 text-sm text-foreground-secondary",
                                for (href, label) in column.links.iter().copied() {
                                    li {
                                        a {
                                            href: "{href}",
                                            class: "no-underline text-foreground-secondary transition-colors hover:text-primary",
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "mt-8 flex flex-col items-center justify-between border-t border-border/20 pt-8 md:flex-row",
                    p { class: "m-0 text-sm text-foreground-secondary", "© 2024 BalkanX. Sva prava pridržana." }
                    p { class: "m-0 flex items-center gap-1 text-sm text-foreground-secondary",
                        "Napravljeno s "
                        span { class: "text-red-500", Icon { icon: FaHeart, width: 16, height: 16 } }
                        " za Balkan"
                    }
                }
            }
        }
    }
}
