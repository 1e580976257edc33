use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::icons::{FaArrowRight, FaCreditCard, FaFileLines, FaUsers};
use crate::Icon;

/// Three-step explainer for each side of the marketplace, plus the closing
/// call-to-action panel.
#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { class: "bg-background py-20",
            div { class: "container mx-auto px-4",
                div { class: "mb-16 text-center",
                    h2 { class: "m-0 mb-4 text-4xl font-bold text-foreground md:text-5xl",
                        "Kako funkcionira"
                    }
                    p { class: "m-0 mx-auto max-w-2xl text-xl text-foreground-secondary",
                        "Jednostavan proces u tri koraka za klijente i freelancere"
                    }
                }

                div { class: "mb-16",
                    h3 { class: "m-0 mb-8 text-center text-2xl font-bold text-foreground", "Za klijente" }
                    div { class: "grid grid-cols-1 gap-8 md:grid-cols-3",
                        StepCard {
                            icon: rsx! { Icon { icon: FaFileLines, width: 32, height: 32 } },
                            title: "Objavi",
                            description: "Objavi svoj projekt s detaljnim opisom, budžetom i rokovima. Besplatno i jednostavno.",
                            show_arrow: true,
                        }
                        StepCard {
                            icon: rsx! { Icon { icon: FaUsers, width: 32, height: 32 } },
                            title: "Izaberi",
                            description: "Pregledaj ponude kvalificiranih freelancera i izaberi najbolju za svoj projekt.",
                            show_arrow: true,
                        }
                        StepCard {
                            icon: rsx! { Icon { icon: FaCreditCard, width: 32, height: 32 } },
                            title: "Radi i naplati",
                            description: "Sigurna escrow zaštita garantira plaćanje tek nakon uspješno završenog posla.",
                            show_arrow: false,
                        }
                    }
                }

                div { class: "mb-16",
                    h3 { class: "m-0 mb-8 text-center text-2xl font-bold text-foreground", "Za freelancere" }
                    div { class: "grid grid-cols-1 gap-8 md:grid-cols-3",
                        StepCard {
                            icon: rsx! { Icon { icon: FaUsers, width: 32, height: 32 } },
                            title: "Pronađi",
                            description: "Pronađi projekte koji odgovaraju tvojim vještinama i interesima.",
                            show_arrow: true,
                        }
                        StepCard {
                            icon: rsx! { Icon { icon: FaFileLines, width: 32, height: 32 } },
                            title: "Pošalji ponudu",
                            description: "Napiši personaliziranu ponudu s planom rada i cjenom za projekt.",
                            show_arrow: true,
                        }
                        StepCard {
                            icon: rsx! { Icon { icon: FaCreditCard, width: 32, height: 32 } },
                            title: "Radi i naplati",
                            description: "Radi na projektu i primi plaćanje sigurno preko escrow sustava.",
                            show_arrow: false,
                        }
                    }
                }

                div { class: "rounded-2xl border border-border/20 bg-surface p-8 text-center",
                    h3 { class: "m-0 mb-4 text-2xl font-bold text-foreground", "Spreman za početak?" }
                    p { class: "m-0 mx-auto mb-6 max-w-2xl text-foreground-secondary",
                        "Pridruži se tisućama zadovoljnih korisnika na BalkanX platformi i ostvari svoje ciljeve već danas."
                    }
                    div { class: "flex flex-col justify-center gap-4 sm:flex-row",
                        Button { variant: ButtonVariant::Primary, class: "px-8", "Registriraj se kao Freelancer" }
                        Button { variant: ButtonVariant::Outline, class: "px-8", "Registriraj se kao Klijent" }
                    }
                }
            }
        }
    }
}

#[component]
fn StepCard(icon: Element, title: String, description: String, show_arrow: bool) -> Element {
    rsx! {
        div { class: "relative",
            Card { class: "h-full transition-all duration-300 hover:border-primary/30",
                CardHeader { class: "text-center",
                    div { class: "mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-gradient-primary text-primary-foreground shadow-glow",
                        {icon}
                    }
                    CardTitle { class: "mb-2 text-xl", "{title}" }
                }
                CardContent { class: "text-center",
                    p { class: "m-0 leading-relaxed text-foreground-secondary", "{description}" }
                }
            }

            if show_arrow {
                div {
                    class: "absolute top-1/2 -right-4 hidden -translate-y-1/2 text-primary md:block",
                    style: "z-index: 10",
                    Icon { icon: FaArrowRight, width: 24, height: 24 }
                }
            }
        }
    }
}
