use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowRight, FaBolt, FaMagnifyingGlass, FaShieldHalved, FaUsers};
use crate::Icon;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "relative flex min-h-[90vh] items-center justify-center overflow-hidden",
            div { class: "absolute inset-0 bg-gradient-hero",
                div { class: "absolute top-1/4 left-1/4 h-96 w-96 bg-gradient-glow opacity-30 blur-3xl animate-pulse" }
                div { class: "absolute bottom-1/4 right-1/4 h-96 w-96 bg-gradient-glow opacity-20 blur-3xl animate-pulse" }
            }

            div { class: "container relative mx-auto px-4 text-center", style: "z-index: 10",
                div { class: "mx-auto max-w-4xl",
                    h1 { class: "m-0 mb-6 text-5xl font-bold leading-tight text-foreground md:text-7xl",
                        "BalkanX — "
                        span { class: "bg-gradient-primary bg-clip-text text-transparent",
                            "dom najboljih freelancera"
                        }
                        " na Balkanu"
                    }

                    p { class: "m-0 mb-8 mx-auto max-w-3xl text-xl leading-relaxed text-foreground-secondary md:text-2xl",
                        "Poveži se s vrhunskim stručnjacima ili pronađi projekte koji te pokreću. "
                        span { class: "font-medium text-primary", "Brzo. Sigurno. Transparentno." }
                    }

                    div { class: "mb-12 flex flex-col items-center justify-center gap-4 sm:flex-row",
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "px-8 py-4 text-lg shadow-glow",
                            Icon { icon: FaMagnifyingGlass, width: 20, height: 20 }
                            "Objavi projekt"
                            Icon { icon: FaArrowRight, width: 20, height: 20 }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "px-8 py-4 text-lg",
                            Icon { icon: FaUsers, width: 20, height: 20 }
                            "Istraži freelancere"
                        }
                    }

                    div { class: "mx-auto grid max-w-3xl grid-cols-1 gap-6 md:grid-cols-3",
                        div { class: "flex items-center justify-center gap-3 rounded-lg border border-border/10 bg-surface/50 p-4 backdrop-blur-sm",
                            span { class: "text-primary", Icon { icon: FaShieldHalved, width: 24, height: 24 } }
                            span { class: "text-foreground-secondary", "Escrow zaštita" }
                        }
                        div { class: "flex items-center justify-center gap-3 rounded-lg border border-border/10 bg-surface/50 p-4 backdrop-blur-sm",
                            span { class: "text-primary", Icon { icon: FaUsers, width: 24, height: 24 } }
                            span { class: "text-foreground-secondary", "Verificirani profili" }
                        }
                        div { class: "flex items-center justify-center gap-3 rounded-lg border border-border/10 bg-surface/50 p-4 backdrop-blur-sm",
                            span { class: "text-primary", Icon { icon: FaBolt, width: 24, height: 24 } }
                            span { class: "text-foreground-secondary", "24/7 podrška" }
                        }
                    }
                }
            }

            div { class: "absolute bottom-0 left-0 h-32 w-full bg-gradient-fade" }
        }
    }
}
