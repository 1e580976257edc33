use dioxus::prelude::*;

use crate::auth_modal::AuthModal;
use crate::icons::{FaBars, FaMagnifyingGlass, FaXmark};
use crate::Icon;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Početna"),
    ("/kategorije", "Kategorije"),
    ("/projekti", "Projekti"),
    ("/freelanceri", "Freelanceri"),
    ("/kako-funkcionira", "Kako funkcionira"),
];

/// Sticky top bar: logo, navigation, search, auth triggers. Collapses into a
/// toggled menu on small screens.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "sticky top-0 border-b border-border/20 bg-background/80 backdrop-blur-md",
            style: "z-index: 50",
            div { class: "container mx-auto px-4 py-3",
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center gap-2",
                        img {
                            src: "https://anowork.pro/slike/logo.png",
                            alt: "BalkanX Logo",
                            class: "h-8 w-auto",
                        }
                    }

                    nav { class: "hidden lg:flex items-center gap-8",
                        for (href, label) in NAV_LINKS {
                            a {
                                href: "{href}",
                                class: "text-foreground-secondary no-underline transition-colors hover:text-primary",
                                "{label}"
                            }
                        }
                    }

                    div { class: "hidden md:flex min-w-[300px] items-center rounded-lg bg-surface px-3 py-2",
                        span { class: "mr-2 text-foreground-muted",
                            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                        }
                        input {
                            r#type: "text",
                            placeholder: "Traži projekte, freelancere...",
                            class: "w-full border-none bg-transparent text-sm text-foreground outline-none placeholder:text-foreground-muted",
                        }
                    }

                    div { class: "hidden lg:flex items-center gap-3",
                        AuthModal {}
                    }

                    button {
                        r#type: "button",
                        class: "lg:hidden rounded-lg border-none bg-transparent p-2 text-foreground cursor-pointer transition-colors hover:bg-surface",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        if menu_open() {
                            Icon { icon: FaXmark, width: 24, height: 24 }
                        } else {
                            Icon { icon: FaBars, width: 24, height: 24 }
                        }
                    }
                }

                if menu_open() {
                    div { class: "lg:hidden mt-4 border-t border-border/20 py-4",
                        div { class: "flex flex-col gap-4",
                            div { class: "flex items-center rounded-lg bg-surface px-3 py-2",
                                span { class: "mr-2 text-foreground-muted",
                                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                                }
                                input {
                                    r#type: "text",
                                    placeholder: "Traži projekte, freelancere...",
                                    class: "w-full border-none bg-transparent text-sm text-foreground outline-none placeholder:text-foreground-muted",
                                }
                            }

                            nav { class: "flex flex-col gap-3",
                                for (href, label) in NAV_LINKS {
                                    a {
                                        href: "{href}",
                                        class: "text-foreground-secondary no-underline transition-colors hover:text-primary",
                                        "{label}"
                                    }
                                }
                            }

                            div { class: "border-t border-border/20 pt-4",
                                AuthModal {}
                            }
                        }
                    }
                }
            }
        }
    }
}
