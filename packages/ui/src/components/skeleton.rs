use dioxus::prelude::*;

/// Pulsing placeholder block shown while a section's data is outstanding.
#[component]
pub fn Skeleton(#[props(default = String::new())] class: String) -> Element {
    rsx! {
        div { class: "animate-pulse rounded bg-muted {class}" }
    }
}
