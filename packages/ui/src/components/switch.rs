use dioxus::prelude::*;

/// Two-state toggle rendered as a sliding thumb.
#[component]
pub fn Switch(
    #[props(default = String::new())] id: String,
    checked: bool,
    onchange: EventHandler<bool>,
) -> Element {
    let track = if checked {
        "relative inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full border-none transition-colors bg-gradient-primary"
    } else {
        "relative inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full border-none transition-colors bg-muted"
    };
    let thumb = if checked {
        "inline-block h-4 w-4 translate-x-6 rounded-full bg-white transition-transform"
    } else {
        "inline-block h-4 w-4 translate-x-1 rounded-full bg-white transition-transform"
    };

    rsx! {
        button {
            r#type: "button",
            id: id,
            role: "switch",
            aria_checked: "{checked}",
            class: track,
            onclick: move |_| onchange.call(!checked),
            span { class: thumb }
        }
    }
}
