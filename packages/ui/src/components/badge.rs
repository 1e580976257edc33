use dioxus::prelude::*;

#[component]
pub fn Badge(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {class}",
            {children}
        }
    }
}
