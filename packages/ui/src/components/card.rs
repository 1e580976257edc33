use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-border/20 bg-surface {class}",
            {children}
        }
    }
}

#[component]
pub fn CardHeader(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div { class: "flex flex-col gap-1.5 p-6 {class}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        h3 { class: "m-0 text-lg font-semibold leading-none text-foreground {class}", {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    rsx! {
        p { class: "m-0 text-sm text-foreground-secondary {class}", {children} }
    }
}

#[component]
pub fn CardContent(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div { class: "p-6 pt-0 {class}", {children} }
    }
}
