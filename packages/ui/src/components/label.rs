use dioxus::prelude::*;

#[component]
pub fn Label(
    html_for: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: html_for,
            class: "text-sm font-medium text-foreground {class}",
            {children}
        }
    }
}
