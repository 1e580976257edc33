use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = false)] required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;

    rsx! {
        input {
            id: id,
            r#type: input_type,
            class: "w-full rounded-lg border border-border/20 bg-surface px-3 py-2 text-sm text-foreground outline-none placeholder:text-foreground-muted focus:border-primary/50 {class}",
            placeholder: placeholder,
            required: required,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
