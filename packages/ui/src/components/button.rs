use dioxus::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    /// Gradient call-to-action.
    #[default]
    Primary,
    /// Bordered, transparent background.
    Outline,
    /// Text-only.
    Ghost,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let button_type = r#type;
    let variant_classes = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-primary text-primary-foreground hover:opacity-90"
        }
        ButtonVariant::Outline => {
            "border border-primary/30 bg-transparent text-foreground hover:bg-primary/10"
        }
        ButtonVariant::Ghost => {
            "bg-transparent border-none text-foreground-secondary hover:text-primary"
        }
    };

    rsx! {
        button {
            r#type: button_type,
            class: "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-2 text-sm font-medium cursor-pointer transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed {variant_classes} {class}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
