//! Transient notifications.
//!
//! A context-provided signal holds the visible stack; any component can push
//! into it. Toasts auto-dismiss after a few seconds in the browser and can
//! always be closed by hand.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

/// Get the toast stack provided by [`ToastProvider`].
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

pub fn push_toast(
    toasts: &mut Signal<ToastStack>,
    title: &str,
    description: &str,
    variant: ToastVariant,
) {
    let id = toasts.write().push(title, description, variant);
    auto_dismiss(*toasts, id);
}

#[cfg(target_arch = "wasm32")]
fn auto_dismiss(mut toasts: Signal<ToastStack>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
        toasts.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn auto_dismiss(_toasts: Signal<ToastStack>, _id: u64) {}

/// Provides the toast stack to the subtree and renders the viewport on top of
/// it. Wrap the app once.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(ToastStack::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        Toaster {}
    }
}

#[component]
fn Toaster() -> Element {
    let toasts = use_toasts();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 flex flex-col gap-2",
            style: "z-index: 3000",
            for toast in toasts().entries {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let border = match toast.variant {
        ToastVariant::Destructive => "border-red-500/40",
        ToastVariant::Default => "border-border/20",
    };
    let id = toast.id;

    rsx! {
        div {
            class: "w-80 rounded-lg border {border} bg-surface px-4 py-3 shadow-lg",
            div { class: "flex items-start justify-between gap-2",
                div {
                    p { class: "m-0 text-sm font-semibold text-foreground", "{toast.title}" }
                    if !toast.description.is_empty() {
                        p { class: "m-0 mt-1 text-sm text-foreground-secondary", "{toast.description}" }
                    }
                }
                button {
                    r#type: "button",
                    class: "bg-transparent border-none cursor-pointer text-foreground-muted hover:text-foreground",
                    onclick: move |_| toasts.write().dismiss(id),
                    "✕"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let first = stack.push("a", "", ToastVariant::Default);
        let second = stack.push("b", "", ToastVariant::Destructive);
        assert!(second > first);
        assert_eq!(stack.entries.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut stack = ToastStack::default();
        let first = stack.push("a", "", ToastVariant::Default);
        let second = stack.push("b", "", ToastVariant::Default);
        stack.dismiss(first);
        assert_eq!(stack.entries.len(), 1);
        assert_eq!(stack.entries[0].id, second);
        stack.dismiss(999);
        assert_eq!(stack.entries.len(), 1);
    }
}
