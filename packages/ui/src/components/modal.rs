use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/60",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "mx-4 w-full max-w-md rounded-xl border border-border/20 bg-surface shadow-lg max-h-[90vh] overflow-y-auto",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
