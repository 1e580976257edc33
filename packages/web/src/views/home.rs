use dioxus::prelude::*;

use ui::sections::{Categories, Hero, HowItWorks, Leaderboard, ProjectSlider};
use ui::{Footer, Header};

/// The landing page: chrome plus the five sections. Each list section fetches
/// its own slice of data independently when it mounts.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen bg-background",
            Header {}
            main {
                Hero {}
                Categories {}
                ProjectSlider {}
                Leaderboard {}
                HowItWorks {}
            }
            Footer {}
        }
    }
}
