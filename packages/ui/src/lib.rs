//! This crate contains all shared UI for the BalkanX landing page.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod glyph;
pub use glyph::CategoryGlyph;

mod carousel;
pub use carousel::Carousel;

pub mod format;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastProvider, ToastStack, ToastVariant};

mod auth_modal;
pub use auth_modal::{AuthModal, AuthTab, RegistrationError, RegistrationForm};

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

pub mod sections;
pub use sections::{Categories, Hero, HowItWorks, Leaderboard, ProjectSlider};

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
