//! Primitive widgets shared by the landing sections.

mod badge;
mod button;
mod card;
mod input;
mod label;
mod modal;
mod skeleton;
mod switch;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::Input;
pub use label::Label;
pub use modal::ModalOverlay;
pub use skeleton::Skeleton;
pub use switch::Switch;
