//! Landing-page sections, composed top-down by the web view.

mod categories;
mod hero;
mod how_it_works;
mod leaderboard;
mod project_slider;

pub use categories::Categories;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use leaderboard::Leaderboard;
pub use project_slider::ProjectSlider;
