//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod card;
mod navbar;
mod footer;
mod layout;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use navbar::Navbar;
pub use footer::Footer;
pub use layout::Layout;
