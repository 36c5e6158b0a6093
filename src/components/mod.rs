//! UI components for the Maison Atelier page.

mod cards;
mod contact_form;
mod nav_bar;
mod scroll_top;
mod toast;

pub use cards::{FadeInImage, HoverCard};
pub use contact_form::ContactForm;
pub use nav_bar::NavBar;
pub use scroll_top::ScrollTopButton;
pub use toast::{use_notifier, Notifier, ToastHost};
