pub mod app;
mod document_view;
mod entry_form_view;
mod layout;
mod library_view;
mod prompt_view;
mod settings_view;
mod spritz_view;
pub mod theme;

pub use app::{App, Screen};
