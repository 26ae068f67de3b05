mod command;
mod entries;
mod form;
mod run;
mod settings;
mod state;
mod types;


pub use state::App;
pub use types::Screen;
