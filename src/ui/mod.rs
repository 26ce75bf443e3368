//! Terminal UI: welcome form, creator and solver screens with the balance
//! scale, result and game-over screens.

mod app;
pub mod balance_widget;
mod game_view;
pub mod text;
pub mod text_field;

pub use app::App;
