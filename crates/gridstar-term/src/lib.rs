//! Terminal front-end for the A* grid search.
//!
//! An [`App`] owns an [`Editor`] (the grid plus its start and end) and a
//! [`Driver`] that draws cell states and turns terminal input into
//! [`Action`]s. Running a search animates every expansion through the
//! engine's step callback.

pub mod app;
pub mod config;
pub mod driver;
pub mod editor;
pub mod error;
pub mod input;
pub mod render;

pub use app::App;
pub use config::Config;
pub use driver::{CrosstermDriver, Driver};
pub use editor::{Editor, Painted};
pub use error::{EditError, Error};
pub use input::Action;
pub use render::Viewport;
