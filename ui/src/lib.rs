//! The QR Studio desktop interface built on egui.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::QrStudioApp;
pub use state::StudioState;
