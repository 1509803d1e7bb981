#![forbid(unsafe_code)]

pub mod background;
pub mod band;
pub mod canvas;
pub mod config;
pub mod decode;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod simulator;
pub mod swatch;
mod gui;
mod mainloop;

pub use error::Error;
pub use mainloop::{mainloop, App, HEIGHT, TITLE, WIDTH};
