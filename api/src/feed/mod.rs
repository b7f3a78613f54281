//! Feed rendering

pub mod renderer;

pub use renderer::{render_error_feed, render_feed};
