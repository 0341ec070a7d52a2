//! Module related to output formatting.

pub mod render;
pub mod style;

pub use self::{
    render::{render, render_to_string},
    style::Style,
};
