//! UI module for appcost-tui
//!
//! Rendering is a pure function of `&App`: the form pane (category list,
//! feature checkboxes, error banner, submit control), the cost breakdown
//! table, and the bottom keybinding bar.

mod breakdown;
mod form;
mod render;

pub use render::draw;
