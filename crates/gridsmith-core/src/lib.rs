//! Core types for the Gridsmith CSS Grid editor.
//!
//! This crate provides the editor's foundation:
//! - Data model: [`GridConfig`], [`GridItem`], [`Span`], [`GridState`],
//!   [`OutputSettings`]
//! - Grid geometry: [`geometry::cell_from_point`] and friends, mapping
//!   device-pixel pointer positions to 1-based grid cells
//! - Interaction: [`GridEditor`], the selection/drag/resize state
//!   machine with preview-then-commit gestures
//!
//! Code generation for the output dialects lives in `gridsmith-codegen`.

mod config;
mod editor;
pub mod geometry;
mod item;
mod settings;

pub use config::{ConfigError, GridConfig};
pub use editor::{GridEditor, Phase, PreviewMap};
pub use geometry::{Cell, Point, Rect};
pub use item::{GridItem, GridState, ItemId, Span};
pub use settings::{CssFormat, OutputSettings, UiFramework};
