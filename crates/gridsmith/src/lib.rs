//! Gridsmith: a visual CSS Grid layout editor core.
//!
//! This umbrella crate re-exports the full public API:
//! - `gridsmith-core`: the grid data model, pointer-to-cell geometry,
//!   and the [`GridEditor`] interaction state machine
//! - `gridsmith-codegen`: code generation for the output dialects
//!   (vanilla CSS, Bootstrap 5, Tailwind with optional component
//!   frameworks)
//!
//! # Example
//!
//! ```
//! use gridsmith::{generate, CssFormat, GridConfig, GridEditor, UiFramework};
//!
//! let config = GridConfig::default();
//! let mut editor = GridEditor::new();
//! editor.click_cell(&config, 1, 1);
//!
//! let code = generate(&config, editor.items(), CssFormat::Vanilla, UiFramework::None);
//! assert!(code.style.contains("display: grid;"));
//! ```

pub use gridsmith_codegen::{generate, generate_with, GeneratedCode};
pub use gridsmith_core::{
    geometry, Cell, ConfigError, CssFormat, GridConfig, GridEditor, GridItem, GridState, ItemId,
    OutputSettings, Phase, Point, PreviewMap, Rect, Span, UiFramework,
};
