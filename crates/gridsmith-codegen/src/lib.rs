//! Code generation for the Gridsmith CSS Grid editor.
//!
//! Turns a grid configuration plus a list of placed items into ready to
//! paste markup and styles. Three CSS formats are supported (vanilla
//! CSS, Bootstrap 5, Tailwind), and the Tailwind format can target a
//! component framework (shadcn/ui, Material UI, Chakra UI, Ant Design).
//!
//! Generation is a pure function of its inputs: the same configuration
//! and items always produce the same output.

use serde::{Deserialize, Serialize};

use gridsmith_core::{CssFormat, GridConfig, GridItem, OutputSettings, UiFramework};

mod bootstrap;
mod tailwind;
mod vanilla;

/// A generated markup/style pair, ready for display or clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// HTML or JSX for the grid container and its items.
    pub markup: String,
    /// CSS rules, or setup comments for dialects that need no CSS.
    pub style: String,
}

/// Generate code for the given format and framework with default settings.
///
/// The framework only matters for [`CssFormat::Tailwind`]; vanilla and
/// Bootstrap output ignore it.
#[must_use]
pub fn generate(
    config: &GridConfig,
    items: &[GridItem],
    format: CssFormat,
    framework: UiFramework,
) -> GeneratedCode {
    match format {
        CssFormat::Vanilla => vanilla::generate(config, items, "grid-container"),
        CssFormat::Bootstrap => bootstrap::generate(config, items),
        CssFormat::Tailwind => tailwind::generate(config, items, framework),
    }
}

/// Generate code driven by [`OutputSettings`], honoring the configured
/// container class name for the vanilla dialect.
#[must_use]
pub fn generate_with(
    config: &GridConfig,
    items: &[GridItem],
    settings: &OutputSettings,
) -> GeneratedCode {
    match settings.css_format {
        CssFormat::Vanilla => vanilla::generate(config, items, &settings.container_class_name),
        CssFormat::Bootstrap => bootstrap::generate(config, items),
        CssFormat::Tailwind => tailwind::generate(config, items, settings.ui_framework),
    }
}
