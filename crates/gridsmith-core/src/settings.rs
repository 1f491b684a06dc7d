//! Output dialect selection.

use serde::{Deserialize, Serialize};

/// Top-level CSS output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFormat {
    /// Plain CSS with class rules
    #[default]
    Vanilla,
    /// Bootstrap 5 `d-grid` with inline CSS Grid styles
    Bootstrap,
    /// Tailwind utility classes
    Tailwind,
}

/// Component library wrapper for Tailwind output.
///
/// Only meaningful when [`CssFormat::Tailwind`] is selected; other
/// formats ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiFramework {
    /// Plain Tailwind markup
    #[default]
    None,
    /// shadcn/ui Card components
    Shadcn,
    /// Material UI Box/Paper with the `sx` prop
    Mui,
    /// Chakra UI Grid/GridItem components
    Chakra,
    /// Ant Design Card with inline styles
    Antd,
}

/// Output settings chosen by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Selected output format
    pub css_format: CssFormat,
    /// Selected component library (Tailwind only)
    pub ui_framework: UiFramework,
    /// Class name for the vanilla container rule
    pub container_class_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            css_format: CssFormat::Vanilla,
            ui_framework: UiFramework::None,
            container_class_name: "grid-container".to_string(),
        }
    }
}
