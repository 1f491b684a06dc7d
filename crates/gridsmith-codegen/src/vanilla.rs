//! Plain CSS dialect: a container class rule plus one rule per item.

use crate::GeneratedCode;
use gridsmith_core::{GridConfig, GridItem};

/// Vanilla CSS is the only dialect that honors axis-specific gaps and
/// the configurable container class name.
pub(crate) fn generate(
    config: &GridConfig,
    items: &[GridItem],
    container_class: &str,
) -> GeneratedCode {
    let gap_value = if config.use_uniform_gap {
        format!("{}px", config.gap)
    } else {
        // CSS `gap` shorthand is row-gap then column-gap
        format!("{}px {}px", config.row_gap, config.column_gap)
    };

    let mut style = format!(
        ".{container_class} {{\n  display: grid;\n  grid-template-columns: repeat({}, 1fr);\n  grid-template-rows: repeat({}, 1fr);\n  gap: {gap_value};\n}}",
        config.columns, config.rows
    );

    let mut markup = format!("<div class=\"{container_class}\">");
    for (index, item) in items.iter().enumerate() {
        let item_class = format!("grid-item-{}", index + 1);
        markup.push_str(&format!(
            "\n  <div class=\"{item_class}\">{}</div>",
            item.label
        ));
        style.push_str(&format!(
            "\n\n.{item_class} {{\n  grid-column: {} / {};\n  grid-row: {} / {};\n}}",
            item.span.column_start, item.span.column_end, item.span.row_start, item.span.row_end
        ));
    }
    markup.push_str("\n</div>");

    GeneratedCode { markup, style }
}
