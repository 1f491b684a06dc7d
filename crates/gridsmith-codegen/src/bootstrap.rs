//! Bootstrap 5 dialect: `d-grid` with inline CSS Grid styles.
//!
//! Bootstrap's own grid is 12-column flexbox, so the emitted markup
//! leans on Bootstrap 5's `d-grid` utility and places items with inline
//! `grid-column`/`grid-row` styles. Only the uniform gap field is used,
//! matching the source pattern this dialect reproduces.

use crate::GeneratedCode;
use gridsmith_core::{GridConfig, GridItem};

pub(crate) fn generate(config: &GridConfig, items: &[GridItem]) -> GeneratedCode {
    let mut markup = format!(
        "<div class=\"d-grid\" style=\"grid-template-columns: repeat({}, 1fr); grid-template-rows: repeat({}, 1fr); gap: {}px;\">",
        config.columns, config.rows, config.gap
    );
    for item in items {
        markup.push_str(&format!(
            "\n  <div style=\"grid-column: {} / {}; grid-row: {} / {};\">{}</div>",
            item.span.column_start,
            item.span.column_end,
            item.span.row_start,
            item.span.row_end,
            item.label
        ));
    }
    markup.push_str("\n</div>");

    let style = "/* Bootstrap 5 with CSS Grid */\n\
        /* Make sure to include Bootstrap CSS in your project:\n   \
        <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css\" rel=\"stylesheet\">\n\
        */\n\n\
        /* d-grid enables CSS Grid display in Bootstrap 5 */"
        .to_string();

    GeneratedCode { markup, style }
}
