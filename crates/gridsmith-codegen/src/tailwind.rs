//! Tailwind dialect family: plain utility classes, optionally wrapped
//! in shadcn/ui, Material UI, Chakra UI, or Ant Design component syntax.

use crate::GeneratedCode;
use gridsmith_core::{GridConfig, GridItem, UiFramework};

/// Tailwind and Chakra count 4px per spacing unit.
const TAILWIND_SPACING_PX: u32 = 4;
/// Material UI counts 8px per spacing unit.
const MUI_SPACING_PX: u32 = 8;

/// Convert a pixel gap to a framework's spacing scale, rounding to the
/// nearest unit.
const fn spacing_units(px: u32, base: u32) -> u32 {
    (px + base / 2) / base
}

pub(crate) fn generate(
    config: &GridConfig,
    items: &[GridItem],
    framework: UiFramework,
) -> GeneratedCode {
    let gap_class = if config.use_uniform_gap {
        format!("gap-{}", spacing_units(config.gap, TAILWIND_SPACING_PX))
    } else {
        format!(
            "gap-x-{} gap-y-{}",
            spacing_units(config.column_gap, TAILWIND_SPACING_PX),
            spacing_units(config.row_gap, TAILWIND_SPACING_PX)
        )
    };
    let grid_classes = format!(
        "grid grid-cols-{} grid-rows-{} {gap_class}",
        config.columns, config.rows
    );

    match framework {
        UiFramework::None => plain(&grid_classes, items),
        UiFramework::Shadcn => shadcn(&grid_classes, items),
        UiFramework::Mui => mui(config, items),
        UiFramework::Chakra => chakra(config, items),
        UiFramework::Antd => antd(config, items),
    }
}

/// Positioning classes for one item: explicit start plus span on each axis.
fn position_classes(item: &GridItem) -> String {
    format!(
        "col-start-{} col-span-{} row-start-{} row-span-{}",
        item.span.column_start,
        item.span.column_span(),
        item.span.row_start,
        item.span.row_span()
    )
}

fn plain(grid_classes: &str, items: &[GridItem]) -> GeneratedCode {
    let mut markup = format!("<div class=\"{grid_classes}\">");
    for item in items {
        markup.push_str(&format!(
            "\n  <div class=\"{}\">{}</div>",
            position_classes(item),
            item.label
        ));
    }
    markup.push_str("\n</div>");

    let style = "/* Tailwind CSS - No additional CSS needed */\n\
        /* Make sure Tailwind CSS is configured in your project */"
        .to_string();

    GeneratedCode { markup, style }
}

fn shadcn(grid_classes: &str, items: &[GridItem]) -> GeneratedCode {
    let mut markup =
        format!("{{/* shadcn/ui with Tailwind Grid */}}\n<div className=\"{grid_classes}\">");
    for item in items {
        markup.push_str(&format!(
            "\n  <Card className=\"{}\">\n    <CardContent className=\"p-4\">\n      {}\n    </CardContent>\n  </Card>",
            position_classes(item),
            item.label
        ));
    }
    markup.push_str("\n</div>");

    let style = "// Import shadcn/ui components\n\
        import { Card, CardContent } from \"@/components/ui/card\"\n\n\
        // No additional CSS needed with Tailwind"
        .to_string();

    GeneratedCode { markup, style }
}

fn mui(config: &GridConfig, items: &[GridItem]) -> GeneratedCode {
    let mut markup = format!(
        "{{/* Material UI with CSS Grid */}}\n<Box\n  sx={{{{\n    display: 'grid',\n    gridTemplateColumns: 'repeat({}, 1fr)',\n    gridTemplateRows: 'repeat({}, 1fr)',\n    gap: {},\n  }}}}\n>",
        config.columns,
        config.rows,
        spacing_units(config.gap, MUI_SPACING_PX)
    );
    for item in items {
        markup.push_str(&format!(
            "\n  <Paper\n    sx={{{{\n      gridColumn: '{} / {}',\n      gridRow: '{} / {}',\n      p: 2,\n    }}}}\n  >\n    {}\n  </Paper>",
            item.span.column_start,
            item.span.column_end,
            item.span.row_start,
            item.span.row_end,
            item.label
        ));
    }
    markup.push_str("\n</Box>");

    let style = "// Import MUI components\n\
        import Box from '@mui/material/Box';\n\
        import Paper from '@mui/material/Paper';\n\n\
        // No additional CSS needed with MUI"
        .to_string();

    GeneratedCode { markup, style }
}

fn chakra(config: &GridConfig, items: &[GridItem]) -> GeneratedCode {
    let mut markup = format!(
        "{{/* Chakra UI Grid */}}\n<Grid\n  templateColumns=\"repeat({}, 1fr)\"\n  templateRows=\"repeat({}, 1fr)\"\n  gap={{{}}}\n>",
        config.columns,
        config.rows,
        spacing_units(config.gap, TAILWIND_SPACING_PX)
    );
    for item in items {
        markup.push_str(&format!(
            "\n  <GridItem colStart={{{}}} colEnd={{{}}} rowStart={{{}}} rowEnd={{{}}}>\n    <Box p={{4}} bg=\"gray.100\">\n      {}\n    </Box>\n  </GridItem>",
            item.span.column_start,
            item.span.column_end,
            item.span.row_start,
            item.span.row_end,
            item.label
        ));
    }
    markup.push_str("\n</Grid>");

    let style = "// Import Chakra UI components\n\
        import { Grid, GridItem, Box } from '@chakra-ui/react'\n\n\
        // No additional CSS needed with Chakra UI"
        .to_string();

    GeneratedCode { markup, style }
}

fn antd(config: &GridConfig, items: &[GridItem]) -> GeneratedCode {
    // Ant Design has no CSS Grid component of its own; plain inline
    // styles carry the layout and Card supplies the chrome.
    let mut markup = format!(
        "{{/* Ant Design with CSS Grid */}}\n<div\n  style={{{{\n    display: 'grid',\n    gridTemplateColumns: 'repeat({}, 1fr)',\n    gridTemplateRows: 'repeat({}, 1fr)',\n    gap: {},\n  }}}}\n>",
        config.columns, config.rows, config.gap
    );
    for item in items {
        markup.push_str(&format!(
            "\n  <Card\n    style={{{{\n      gridColumn: '{} / {}',\n      gridRow: '{} / {}',\n    }}}}\n  >\n    {}\n  </Card>",
            item.span.column_start,
            item.span.column_end,
            item.span.row_start,
            item.span.row_end,
            item.label
        ));
    }
    markup.push_str("\n</div>");

    let style = "// Import Ant Design components\n\
        import { Card } from 'antd';\n\n\
        // No additional CSS needed - using inline CSS Grid styles"
        .to_string();

    GeneratedCode { markup, style }
}
