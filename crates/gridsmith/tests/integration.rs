//! End-to-end tests: drive the editor state machine and check the
//! generated output, through the umbrella crate's re-exported API.

use gridsmith::{
    generate, generate_with, CssFormat, GridConfig, GridEditor, OutputSettings, Phase, Point,
    Rect, Span, UiFramework,
};

const CANVAS: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

fn center_of(col: u32, row: u32) -> Point {
    Point::new(col as f32 * 100.0 - 50.0, row as f32 * 100.0 - 50.0)
}

#[test]
fn test_click_then_generate_vanilla() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();
    editor.click_cell(&config, 1, 1);
    editor.click_cell(&config, 3, 2);

    let code = generate(&config, editor.items(), CssFormat::Vanilla, UiFramework::None);
    assert!(code.markup.contains("<div class=\"grid-item-1\">1</div>"));
    assert!(code.markup.contains("<div class=\"grid-item-2\">2</div>"));
    assert!(code
        .style
        .contains(".grid-item-1 {\n  grid-column: 1 / 2;\n  grid-row: 1 / 2;\n}"));
    assert!(code
        .style
        .contains(".grid-item-2 {\n  grid-column: 3 / 4;\n  grid-row: 2 / 3;\n}"));
}

#[test]
fn test_drag_commit_reflected_in_output() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();
    editor.click_cell(&config, 1, 1);
    editor.begin_drag(&config, CANVAS, center_of(1, 1));
    editor.pointer_moved(&config, CANVAS, center_of(3, 3));

    // Output is generated from committed spans, not the live preview
    let during = generate(&config, editor.items(), CssFormat::Vanilla, UiFramework::None);
    assert!(during.style.contains("grid-column: 1 / 2;"));

    editor.pointer_released();
    let after = generate(&config, editor.items(), CssFormat::Vanilla, UiFramework::None);
    assert!(after.style.contains("grid-column: 3 / 4;"));
    assert!(after.style.contains("grid-row: 3 / 4;"));
}

#[test]
fn test_swap_then_generate_tailwind() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();
    let a = editor.click_cell(&config, 1, 1).expect("item a");
    editor.click_cell(&config, 3, 3);

    editor.click_item(a);
    editor.begin_drag(&config, CANVAS, center_of(1, 1));
    editor.pointer_moved(&config, CANVAS, center_of(3, 3));
    editor.pointer_released();

    let code = generate(&config, editor.items(), CssFormat::Tailwind, UiFramework::None);
    // Item 1 now sits at (3,3) and item 2 at (1,1)
    assert!(code
        .markup
        .contains("<div class=\"col-start-3 col-span-1 row-start-3 row-span-1\">1</div>"));
    assert!(code
        .markup
        .contains("<div class=\"col-start-1 col-span-1 row-start-1 row-span-1\">2</div>"));
}

#[test]
fn test_resize_then_generate_bootstrap() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();
    editor.click_cell(&config, 1, 1);
    editor.begin_resize();
    editor.pointer_moved(&config, CANVAS, center_of(2, 3));
    editor.pointer_released();
    assert_eq!(editor.items()[0].span, Span::new(1, 3, 1, 4));

    let code = generate(&config, editor.items(), CssFormat::Bootstrap, UiFramework::None);
    assert!(code
        .markup
        .contains("<div style=\"grid-column: 1 / 3; grid-row: 1 / 4;\">1</div>"));
}

#[test]
fn test_clear_matches_empty_output() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();
    editor.click_cell(&config, 1, 1);
    editor.click_cell(&config, 2, 2);
    editor.clear();

    for format in [CssFormat::Vanilla, CssFormat::Bootstrap, CssFormat::Tailwind] {
        let cleared = generate(&config, editor.items(), format, UiFramework::None);
        let empty = generate(&config, &[], format, UiFramework::None);
        assert_eq!(cleared, empty);
    }
}

#[test]
fn test_snapshot_round_trip_preserves_output() {
    let config = GridConfig::new(4, 4, 8);
    let mut editor = GridEditor::new();
    editor.click_cell(&config, 1, 1);
    editor.click_cell(&config, 4, 4);

    let json = serde_json::to_string(&editor.state(config)).expect("serialize");
    let state: gridsmith::GridState = serde_json::from_str(&json).expect("deserialize");

    let mut restored = GridEditor::with_items(state.items);
    assert_eq!(
        generate(&state.config, editor.items(), CssFormat::Vanilla, UiFramework::None),
        generate(&state.config, restored.items(), CssFormat::Vanilla, UiFramework::None)
    );
    // Restored editors keep creating distinct ids
    let id = restored.click_cell(&state.config, 2, 2).expect("item created");
    assert!(restored.items().iter().filter(|i| i.id == id).count() == 1);
}

#[test]
fn test_settings_drive_every_dialect() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();
    editor.click_cell(&config, 2, 2);

    let cases: [(CssFormat, UiFramework, &str); 6] = [
        (CssFormat::Vanilla, UiFramework::None, "display: grid;"),
        (CssFormat::Bootstrap, UiFramework::None, "d-grid"),
        (CssFormat::Tailwind, UiFramework::Shadcn, "<Card className="),
        (CssFormat::Tailwind, UiFramework::Mui, "<Paper"),
        (CssFormat::Tailwind, UiFramework::Chakra, "<GridItem"),
        (CssFormat::Tailwind, UiFramework::Antd, "{/* Ant Design with CSS Grid */}"),
    ];
    for (css_format, ui_framework, needle) in cases {
        let settings = OutputSettings {
            css_format,
            ui_framework,
            ..OutputSettings::default()
        };
        let code = generate_with(&config, editor.items(), &settings);
        let haystack = format!("{}\n{}", code.markup, code.style);
        assert!(haystack.contains(needle), "missing {needle:?} for {css_format:?}/{ui_framework:?}");
    }
}

#[test]
fn test_full_session() {
    let config = GridConfig::default();
    let mut editor = GridEditor::new();

    // Build a layout: a wide header, a sidebar, and a content cell
    let header = editor.click_cell(&config, 1, 1).expect("header");
    editor.begin_resize();
    editor.pointer_moved(&config, CANVAS, center_of(3, 1));
    editor.pointer_released();

    let sidebar = editor.click_cell(&config, 1, 2).expect("sidebar");
    editor.begin_resize();
    editor.pointer_moved(&config, CANVAS, center_of(1, 3));
    editor.pointer_released();

    editor.click_cell(&config, 2, 2).expect("content");
    editor.deselect();
    assert_eq!(editor.phase(), Phase::Idle);

    assert_eq!(editor.items()[0].span, Span::new(1, 4, 1, 2));
    assert_eq!(editor.items()[1].span, Span::new(1, 2, 2, 4));
    assert_eq!(editor.items()[2].span, Span::new(2, 3, 2, 3));
    assert_eq!(editor.items()[0].id, header);
    assert_eq!(editor.items()[1].id, sidebar);

    let code = generate(&config, editor.items(), CssFormat::Vanilla, UiFramework::None);
    assert!(code
        .style
        .contains(".grid-item-1 {\n  grid-column: 1 / 4;\n  grid-row: 1 / 2;\n}"));
    assert!(code
        .style
        .contains(".grid-item-2 {\n  grid-column: 1 / 2;\n  grid-row: 2 / 4;\n}"));
    assert!(code
        .style
        .contains(".grid-item-3 {\n  grid-column: 2 / 3;\n  grid-row: 2 / 3;\n}"));
}
