/// Rendering tests: spacing, recursion, columns, degradation
use crate::*;

fn instance(json: &str) -> CardInstance {
    CardInstance::from_json(json, HostConfig::default()).expect("Failed to parse")
}

fn render(json: &str) -> PresentationTree {
    instance(json).render()
}

fn spacing_of(node: &PNode) -> u32 {
    match node {
        PNode::Text { spacing_top, .. }
        | PNode::RichText { spacing_top, .. }
        | PNode::Image { spacing_top, .. }
        | PNode::ImageSet { spacing_top, .. }
        | PNode::Container { spacing_top, .. }
        | PNode::ColumnSet { spacing_top, .. }
        | PNode::FactSet { spacing_top, .. }
        | PNode::Table { spacing_top, .. }
        | PNode::ActionSet { spacing_top, .. }
        | PNode::Input { spacing_top, .. }
        | PNode::Unknown { spacing_top, .. }
        | PNode::Unsupported { spacing_top, .. } => *spacing_top,
        PNode::ActionControl { .. } | PNode::ErrorCard { .. } => 0,
    }
}

#[test]
fn test_first_child_suppresses_leading_spacing() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "TextBlock", "text": "first", "spacing": "Large"},
                {"type": "TextBlock", "text": "second"},
                {"type": "TextBlock", "text": "third", "spacing": "Large"}
            ]
        }"#,
    );

    let config = HostConfig::default();
    assert_eq!(spacing_of(&tree.body[0]), 0);
    assert_eq!(spacing_of(&tree.body[1]), config.spacing.default);
    assert_eq!(spacing_of(&tree.body[2]), config.spacing.large);
}

#[test]
fn test_spacing_rule_applies_per_sequence_at_depth() {
    // The container is at index 1 of the body; its own first child starts a
    // new sequence and gets zero leading spacing again.
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "TextBlock", "text": "lead"},
                {
                    "type": "Container",
                    "items": [
                        {"type": "TextBlock", "text": "inner first", "spacing": "Large"},
                        {"type": "TextBlock", "text": "inner second"}
                    ]
                }
            ]
        }"#,
    );

    let children = match &tree.body[1] {
        PNode::Container { children, .. } => children,
        other => panic!("Expected container, got {:?}", other),
    };
    assert_eq!(spacing_of(&children[0]), 0);
    assert_eq!(spacing_of(&children[1]), HostConfig::default().spacing.default);
}

#[test]
fn test_text_block_resolves_style_tokens() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "TextBlock",
                    "text": "styled",
                    "size": "Large",
                    "weight": "Bolder",
                    "color": "Attention",
                    "horizontalAlignment": "Center",
                    "isSubtle": true,
                    "separator": true
                }
            ]
        }"#,
    );

    let config = HostConfig::default();
    match &tree.body[0] {
        PNode::Text {
            size,
            weight,
            color,
            align,
            separator,
            ..
        } => {
            assert_eq!(*size, config.font_sizes.large);
            assert_eq!(*weight, config.font_weights.bolder);
            assert_eq!(color, &config.colors().attention.subtle);
            assert_eq!(*align, Alignment::Center);
            assert!(*separator);
        }
        other => panic!("Expected text, got {:?}", other),
    }
}

#[test]
fn test_unknown_kind_renders_stub_and_siblings_survive() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "TextBlock", "text": "before"},
                {"type": "Graph3D", "vertices": [1, 2, 3]},
                {"type": "TextBlock", "text": "after"}
            ]
        }"#,
    );

    assert_eq!(tree.body.len(), 3);
    match &tree.body[1] {
        PNode::Unknown { kind, properties, .. } => {
            assert_eq!(kind, "Graph3D");
            assert!(properties.get("vertices").is_some());
        }
        other => panic!("Expected diagnostic stub, got {:?}", other),
    }
    assert!(matches!(&tree.body[2], PNode::Text { content, .. } if content == "after"));
}

#[test]
fn test_unknown_kind_honors_its_spacing_attribute() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "TextBlock", "text": "lead"},
                {"type": "Graph3D", "spacing": "Large"},
                {"type": "Graph3D"}
            ]
        }"#,
    );

    let config = HostConfig::default();
    assert_eq!(spacing_of(&tree.body[1]), config.spacing.large);
    assert_eq!(spacing_of(&tree.body[2]), config.spacing.default);
}

#[test]
fn test_stretch_and_auto_columns_differ() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "ColumnSet",
                    "columns": [
                        {"width": "stretch", "items": []},
                        {"width": "auto", "items": []}
                    ]
                }
            ]
        }"#,
    );

    match &tree.body[0] {
        PNode::ColumnSet { columns, .. } => {
            assert_eq!(columns[0].size, ColumnSize::Flex { weight: 1.0 });
            assert_eq!(columns[1].size, ColumnSize::Auto);
        }
        other => panic!("Expected column set, got {:?}", other),
    }
}

#[test]
fn test_three_stretch_columns_share_equally() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "ColumnSet",
                    "columns": [
                        {"width": "stretch", "items": []},
                        {"width": "stretch", "items": []},
                        {"width": "stretch", "items": []}
                    ]
                }
            ]
        }"#,
    );

    match &tree.body[0] {
        PNode::ColumnSet { columns, .. } => {
            assert_eq!(columns.len(), 3);
            for column in columns {
                assert_eq!(column.size, ColumnSize::Flex { weight: 1.0 });
            }
        }
        other => panic!("Expected column set, got {:?}", other),
    }
}

#[test]
fn test_table_cells_route_through_the_same_renderer() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "Table",
                    "columns": [{"width": 1}, {"width": "auto"}],
                    "rows": [
                        {
                            "cells": [
                                {"items": [
                                    {"type": "TextBlock", "text": "a"},
                                    {"type": "TextBlock", "text": "b", "spacing": "Medium"}
                                ]},
                                {"items": [{"type": "Input.Text", "id": "cell_input", "value": "seeded"}]}
                            ]
                        }
                    ]
                }
            ]
        }"#,
    );
    let tree = card.render();

    let rows = match &tree.body[0] {
        PNode::Table { widths, rows, .. } => {
            assert_eq!(widths[0], ColumnSize::Flex { weight: 1.0 });
            assert_eq!(widths[1], ColumnSize::Auto);
            rows
        }
        other => panic!("Expected table, got {:?}", other),
    };

    // Cell children obey the per-sequence spacing rule.
    let cell_children = match &rows[0].cells[0] {
        PNode::Container { children, .. } => children,
        other => panic!("Expected cell container, got {:?}", other),
    };
    assert_eq!(spacing_of(&cell_children[0]), 0);
    assert_eq!(
        spacing_of(&cell_children[1]),
        HostConfig::default().spacing.medium
    );

    // Inputs inside cells bind like top-level inputs.
    assert_eq!(
        card.form_value("cell_input"),
        Some(&serde_json::json!("seeded"))
    );
}

#[test]
fn test_fact_set_is_a_leaf() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "FactSet",
                    "facts": [
                        {"title": "Name", "value": "Ann"},
                        {"title": "Role", "value": "Engineer"}
                    ]
                }
            ]
        }"#,
    );

    match &tree.body[0] {
        PNode::FactSet { facts, .. } => {
            assert_eq!(facts.len(), 2);
            assert_eq!(facts[0].title, "Name");
            assert_eq!(facts[1].value, "Engineer");
        }
        other => panic!("Expected fact set, got {:?}", other),
    }
}

#[test]
fn test_image_set_size_override() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "ImageSet",
                    "imageSize": "Small",
                    "images": [
                        {"type": "Image", "url": "a.png"},
                        {"type": "Image", "url": "b.png", "size": "Large"}
                    ]
                }
            ]
        }"#,
    );

    let config = HostConfig::default();
    match &tree.body[0] {
        PNode::ImageSet { images, .. } => {
            assert!(matches!(
                &images[0],
                PNode::Image { pixel_size: Some(size), .. } if *size == config.image_sizes.small
            ));
            // Per-image size wins over the set-level default.
            assert!(matches!(
                &images[1],
                PNode::Image { pixel_size: Some(size), .. } if *size == config.image_sizes.large
            ));
        }
        other => panic!("Expected image set, got {:?}", other),
    }
}

#[test]
fn test_rich_text_runs_resolve_per_run() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "RichTextBlock",
                    "inlines": [
                        "plain ",
                        {"type": "TextRun", "text": "loud", "weight": "Bolder", "color": "Accent"}
                    ]
                }
            ]
        }"#,
    );

    let config = HostConfig::default();
    match &tree.body[0] {
        PNode::RichText { runs, .. } => {
            assert_eq!(runs[0].weight, config.font_weights.default);
            assert_eq!(runs[1].weight, config.font_weights.bolder);
            assert_eq!(runs[1].color, config.colors().accent.normal);
        }
        other => panic!("Expected rich text, got {:?}", other),
    }
}

#[test]
fn test_invalid_document_renders_single_error_card() {
    let tree = render(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "TextBlock", "text": "should not appear"},
                {"type": "Input.Text"}
            ]
        }"#,
    );

    assert!(tree.is_error_card());
    assert!(tree.actions.is_empty());
    match &tree.body[0] {
        PNode::ErrorCard { message } => assert!(message.contains("id")),
        other => panic!("Expected error card, got {:?}", other),
    }
}

#[test]
fn test_dark_theme_changes_resolved_colors_only() {
    let json = r#"{
        "type": "AdaptiveCard",
        "version": "1.5",
        "body": [{"type": "TextBlock", "text": "themed", "color": "Accent"}]
    }"#;

    let light = CardInstance::from_json(json, HostConfig::default())
        .unwrap()
        .render();
    let dark = CardInstance::from_json(json, HostConfig::default().with_theme(Theme::Dark))
        .unwrap()
        .render();

    let color_of = |tree: &PresentationTree| match &tree.body[0] {
        PNode::Text { color, .. } => color.clone(),
        other => panic!("Expected text, got {:?}", other),
    };
    assert_ne!(color_of(&light), color_of(&dark));
}
