/// Input binding tests: seeding, edits, choice sets, toggles
use crate::*;
use serde_json::{json, Value};

#[derive(Default)]
struct RecordingHost {
    inputs: Vec<(String, Value)>,
}

impl CardHost for RecordingHost {
    fn on_input_change(&mut self, id: &str, value: &Value) {
        self.inputs.push((id.to_string(), value.clone()));
    }
}

fn instance(json: &str) -> CardInstance {
    CardInstance::from_json(json, HostConfig::default()).expect("Failed to parse")
}

fn find_input<'a>(tree: &'a PresentationTree, id: &str) -> &'a PNode {
    tree.body
        .iter()
        .find(|node| matches!(node, PNode::Input { binding, .. } if binding.id == id))
        .unwrap_or_else(|| panic!("No input node bound to {}", id))
}

#[test]
fn test_first_render_seeds_document_default() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [{"type": "Input.Text", "id": "name", "value": "Ann"}]
        }"#,
    );

    let tree = card.render();
    match find_input(&tree, "name") {
        PNode::Input { value, .. } => assert_eq!(value, &json!("Ann")),
        other => panic!("Expected input, got {:?}", other),
    }
    assert_eq!(card.form_value("name"), Some(&json!("Ann")));
}

#[test]
fn test_displayed_value_tracks_latest_edit() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [{"type": "Input.Text", "id": "name", "value": "Ann"}]
        }"#,
    );
    let mut host = RecordingHost::default();

    let tree = card.render();
    let binding = match find_input(&tree, "name") {
        PNode::Input { binding, .. } => binding.clone(),
        other => panic!("Expected input, got {:?}", other),
    };

    card.set_input(&binding, json!("Bob"), &mut host)
        .expect("Failed to set input");

    // Re-render: the document default must not clobber the edit.
    let tree = card.render();
    match find_input(&tree, "name") {
        PNode::Input { value, .. } => assert_eq!(value, &json!("Bob")),
        other => panic!("Expected input, got {:?}", other),
    }

    assert_eq!(host.inputs, vec![("name".to_string(), json!("Bob"))]);
}

#[test]
fn test_each_edit_notifies_host_once() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [{"type": "Input.Text", "id": "name"}]
        }"#,
    );
    let mut host = RecordingHost::default();
    let binding = InputBinding {
        path: vec![],
        id: "name".to_string(),
    };

    card.render();
    card.set_input(&binding, json!("a"), &mut host).unwrap();
    card.set_input(&binding, json!("ab"), &mut host).unwrap();
    card.set_input(&binding, json!("abc"), &mut host).unwrap();

    assert_eq!(host.inputs.len(), 3);
    assert_eq!(card.form_value("name"), Some(&json!("abc")));
}

#[test]
fn test_number_input_without_default_is_untyped() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "Input.Number", "id": "age", "min": 0, "max": 120},
                {"type": "Input.Number", "id": "count", "value": 3}
            ]
        }"#,
    );
    let tree = card.render();

    match find_input(&tree, "age") {
        PNode::Input { value, control, .. } => {
            assert_eq!(value, &Value::Null);
            assert!(matches!(
                control,
                InputControl::Number { min: Some(min), max: Some(max), .. }
                    if *min == 0.0 && *max == 120.0
            ));
        }
        other => panic!("Expected input, got {:?}", other),
    }
    assert_eq!(card.form_value("count"), Some(&json!(3.0)));
}

#[test]
fn test_toggle_checked_follows_live_value() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "Input.Toggle", "id": "subscribe", "title": "Subscribe",
                 "valueOn": "yes", "valueOff": "no"}
            ]
        }"#,
    );
    let mut host = RecordingHost::default();

    let tree = card.render();
    match find_input(&tree, "subscribe") {
        PNode::Input { value, control, .. } => {
            assert_eq!(value, &json!("no"));
            assert!(matches!(control, InputControl::Toggle { checked: false, .. }));
        }
        other => panic!("Expected input, got {:?}", other),
    }

    let binding = InputBinding {
        path: vec![],
        id: "subscribe".to_string(),
    };
    card.set_input(&binding, json!("yes"), &mut host).unwrap();

    let tree = card.render();
    match find_input(&tree, "subscribe") {
        PNode::Input { control, .. } => {
            assert!(matches!(control, InputControl::Toggle { checked: true, .. }));
        }
        other => panic!("Expected input, got {:?}", other),
    }
}

#[test]
fn test_choice_set_defaults_to_compact_single_select() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "Input.ChoiceSet",
                    "id": "pick",
                    "choices": [{"title": "One", "value": "1"}, {"title": "Two", "value": "2"}]
                }
            ]
        }"#,
    );
    let tree = card.render();

    match find_input(&tree, "pick") {
        PNode::Input { control, value, .. } => {
            assert!(matches!(
                control,
                InputControl::Choice { mode: ChoiceMode::Compact, multi_select: false, .. }
            ));
            assert_eq!(value, &json!(""));
        }
        other => panic!("Expected input, got {:?}", other),
    }
}

#[test]
fn test_choice_set_expanded_and_unrecognized_styles() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "Input.ChoiceSet", "id": "a", "style": "expanded",
                 "choices": [{"title": "One", "value": "1"}]},
                {"type": "Input.ChoiceSet", "id": "b", "style": "holographic",
                 "choices": [{"title": "One", "value": "1"}]}
            ]
        }"#,
    );
    let tree = card.render();

    match find_input(&tree, "a") {
        PNode::Input { control, .. } => {
            assert!(matches!(
                control,
                InputControl::Choice { mode: ChoiceMode::Expanded, .. }
            ));
        }
        other => panic!("Expected input, got {:?}", other),
    }
    // Unrecognized style degrades to compact, it is not an error.
    match find_input(&tree, "b") {
        PNode::Input { control, .. } => {
            assert!(matches!(
                control,
                InputControl::Choice { mode: ChoiceMode::Compact, .. }
            ));
        }
        other => panic!("Expected input, got {:?}", other),
    }
}

#[test]
fn test_filtered_choice_set_renders_unsupported_notice() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {"type": "TextBlock", "text": "before"},
                {"type": "Input.ChoiceSet", "id": "pick", "style": "filtered",
                 "choices": [{"title": "One", "value": "1"}]},
                {"type": "TextBlock", "text": "after"}
            ]
        }"#,
    );
    let tree = card.render();

    match &tree.body[1] {
        PNode::Unsupported { message, .. } => {
            assert!(message.contains("filtered"));
            assert!(message.contains("pick"));
        }
        other => panic!("Expected unsupported notice, got {:?}", other),
    }
    // Distinct from the unknown-kind stub, and siblings still render.
    assert_eq!(tree.body.len(), 3);
}

#[test]
fn test_multi_select_values_are_a_set_of_identifiers() {
    let mut card = instance(
        r#"{
            "type": "AdaptiveCard",
            "version": "1.5",
            "body": [
                {
                    "type": "Input.ChoiceSet",
                    "id": "pick",
                    "isMultiSelect": true,
                    "value": "1, 3",
                    "choices": [
                        {"title": "One", "value": "1"},
                        {"title": "Two", "value": "2"},
                        {"title": "Three", "value": "3"}
                    ]
                }
            ]
        }"#,
    );
    let tree = card.render();

    match find_input(&tree, "pick") {
        PNode::Input { value, .. } => assert_eq!(value, &json!(["1", "3"])),
        other => panic!("Expected input, got {:?}", other),
    }
}

#[test]
fn test_two_instances_of_one_document_are_isolated() {
    let json = r#"{
        "type": "AdaptiveCard",
        "version": "1.5",
        "body": [{"type": "Input.Text", "id": "name", "value": "Ann"}]
    }"#;

    let mut first = instance(json);
    let mut second = instance(json);
    let mut host = RecordingHost::default();
    first.render();
    second.render();

    let binding = InputBinding {
        path: vec![],
        id: "name".to_string(),
    };
    first.set_input(&binding, json!("Bob"), &mut host).unwrap();

    assert_eq!(first.form_value("name"), Some(&json!("Bob")));
    assert_eq!(second.form_value("name"), Some(&json!("Ann")));
}
