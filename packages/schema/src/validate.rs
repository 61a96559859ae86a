//! Structural validation of a parsed card document.
//!
//! Validation never mutates the document and reports every problem it finds,
//! in document order. A renderer is expected to refuse an invalid document
//! outright rather than render a partial tree.

use crate::document::{Action, Document, Element, Input};
use std::collections::HashSet;

/// Outcome of [`Document::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Document {
    /// Check the document's structural invariants.
    pub fn validate(&self) -> Validation {
        let mut errors = Vec::new();
        validate_document(self, &mut errors);
        Validation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

fn validate_document(doc: &Document, errors: &mut Vec<ValidationError>) {
    if doc.card_type != "AdaptiveCard" {
        errors.push(ValidationError::new(format!(
            "root type must be \"AdaptiveCard\", got \"{}\"",
            doc.card_type
        )));
    }
    if doc.version.is_empty() {
        errors.push(ValidationError::new("card version is missing"));
    }

    // Input ids must be unique within one document scope. A nested ShowCard
    // document is its own scope with its own form state.
    let mut seen_ids = HashSet::new();
    for element in &doc.body {
        validate_element(element, &mut seen_ids, errors);
    }
    for action in &doc.actions {
        validate_action(action, &mut seen_ids, errors);
    }
}

fn validate_element(
    element: &Element,
    seen_ids: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    match element {
        Element::Input(input) => {
            let id = input.id();
            if id.is_empty() {
                errors.push(ValidationError::new(format!(
                    "{} is missing the required \"id\" attribute",
                    input.kind_name()
                )));
            } else if !seen_ids.insert(id.to_string()) {
                errors.push(ValidationError::new(format!(
                    "duplicate input id \"{}\"",
                    id
                )));
            }
            if let Input::ChoiceSet(choice_set) = input {
                if choice_set.choices.is_empty() {
                    errors.push(ValidationError::new(format!(
                        "Input.ChoiceSet \"{}\" has no choices",
                        choice_set.id
                    )));
                }
            }
        }
        Element::Container(container) => {
            for item in &container.items {
                validate_element(item, seen_ids, errors);
            }
        }
        Element::ColumnSet(column_set) => {
            for column in &column_set.columns {
                for item in &column.items {
                    validate_element(item, seen_ids, errors);
                }
            }
        }
        Element::Table(table) => {
            for (row_index, row) in table.rows.iter().enumerate() {
                if row.cells.len() > table.columns.len() {
                    errors.push(ValidationError::new(format!(
                        "table row {} has {} cells but only {} columns are declared",
                        row_index,
                        row.cells.len(),
                        table.columns.len()
                    )));
                }
                for cell in &row.cells {
                    for item in &cell.items {
                        validate_element(item, seen_ids, errors);
                    }
                }
            }
        }
        Element::ActionSet(action_set) => {
            for action in &action_set.actions {
                validate_action(action, seen_ids, errors);
            }
        }
        _ => {}
    }
}

fn validate_action(
    action: &Action,
    _seen_ids: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    if let Action::ShowCard(show_card) = action {
        match &show_card.card {
            Some(card) => {
                // Nested scope: fresh id namespace, validated on its own.
                validate_document(card, errors);
            }
            None => {
                errors.push(ValidationError::new(format!(
                    "Action.ShowCard \"{}\" carries no card",
                    show_card.title
                )));
            }
        }
    }
}
