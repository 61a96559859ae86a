//! # Cardstock Schema
//!
//! Typed model of the card wire format, plus parsing and structural
//! validation. The renderer consumes a [`Document`] produced here and never
//! touches raw JSON itself, with one exception: unrecognized element and
//! action kinds keep their raw payload so the renderer can surface them as
//! diagnostic stubs.

pub mod document;
pub mod error;
pub mod validate;

pub use document::{
    Action, ActionSet, Choice, ChoiceSetInput, Column, ColumnSet, ColumnWidth, CommonProps,
    Container, DateInput, Document, Element, ExecuteAction, Fact, FactSet, Image, ImageSet,
    Inline, Input, NumberInput, OpenUrlAction, RefreshAction, ShowCardAction, SubmitAction,
    Table, TableCell, TableColumn, TableRow, TextBlock, TextInput, TextRun, TimeInput,
    ToggleInput, RichTextBlock,
};
pub use error::ParseError;
pub use validate::{Validation, ValidationError};

/// Parse card JSON into a typed document.
pub fn parse(json: &str) -> Result<Document, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(ParseError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}
