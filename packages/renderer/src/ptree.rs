//! Presentation tree: the renderer's output.
//!
//! Plain data, serializable, with every style token already resolved to a
//! concrete value. Interaction is routed back through the slot references
//! ([`SlotRef`]) and input bindings ([`InputBinding`]) stamped on the
//! activatable nodes.

use crate::columns::ColumnSize;
use crate::style::{ActionStyle, Alignment};
use serde::Serialize;
use serde_json::Value;

/// One node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PNode {
    Text {
        content: String,
        size: u32,
        weight: u16,
        color: String,
        wrap: bool,
        align: Alignment,
        spacing_top: u32,
        separator: bool,
    },

    RichText {
        runs: Vec<PTextRun>,
        align: Alignment,
        spacing_top: u32,
        separator: bool,
    },

    Image {
        url: String,
        alt_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pixel_size: Option<u32>,
        align: Alignment,
        spacing_top: u32,
        separator: bool,
    },

    ImageSet {
        images: Vec<PNode>,
        spacing_top: u32,
        separator: bool,
    },

    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<String>,
        children: Vec<PNode>,
        spacing_top: u32,
        separator: bool,
    },

    ColumnSet {
        columns: Vec<PColumn>,
        spacing_top: u32,
        separator: bool,
    },

    FactSet {
        facts: Vec<PFact>,
        spacing_top: u32,
        separator: bool,
    },

    Table {
        widths: Vec<ColumnSize>,
        rows: Vec<PTableRow>,
        spacing_top: u32,
        separator: bool,
    },

    ActionSet {
        controls: Vec<PNode>,
        spacing_top: u32,
        separator: bool,
    },

    /// A bound input control. The host routes committed edits back through
    /// [`crate::CardInstance::set_input`] using `binding`.
    Input {
        binding: InputBinding,
        control: InputControl,
        required: bool,
        /// Current value, from form state.
        value: Value,
        spacing_top: u32,
        separator: bool,
    },

    /// An activatable action control. The host routes activation back
    /// through [`crate::CardInstance::activate`] using `slot`.
    ActionControl {
        title: String,
        style: ActionStyle,
        kind: String,
        slot: SlotRef,
        /// For an expanded ShowCard: the nested card's tree, rendered
        /// immediately adjacent to this control.
        #[serde(skip_serializing_if = "Option::is_none")]
        expanded: Option<Box<PresentationTree>>,
    },

    /// Diagnostic stub for an unrecognized element kind. Siblings keep
    /// rendering; this node is the resilience contract, not an error.
    Unknown {
        kind: String,
        properties: Value,
        spacing_top: u32,
    },

    /// Recognized-but-unimplemented variant, e.g. a filtered choice set.
    Unsupported {
        message: String,
        spacing_top: u32,
    },

    /// Whole-card failure presentation. Always the only node in its tree.
    ErrorCard { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PTextRun {
    pub text: String,
    pub size: u32,
    pub weight: u16,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PColumn {
    pub size: ColumnSize,
    pub children: Vec<PNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PFact {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PTableRow {
    pub cells: Vec<PNode>,
}

/// Kind-specific presentation of an input control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InputControl {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<u32>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Date {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
    },
    Time {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
    },
    Toggle {
        title: String,
        value_on: String,
        value_off: String,
        checked: bool,
    },
    Choice {
        mode: ChoiceMode,
        multi_select: bool,
        choices: Vec<PChoice>,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

/// Presentation mode of a choice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceMode {
    /// One control surfacing the selection.
    Compact,
    /// Every choice surfaced as its own selectable control.
    Expanded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PChoice {
    pub title: String,
    pub value: String,
}

/// Stable reference from a rendered action control back to the action slot
/// registry of the instance that rendered it. `path` is the chain of
/// disclosure identifiers from the root instance; empty for the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRef {
    pub path: Vec<String>,
    pub index: usize,
}

/// Reference from a rendered input control back to the owning instance's
/// form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBinding {
    pub path: Vec<String>,
    pub id: String,
}

/// The composed output of one render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationTree {
    pub body: Vec<PNode>,
    pub actions: Vec<PNode>,
}

impl PresentationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single prominent error presentation replacing the whole card.
    pub fn error_card(message: impl Into<String>) -> Self {
        Self {
            body: vec![PNode::ErrorCard {
                message: message.into(),
            }],
            actions: Vec::new(),
        }
    }

    pub fn is_error_card(&self) -> bool {
        matches!(self.body.as_slice(), [PNode::ErrorCard { .. }])
    }
}
