//! Typed card document model.
//!
//! The wire format is a JSON object tree. Element and action kinds are
//! discriminated by a `"type"` string; unrecognized kinds deserialize into
//! an `Unknown` variant carrying the raw payload so the renderer can show a
//! diagnostic stub instead of aborting.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root card document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "type", default)]
    pub card_type: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub body: Vec<Element>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Presentation attributes shared by every element kind.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonProps {
    pub size: Option<String>,
    pub weight: Option<String>,
    pub color: Option<String>,
    pub spacing: Option<String>,
    pub horizontal_alignment: Option<String>,
    #[serde(default)]
    pub separator: bool,
}

/// One node in the card layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    TextBlock(TextBlock),
    RichTextBlock(RichTextBlock),
    Image(Image),
    ImageSet(ImageSet),
    Container(Container),
    ColumnSet(ColumnSet),
    FactSet(FactSet),
    Table(Table),
    ActionSet(ActionSet),
    Input(Input),
    /// Unrecognized element kind. Kept intact for the diagnostic stub.
    Unknown { kind: String, properties: Value },
}

impl Element {
    /// Shared presentation attributes, where the kind carries them.
    pub fn props(&self) -> Option<&CommonProps> {
        match self {
            Element::TextBlock(el) => Some(&el.props),
            Element::RichTextBlock(el) => Some(&el.props),
            Element::Image(el) => Some(&el.props),
            Element::ImageSet(el) => Some(&el.props),
            Element::Container(el) => Some(&el.props),
            Element::ColumnSet(el) => Some(&el.props),
            Element::FactSet(el) => Some(&el.props),
            Element::Table(el) => Some(&el.props),
            Element::ActionSet(el) => Some(&el.props),
            Element::Input(input) => Some(input.props()),
            Element::Unknown { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Element::TextBlock(_) => "TextBlock",
            Element::RichTextBlock(_) => "RichTextBlock",
            Element::Image(_) => "Image",
            Element::ImageSet(_) => "ImageSet",
            Element::Container(_) => "Container",
            Element::ColumnSet(_) => "ColumnSet",
            Element::FactSet(_) => "FactSet",
            Element::Table(_) => "Table",
            Element::ActionSet(_) => "ActionSet",
            Element::Input(input) => input.kind_name(),
            Element::Unknown { kind, .. } => kind,
        }
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match kind.as_str() {
            "TextBlock" => serde_json::from_value(raw.clone()).map(Element::TextBlock),
            "RichTextBlock" => serde_json::from_value(raw.clone()).map(Element::RichTextBlock),
            "Image" => serde_json::from_value(raw.clone()).map(Element::Image),
            "ImageSet" => serde_json::from_value(raw.clone()).map(Element::ImageSet),
            "Container" => serde_json::from_value(raw.clone()).map(Element::Container),
            "ColumnSet" => serde_json::from_value(raw.clone()).map(Element::ColumnSet),
            "FactSet" => serde_json::from_value(raw.clone()).map(Element::FactSet),
            "Table" => serde_json::from_value(raw.clone()).map(Element::Table),
            "ActionSet" => serde_json::from_value(raw.clone()).map(Element::ActionSet),
            "Input.Text" => serde_json::from_value(raw.clone())
                .map(|el| Element::Input(Input::Text(el))),
            "Input.Number" => serde_json::from_value(raw.clone())
                .map(|el| Element::Input(Input::Number(el))),
            "Input.Date" => serde_json::from_value(raw.clone())
                .map(|el| Element::Input(Input::Date(el))),
            "Input.Time" => serde_json::from_value(raw.clone())
                .map(|el| Element::Input(Input::Time(el))),
            "Input.Toggle" => serde_json::from_value(raw.clone())
                .map(|el| Element::Input(Input::Toggle(el))),
            "Input.ChoiceSet" => serde_json::from_value(raw.clone())
                .map(|el| Element::Input(Input::ChoiceSet(el))),
            _ => return Ok(Element::Unknown { kind, properties: raw }),
        };

        parsed.map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub wrap: bool,
    #[serde(default)]
    pub is_subtle: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextBlock {
    #[serde(default)]
    pub inlines: Vec<Inline>,
    #[serde(flatten)]
    pub props: CommonProps,
}

/// A rich text inline is either a bare string or a styled run object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    Text(String),
    Run(TextRun),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub text: String,
    pub size: Option<String>,
    pub weight: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub is_subtle: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub url: String,
    pub alt_text: Option<String>,
    #[serde(rename = "size")]
    pub image_size: Option<String>,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSet {
    #[serde(default)]
    pub images: Vec<Image>,
    pub image_size: Option<String>,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(default)]
    pub items: Vec<Element>,
    pub style: Option<String>,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default)]
    pub items: Vec<Element>,
    pub width: Option<ColumnWidth>,
    #[serde(flatten)]
    pub props: CommonProps,
}

/// A column width specification: a keyword/pixel string or a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    Number(f64),
    Keyword(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub columns: Vec<TableColumn>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub width: Option<ColumnWidth>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(default)]
    pub items: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSet {
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(flatten)]
    pub props: CommonProps,
}

/// Input element variants. All carry an `id` used for value binding.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(TextInput),
    Number(NumberInput),
    Date(DateInput),
    Time(TimeInput),
    Toggle(ToggleInput),
    ChoiceSet(ChoiceSetInput),
}

impl Input {
    pub fn id(&self) -> &str {
        match self {
            Input::Text(input) => &input.id,
            Input::Number(input) => &input.id,
            Input::Date(input) => &input.id,
            Input::Time(input) => &input.id,
            Input::Toggle(input) => &input.id,
            Input::ChoiceSet(input) => &input.id,
        }
    }

    pub fn props(&self) -> &CommonProps {
        match self {
            Input::Text(input) => &input.props,
            Input::Number(input) => &input.props,
            Input::Date(input) => &input.props,
            Input::Time(input) => &input.props,
            Input::Toggle(input) => &input.props,
            Input::ChoiceSet(input) => &input.props,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Input::Text(_) => "Input.Text",
            Input::Number(_) => "Input.Number",
            Input::Date(_) => "Input.Date",
            Input::Time(_) => "Input.Time",
            Input::Toggle(_) => "Input.Toggle",
            Input::ChoiceSet(_) => "Input.ChoiceSet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    #[serde(default)]
    pub id: String,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub max_length: Option<u32>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInput {
    #[serde(default)]
    pub id: String,
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub placeholder: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInput {
    #[serde(default)]
    pub id: String,
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInput {
    #[serde(default)]
    pub id: String,
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub value: Option<String>,
    pub value_on: Option<String>,
    pub value_off: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceSetInput {
    #[serde(default)]
    pub id: String,
    pub value: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub is_multi_select: bool,
    pub style: Option<String>,
    pub placeholder: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(flatten)]
    pub props: CommonProps,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: String,
}

/// A user-activatable operation attached to a card or action set.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Submit(SubmitAction),
    OpenUrl(OpenUrlAction),
    ShowCard(ShowCardAction),
    Execute(ExecuteAction),
    Refresh(RefreshAction),
    Unknown { kind: String, properties: Value },
}

impl Action {
    pub fn title(&self) -> &str {
        match self {
            Action::Submit(action) => &action.title,
            Action::OpenUrl(action) => &action.title,
            Action::ShowCard(action) => &action.title,
            Action::Execute(action) => &action.title,
            Action::Refresh(action) => &action.title,
            Action::Unknown { .. } => "",
        }
    }

    pub fn style(&self) -> Option<&str> {
        match self {
            Action::Submit(action) => action.style.as_deref(),
            Action::OpenUrl(action) => action.style.as_deref(),
            Action::ShowCard(action) => action.style.as_deref(),
            Action::Execute(action) => action.style.as_deref(),
            Action::Refresh(action) => action.style.as_deref(),
            Action::Unknown { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Action::Submit(_) => "Action.Submit",
            Action::OpenUrl(_) => "Action.OpenUrl",
            Action::ShowCard(_) => "Action.ShowCard",
            Action::Execute(_) => "Action.Execute",
            Action::Refresh(_) => "Action.Refresh",
            Action::Unknown { kind, .. } => kind,
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match kind.as_str() {
            "Action.Submit" => serde_json::from_value(raw.clone()).map(Action::Submit),
            "Action.OpenUrl" => serde_json::from_value(raw.clone()).map(Action::OpenUrl),
            "Action.ShowCard" => serde_json::from_value(raw.clone()).map(Action::ShowCard),
            "Action.Execute" => serde_json::from_value(raw.clone()).map(Action::Execute),
            "Action.Refresh" => serde_json::from_value(raw.clone()).map(Action::Refresh),
            _ => return Ok(Action::Unknown { kind, properties: raw }),
        };

        parsed.map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAction {
    #[serde(default)]
    pub title: String,
    pub style: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlAction {
    #[serde(default)]
    pub title: String,
    pub style: Option<String>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCardAction {
    #[serde(default)]
    pub title: String,
    pub style: Option<String>,
    pub id: Option<String>,
    pub card: Option<Box<Document>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteAction {
    #[serde(default)]
    pub title: String,
    pub style: Option<String>,
    pub verb: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshAction {
    #[serde(default)]
    pub title: String,
    pub style: Option<String>,
    pub data: Option<Value>,
}
