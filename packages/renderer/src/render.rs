//! Element rendering: the recursive dispatcher.
//!
//! Every container-shaped kind (container, column, table cell, action set)
//! routes its children back through [`render_element`], so spacing and input
//! binding behave identically at every nesting depth. There is deliberately
//! no second rendering path.

use crate::actions::render_action;
use crate::card::{ActionSlot, CardInstance, RenderResult};
use crate::columns::resolve_column_width;
use crate::host_config::HostConfig;
use crate::ptree::{
    ChoiceMode, InputBinding, InputControl, PChoice, PColumn, PFact, PNode, PTableRow, PTextRun,
};
use crate::state::{DisclosureState, FormState};
use crate::style;
use cardstock_schema::{
    ChoiceSetInput, ColumnSet, CommonProps, Container, Element, FactSet, Image, ImageSet, Inline,
    Input, RichTextBlock, Table, TextBlock, ToggleInput,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Ambient state for one render pass. Built once per pass by the card
/// renderer entry point and threaded through the recursion.
pub struct RenderContext<'a> {
    pub config: &'a HostConfig,
    pub form: &'a mut FormState,
    pub disclosure: &'a DisclosureState,
    pub slots: &'a mut Vec<ActionSlot>,
    pub children: &'a mut HashMap<String, CardInstance>,
    /// Disclosure-id chain from the root instance to the one rendering.
    pub path: &'a [String],
    /// Counter for deterministic generated ShowCard identifiers.
    pub showcard_counter: usize,
}

impl<'a> RenderContext<'a> {
    pub fn next_showcard_id(&mut self) -> String {
        let id = format!("showcard-{}", self.showcard_counter);
        self.showcard_counter += 1;
        id
    }
}

/// Leading spacing for a child at `index` in its sequence. The first child
/// never receives leading spacing.
fn leading_spacing(ctx: &RenderContext, props: &CommonProps, index: usize) -> u32 {
    if index == 0 {
        0
    } else {
        style::spacing(ctx.config, props.spacing.as_deref())
    }
}

/// Render one element to a presentation node.
pub fn render_element(element: &Element, ctx: &mut RenderContext, index: usize) -> RenderResult<PNode> {
    match element {
        Element::TextBlock(block) => Ok(render_text_block(block, ctx, index)),
        Element::RichTextBlock(block) => Ok(render_rich_text(block, ctx, index)),
        Element::Image(image) => Ok(render_image(image, ctx, index, None)),
        Element::ImageSet(set) => Ok(render_image_set(set, ctx, index)),
        Element::Container(container) => render_container(container, ctx, index),
        Element::ColumnSet(set) => render_column_set(set, ctx, index),
        Element::FactSet(set) => Ok(render_fact_set(set, ctx, index)),
        Element::Table(table) => render_table(table, ctx, index),
        Element::ActionSet(set) => {
            let spacing_top = leading_spacing(ctx, &set.props, index);
            let mut controls = Vec::with_capacity(set.actions.len());
            for action in &set.actions {
                controls.push(render_action(action, ctx)?);
            }
            Ok(PNode::ActionSet {
                controls,
                spacing_top,
                separator: set.props.separator,
            })
        }
        Element::Input(input) => Ok(render_input(input, ctx, index)),
        Element::Unknown { kind, properties } => {
            // Forward-compatibility contract: an unknown kind renders a
            // visible stub and never aborts its siblings. The shared
            // presentation attributes still apply, read off the raw payload.
            warn!(kind = %kind, "Unknown element kind, rendering diagnostic stub");
            let spacing_token = properties.get("spacing").and_then(Value::as_str);
            Ok(PNode::Unknown {
                kind: kind.clone(),
                properties: properties.clone(),
                spacing_top: if index == 0 {
                    0
                } else {
                    style::spacing(ctx.config, spacing_token)
                },
            })
        }
    }
}

fn render_text_block(block: &TextBlock, ctx: &mut RenderContext, index: usize) -> PNode {
    PNode::Text {
        content: block.text.clone(),
        size: style::font_size(ctx.config, block.props.size.as_deref()),
        weight: style::font_weight(ctx.config, block.props.weight.as_deref()),
        color: style::foreground_color(ctx.config, block.props.color.as_deref(), block.is_subtle),
        wrap: block.wrap,
        align: style::alignment(block.props.horizontal_alignment.as_deref()),
        spacing_top: leading_spacing(ctx, &block.props, index),
        separator: block.props.separator,
    }
}

fn render_rich_text(block: &RichTextBlock, ctx: &mut RenderContext, index: usize) -> PNode {
    let runs = block
        .inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => PTextRun {
                text: text.clone(),
                size: style::font_size(ctx.config, None),
                weight: style::font_weight(ctx.config, None),
                color: style::foreground_color(ctx.config, None, false),
            },
            Inline::Run(run) => PTextRun {
                text: run.text.clone(),
                size: style::font_size(ctx.config, run.size.as_deref()),
                weight: style::font_weight(ctx.config, run.weight.as_deref()),
                color: style::foreground_color(ctx.config, run.color.as_deref(), run.is_subtle),
            },
        })
        .collect();

    PNode::RichText {
        runs,
        align: style::alignment(block.props.horizontal_alignment.as_deref()),
        spacing_top: leading_spacing(ctx, &block.props, index),
        separator: block.props.separator,
    }
}

fn render_image(
    image: &Image,
    ctx: &mut RenderContext,
    index: usize,
    size_override: Option<&str>,
) -> PNode {
    let size_token = image.image_size.as_deref().or(size_override);
    PNode::Image {
        url: image.url.clone(),
        alt_text: image.alt_text.clone(),
        pixel_size: style::image_size(ctx.config, size_token),
        align: style::alignment(image.props.horizontal_alignment.as_deref()),
        spacing_top: leading_spacing(ctx, &image.props, index),
        separator: image.props.separator,
    }
}

fn render_image_set(set: &ImageSet, ctx: &mut RenderContext, index: usize) -> PNode {
    let spacing_top = leading_spacing(ctx, &set.props, index);
    let images = set
        .images
        .iter()
        .map(|image| render_image(image, ctx, 0, set.image_size.as_deref()))
        .collect();
    PNode::ImageSet {
        images,
        spacing_top,
        separator: set.props.separator,
    }
}

fn render_container(
    container: &Container,
    ctx: &mut RenderContext,
    index: usize,
) -> RenderResult<PNode> {
    let spacing_top = leading_spacing(ctx, &container.props, index);
    let mut children = Vec::with_capacity(container.items.len());
    for (child_index, item) in container.items.iter().enumerate() {
        children.push(render_element(item, ctx, child_index)?);
    }
    Ok(PNode::Container {
        style: container.style.clone(),
        children,
        spacing_top,
        separator: container.props.separator,
    })
}

fn render_column_set(set: &ColumnSet, ctx: &mut RenderContext, index: usize) -> RenderResult<PNode> {
    let spacing_top = leading_spacing(ctx, &set.props, index);
    let mut columns = Vec::with_capacity(set.columns.len());
    for column in &set.columns {
        let mut children = Vec::with_capacity(column.items.len());
        for (child_index, item) in column.items.iter().enumerate() {
            children.push(render_element(item, ctx, child_index)?);
        }
        columns.push(PColumn {
            size: resolve_column_width(column.width.as_ref()),
            children,
        });
    }
    Ok(PNode::ColumnSet {
        columns,
        spacing_top,
        separator: set.props.separator,
    })
}

fn render_fact_set(set: &FactSet, ctx: &mut RenderContext, index: usize) -> PNode {
    PNode::FactSet {
        facts: set
            .facts
            .iter()
            .map(|fact| PFact {
                title: fact.title.clone(),
                value: fact.value.clone(),
            })
            .collect(),
        spacing_top: leading_spacing(ctx, &set.props, index),
        separator: set.props.separator,
    }
}

fn render_table(table: &Table, ctx: &mut RenderContext, index: usize) -> RenderResult<PNode> {
    let spacing_top = leading_spacing(ctx, &table.props, index);
    let widths = table
        .columns
        .iter()
        .map(|column| resolve_column_width(column.width.as_ref()))
        .collect();

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut cells = Vec::with_capacity(row.cells.len());
        for cell in &row.cells {
            // Cells route through the same entry point as body elements.
            let mut children = Vec::with_capacity(cell.items.len());
            for (child_index, item) in cell.items.iter().enumerate() {
                children.push(render_element(item, ctx, child_index)?);
            }
            cells.push(PNode::Container {
                style: None,
                children,
                spacing_top: 0,
                separator: false,
            });
        }
        rows.push(PTableRow { cells });
    }

    Ok(PNode::Table {
        widths,
        rows,
        spacing_top,
        separator: table.props.separator,
    })
}

fn render_input(input: &Input, ctx: &mut RenderContext, index: usize) -> PNode {
    let props = input.props();
    let spacing_top = leading_spacing(ctx, props, index);

    let (control, default, required) = match input {
        Input::Text(text) => (
            InputControl::Text {
                placeholder: text.placeholder.clone(),
                max_length: text.max_length,
            },
            Value::String(text.value.clone().unwrap_or_default()),
            text.is_required,
        ),
        Input::Number(number) => (
            InputControl::Number {
                placeholder: number.placeholder.clone(),
                min: number.min,
                max: number.max,
            },
            number
                .value
                .and_then(|v| serde_json::Number::from_f64(v).map(Value::Number))
                .unwrap_or(Value::Null),
            number.is_required,
        ),
        Input::Date(date) => (
            InputControl::Date {
                min: date.min.clone(),
                max: date.max.clone(),
            },
            Value::String(date.value.clone().unwrap_or_default()),
            date.is_required,
        ),
        Input::Time(time) => (
            InputControl::Time {
                min: time.min.clone(),
                max: time.max.clone(),
            },
            Value::String(time.value.clone().unwrap_or_default()),
            time.is_required,
        ),
        Input::Toggle(toggle) => {
            let (value_on, value_off) = toggle_values(toggle);
            let default = Value::String(
                toggle.value.clone().unwrap_or_else(|| value_off.clone()),
            );
            (
                InputControl::Toggle {
                    title: toggle.title.clone(),
                    value_on,
                    value_off,
                    checked: false, // filled in below, from the live value
                },
                default,
                toggle.is_required,
            )
        }
        Input::ChoiceSet(choice_set) => {
            let mode = match choice_set
                .style
                .as_deref()
                .map(str::to_ascii_lowercase)
                .as_deref()
            {
                Some("expanded") => ChoiceMode::Expanded,
                Some("filtered") => {
                    // Recognized variant, intentionally unimplemented.
                    // Distinct from the unknown-kind stub.
                    debug!(id = %choice_set.id, "Filtered choice set requested");
                    return PNode::Unsupported {
                        message: format!(
                            "Input.ChoiceSet \"{}\": the \"filtered\" style is not yet supported",
                            choice_set.id
                        ),
                        spacing_top,
                    };
                }
                // Absent or unrecognized style degrades to compact.
                _ => ChoiceMode::Compact,
            };
            (
                InputControl::Choice {
                    mode,
                    multi_select: choice_set.is_multi_select,
                    choices: choice_set
                        .choices
                        .iter()
                        .map(|choice| PChoice {
                            title: choice.title.clone(),
                            value: choice.value.clone(),
                        })
                        .collect(),
                    placeholder: choice_set.placeholder.clone(),
                },
                choice_set_default(choice_set),
                choice_set.is_required,
            )
        }
    };

    // First render seeds the document default; later renders read back
    // whatever the user wrote.
    ctx.form.seed(input.id(), default);
    let value = ctx
        .form
        .get(input.id())
        .cloned()
        .unwrap_or(Value::Null);

    let control = match control {
        InputControl::Toggle {
            title,
            value_on,
            value_off,
            ..
        } => {
            let checked = value.as_str() == Some(value_on.as_str());
            InputControl::Toggle {
                title,
                value_on,
                value_off,
                checked,
            }
        }
        other => other,
    };

    PNode::Input {
        binding: InputBinding {
            path: ctx.path.to_vec(),
            id: input.id().to_string(),
        },
        control,
        required,
        value,
        spacing_top,
        separator: props.separator,
    }
}

fn toggle_values(toggle: &ToggleInput) -> (String, String) {
    (
        toggle.value_on.clone().unwrap_or_else(|| "true".to_string()),
        toggle.value_off.clone().unwrap_or_else(|| "false".to_string()),
    )
}

/// Default value for a choice set. Multi-select values are a set of choice
/// identifiers (wire format: comma-separated), single-select is one scalar.
fn choice_set_default(choice_set: &ChoiceSetInput) -> Value {
    if choice_set.is_multi_select {
        let selected: Vec<Value> = choice_set
            .value
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Value::String(part.to_string()))
            .collect();
        Value::Array(selected)
    } else {
        Value::String(choice_set.value.clone().unwrap_or_default())
    }
}
