//! Action rendering and Submit payload assembly.
//!
//! Rendering an action produces an activatable control and registers the
//! action in the owning instance's slot registry; nothing is dispatched
//! until the host routes a user activation back through
//! [`crate::CardInstance::activate`].

use crate::card::{ActionSlot, CardInstance, RenderResult};
use crate::ptree::{PNode, SlotRef};
use crate::render::RenderContext;
use crate::style;
use cardstock_schema::Action;
use serde_json::{Map, Value};
use tracing::debug;

/// Render one action as an activatable control.
pub fn render_action(action: &Action, ctx: &mut RenderContext) -> RenderResult<PNode> {
    let index = ctx.slots.len();
    let slot = SlotRef {
        path: ctx.path.to_vec(),
        index,
    };

    let mut disclosure_id = None;
    let mut expanded = None;

    if let Action::ShowCard(show_card) = action {
        // A ShowCard without an explicit id gets a deterministic one,
        // stable across re-renders of the same document instance.
        let id = show_card
            .id
            .clone()
            .unwrap_or_else(|| ctx.next_showcard_id());

        if ctx.disclosure.is_expanded(&id) {
            if let Some(card) = &show_card.card {
                let child = ctx.children.entry(id.clone()).or_insert_with(|| {
                    debug!(id = %id, "Materializing expanded nested card");
                    let mut child_path = ctx.path.to_vec();
                    child_path.push(id.clone());
                    CardInstance::nested((**card).clone(), ctx.config.clone(), child_path)
                });
                // Nested card re-enters the card renderer entry point; it
                // owns its own form and disclosure state.
                expanded = Some(Box::new(child.render()));
            }
        }
        disclosure_id = Some(id);
    }

    ctx.slots.push(ActionSlot {
        action: action.clone(),
        disclosure_id,
    });

    let title = match action {
        // Unknown actions surface whatever title the payload carries.
        Action::Unknown { properties, .. } => properties
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => action.title().to_string(),
    };

    Ok(PNode::ActionControl {
        title,
        style: style::action_style(action.style()),
        kind: action.kind_name().to_string(),
        slot,
        expanded,
    })
}

/// Merge the form-state snapshot with an action's static data payload.
///
/// Contract: the static payload wins on key conflicts. The two legacy
/// renderers disagreed on this; this is the unified direction.
pub fn submit_payload(snapshot: Map<String, Value>, data: Option<&Value>) -> Map<String, Value> {
    let mut payload = snapshot;
    if let Some(Value::Object(overrides)) = data {
        for (key, value) in overrides {
            payload.insert(key.clone(), value.clone());
        }
    }
    payload
}
