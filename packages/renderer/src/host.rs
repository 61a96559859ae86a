//! The host boundary.

use crate::card::RenderError;
use cardstock_schema::Action;
use serde_json::Value;

/// Callbacks supplied by the embedding application. All methods default to
/// no-ops so a host only implements what it consumes.
///
/// The engine never awaits or retries on the host's behalf; anything
/// asynchronous a host does inside these callbacks is opaque to it.
pub trait CardHost {
    /// Invoked exactly once per user-triggered action dispatch.
    fn on_action(&mut self, _action: &Action, _payload: Option<Value>) {}

    /// Invoked exactly once per committed user edit to an input.
    fn on_input_change(&mut self, _id: &str, _value: &Value) {}

    /// Invoked on whole-card failures (parse, validation, render).
    fn on_error(&mut self, _error: &RenderError) {}

    /// Request that the host environment open a URL in a new,
    /// non-opener-linked context. Fire and forget.
    fn open_url(&mut self, _url: &str) {}
}

/// A host that ignores everything.
pub struct NullHost;

impl CardHost for NullHost {}
