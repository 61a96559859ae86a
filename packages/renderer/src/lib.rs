//! # Cardstock Renderer
//!
//! Renders a validated card document into a presentation tree and manages
//! the interaction state that document produces while a user works with it:
//! typed input, action activation, nested-card disclosure.
//!
//! ## Shape of the engine
//!
//! - [`style`] and [`columns`]: pure token resolution. Unknown tokens
//!   degrade to documented defaults, never fail.
//! - [`state`]: the per-instance form and disclosure stores.
//! - [`render`]: the recursive element dispatcher. Containers, columns,
//!   table cells, and action sets all route children through the single
//!   `render_element` entry point.
//! - [`actions`]: the action render-trigger path and Submit payload merge.
//! - [`card`]: the entry point. [`CardInstance`] owns one live rendering;
//!   interaction comes back through [`CardInstance::activate`] and
//!   [`CardInstance::set_input`] with the references stamped on the tree.
//!
//! ## Determinism
//!
//! Rendering is synchronous and deterministic: same document + same
//! interaction state produces the same tree, including generated ShowCard
//! identifiers (counter-based, reset per pass) and form snapshots (sorted
//! keys). Hosts may re-render at any time without state drift.
//!
//! ## Failure boundary
//!
//! Renderer steps propagate `Err`; only the [`card`] entry point converts a
//! failure into a whole-card error presentation. Unknown element kinds are
//! not failures - they degrade to inline diagnostic stubs and their
//! siblings keep rendering.

pub mod actions;
pub mod card;
pub mod columns;
pub mod host;
pub mod host_config;
pub mod ptree;
pub mod render;
pub mod state;
pub mod style;

pub use card::{ActionSlot, CardInstance, RenderError, RenderResult};
pub use columns::{resolve_column_width, ColumnSize};
pub use host::{CardHost, NullHost};
pub use host_config::{HostConfig, Theme};
pub use ptree::{
    ChoiceMode, InputBinding, InputControl, PChoice, PColumn, PFact, PNode, PTableRow, PTextRun,
    PresentationTree, SlotRef,
};
pub use state::{DisclosureState, FormState};
pub use style::{ActionStyle, Alignment};

#[cfg(test)]
mod tests_render;

#[cfg(test)]
mod tests_inputs;
