//! Card renderer entry point and interaction state machine.
//!
//! A [`CardInstance`] owns everything one live rendering of one document
//! needs: the document, the host config, the form and disclosure state, the
//! action slot registry, and the child instances backing expanded ShowCard
//! actions. Two instances of the same document share nothing.
//!
//! Failure handling follows a strict boundary: renderer steps propagate
//! `Err` upward and only this entry point converts a failure into the
//! whole-card error presentation. The one locally recoverable case, an
//! unknown element kind, never reaches here - it degrades to an inline stub
//! inside [`crate::render`].

use crate::actions::{render_action, submit_payload};
use crate::host::CardHost;
use crate::host_config::HostConfig;
use crate::ptree::{InputBinding, PresentationTree, SlotRef};
use crate::render::{render_element, RenderContext};
use crate::state::{DisclosureState, FormState};
use cardstock_schema::{Action, Document, ParseError};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to parse card document: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid card document: {0}")]
    Validation(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("no action is registered for slot {index} at path {path:?}")]
    UnknownSlot { path: Vec<String>, index: usize },

    #[error("no live card instance at disclosure path {path:?}")]
    UnknownPath { path: Vec<String> },
}

/// One registered action: what to dispatch when its control is activated.
#[derive(Debug, Clone)]
pub struct ActionSlot {
    pub action: Action,
    /// ShowCard only: the disclosure identifier toggled on dispatch.
    pub disclosure_id: Option<String>,
}

/// One live rendering of one card document.
pub struct CardInstance {
    document: Document,
    config: HostConfig,
    /// Disclosure-id chain from the root instance; empty at the root.
    path: Vec<String>,
    form: FormState,
    disclosure: DisclosureState,
    /// Rebuilt on every render pass, in document order.
    slots: Vec<ActionSlot>,
    /// Live nested instances for expanded ShowCard actions.
    children: HashMap<String, CardInstance>,
}

impl CardInstance {
    /// Create an instance with fresh interaction state.
    pub fn new(document: Document, config: HostConfig) -> Self {
        Self::nested(document, config, Vec::new())
    }

    /// Parse card JSON and create an instance. A parse failure is a
    /// whole-card failure, logged here; callers holding a host should
    /// prefer [`Self::from_json_with`] so the host hears about it.
    pub fn from_json(json: &str, config: HostConfig) -> RenderResult<Self> {
        match cardstock_schema::parse(json) {
            Ok(document) => Ok(Self::new(document, config)),
            Err(error) => {
                let error = RenderError::from(error);
                warn!(error = %error, "Card parse failed");
                Err(error)
            }
        }
    }

    /// Like [`from_json`](Self::from_json), but reports a parse failure to
    /// the host's `on_error` hook and hands back the whole-card error
    /// presentation in place of an instance.
    pub fn from_json_with(
        json: &str,
        config: HostConfig,
        host: &mut dyn CardHost,
    ) -> Result<Self, PresentationTree> {
        match cardstock_schema::parse(json) {
            Ok(document) => Ok(Self::new(document, config)),
            Err(error) => {
                let error = RenderError::from(error);
                host.on_error(&error);
                Err(PresentationTree::error_card(error.to_string()))
            }
        }
    }

    pub(crate) fn nested(document: Document, config: HostConfig, path: Vec<String>) -> Self {
        Self {
            document,
            config,
            path,
            form: FormState::new(),
            disclosure: DisclosureState::new(),
            slots: Vec::new(),
            children: HashMap::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current form value for an input id, if any render has seeded it.
    pub fn form_value(&self, id: &str) -> Option<&Value> {
        self.form.get(id)
    }

    /// Render the document to a presentation tree. Whole-card failures
    /// produce a single error presentation and a log entry.
    pub fn render(&mut self) -> PresentationTree {
        match self.try_render() {
            Ok(tree) => tree,
            Err(error) => {
                warn!(error = %error, "Card render failed");
                PresentationTree::error_card(error.to_string())
            }
        }
    }

    /// Like [`render`](Self::render), but reports whole-card failures to
    /// the host's `on_error` hook instead of only logging.
    pub fn render_with(&mut self, host: &mut dyn CardHost) -> PresentationTree {
        match self.try_render() {
            Ok(tree) => tree,
            Err(error) => {
                host.on_error(&error);
                PresentationTree::error_card(error.to_string())
            }
        }
    }

    #[instrument(skip(self), fields(body = self.document.body.len(), actions = self.document.actions.len()))]
    fn try_render(&mut self) -> RenderResult<PresentationTree> {
        let validation = self.document.validate();
        if !validation.is_valid {
            // Fail fast: no partial tree for an invalid document.
            let first = validation
                .errors
                .first()
                .map(|error| error.message.clone())
                .unwrap_or_else(|| "unknown validation error".to_string());
            return Err(RenderError::Validation(first));
        }

        self.slots.clear();
        let mut ctx = RenderContext {
            config: &self.config,
            form: &mut self.form,
            disclosure: &self.disclosure,
            slots: &mut self.slots,
            children: &mut self.children,
            path: &self.path,
            showcard_counter: 0,
        };

        let mut tree = PresentationTree::new();
        for (index, element) in self.document.body.iter().enumerate() {
            tree.body.push(render_element(element, &mut ctx, index)?);
        }
        for action in &self.document.actions {
            tree.actions.push(render_action(action, &mut ctx)?);
        }

        info!(
            body = tree.body.len(),
            actions = tree.actions.len(),
            "Card render complete"
        );
        Ok(tree)
    }

    /// Commit a user edit to an input. Writes the form-state entry for the
    /// binding's id, then notifies the host exactly once.
    pub fn set_input(
        &mut self,
        binding: &InputBinding,
        value: Value,
        host: &mut dyn CardHost,
    ) -> RenderResult<()> {
        let instance = self.resolve(&binding.path)?;
        instance.form.set(binding.id.clone(), value.clone());
        host.on_input_change(&binding.id, &value);
        Ok(())
    }

    /// Dispatch a user-activated action control.
    pub fn activate(&mut self, slot: &SlotRef, host: &mut dyn CardHost) -> RenderResult<()> {
        let instance = self.resolve(&slot.path)?;
        instance.dispatch(slot.index, host)
    }

    /// Walk the disclosure-id chain down to the instance it names.
    fn resolve(&mut self, path: &[String]) -> RenderResult<&mut CardInstance> {
        let relative = path
            .strip_prefix(self.path.as_slice())
            .ok_or_else(|| RenderError::UnknownPath {
                path: path.to_vec(),
            })?;

        let mut instance = self;
        for id in relative {
            instance = instance
                .children
                .get_mut(id)
                .ok_or_else(|| RenderError::UnknownPath {
                    path: path.to_vec(),
                })?;
        }
        Ok(instance)
    }

    fn dispatch(&mut self, index: usize, host: &mut dyn CardHost) -> RenderResult<()> {
        let slot = self
            .slots
            .get(index)
            .cloned()
            .ok_or_else(|| RenderError::UnknownSlot {
                path: self.path.clone(),
                index,
            })?;

        debug!(kind = %slot.action.kind_name(), index, "Dispatching action");

        match &slot.action {
            Action::Submit(submit) => {
                let payload = submit_payload(self.form.snapshot(), submit.data.as_ref());
                host.on_action(&slot.action, Some(Value::Object(payload)));
            }
            Action::Execute(execute) => {
                let payload = submit_payload(self.form.snapshot(), execute.data.as_ref());
                host.on_action(&slot.action, Some(Value::Object(payload)));
            }
            Action::Refresh(refresh) => {
                let payload = submit_payload(self.form.snapshot(), refresh.data.as_ref());
                host.on_action(&slot.action, Some(Value::Object(payload)));
            }
            Action::OpenUrl(open_url) => {
                host.open_url(&open_url.url);
                host.on_action(&slot.action, None);
            }
            Action::ShowCard(show_card) => {
                // Invariant: render_action stamps a disclosure id on every
                // ShowCard slot, and validation rejects a card-less
                // ShowCard, so neither error arm fires for a slot registry
                // built by a render pass. Errors rather than panics so a
                // malformed registry cannot take the host down.
                let id = slot.disclosure_id.clone().ok_or_else(|| {
                    RenderError::Render("ShowCard slot has no disclosure id".to_string())
                })?;
                let expanded = self.disclosure.toggle(&id);
                if expanded {
                    let card = show_card.card.clone().ok_or_else(|| {
                        RenderError::Render("ShowCard carries no card".to_string())
                    })?;
                    let mut child_path = self.path.clone();
                    child_path.push(id.clone());
                    // A fresh instance every expand: collapsing discarded
                    // the previous one, nested form state and all.
                    self.children.insert(
                        id,
                        CardInstance::nested(*card, self.config.clone(), child_path),
                    );
                } else {
                    self.children.remove(&id);
                }
            }
            Action::Unknown { kind, .. } => {
                warn!(kind = %kind, "Activated unknown action kind");
                host.on_action(&slot.action, None);
            }
        }

        Ok(())
    }
}
