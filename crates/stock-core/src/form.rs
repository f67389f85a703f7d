//! # Form State
//!
//! The add/edit form: two text fields and the mode that decides which submit
//! button is live.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Form Modes                                       │
//! │                                                                         │
//! │        ┌──────────────┐   edit (row selected)   ┌──────────────────┐    │
//! │  ───►  │     Add      │ ──────────────────────► │  Edit { target } │    │
//! │        │ add: on      │                         │  add: off        │    │
//! │        │ update: off  │ ◄────────────────────── │  update: on      │    │
//! │        └──────────────┘   update ok / cancel /  └──────────────────┘    │
//! │               ▲           target deleted               │                │
//! │               │                                        │ edit again     │
//! │               └── add ok (form cleared)                └─► retarget     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This type only holds state. Deciding when to transition is the
//! dispatcher's job (see [`crate::controller`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Item;

/// Which submit action the form is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FormMode {
    /// New items are added; update is disabled.
    #[default]
    Add,
    /// The form holds an existing item; add is disabled.
    Edit {
        /// Pending-edit target: id of the item loaded into the form.
        target: i64,
    },
}

/// Form fields plus mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    quantity: String,
    mode: FormMode,
}

impl FormState {
    /// Creates an empty form in add mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Id of the item being edited, if any.
    pub fn pending_target(&self) -> Option<i64> {
        match self.mode {
            FormMode::Add => None,
            FormMode::Edit { target } => Some(target),
        }
    }

    pub fn add_enabled(&self) -> bool {
        matches!(self.mode, FormMode::Add)
    }

    pub fn update_enabled(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Replaces the field text with what the user typed.
    pub fn set_fields(&mut self, name: impl Into<String>, quantity: impl Into<String>) {
        self.name = name.into();
        self.quantity = quantity.into();
    }

    /// Loads `item` into the fields and enters edit mode targeting it.
    pub fn load(&mut self, item: &Item) {
        self.name = item.name.clone();
        self.quantity = item.quantity.to_string();
        self.mode = FormMode::Edit { target: item.id };
    }

    /// Empties both fields. The mode is left alone.
    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
    }

    /// Empties both fields and returns to add mode.
    pub fn reset(&mut self) {
        self.clear();
        self.mode = FormMode::Add;
    }

    /// Serializable view of the form for the frontend.
    pub fn view(&self) -> FormView {
        FormView {
            name: self.name.clone(),
            quantity: self.quantity.clone(),
            mode: self.mode,
            add_enabled: self.add_enabled(),
            update_enabled: self.update_enabled(),
        }
    }
}

/// What the frontend renders for the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub name: String,
    pub quantity: String,
    pub mode: FormMode,
    pub add_enabled: bool,
    pub update_enabled: bool,
}
