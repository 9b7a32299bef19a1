//! Workflow state machines
//!
//! One generic engine, four per-entity transition tables. A table row names
//! the source status, the action, the target status, the roles allowed to
//! trigger it, and the side effect the transition carries. Admin is
//! implicitly allowed on every row.

pub mod auction;
pub mod disposal;
pub mod executor;
pub mod maintenance;
pub mod transfer;

use crate::entity::user::Role;
use crate::error::AppResult;
use crate::policy::LocationScoped;

/// Side effect attached to a transition, executed by the executor after the
/// status commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Permanently delete the referenced asset
    DeleteAsset,
    /// Move the referenced asset to the record's destination location
    RelocateAsset,
}

/// One row of a transition table.
#[derive(Debug)]
pub struct Transition {
    pub from: &'static str,
    pub action: &'static str,
    pub to: &'static str,
    /// Roles allowed to trigger this transition; admin is always allowed,
    /// so an empty list means admin-only.
    pub roles: &'static [Role],
    pub effect: Option<Effect>,
    /// The transition is only meaningful while the referenced asset exists
    /// (reopening past a deleting effect).
    pub needs_live_asset: bool,
}

impl Transition {
    pub fn allows(&self, role: Role) -> bool {
        role == Role::Admin || self.roles.contains(&role)
    }
}

/// A complete per-entity state machine definition.
#[derive(Debug)]
pub struct WorkflowDef {
    pub entity: &'static str,
    pub states: &'static [&'static str],
    pub initial: &'static str,
    /// States with no default forward path. Soft label: a reopen row may
    /// still leave them.
    pub terminal: &'static [&'static str],
    pub transitions: &'static [Transition],
}

impl WorkflowDef {
    pub fn find(&self, from: &str, action: &str) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == from && t.action == action)
    }

    pub fn is_terminal(&self, state: &str) -> bool {
        self.terminal.contains(&state)
    }

    /// Actions the given role may trigger from `from`. Drives action menus.
    pub fn available_actions(&self, role: Role, from: &str) -> Vec<&'static str> {
        self.transitions
            .iter()
            .filter(|t| t.from == from && t.allows(role))
            .map(|t| t.action)
            .collect()
    }
}

/// Behavior every workflow record shares: a status drawn from its entity's
/// closed state set, a reference to the asset that gates it, and the table
/// that governs its transitions.
pub trait WorkflowRecord: LocationScoped {
    const KIND: &'static str;

    fn id(&self) -> i64;

    fn asset_id(&self) -> Option<i64>;

    fn status_tag(&self) -> &'static str;

    /// Set the status from its wire tag; fails on a tag outside the entity's
    /// state set.
    fn set_status_tag(&mut self, tag: &str) -> AppResult<()>;

    fn definition() -> &'static WorkflowDef;

    /// Actor that created the record, for notification routing.
    fn created_by(&self) -> Option<i64>;

    fn asset_name(&self) -> Option<&str>;

    /// Destination for [`Effect::RelocateAsset`]; only transfers have one.
    fn relocation_target(&self) -> Option<&str> {
        None
    }

    /// Display name of the referenced asset, with the orphan fallback.
    fn asset_display_name(&self) -> &str {
        self.asset_name().unwrap_or("Unknown Asset")
    }
}
