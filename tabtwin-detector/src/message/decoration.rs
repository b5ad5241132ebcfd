use crate::state::decoration::ChangeSet;
use tabtwin_api::tab::TabIdentity;

/// Sent by the host whenever the focused tab changes, and once at startup.
/// None if no document has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTabChanged(pub Option<TabIdentity>);

/// Published after each recompute, once the new DecorationState is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationsChanged(pub ChangeSet);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorShutdown {}
