//! Finds files that are open in more than one editor group.
//!
//! Tabs are matched by display name, not identity: two documents named `a.txt`
//! in different groups are duplicates of each other.  The focused document is
//! singled out as the active duplicate, and every other tab under a duplicated
//! name becomes an other duplicate.

use crate::state::decoration::{ChangeSet, DecorationState};
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet},
};
use tabtwin_api::{marker::MarkerKind, snapshot::Snapshot, tab::TabIdentity};

/// Owns the current decoration state, and replaces it on every recompute.
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    state: DecorationState,
}

impl DuplicateDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DecorationState {
        &self.state
    }

    /// Classifies the snapshot, stores the result, and returns every identity
    /// whose marker may have changed.
    ///
    /// The change set covers both the previous and the new decorations, so it
    /// can include identities whose marker stayed the same.
    pub fn recompute(&mut self, snapshot: &Snapshot, active: Option<&TabIdentity>) -> ChangeSet {
        let next = classify(snapshot, active);

        let changes = self
            .state
            .identities()
            .chain(next.identities())
            .cloned()
            .collect();

        self.state = next;
        ChangeSet(changes)
    }

    pub fn decoration_for(&self, identity: &TabIdentity) -> Option<MarkerKind> {
        self.state.decoration_for(identity)
    }
}

#[derive(Default)]
struct NameEntry<'s> {
    identities: BTreeSet<&'s TabIdentity>,
    groups: BTreeSet<usize>,
}

/// Computes the decorations for a snapshot, without reference to any previous state.
pub fn classify(snapshot: &Snapshot, active: Option<&TabIdentity>) -> DecorationState {
    let mut names: BTreeMap<Cow<str>, NameEntry> = BTreeMap::new();

    for (group, identity, name) in snapshot.documents() {
        let entry = names.entry(name).or_default();
        entry.identities.insert(identity);
        entry.groups.insert(group);
    }

    let active_name = active.and_then(TabIdentity::display_name);
    let mut state = DecorationState::default();

    for (name, entry) in names.iter() {
        if entry.groups.len() < 2 {
            continue;
        }

        if Some(name) == active_name.as_ref() {
            // siblings of the active tab stay unmarked, only the focused tab is highlighted
            let focused = entry
                .identities
                .iter()
                .filter(|identity| Some(**identity) == active);

            state
                .active_duplicates
                .extend(focused.map(|identity| (*identity).clone()));
        } else {
            state
                .other_duplicates
                .extend(entry.identities.iter().map(|identity| (*identity).clone()));
        }
    }

    state
}
