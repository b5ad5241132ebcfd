use std::collections::BTreeSet;
use tabtwin_api::{marker::MarkerKind, tab::TabIdentity};

/// The identities that currently carry a duplicate marker.
///
/// The two sets are always disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationState {
    pub active_duplicates: BTreeSet<TabIdentity>,
    pub other_duplicates: BTreeSet<TabIdentity>,
}

impl DecorationState {
    pub fn decoration_for(&self, identity: &TabIdentity) -> Option<MarkerKind> {
        if self.active_duplicates.contains(identity) {
            Some(MarkerKind::ActiveDuplicate)
        } else if self.other_duplicates.contains(identity) {
            Some(MarkerKind::OtherDuplicate)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_duplicates.is_empty() && self.other_duplicates.is_empty()
    }

    /// Every decorated identity, in either set
    pub fn identities(&self) -> impl Iterator<Item = &TabIdentity> {
        self.active_duplicates
            .iter()
            .chain(self.other_duplicates.iter())
    }

    /// The identities whose marker differs between `previous` and this state
    pub fn diff(&self, previous: &DecorationState) -> ChangeSet {
        let identities = self
            .identities()
            .chain(previous.identities())
            .filter(|identity| self.decoration_for(identity) != previous.decoration_for(identity))
            .cloned()
            .collect();

        ChangeSet(identities)
    }
}

/// Identities whose decoration may need to be re-rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet(pub BTreeSet<TabIdentity>);

impl ChangeSet {
    pub fn contains(&self, identity: &TabIdentity) -> bool {
        self.0.contains(identity)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabIdentity> {
        self.0.iter()
    }
}

impl IntoIterator for ChangeSet {
    type Item = TabIdentity;
    type IntoIter = std::collections::btree_set::IntoIter<TabIdentity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
