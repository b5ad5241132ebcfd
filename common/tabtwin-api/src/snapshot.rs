use crate::tab::TabIdentity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The input behind a single tab.  Only documents take part in duplicate detection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TabInput {
    Document(TabIdentity),
    /// Settings pages, terminals, diff views, and other tabs without a single backing document
    Other(String),
}

/// An ordered collection of tabs, such as one split editor pane
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TabGroup {
    #[serde(default)]
    pub tabs: Vec<TabInput>,
}

impl TabGroup {
    pub fn new(tabs: Vec<TabInput>) -> Self {
        Self { tabs }
    }

    /// A group containing one document tab per locator
    pub fn documents<I, S>(locators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TabIdentity>,
    {
        let tabs = locators
            .into_iter()
            .map(|locator| TabInput::Document(locator.into()))
            .collect();

        Self { tabs }
    }
}

/// All open groups, captured at one point in time
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub groups: Vec<TabGroup>,
}

impl Snapshot {
    pub fn new(groups: Vec<TabGroup>) -> Self {
        Self { groups }
    }

    /// Parses a snapshot from its YAML representation
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Every resolvable document, paired with the index of the group that contains it.
    ///
    /// Non-document tabs, and documents without a display name, are skipped.
    pub fn documents(&self) -> impl Iterator<Item = (usize, &TabIdentity, Cow<'_, str>)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(index, group)| group.tabs.iter().map(move |tab| (index, tab)))
            .filter_map(|(index, tab)| match tab {
                TabInput::Document(identity) => identity
                    .display_name()
                    .map(|name| (index, identity, name)),
                TabInput::Other(_) => None,
            })
    }
}
