use serde::{Deserialize, Serialize};

/// Which decoration a duplicated tab receives
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// The focused tab, when its file is also open in another group
    ActiveDuplicate,
    /// Any other tab whose file is open in more than one group
    OtherDuplicate,
}

/// The decoration a host renders on a duplicated tab
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub badge: String,
    pub tooltip: String,
    /// A theme color id.  Only active duplicates carry one.
    pub color: Option<String>,
}
