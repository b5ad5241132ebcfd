use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};
use url::Url;

/// The stable key of one open document, typically its canonical resource locator
#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TabIdentity(pub String);

impl TabIdentity {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The final path segment of the locator, used to match tabs across groups.
    ///
    /// URI segments are percent-decoded.  Locators that are not URIs are treated as plain paths.
    /// Returns None if the locator has no segment to display (e.g. `file:///`).
    pub fn display_name(&self) -> Option<Cow<'_, str>> {
        match Url::parse(self.as_str()) {
            // one-letter schemes are drive letters, e.g. `C:\dir\a.txt`
            Ok(url) if url.scheme().len() >= 2 => {
                let name = last_segment(url.path())?;
                let decoded = percent_decode_str(name).decode_utf8_lossy();
                Some(Cow::Owned(decoded.into_owned()))
            }
            _ => last_segment(self.as_str()).map(Cow::Borrowed),
        }
    }
}

impl fmt::Display for TabIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for TabIdentity {
    fn from(locator: &str) -> Self {
        TabIdentity(locator.to_string())
    }
}

impl From<String> for TabIdentity {
    fn from(locator: String) -> Self {
        TabIdentity(locator)
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn last_segment(path: &str) -> Option<&str> {
    let name = path
        .trim_end_matches(is_separator)
        .rsplit(is_separator)
        .next()
        .unwrap_or("");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
