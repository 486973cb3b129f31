//! Navigation bar and sidebar entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A direct link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// A dropdown grouping further entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavDropdown {
    pub text: String,
    pub items: Vec<NavEntry>,
}

/// A navigation entry: either a direct link or a dropdown of entries.
///
/// Order is significant; entries render left-to-right (nav) or
/// top-to-bottom (sidebar). An entry matching neither shape exactly is
/// rejected, so `{ text, link, items }` is an error rather than a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    Link(NavLink),
    Dropdown(NavDropdown),
}

impl NavEntry {
    /// Create a direct link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(NavLink {
            text: text.into(),
            link: link.into(),
        })
    }

    /// Create a dropdown entry.
    pub fn dropdown(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self::Dropdown(NavDropdown {
            text: text.into(),
            items,
        })
    }

    /// Display text.
    pub fn text(&self) -> &str {
        match self {
            Self::Link(NavLink { text, .. }) | Self::Dropdown(NavDropdown { text, .. }) => text,
        }
    }

    /// Target of a direct link, `None` for dropdowns.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(&link.link),
            Self::Dropdown(_) => None,
        }
    }

    /// Visit this entry and every nested entry, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a NavEntry)) {
        visit(self);
        if let Self::Dropdown(dropdown) = self {
            for item in &dropdown.items {
                item.walk(visit);
            }
        }
    }
}

/// A titled group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Group heading
    pub text: String,

    /// Whether the group starts collapsed (`None` means not collapsible)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    /// Entries in display order
    pub items: Vec<NavEntry>,
}

impl SidebarGroup {
    /// Create an expanded group.
    pub fn new(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            collapsed: None,
            items,
        }
    }
}

/// Sidebar groups keyed by the URL-path prefix they apply to.
pub type Sidebar = BTreeMap<String, Vec<SidebarGroup>>;

/// Collect every `(text, link)` pair reachable from a list of entries, in order.
pub fn flatten_links(entries: &[NavEntry]) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    for entry in entries {
        entry.walk(&mut |e| {
            if let NavEntry::Link(link) = e {
                out.push((link.text.as_str(), link.link.as_str()));
            }
        });
    }
    out
}
