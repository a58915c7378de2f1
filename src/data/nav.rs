use serde::{Deserialize, Serialize};

/// one top navigation item
/// an entry is either a direct link or a submenu, never both
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    Link(NavLink),
    Menu(NavMenu),
}

impl NavEntry {
    pub fn text(&self) -> &str {
        match self {
            NavEntry::Link(link) => &link.text,
            NavEntry::Menu(menu) => &menu.text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavMenu {
    pub text: String,
    pub items: Vec<NavEntry>,
}
