use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// the sidebar structure of the theme
///
/// two shapes are accepted: an explicit ordered list of groups, or a mapping
/// from a route prefix to the ordered page identifiers below it
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Sidebar {
    Groups(Vec<SidebarGroup>),
    ByPrefix(BTreeMap<String, Vec<String>>),
}

/// one collapsible section of the sidebar
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SidebarGroup {
    pub title: String,

    /// route prefix the section lands on, e.g. `/js`
    pub path: String,

    #[serde(default = "default_collapsable")]
    pub collapsable: bool,

    /// how many heading levels of each page the sidebar expands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_depth: Option<u8>,

    /// ordered page identifiers, the ordering defines the render order
    pub children: Vec<String>,
}

fn default_collapsable() -> bool {
    true
}
