use serde::{Deserialize, Serialize};

use super::{NavEntry, Plugin, Sidebar};

/// the top level site configuration
/// read once at build time and never mutated afterwards
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// display title of the site
    pub title: String,

    /// display description of the site
    pub description: String,

    /// plugin activation directives, in activation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,

    /// navigation and sidebar structure passed to the theme
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// top navigation entries, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<Sidebar>,
}
