use std::collections::HashSet;
use std::fmt;

use crate::data::{NavEntry, Sidebar, SiteConfig};

/// a single shape violation found in a configuration
///
/// `location` is a dotted path into the configuration, e.g.
/// `theme_config.sidebar[1].children`
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub location: String,
    pub message: String,
}

impl Issue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Checks the shape of a parsed configuration and collects
/// every violation instead of stopping at the first one
#[tracing::instrument(level = "trace", skip_all)]
pub fn validate(config: &SiteConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if config.title.trim().is_empty() {
        issues.push(Issue::new("title", "must not be empty"));
    }
    if config.description.trim().is_empty() {
        issues.push(Issue::new("description", "must not be empty"));
    }

    for (i, plugin) in config.plugins.iter().enumerate() {
        if plugin.name.trim().is_empty() {
            issues.push(Issue::new(format!("plugins[{i}].name"), "must not be empty"));
        }
    }

    for (i, entry) in config.theme_config.nav.iter().enumerate() {
        check_nav_entry(entry, &format!("theme_config.nav[{i}]"), &mut issues);
    }

    if let Some(sidebar) = &config.theme_config.sidebar {
        check_sidebar(sidebar, &mut issues);
    }

    issues
}

fn check_nav_entry(entry: &NavEntry, location: &str, issues: &mut Vec<Issue>) {
    if entry.text().trim().is_empty() {
        issues.push(Issue::new(format!("{location}.text"), "must not be empty"));
    }

    match entry {
        NavEntry::Link(link) => {
            if link.link.trim().is_empty() {
                issues.push(Issue::new(format!("{location}.link"), "must not be empty"));
            }
        }
        NavEntry::Menu(menu) => {
            if menu.items.is_empty() {
                issues.push(Issue::new(
                    format!("{location}.items"),
                    "submenu must contain at least one entry",
                ));
            }
            for (i, item) in menu.items.iter().enumerate() {
                check_nav_entry(item, &format!("{location}.items[{i}]"), issues);
            }
        }
    }
}

fn check_sidebar(sidebar: &Sidebar, issues: &mut Vec<Issue>) {
    match sidebar {
        Sidebar::Groups(groups) => {
            for (i, group) in groups.iter().enumerate() {
                let location = format!("theme_config.sidebar[{i}]");

                if group.title.trim().is_empty() {
                    issues.push(Issue::new(format!("{location}.title"), "must not be empty"));
                }
                if group.path.trim().is_empty() {
                    issues.push(Issue::new(format!("{location}.path"), "must not be empty"));
                }
                check_page_ids(&group.children, &format!("{location}.children"), issues);
            }
        }
        Sidebar::ByPrefix(map) => {
            for (prefix, pages) in map {
                let location = format!("theme_config.sidebar[\"{prefix}\"]");

                if !prefix.starts_with('/') {
                    issues.push(Issue::new(location.as_str(), "prefix must start with '/'"));
                }
                check_page_ids(pages, &location, issues);
            }
        }
    }
}

fn check_page_ids(ids: &[String], location: &str, issues: &mut Vec<Issue>) {
    if ids.is_empty() {
        issues.push(Issue::new(
            location,
            "must list at least one page identifier",
        ));
    }

    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            issues.push(Issue::new(
                location,
                format!("duplicate page identifier \"{id}\""),
            ));
        }
    }
}
