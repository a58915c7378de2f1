use std::fmt;

use crate::data::{NavEntry, Sidebar, SidebarGroup, SiteConfig};

/// the navigation structure a generator would render for a configuration
///
/// nav entries are flattened with their submenu depth, sidebar sections keep
/// their declaration order (or prefix order for the mapping shape)
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarSection>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub depth: usize,
    pub text: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarSection {
    pub title: String,
    pub route: String,
    pub collapsable: bool,
    /// routes of the section's pages, in render order
    pub entries: Vec<String>,
}

impl Outline {
    pub fn of(config: &SiteConfig) -> Self {
        let mut nav = Vec::new();
        for entry in &config.theme_config.nav {
            flatten_nav(entry, 0, &mut nav);
        }

        let sidebar = match &config.theme_config.sidebar {
            Some(Sidebar::Groups(groups)) => groups.iter().map(group_section).collect(),
            Some(Sidebar::ByPrefix(map)) => map
                .iter()
                .map(|(prefix, pages)| SidebarSection {
                    title: prefix.clone(),
                    route: prefix.clone(),
                    collapsable: true,
                    entries: pages.iter().map(|id| page_route(id)).collect(),
                })
                .collect(),
            None => Vec::new(),
        };

        Self { nav, sidebar }
    }
}

fn flatten_nav(entry: &NavEntry, depth: usize, nav: &mut Vec<NavItem>) {
    match entry {
        NavEntry::Link(link) => nav.push(NavItem {
            depth,
            text: link.text.clone(),
            link: Some(link.link.clone()),
        }),
        NavEntry::Menu(menu) => {
            nav.push(NavItem {
                depth,
                text: menu.text.clone(),
                link: None,
            });
            for item in &menu.items {
                flatten_nav(item, depth + 1, nav);
            }
        }
    }
}

fn group_section(group: &SidebarGroup) -> SidebarSection {
    SidebarSection {
        title: group.title.clone(),
        route: group.path.clone(),
        collapsable: group.collapsable,
        entries: group.children.iter().map(|id| page_route(id)).collect(),
    }
}

/// page identifiers are site root relative, ids from the original data
/// already carry their section prefix
fn page_route(id: &str) -> String {
    if id.starts_with('/') {
        id.to_owned()
    } else {
        format!("/{id}")
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.nav.is_empty() {
            writeln!(f, "nav:")?;
            for item in &self.nav {
                let indent = "  ".repeat(item.depth + 1);
                match &item.link {
                    Some(link) => writeln!(f, "{indent}{} -> {link}", item.text)?,
                    None => writeln!(f, "{indent}{}", item.text)?,
                }
            }
        }

        if !self.sidebar.is_empty() {
            writeln!(f, "sidebar:")?;
            for section in &self.sidebar {
                let marker = if section.collapsable { "+" } else { "-" };
                writeln!(f, "  [{marker}] {} ({})", section.title, section.route)?;
                for entry in &section.entries {
                    writeln!(f, "      {entry}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Outline;
    use crate::data::{NavEntry, NavLink, Sidebar, SidebarGroup, SiteConfig, ThemeConfig};

    fn site(theme_config: ThemeConfig) -> SiteConfig {
        SiteConfig {
            title: "前端系列文章".to_owned(),
            description: "关于前端的文章".to_owned(),
            plugins: Vec::new(),
            theme_config,
        }
    }

    #[test]
    fn sidebar_groups_keep_declaration_order() {
        let config = site(ThemeConfig {
            nav: Vec::new(),
            sidebar: Some(Sidebar::Groups(vec![SidebarGroup {
                title: "JavaScript".to_owned(),
                path: "/js".to_owned(),
                collapsable: false,
                sidebar_depth: None,
                children: vec![
                    "js/what-is-event-loop".to_owned(),
                    "js/parseint-and-map".to_owned(),
                ],
            }])),
        });

        let outline = Outline::of(&config);

        assert_eq!(outline.sidebar.len(), 1);
        let section = &outline.sidebar[0];
        assert_eq!(section.title, "JavaScript");
        assert!(!section.collapsable);
        assert_eq!(
            section.entries,
            vec!["/js/what-is-event-loop", "/js/parseint-and-map"]
        );
    }

    #[test]
    fn nav_links_become_items() {
        let config = site(ThemeConfig {
            nav: vec![NavEntry::Link(NavLink {
                text: "JavaScript".to_owned(),
                link: "/js/".to_owned(),
            })],
            sidebar: None,
        });

        let outline = Outline::of(&config);

        assert_eq!(outline.nav.len(), 1);
        assert_eq!(outline.nav[0].text, "JavaScript");
        assert_eq!(outline.nav[0].link.as_deref(), Some("/js/"));
        assert!(outline.sidebar.is_empty());
    }

    #[test]
    fn prefix_mapping_orders_sections_by_prefix() {
        let config = site(ThemeConfig {
            nav: Vec::new(),
            sidebar: Some(Sidebar::ByPrefix(
                [
                    ("/js".to_owned(), vec!["js/what-is-event-loop".to_owned()]),
                    (
                        "/html-css".to_owned(),
                        vec!["html-css/box-sizing".to_owned()],
                    ),
                ]
                .into(),
            )),
        });

        let outline = Outline::of(&config);

        assert_eq!(outline.sidebar.len(), 2);
        assert_eq!(outline.sidebar[0].route, "/html-css");
        assert_eq!(outline.sidebar[1].route, "/js");
        assert_eq!(outline.sidebar[1].entries, vec!["/js/what-is-event-loop"]);
    }
}
