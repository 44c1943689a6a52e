//! Header and footer model shared by every view
//!
//! Both are driven only by the current path and the mobile menu toggle.

use crate::routing::ViewId;

/// One header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    const fn to(label: &'static str, view: ViewId) -> Self {
        Self {
            label,
            path: view.path(),
        }
    }

    /// A link is active iff its target equals the current path exactly
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Primary navigation, in display order
pub static PRIMARY_NAV: [NavItem; 5] = [
    NavItem::to("Platform", ViewId::Platform),
    NavItem::to("Use Cases", ViewId::UseCases),
    NavItem::to("Pricing", ViewId::Pricing),
    NavItem::to("Docs", ViewId::Docs),
    NavItem::to("Downloads", ViewId::Downloads),
];

/// Header call-to-action links shown to the right of the primary nav
pub static SIGN_IN: NavItem = NavItem::to("Sign In", ViewId::Admin);
pub static CONTACT: NavItem = NavItem::to("Contact", ViewId::Contact);
pub static DOWNLOAD: NavItem = NavItem::to("Download", ViewId::Downloads);

/// The primary nav item for the current path, if any
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    PRIMARY_NAV.iter().find(|item| item.is_active(current_path))
}

// ─────────────────────────────────────────────────────────────────
// Mobile Menu
// ─────────────────────────────────────────────────────────────────

/// Open/closed state of the mobile navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Menu button pressed
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A link inside the menu was followed
    pub fn link_activated(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

// ─────────────────────────────────────────────────────────────────
// Footer
// ─────────────────────────────────────────────────────────────────

/// Where a footer link points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A routed path handled by the client-side router
    Internal(&'static str),
    /// A plain anchor outside the router
    External(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: Vec<FooterLink>,
}

fn internal(label: &'static str, view: ViewId) -> FooterLink {
    FooterLink {
        label,
        target: LinkTarget::Internal(view.path()),
    }
}

fn external(label: &'static str, href: &'static str) -> FooterLink {
    FooterLink {
        label,
        target: LinkTarget::External(href),
    }
}

/// Footer link columns, in display order
pub fn footer_sections() -> Vec<FooterSection> {
    vec![
        FooterSection {
            title: "Platform",
            links: vec![
                internal("Overview", ViewId::Platform),
                internal("Use Cases", ViewId::UseCases),
                internal("Pricing", ViewId::Pricing),
                internal("Downloads", ViewId::Downloads),
            ],
        },
        FooterSection {
            title: "Resources",
            links: vec![
                internal("Documentation", ViewId::Docs),
                internal("Tutorials", ViewId::Resources),
                external("Community Forum", "#"),
                external("GitHub", "#"),
            ],
        },
        FooterSection {
            title: "Company",
            links: vec![
                internal("About", ViewId::About),
                internal("Products", ViewId::Products),
                internal("Contact", ViewId::Contact),
                external("Blog", "#"),
            ],
        },
    ]
}

/// Short claims shown above the footer columns
pub const TRUST_STRIP: [&str; 5] = [
    "Open-source EDA",
    "Open PDKs",
    "Reusable IPs",
    "GenAI-assisted workflows",
    "Software-like pipelines",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTable;

    #[test]
    fn test_exactly_one_active_item_on_nav_targets() {
        for item in PRIMARY_NAV {
            let active: Vec<_> = PRIMARY_NAV
                .iter()
                .filter(|i| i.is_active(item.path))
                .collect();
            assert_eq!(active, vec![&item]);
        }
    }

    #[test]
    fn test_no_active_item_elsewhere() {
        assert_eq!(active_item("/"), None);
        assert_eq!(active_item("/contact"), None);
        assert_eq!(active_item("/docs/setup"), None);
    }

    #[test]
    fn test_active_is_exact_not_prefix() {
        let docs = active_item("/docs").unwrap();
        assert_eq!(docs.label, "Docs");
        assert!(!docs.is_active("/docs/"));
        assert!(!docs.is_active("/doc"));
    }

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn test_menu_toggle_twice_closes() {
        let menu = MenuState::default().toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_link_activation_closes_menu() {
        assert_eq!(MenuState::Open.link_activated(), MenuState::Closed);
        assert_eq!(MenuState::Closed.link_activated(), MenuState::Closed);
    }

    #[test]
    fn test_internal_footer_links_are_routed() {
        let table = RouteTable::standard().unwrap();
        for section in footer_sections() {
            for link in section.links {
                if let LinkTarget::Internal(path) = link.target {
                    assert!(!table.resolve(path).is_redirect(), "{path}");
                }
            }
        }
    }
}
