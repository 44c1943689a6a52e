//! Path to view resolution for the site shell
//!
//! The site registers a small, fixed set of literal paths. Matching is exact
//! and case-sensitive: `/platform/` and `/Platform` are unregistered and
//! redirect to the home view like any other unknown path.

use std::fmt;

use crate::prelude::*;

/// Path every unmatched request is redirected to
pub const DEFAULT_PATH: &str = "/";

/// Identifier for each top-level page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Platform,
    UseCases,
    Pricing,
    Downloads,
    Docs,
    Contact,
    Products,
    About,
    Resources,
    Admin,
}

impl ViewId {
    /// Every view, in registration order
    pub const ALL: [ViewId; 11] = [
        ViewId::Home,
        ViewId::Platform,
        ViewId::UseCases,
        ViewId::Pricing,
        ViewId::Downloads,
        ViewId::Docs,
        ViewId::Contact,
        ViewId::Products,
        ViewId::About,
        ViewId::Resources,
        ViewId::Admin,
    ];

    /// Canonical path for this view
    pub const fn path(self) -> &'static str {
        match self {
            ViewId::Home => "/",
            ViewId::Platform => "/platform",
            ViewId::UseCases => "/use-cases",
            ViewId::Pricing => "/pricing",
            ViewId::Downloads => "/downloads",
            ViewId::Docs => "/docs",
            ViewId::Contact => "/contact",
            ViewId::Products => "/products",
            ViewId::About => "/about",
            ViewId::Resources => "/resources",
            ViewId::Admin => "/admin",
        }
    }

    /// Human-readable title used for the document `<title>`
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Home => "Open-Source Chip Design",
            ViewId::Platform => "Platform",
            ViewId::UseCases => "Use Cases",
            ViewId::Pricing => "Pricing",
            ViewId::Downloads => "Downloads",
            ViewId::Docs => "Documentation",
            ViewId::Contact => "Contact",
            ViewId::Products => "Products",
            ViewId::About => "About",
            ViewId::Resources => "Resources",
            ViewId::Admin => "Admin",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One registered route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
}

/// Outcome of resolving a location against the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The path is registered; render this view
    View(ViewId),
    /// The path is unknown; replace the location with `to` and render `view`
    Redirect { to: &'static str, view: ViewId },
}

impl Resolution {
    /// The view that ends up on screen
    pub fn view(self) -> ViewId {
        match self {
            Resolution::View(view) => view,
            Resolution::Redirect { view, .. } => view,
        }
    }

    pub fn is_redirect(self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }
}

/// Ordered, immutable mapping from literal paths to views
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Route,
}

impl RouteTable {
    /// Build a table from an ordered list of routes
    ///
    /// `fallback` is the route unmatched paths redirect to and must itself be
    /// registered. A path may only be registered once.
    pub fn new(routes: Vec<Route>, fallback: ViewId) -> Result<Self> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.path == route.path) {
                return Err(Error::duplicate_route(route.path));
            }
        }

        let fallback = routes
            .iter()
            .copied()
            .find(|r| r.view == fallback)
            .ok_or_else(|| Error::config(format!("fallback view {fallback:?} is not routed")))?;

        Ok(Self { routes, fallback })
    }

    /// The site's route table: one canonical path per view, redirecting to `/`
    pub fn standard() -> Result<Self> {
        let routes = ViewId::ALL
            .iter()
            .map(|&view| Route {
                path: view.path(),
                view,
            })
            .collect();

        Self::new(routes, ViewId::Home)
    }

    /// Degraded table with only the default route; every path lands home
    pub fn home_only() -> Self {
        let home = Route {
            path: DEFAULT_PATH,
            view: ViewId::Home,
        };
        Self {
            routes: vec![home],
            fallback: home,
        }
    }

    /// Resolve a location pathname to the view that should be rendered
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.routes.iter().find(|r| r.path == path) {
            Some(route) => {
                debug!(path, view = ?route.view, "route matched");
                Resolution::View(route.view)
            }
            None => {
                debug!(path, to = self.fallback.path, "unknown path, redirecting");
                Resolution::Redirect {
                    to: self.fallback.path,
                    view: self.fallback.view,
                }
            }
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_path_resolves_to_its_view() {
        let table = RouteTable::standard().unwrap();
        for route in table.routes() {
            assert_eq!(table.resolve(route.path), Resolution::View(route.view));
        }
    }

    #[test]
    fn test_standard_table_covers_every_view_once() {
        let table = RouteTable::standard().unwrap();
        assert_eq!(table.routes().len(), ViewId::ALL.len());
        for view in ViewId::ALL {
            let routed: Vec<_> = table.routes().iter().filter(|r| r.view == view).collect();
            assert_eq!(routed.len(), 1, "{view:?}");
            assert_eq!(routed[0].path, view.path());
        }
    }

    #[test]
    fn test_view_paths_are_distinct() {
        for (i, view) in ViewId::ALL.iter().enumerate() {
            for other in &ViewId::ALL[..i] {
                assert_ne!(view.path(), other.path(), "{view:?} and {other:?}");
            }
        }
    }

    #[test]
    fn test_home_only_table_lands_everything_home() {
        let table = RouteTable::home_only();
        assert_eq!(table.resolve("/"), Resolution::View(ViewId::Home));
        assert_eq!(
            table.resolve("/pricing"),
            Resolution::Redirect {
                to: "/",
                view: ViewId::Home
            }
        );
    }

    #[test]
    fn test_unknown_paths_redirect_home() {
        let table = RouteTable::standard().unwrap();
        let unknown = [
            "/nope",
            "",
            "/platform/",
            "/Platform",
            "/pricing/",
            "/PRICING",
            "/docs/intro",
            "//",
        ];
        for path in unknown {
            let resolution = table.resolve(path);
            assert_eq!(
                resolution,
                Resolution::Redirect {
                    to: "/",
                    view: ViewId::Home
                },
                "path {path:?}"
            );
            assert_eq!(resolution.view(), ViewId::Home);
        }
    }

    #[test]
    fn test_root_is_not_a_redirect() {
        let table = RouteTable::standard().unwrap();
        assert!(!table.resolve("/").is_redirect());
    }

    #[test]
    fn test_new_rejects_duplicate_paths() {
        let routes = vec![
            Route {
                path: "/",
                view: ViewId::Home,
            },
            Route {
                path: "/",
                view: ViewId::About,
            },
        ];
        assert_eq!(
            RouteTable::new(routes, ViewId::Home).unwrap_err(),
            Error::duplicate_route("/")
        );
    }

    #[test]
    fn test_new_requires_routed_fallback() {
        let routes = vec![Route {
            path: "/about",
            view: ViewId::About,
        }];
        let err = RouteTable::new(routes, ViewId::Home).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_custom_fallback() {
        let routes = vec![
            Route {
                path: "/about",
                view: ViewId::About,
            },
            Route {
                path: "/contact",
                view: ViewId::Contact,
            },
        ];
        let table = RouteTable::new(routes, ViewId::Contact).unwrap();
        assert_eq!(
            table.resolve("/"),
            Resolution::Redirect {
                to: "/contact",
                view: ViewId::Contact
            }
        );
    }
}
