//! # ignytion-core - Website Logic
//!
//! Target-independent logic behind the Ignytion marketing site. The wasm
//! front end renders these types; everything here runs and is tested on the
//! host.
//!
//! ## Public API
//!
//! ### Routing (`routing`)
//! - [`RouteTable`] - Validated literal path table with a catch-all redirect to `/`
//! - [`ViewId`] - One variant per top-level page view
//! - [`Resolution`] - Matched view or redirect
//!
//! ### Chrome (`chrome`)
//! - [`PRIMARY_NAV`], [`NavItem`] - Header links and exact-match active state
//! - [`MenuState`] - Mobile menu open/closed state machine
//! - [`footer_sections()`] - Footer link columns
//!
//! ### Notices (`notice`)
//! - [`Notice`], [`NoticeLevel`] - Toast messages produced by views
//! - [`NoticeBoard`] - Ordered queue of visible toasts
//!
//! ### View State
//! - [`ContactForm`] - Contact form fields and submit
//! - [`LoginGate`] - Demo admin login
//! - [`VersionList`] - Admin mock version list
//! - [`AdminWorkspace`] - Dashboard state shared across admin tabs
//! - [`Selection`], [`OsPlatform`], [`AdminTab`] - Single-selection pickers
//! - [`docs::search()`] - Docs catalog filter
//!
//! ### Configuration (`config`)
//! - [`SiteConfig`] - Embedded TOML site configuration
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]

pub mod admin;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod docs;
pub mod error;
pub mod login;
pub mod notice;
pub mod prelude;
pub mod routing;
pub mod selection;
pub mod versions;

pub use admin::AdminWorkspace;
pub use chrome::{
    active_item, footer_sections, FooterLink, FooterSection, LinkTarget, MenuState, NavItem,
    CONTACT, DOWNLOAD, PRIMARY_NAV, SIGN_IN, TRUST_STRIP,
};
pub use config::{ContentSettings, ReleaseSettings, SiteConfig, SiteSettings};
pub use contact::{ContactField, ContactForm};
pub use docs::{DocCategory, DocMatch, DOC_CATEGORIES};
pub use error::{Error, Result};
pub use login::LoginGate;
pub use notice::{Notice, NoticeBoard, NoticeId, NoticeLevel};
pub use routing::{Resolution, Route, RouteTable, ViewId, DEFAULT_PATH};
pub use selection::{
    cli_download_notice, gui_download_notice, AdminTab, OsPlatform, Selection,
};
pub use versions::{group_thousands, VersionList, VersionRecord, VersionStatus};
