//! Single-selection toggles used across views
//!
//! Each picker holds exactly one selected option out of a fixed set. Selecting
//! replaces the value; there is no way to end up with none or two.

use std::fmt;

use crate::notice::Notice;

/// A fixed set of options with exactly one selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T: Copy + PartialEq + 'static> {
    options: &'static [T],
    selected: T,
}

impl<T: Copy + PartialEq + 'static> Selection<T> {
    /// Start on `initial`, or on the first option if `initial` is not offered
    ///
    /// # Panics
    /// If `options` is empty.
    pub fn new(options: &'static [T], initial: T) -> Self {
        assert!(!options.is_empty(), "a selection needs at least one option");
        let selected = if options.contains(&initial) {
            initial
        } else {
            options[0]
        };
        Self { options, selected }
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn is_selected(&self, option: T) -> bool {
        self.selected == option
    }

    /// Select `option`; returns false and keeps the current value if it is not offered
    pub fn select(&mut self, option: T) -> bool {
        if self.options.contains(&option) {
            self.selected = option;
            true
        } else {
            false
        }
    }

    pub fn options(&self) -> &'static [T] {
        self.options
    }
}

// ─────────────────────────────────────────────────────────────────
// Download platform picker
// ─────────────────────────────────────────────────────────────────

/// Operating systems offered on the downloads page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsPlatform {
    Windows,
    Linux,
    MacOs,
}

impl OsPlatform {
    pub const ALL: [OsPlatform; 3] = [OsPlatform::Windows, OsPlatform::Linux, OsPlatform::MacOs];

    pub fn name(self) -> &'static str {
        match self {
            OsPlatform::Windows => "Windows",
            OsPlatform::Linux => "Linux",
            OsPlatform::MacOs => "macOS",
        }
    }

    /// Installer archive size
    pub fn size(self) -> &'static str {
        match self {
            OsPlatform::Windows => "520 MB",
            OsPlatform::Linux => "450 MB",
            OsPlatform::MacOs => "445 MB",
        }
    }

    /// The downloads page opens on Linux
    pub fn picker() -> Selection<OsPlatform> {
        Selection::new(&Self::ALL, OsPlatform::Linux)
    }
}

impl fmt::Display for OsPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Notice shown when the CLI download button is pressed
pub fn cli_download_notice(platform: OsPlatform, version: &str) -> Notice {
    Notice::success(format!(
        "Downloading Ignytion CLI {version} for {platform}..."
    ))
}

/// Notice for the not-yet-released GUI package
pub fn gui_download_notice() -> Notice {
    Notice::info("GUI download is coming soon. CLI is available now.")
}

// ─────────────────────────────────────────────────────────────────
// Admin tabs
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Analytics,
    Versions,
    Content,
    Users,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Analytics,
        AdminTab::Versions,
        AdminTab::Content,
        AdminTab::Users,
        AdminTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Analytics => "Analytics",
            AdminTab::Versions => "Versions",
            AdminTab::Content => "Content",
            AdminTab::Users => "Users",
            AdminTab::Settings => "Settings",
        }
    }

    pub fn picker() -> Selection<AdminTab> {
        Selection::new(&Self::ALL, AdminTab::Analytics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downloads_default_to_linux() {
        assert_eq!(OsPlatform::picker().selected(), OsPlatform::Linux);
    }

    #[test]
    fn test_select_replaces_value() {
        let mut picker = OsPlatform::picker();
        assert!(picker.select(OsPlatform::Windows));
        assert!(picker.select(OsPlatform::MacOs));

        let selected: Vec<_> = picker
            .options()
            .iter()
            .filter(|o| picker.is_selected(**o))
            .collect();
        assert_eq!(selected, [&OsPlatform::MacOs]);
    }

    #[test]
    fn test_reselect_same_option() {
        let mut tabs = AdminTab::picker();
        assert!(tabs.select(AdminTab::Analytics));
        assert_eq!(tabs.selected(), AdminTab::Analytics);
    }

    #[test]
    fn test_unoffered_option_is_rejected() {
        static ONLY_LINUX: [OsPlatform; 1] = [OsPlatform::Linux];
        let mut picker = Selection::new(&ONLY_LINUX, OsPlatform::Windows);
        assert_eq!(picker.selected(), OsPlatform::Linux);
        assert!(!picker.select(OsPlatform::MacOs));
        assert_eq!(picker.selected(), OsPlatform::Linux);
    }

    #[test]
    fn test_download_notices() {
        let notice = cli_download_notice(OsPlatform::MacOs, "1.0.0");
        assert_eq!(notice.message, "Downloading Ignytion CLI 1.0.0 for macOS...");
        assert!(gui_download_notice().message.contains("coming soon"));
    }
}
