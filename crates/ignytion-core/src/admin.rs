//! State behind the admin dashboard tabs
//!
//! One [`AdminWorkspace`] is created per admin view and shared by every tab,
//! so switching tabs keeps the version list and any unsaved edits. Nothing
//! here is persisted.

use chrono::NaiveDate;

use crate::config::{ContentSettings, SiteConfig, SiteSettings};
use crate::notice::Notice;
use crate::prelude::*;
use crate::selection::{AdminTab, Selection};
use crate::versions::VersionList;

pub const CONTENT_SAVED: &str = "Content saved successfully!";
pub const SETTINGS_SAVED: &str = "Settings updated successfully!";
pub const VERSION_PUBLISHED: &str = "Version published successfully!";
pub const VERSION_DELETED: &str = "Version deleted successfully!";

#[derive(Debug, Clone, PartialEq)]
pub struct AdminWorkspace {
    pub tabs: Selection<AdminTab>,
    pub versions: VersionList,
    /// Editable copy of the homepage copy
    pub content: ContentSettings,
    /// Editable copy of the site identity
    pub site: SiteSettings,
}

impl AdminWorkspace {
    /// Fresh workspace: Analytics tab, seeded versions, fields from `config`
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            tabs: AdminTab::picker(),
            versions: VersionList::seeded(),
            content: config.content.clone(),
            site: config.site.clone(),
        }
    }

    pub fn current_tab(&self) -> AdminTab {
        self.tabs.selected()
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        if self.tabs.select(tab) {
            debug!(tab = tab.label(), "admin tab selected");
        }
    }

    /// Add a draft version; the notice reports the outcome
    pub fn add_version(&mut self, label: &str, release_date: NaiveDate) -> Result<Notice> {
        let id = self.versions.add(label, release_date)?;
        let label = self
            .versions
            .get(id)
            .map(|r| r.version.as_str())
            .unwrap_or_default();
        Ok(Notice::success(format!("Version {label} created as draft")))
    }

    pub fn publish_version(&mut self, id: u32) -> Result<Notice> {
        self.versions.publish(id)?;
        Ok(Notice::success(VERSION_PUBLISHED))
    }

    pub fn remove_version(&mut self, id: u32) -> Result<Notice> {
        self.versions.remove(id)?;
        Ok(Notice::success(VERSION_DELETED))
    }

    /// Acknowledge a content save; edits stay in this workspace only
    pub fn save_content(&self) -> Notice {
        info!(hero_title = %self.content.hero_title, "demo content saved");
        Notice::success(CONTENT_SAVED)
    }

    pub fn save_settings(&self) -> Notice {
        info!(site_name = %self.site.name, "demo settings saved");
        Notice::success(SETTINGS_SAVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::versions::VersionStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workspace() -> AdminWorkspace {
        AdminWorkspace::new(&SiteConfig::default())
    }

    #[test]
    fn test_new_workspace_defaults() {
        let ws = workspace();
        assert_eq!(ws.current_tab(), AdminTab::Analytics);
        assert_eq!(ws.versions, VersionList::seeded());
        assert_eq!(ws.site, SiteSettings::default());
        assert_eq!(ws.content, ContentSettings::default());
    }

    #[test]
    fn test_version_edits_survive_tab_switches() {
        let mut ws = workspace();
        ws.select_tab(AdminTab::Versions);
        let id = ws.versions.add("3.3.0", date(2026, 2, 1)).unwrap();
        ws.publish_version(3).unwrap();
        ws.remove_version(2).unwrap();

        ws.select_tab(AdminTab::Users);
        ws.select_tab(AdminTab::Versions);

        assert_eq!(ws.current_tab(), AdminTab::Versions);
        assert_eq!(ws.versions.len(), 3);
        assert!(ws.versions.get(id).is_some());
        assert!(ws.versions.get(2).is_none());
        assert_eq!(ws.versions.get(3).unwrap().status, VersionStatus::Published);
    }

    #[test]
    fn test_field_edits_survive_tab_switches() {
        let mut ws = workspace();
        ws.select_tab(AdminTab::Content);
        ws.content.hero_title = "Tapeout faster".to_string();
        ws.select_tab(AdminTab::Settings);
        ws.site.support_email = "help@example.com".to_string();

        ws.select_tab(AdminTab::Analytics);
        ws.select_tab(AdminTab::Content);

        assert_eq!(ws.content.hero_title, "Tapeout faster");
        assert_eq!(ws.site.support_email, "help@example.com");
    }

    #[test]
    fn test_add_version_notice_uses_trimmed_label() {
        let mut ws = workspace();
        let notice = ws.add_version("  3.3.0 ", date(2026, 2, 1)).unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Version 3.3.0 created as draft");
        assert_eq!(ws.versions.len(), 4);
    }

    #[test]
    fn test_failed_version_ops_change_nothing() {
        let mut ws = workspace();
        let before = ws.versions.clone();

        assert!(ws.add_version("", date(2026, 2, 1)).is_err());
        assert_eq!(
            ws.publish_version(99).unwrap_err(),
            Error::UnknownVersion { id: 99 }
        );
        assert!(ws.remove_version(99).is_err());
        assert_eq!(ws.versions, before);
    }

    #[test]
    fn test_save_notices() {
        let ws = workspace();
        assert_eq!(ws.save_content().message, CONTENT_SAVED);
        assert_eq!(ws.save_settings().message, SETTINGS_SAVED);
    }
}
