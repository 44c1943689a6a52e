//! In-memory software version list for the admin demo
//!
//! Seeded with literal data when the admin view mounts and thrown away when it
//! unmounts. Single user, single tab: there is no conflict handling.

use std::fmt;

use chrono::NaiveDate;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    Draft,
    Published,
}

impl VersionStatus {
    pub fn label(self) -> &'static str {
        match self {
            VersionStatus::Draft => "draft",
            VersionStatus::Published => "published",
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub id: u32,
    pub version: String,
    pub release_date: NaiveDate,
    pub downloads: u64,
    pub status: VersionStatus,
}

impl VersionRecord {
    /// Download count with thousands separators, e.g. `1,245`
    pub fn downloads_display(&self) -> String {
        group_thousands(self.downloads)
    }
}

/// Format a count with comma thousands separators
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList {
    records: Vec<VersionRecord>,
    next_id: u32,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl VersionList {
    /// Demo records shown on a fresh admin view
    pub fn seeded() -> Self {
        let records = vec![
            VersionRecord {
                id: 1,
                version: "3.2.0".to_string(),
                release_date: date(2025, 11, 15),
                downloads: 1245,
                status: VersionStatus::Published,
            },
            VersionRecord {
                id: 2,
                version: "3.1.5".to_string(),
                release_date: date(2025, 10, 20),
                downloads: 3421,
                status: VersionStatus::Published,
            },
            VersionRecord {
                id: 3,
                version: "3.1.0-beta".to_string(),
                release_date: date(2025, 11, 18),
                downloads: 89,
                status: VersionStatus::Draft,
            },
        ];
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<VersionRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    pub fn records(&self) -> &[VersionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&VersionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a new draft with no downloads, returning its id
    pub fn add(&mut self, version: &str, release_date: NaiveDate) -> Result<u32> {
        let version = version.trim();
        if version.is_empty() {
            return Err(Error::invalid_version("version label is empty"));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.records.push(VersionRecord {
            id,
            version: version.to_string(),
            release_date,
            downloads: 0,
            status: VersionStatus::Draft,
        });
        info!(id, version, "version added");
        Ok(id)
    }

    /// Delete exactly the record with `id`
    pub fn remove(&mut self, id: u32) -> Result<VersionRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::UnknownVersion { id })?;
        let removed = self.records.remove(index);
        info!(id, version = %removed.version, "version removed");
        Ok(removed)
    }

    /// Mark one record as published; other records are untouched
    pub fn publish(&mut self, id: u32) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::UnknownVersion { id })?;
        record.status = VersionStatus::Published;
        info!(id, version = %record.version, "version published");
        Ok(())
    }
}

impl Default for VersionList {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data() {
        let list = VersionList::seeded();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(3).unwrap().status, VersionStatus::Draft);
        assert_eq!(list.get(1).unwrap().release_date, date(2025, 11, 15));
    }

    #[test]
    fn test_add_appends_draft() {
        let mut list = VersionList::seeded();
        let id = list.add(" 3.3.0 ", date(2026, 1, 5)).unwrap();

        assert_eq!(list.len(), 4);
        let added = list.records().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.version, "3.3.0");
        assert_eq!(added.downloads, 0);
        assert_eq!(added.status, VersionStatus::Draft);
    }

    #[test]
    fn test_add_ids_never_reused() {
        let mut list = VersionList::seeded();
        list.remove(3).unwrap();
        let id = list.add("4.0.0", date(2026, 2, 1)).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn test_add_rejects_blank_label() {
        let mut list = VersionList::seeded();
        assert!(matches!(
            list.add("   ", date(2026, 1, 1)),
            Err(Error::InvalidVersion { .. })
        ));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_add_accepts_existing_label() {
        let mut list = VersionList::seeded();
        let id = list.add("3.2.0", date(2026, 1, 1)).unwrap();

        assert_eq!(list.len(), 4);
        assert_eq!(id, 4);
        let same_label = list.records().iter().filter(|r| r.version == "3.2.0").count();
        assert_eq!(same_label, 2);
        assert_eq!(list.get(1).unwrap().status, VersionStatus::Published);
        assert_eq!(list.get(id).unwrap().status, VersionStatus::Draft);
    }

    #[test]
    fn test_remove_only_target() {
        let mut list = VersionList::seeded();
        let removed = list.remove(2).unwrap();

        assert_eq!(removed.version, "3.1.5");
        let ids: Vec<_> = list.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_remove_unknown() {
        let mut list = VersionList::seeded();
        assert_eq!(list.remove(99), Err(Error::UnknownVersion { id: 99 }));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_publish_changes_only_target_status() {
        let mut list = VersionList::seeded();
        let before = list.clone();

        list.publish(3).unwrap();

        for (old, new) in before.records().iter().zip(list.records()) {
            if old.id == 3 {
                assert_eq!(new.status, VersionStatus::Published);
                assert_eq!(
                    VersionRecord {
                        status: old.status,
                        ..new.clone()
                    },
                    *old
                );
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_publish_unknown() {
        let mut list = VersionList::seeded();
        assert_eq!(list.publish(0), Err(Error::UnknownVersion { id: 0 }));
    }

    #[test]
    fn test_empty_list() {
        let mut list = VersionList::from_records(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.add("1.0.0", date(2025, 1, 15)).unwrap(), 1);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(89), "89");
        assert_eq!(group_thousands(1245), "1,245");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
