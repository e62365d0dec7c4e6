use super::grouping::{Group, GroupingError, dissolve_group, form_group};
use super::media_scanner::{DatedIndex, MediaCount, count_index_by_type, scan_media_files};
use super::transfer::{
    TransferMode, TransferProgress, TransferResult, TransferTarget, transfer_groups,
};
use chrono::NaiveDate;
use log::info;
use std::collections::BTreeSet;
use std::path::Path;

/// 一次整理流程的狀態：未分組的日期索引與目前的群組
///
/// 外部只能透過這裡的方法修改狀態，索引與群組的日期永遠不重疊
#[derive(Debug, Default)]
pub struct SortSession {
    ungrouped: DatedIndex,
    groups: Vec<Group>,
}

impl SortSession {
    #[must_use]
    pub fn scan(root: &Path) -> Self {
        Self::from_index(scan_media_files(root))
    }

    #[must_use]
    pub fn from_index(index: DatedIndex) -> Self {
        Self {
            ungrouped: index,
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub const fn ungrouped(&self) -> &DatedIndex {
        &self.ungrouped
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// 掃描到的所有日期（未分組與已分組）
    #[must_use]
    pub fn all_dates(&self) -> BTreeSet<NaiveDate> {
        self.ungrouped
            .keys()
            .copied()
            .chain(self.groups.iter().flat_map(|g| g.dates().iter().copied()))
            .collect()
    }

    /// 全部檔案的照片與影片數量
    #[must_use]
    pub fn counts(&self) -> MediaCount {
        self.groups
            .iter()
            .map(Group::count)
            .fold(count_index_by_type(&self.ungrouped), |acc, c| MediaCount {
                photos: acc.photos + c.photos,
                videos: acc.videos + c.videos,
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ungrouped.is_empty() && self.groups.is_empty()
    }

    /// 所有日期都已分組，且至少有一個群組
    #[must_use]
    pub fn is_fully_grouped(&self) -> bool {
        self.ungrouped.is_empty() && !self.groups.is_empty()
    }

    pub fn form_group(&mut self, name: &str, dates: &[NaiveDate]) -> Result<&Group, GroupingError> {
        let group = form_group(name, dates, &mut self.ungrouped)?;
        info!(
            "建立群組 {} - {} 個日期，{} 個檔案",
            group.folder_name(),
            group.dates().len(),
            group.files().len()
        );
        self.groups.push(group);
        Ok(&self.groups[self.groups.len() - 1])
    }

    /// 解散指定位置的群組，日期回到未分組索引
    pub fn dissolve_group(&mut self, position: usize) -> Result<(), GroupingError> {
        if position >= self.groups.len() {
            return Err(GroupingError::UnknownGroup(position));
        }
        let group = self.groups.remove(position);
        info!("解散群組 {}", group.folder_name());
        dissolve_group(group, &mut self.ungrouped);
        Ok(())
    }

    pub fn transfer<F>(
        &self,
        target: &TransferTarget,
        mode: TransferMode,
        on_progress: F,
    ) -> TransferResult
    where
        F: FnMut(TransferProgress<'_>),
    {
        transfer_groups(&self.groups, target, mode, on_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{date, write_with_mtime};
    use tempfile::TempDir;

    fn scanned_session(temp_dir: &TempDir) -> SortSession {
        let card = temp_dir.path().join("card");
        write_with_mtime(&card.join("a.jpg"), b"a", date(2024, 1, 5));
        write_with_mtime(&card.join("b.mov"), b"b", date(2024, 1, 6));
        write_with_mtime(&card.join("c.jpg"), b"c", date(2024, 1, 7));
        SortSession::scan(&card)
    }

    #[test]
    fn test_group_and_ungroup() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = scanned_session(&temp_dir);
        let all = session.all_dates();
        assert_eq!(all.len(), 3);
        assert!(!session.is_fully_grouped());

        let group = session
            .form_group("Weekend", &[date(2024, 1, 5), date(2024, 1, 6)])
            .unwrap();
        assert_eq!(group.files().len(), 2);
        assert_eq!(session.ungrouped().len(), 1);
        assert_eq!(session.all_dates(), all);

        session.form_group("Monday", &[date(2024, 1, 7)]).unwrap();
        assert!(session.is_fully_grouped());
        assert_eq!(session.counts(), MediaCount { photos: 2, videos: 1 });

        session.dissolve_group(0).unwrap();
        assert_eq!(session.groups().len(), 1);
        assert_eq!(session.groups()[0].name(), "Monday");
        assert_eq!(session.ungrouped().len(), 2);
        assert_eq!(session.all_dates(), all);
    }

    #[test]
    fn test_errors_leave_state_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = scanned_session(&temp_dir);

        assert_eq!(
            session.form_group("", &[date(2024, 1, 5)]).unwrap_err(),
            GroupingError::InvalidGroupName(String::new())
        );
        assert_eq!(
            session.form_group("Trip", &[]).unwrap_err(),
            GroupingError::EmptySelection
        );
        assert_eq!(
            session.dissolve_group(0).unwrap_err(),
            GroupingError::UnknownGroup(0)
        );

        session.form_group("Trip", &[date(2024, 1, 5)]).unwrap();
        // 已被認領的日期不能再次分組
        assert_eq!(
            session.form_group("Again", &[date(2024, 1, 5)]).unwrap_err(),
            GroupingError::UnknownDate(date(2024, 1, 5))
        );
        assert_eq!(session.groups().len(), 1);
        assert_eq!(session.ungrouped().len(), 2);
    }

    #[test]
    fn test_transfer_uses_live_groups() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = scanned_session(&temp_dir);
        session.form_group("Trip", &[date(2024, 1, 5)]).unwrap();

        let target = TransferTarget::new(temp_dir.path().join("p"), temp_dir.path().join("v"));
        let result = session.transfer(&target, TransferMode::Copy, |_| {});

        // 未分組的日期不會被轉移
        assert_eq!(result.transferred, 1);
        assert!(temp_dir.path().join("p/2024/01/05_Trip/a.jpg").exists());
        assert!(!temp_dir.path().join("p/2024/01/07_Trip").exists());
    }

    #[test]
    fn test_empty_session() {
        let temp_dir = TempDir::new().unwrap();
        let session = SortSession::scan(temp_dir.path());
        assert!(session.is_empty());
        assert!(!session.is_fully_grouped());
        assert_eq!(session.counts().total(), 0);
    }
}
