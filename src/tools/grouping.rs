//! 日期分組模型
//!
//! 分組會從索引中「認領」日期，解散時再依日期放回索引；
//! 索引的日期與所有現存分組的日期永遠不重疊

use super::media_scanner::{DatedIndex, FileRecord, MediaCount, count_by_type};
use chrono::NaiveDate;
use thiserror::Error;

/// 分組操作錯誤
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupingError {
    #[error("無效的群組名稱 {0:?}：名稱不可空白，也不可包含路徑分隔字元")]
    InvalidGroupName(String),

    #[error("至少要選擇一個日期")]
    EmptySelection,

    #[error("日期 {0} 不在未分組的日期中")]
    UnknownDate(NaiveDate),

    #[error("群組編號 {0} 不存在")]
    UnknownGroup(usize),
}

/// 使用者命名的日期群組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    /// 已排序、不重複
    dates: Vec<NaiveDate>,
    files: Vec<FileRecord>,
}

impl Group {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[must_use]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// 群組中最早的日期，決定目標資料夾的年/月/日
    #[must_use]
    pub fn first_date(&self) -> NaiveDate {
        // 建立時保證至少有一個日期且已排序
        self.dates[0]
    }

    /// 目標日資料夾名稱：`DD_<name>`
    #[must_use]
    pub fn folder_name(&self) -> String {
        format!("{}_{}", self.first_date().format("%d"), self.name)
    }

    #[must_use]
    pub fn count(&self) -> MediaCount {
        count_by_type(&self.files)
    }
}

/// 檢查群組名稱：去除空白後不可為空，且不可包含路徑分隔字元
pub fn validate_group_name(name: &str) -> Result<(), GroupingError> {
    let unsafe_char = |c: char| c == '/' || c == '\\' || c == '\0';
    if name.trim().is_empty() || name.contains(unsafe_char) {
        return Err(GroupingError::InvalidGroupName(name.to_string()));
    }
    Ok(())
}

/// 以選取的日期建立群組，並把這些日期從索引中移除
///
/// 所有檢查都在修改索引之前完成，失敗時索引保持原狀。
/// 檔案順序依照選取日期的順序，同一日期內保留原本的順序
pub fn form_group(
    name: &str,
    selected_dates: &[NaiveDate],
    index: &mut DatedIndex,
) -> Result<Group, GroupingError> {
    validate_group_name(name)?;
    if selected_dates.is_empty() {
        return Err(GroupingError::EmptySelection);
    }

    let mut ordered: Vec<NaiveDate> = Vec::with_capacity(selected_dates.len());
    for date in selected_dates {
        if !index.contains_key(date) {
            return Err(GroupingError::UnknownDate(*date));
        }
        if !ordered.contains(date) {
            ordered.push(*date);
        }
    }

    let mut files = Vec::new();
    for date in &ordered {
        if let Some(day_files) = index.remove(date) {
            files.extend(day_files);
        }
    }

    ordered.sort_unstable();

    Ok(Group {
        name: name.to_string(),
        dates: ordered,
        files,
    })
}

/// 解散群組，把檔案依日期放回索引
///
/// 每個日期的檔案以 `date` 重新篩選，不依賴任何快取的分段
pub fn dissolve_group(group: Group, index: &mut DatedIndex) {
    let Group { dates, files, .. } = group;

    for date in dates {
        let matching = files.iter().filter(|f| f.date == date).cloned();
        index.entry(date).or_default().extend(matching);
    }
}
