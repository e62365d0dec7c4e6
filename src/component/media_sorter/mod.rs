//! 依日期整理照片與影片
//!
//! 掃描來源資料夾，讓使用者把日期分成命名群組，
//! 再複製或移動到 `年/月/日_群組名稱` 的目錄結構

mod group_editor;
mod main;
mod report;

pub use main::MediaSorter;
pub(crate) use main::scan_with_spinner;
pub(crate) use report::format_count;
