//! 功能元件模組
//!
//! 每個子模組實現一個互動功能，透過 `tools` 的核心流程完成工作

pub mod media_sorter;
pub mod scan_overview;

pub use media_sorter::MediaSorter;
pub use scan_overview::ScanOverview;
