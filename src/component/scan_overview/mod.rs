//! 掃描總覽元件
//!
//! 只讀取來源資料夾，列出每個日期的照片與影片數量

mod main;

pub use main::ScanOverview;
