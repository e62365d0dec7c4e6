//! 測試用的檔案產生工具

use chrono::{Local, NaiveDate, TimeZone};
use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;

/// 將本地日期中午轉為 `SystemTime`，避開時區換日的邊界
pub fn local_noon(date: NaiveDate) -> SystemTime {
    let naive = date.and_hms_opt(12, 0, 0).unwrap();
    Local.from_local_datetime(&naive).unwrap().into()
}

/// 寫入檔案並把修改時間設為指定日期
pub fn write_with_mtime(path: &Path, contents: &[u8], date: NaiveDate) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(local_noon(date)).unwrap();
}

/// 產生只含 Exif `DateTimeOriginal` 的最小 TIFF（RAW 檔的容器格式）
///
/// 時間字串位於 offset 44，值的 offset 欄位位於 36
pub fn tiff_with_capture_time(timestamp: &str) -> Vec<u8> {
    assert_eq!(timestamp.len(), 19, "格式必須是 YYYY:MM:DD HH:MM:SS");

    let mut tiff: Vec<u8> = Vec::new();
    // 標頭（little endian），IFD0 位於 offset 8
    tiff.extend_from_slice(b"II\x2a\x00");
    tiff.extend_from_slice(&8u32.to_le_bytes());
    // IFD0：一個 ExifIFDPointer 欄位
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes());
    tiff.extend_from_slice(&4u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    // Exif IFD：一個 DateTimeOriginal 欄位
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&20u32.to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(timestamp.as_bytes());
    tiff.push(0);
    tiff
}

/// 產生只含 Exif `DateTimeOriginal` 的最小 JPEG
pub fn jpeg_with_capture_time(timestamp: &str) -> Vec<u8> {
    let tiff = tiff_with_capture_time(timestamp);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
