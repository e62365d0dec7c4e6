//! 拍攝日期解析
//!
//! 兩段式解析：先讀 Exif 的原始拍攝時間，失敗時退回檔案修改時間

use super::MediaType;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use exif::{In, Reader, Tag, Value};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fs::{File, Metadata};
use std::io::{self, Cursor, Read};
use std::path::Path;

/// Exif `DateTimeOriginal` 的格式
const CAPTURE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// 讀取 Exif 時只讀入檔案開頭的位元組數，欄位落在範圍外時視為讀取失敗
const CAPTURE_TIME_READ_LIMIT: u64 = 1024 * 1024;

/// 日期的來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSource {
    /// 內嵌的原始拍攝時間
    Capture,
    /// 檔案系統的最後修改時間
    Modified,
}

/// 讀取內嵌的原始拍攝日期
///
/// 任何開檔、解析或欄位缺失的錯誤都不會往外拋，只回傳 `None`
#[must_use]
pub fn read_capture_date(path: &Path) -> Option<NaiveDate> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            trace!("無法開啟 {}: {e}", path.display());
            return None;
        }
    };

    let mut head = Vec::new();
    if let Err(e) = file.take(CAPTURE_TIME_READ_LIMIT).read_to_end(&mut head) {
        trace!("無法讀取 {}: {e}", path.display());
        return None;
    }

    let exif = match Reader::new().read_from_container(&mut Cursor::new(head)) {
        Ok(exif) => exif,
        Err(e) => {
            trace!("無法解析 Exif {}: {e}", path.display());
            return None;
        }
    };

    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let Value::Ascii(ref values) = field.value else {
        return None;
    };
    let raw = values.first()?;
    parse_capture_time(std::str::from_utf8(raw).ok()?)
}

/// 解析 `YYYY:MM:DD HH:MM:SS`，只保留日期部分
#[must_use]
pub fn parse_capture_time(text: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(text.trim(), CAPTURE_TIME_FORMAT)
        .ok()
        .map(|dt| dt.date())
}

/// 檔案修改時間換算成本地日期
pub fn modified_date(metadata: &Metadata) -> io::Result<NaiveDate> {
    let modified = metadata.modified()?;
    Ok(DateTime::<Local>::from(modified).date_naive())
}

/// 依序嘗試拍攝時間與修改時間
///
/// 只有照片會讀 Exif；修改時間也取不到時回傳錯誤，由呼叫端略過該檔案
pub fn resolve_date(
    path: &Path,
    media_type: MediaType,
    metadata: &Metadata,
) -> io::Result<(NaiveDate, DateSource)> {
    if media_type == MediaType::Photo
        && let Some(date) = read_capture_date(path)
    {
        return Ok((date, DateSource::Capture));
    }

    modified_date(metadata).map(|date| (date, DateSource::Modified))
}
