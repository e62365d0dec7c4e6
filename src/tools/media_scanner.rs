use super::date_resolver::{DateSource, resolve_date};
use super::MediaType;
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 掃描到的單一媒體檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// 顯示用檔名；非 UTF-8 的位元組會被替換
    pub filename: String,
    pub date: NaiveDate,
    pub media_type: MediaType,
    pub size: u64,
    pub date_source: DateSource,
}

impl FileRecord {
    /// 原始檔名，轉移時作為目標檔名
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        self.path
            .file_name()
            .unwrap_or_else(|| OsStr::new(&self.filename))
    }
}

/// 日期 → 檔案列表，日期由舊到新排序
pub type DatedIndex = BTreeMap<NaiveDate, Vec<FileRecord>>;

/// 照片與影片數量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaCount {
    pub photos: usize,
    pub videos: usize,
}

impl MediaCount {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.photos + self.videos
    }

    fn add(&mut self, media_type: MediaType) {
        match media_type {
            MediaType::Photo => self.photos += 1,
            MediaType::Video => self.videos += 1,
        }
    }
}

/// 遞迴掃描目錄，依解析出的日期分組
///
/// 根目錄不存在或不是資料夾時回傳空結果；無法辨識的副檔名與
/// 無法取得 metadata 的檔案會被略過
#[must_use]
pub fn scan_media_files(root: &Path) -> DatedIndex {
    info!("開始掃描媒體檔案: {}", root.display());

    let mut index = DatedIndex::new();
    if !root.is_dir() {
        debug!("掃描根目錄不是資料夾: {}", root.display());
        return index;
    }

    let mut skipped = 0usize;

    let entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| !entry.file_type().is_dir());

    for entry in entries {
        let Some(media_type) = MediaType::from_path(entry.path()) else {
            continue;
        };

        match build_record(entry.into_path(), media_type) {
            Some(record) => index.entry(record.date).or_default().push(record),
            None => skipped += 1,
        }
    }

    let count = count_index_by_type(&index);
    info!(
        "掃描完成: {} 個日期，{} 張照片，{} 部影片，略過 {} 個",
        index.len(),
        count.photos,
        count.videos,
        skipped
    );

    index
}

/// 讀取 metadata 並解析日期；任何檔案系統錯誤都讓此檔案被略過
fn build_record(path: PathBuf, media_type: MediaType) -> Option<FileRecord> {
    // fs::metadata 會跟隨符號連結，連到一般檔案的連結也會被納入
    let metadata = match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => return None,
        Err(e) => {
            debug!("略過無法讀取的檔案 {}: {e}", path.display());
            return None;
        }
    };

    let (date, date_source) = match resolve_date(&path, media_type, &metadata) {
        Ok(resolved) => resolved,
        Err(e) => {
            debug!("略過無法取得修改時間的檔案 {}: {e}", path.display());
            return None;
        }
    };

    let filename = path.file_name()?.to_string_lossy().into_owned();

    Some(FileRecord {
        filename,
        date,
        media_type,
        size: metadata.len(),
        date_source,
        path,
    })
}

/// 計算檔案列表中的照片與影片數量
#[must_use]
pub fn count_by_type(files: &[FileRecord]) -> MediaCount {
    let mut count = MediaCount::default();
    for file in files {
        count.add(file.media_type);
    }
    count
}

/// 計算整個索引的照片與影片數量
#[must_use]
pub fn count_index_by_type(index: &DatedIndex) -> MediaCount {
    index.values().fold(MediaCount::default(), |acc, files| {
        let count = count_by_type(files);
        MediaCount {
            photos: acc.photos + count.photos,
            videos: acc.videos + count.videos,
        }
    })
}
