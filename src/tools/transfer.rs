//! 檔案轉移
//!
//! 目標路徑：`<root>/YYYY/MM/DD_<群組名稱>/<檔名>`，年月日取自群組最早的日期。
//! 單一檔案失敗只會記錄下來，不會中斷整批轉移

use super::grouping::Group;
use super::media_scanner::FileRecord;
use super::path_validator::ensure_directory_exists;
use super::MediaType;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// 轉移模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// 複製，保留來源檔案
    #[default]
    Copy,
    /// 移動，來源檔案會被移除
    Move,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Move => write!(f, "move"),
        }
    }
}

/// 照片與影片各自的目標根目錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTarget {
    pub photo_root: PathBuf,
    pub video_root: PathBuf,
}

impl TransferTarget {
    pub fn new(photo_root: impl Into<PathBuf>, video_root: impl Into<PathBuf>) -> Self {
        Self {
            photo_root: photo_root.into(),
            video_root: video_root.into(),
        }
    }

    #[must_use]
    pub fn root_for(&self, media_type: MediaType) -> &Path {
        match media_type {
            MediaType::Photo => &self.photo_root,
            MediaType::Video => &self.video_root,
        }
    }
}

/// 每處理完一個檔案回報一次
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress<'a> {
    /// 從 1 開始
    pub current: usize,
    pub total: usize,
    pub filename: &'a str,
}

/// 單一檔案的失敗紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFailure {
    pub filename: String,
    /// 底層 I/O 錯誤訊息，不做轉譯
    pub message: String,
}

/// 轉移結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransferResult {
    /// 成功的檔案數
    pub transferred: usize,
    pub errors: Vec<TransferFailure>,
}

impl TransferResult {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.transferred + self.errors.len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 群組的目標日資料夾：`<root>/YYYY/MM/DD_<name>`
#[must_use]
pub fn destination_folder(root: &Path, group: &Group) -> PathBuf {
    let first = group.first_date();
    root.join(first.format("%Y").to_string())
        .join(first.format("%m").to_string())
        .join(group.folder_name())
}

/// 尚未處理同名衝突的目標路徑
#[must_use]
pub fn destination_path(target: &TransferTarget, group: &Group, record: &FileRecord) -> PathBuf {
    destination_folder(target.root_for(record.media_type), group).join(record.file_name())
}

/// 目標已存在時依序嘗試 `name_1.ext`、`name_2.ext`…，回傳第一個不存在的路徑
#[must_use]
pub fn unique_destination(dest: PathBuf) -> PathBuf {
    if !is_taken(&dest) {
        return dest;
    }

    let parent = dest.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = dest
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    let extension = dest.extension().map(OsStr::to_os_string);

    let mut counter = 1usize;
    loop {
        let mut name = stem.clone();
        name.push(format!("_{counter}"));
        if let Some(extension) = &extension {
            name.push(".");
            name.push(extension);
        }
        let candidate = parent.join(name);
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// 懸空的符號連結也算已佔用，避免覆寫
fn is_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// 依群組順序、群組內檔案順序轉移所有檔案
///
/// `on_progress` 對每個檔案恰好呼叫一次（不論成功或失敗），`current` 嚴格遞增
pub fn transfer_groups<F>(
    groups: &[Group],
    target: &TransferTarget,
    mode: TransferMode,
    mut on_progress: F,
) -> TransferResult
where
    F: FnMut(TransferProgress<'_>),
{
    let work: Vec<(&Group, &FileRecord)> = groups
        .iter()
        .flat_map(|group| group.files().iter().map(move |file| (group, file)))
        .collect();
    let total = work.len();

    info!(
        "開始轉移 {total} 個檔案（{mode}）: 照片 → {}，影片 → {}",
        target.photo_root.display(),
        target.video_root.display()
    );

    let mut result = TransferResult::default();

    for (idx, (group, file)) in work.into_iter().enumerate() {
        let dest = unique_destination(destination_path(target, group, file));

        match transfer_file(&file.path, &dest, mode) {
            Ok(()) => {
                debug!("{} -> {}", file.path.display(), dest.display());
                result.transferred += 1;
            }
            Err(e) => {
                warn!("轉移檔案失敗 {}: {e}", file.path.display());
                result.errors.push(TransferFailure {
                    filename: file.filename.clone(),
                    message: e.to_string(),
                });
            }
        }

        on_progress(TransferProgress {
            current: idx + 1,
            total,
            filename: &file.filename,
        });
    }

    info!(
        "轉移完成 - 成功: {}, 失敗: {}",
        result.transferred,
        result.errors.len()
    );

    result
}

fn transfer_file(source: &Path, dest: &Path, mode: TransferMode) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_directory_exists(parent)?;
    }

    match mode {
        TransferMode::Copy => copy_preserving_times(source, dest),
        TransferMode::Move => move_file(source, dest),
    }
}

/// 複製檔案並保留存取與修改時間；無法設定時間時只記錄警告
fn copy_preserving_times(source: &Path, dest: &Path) -> io::Result<()> {
    fs::copy(source, dest)?;

    let metadata = fs::metadata(source)?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    let applied = open_for_times(dest).and_then(|file| file.set_times(times));
    if let Err(e) = applied {
        warn!("無法保留檔案時間 {}: {e}", dest.display());
    }

    Ok(())
}

/// 設定時間只需檔案擁有權，唯讀的目標檔也能開啟
#[cfg(not(windows))]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(windows)]
fn open_for_times(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    File::options().access_mode(FILE_WRITE_ATTRIBUTES).open(path)
}

/// 先嘗試 rename，失敗時（例如跨檔案系統）改為複製後刪除
fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            debug!(
                "rename 失敗，改用複製後刪除 {}: {rename_err}",
                source.display()
            );
            copy_preserving_times(source, dest)?;
            fs::remove_file(source)
        }
    }
}
