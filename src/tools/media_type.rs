use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// 照片副檔名（小寫，不含點）
pub const PHOTO_EXTENSIONS: [&str; 7] = ["nef", "raw", "jpg", "jpeg", "cr2", "arw", "dng"];

/// 影片副檔名（小寫，不含點）
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mov", "mp4", "avi", "mkv", "mts"];

/// 媒體類型，掃描時由副檔名決定，之後不再改變
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    /// 依副檔名判斷媒體類型（不分大小寫），無法辨識時回傳 `None`
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::from_extension(&ext)
    }

    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Photo)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_extensions_case_insensitive() {
        assert_eq!(MediaType::from_path(Path::new("a/IMG_0001.JPG")), Some(MediaType::Photo));
        assert_eq!(MediaType::from_path(Path::new("DSC_1.Nef")), Some(MediaType::Photo));
        assert_eq!(MediaType::from_path(Path::new("x.dng")), Some(MediaType::Photo));
    }

    #[test]
    fn test_video_extensions() {
        assert_eq!(MediaType::from_path(Path::new("clip.MTS")), Some(MediaType::Video));
        assert_eq!(MediaType::from_path(Path::new("clip.mkv")), Some(MediaType::Video));
        assert_eq!(MediaType::from_extension(".MOV"), Some(MediaType::Video));
    }

    #[test]
    fn test_unrecognized_files() {
        assert_eq!(MediaType::from_path(Path::new("notes.txt")), None);
        assert_eq!(MediaType::from_path(Path::new("README")), None);
        // 只有點開頭的檔名沒有副檔名
        assert_eq!(MediaType::from_path(Path::new(".jpg")), None);
        assert_eq!(MediaType::from_path(Path::new("photo.jpg.xmp")), None);
    }
}
