mod date_resolver;
mod grouping;
mod media_scanner;
mod media_type;
mod path_validator;
mod session;
mod transfer;

#[cfg(test)]
pub(crate) mod test_support;

pub use date_resolver::{
    DateSource, modified_date, parse_capture_time, read_capture_date, resolve_date,
};
pub use grouping::{Group, GroupingError, dissolve_group, form_group, validate_group_name};
pub use media_scanner::{
    DatedIndex, FileRecord, MediaCount, count_by_type, count_index_by_type, scan_media_files,
};
pub use media_type::{MediaType, PHOTO_EXTENSIONS, VIDEO_EXTENSIONS};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use session::SortSession;
pub use transfer::{
    TransferFailure, TransferMode, TransferProgress, TransferResult, TransferTarget,
    destination_folder, destination_path, transfer_groups, unique_destination,
};
