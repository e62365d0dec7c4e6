//! 精靈的輸出文字

use crate::tools::{
    Group, GroupingError, MediaCount, SortSession, TransferMode, TransferResult, TransferTarget,
    destination_folder,
};
use console::style;
use rust_i18n::t;

/// 結果中最多列出的錯誤數
const MAX_LISTED_ERRORS: usize = 10;

pub fn format_count(count: &MediaCount) -> String {
    t!("report.count", photos = count.photos, videos = count.videos).to_string()
}

/// `2024/01/05  05_Trip - 12 個檔案，2 個日期`
pub fn describe_group(group: &Group) -> String {
    format!(
        "{}  {} - {}",
        group.first_date().format("%Y/%m/%d"),
        group.folder_name(),
        t!(
            "report.group_detail",
            files = group.files().len(),
            dates = group.dates().len()
        )
    )
}

pub fn describe_grouping_error(error: &GroupingError) -> String {
    match error {
        GroupingError::InvalidGroupName(_) => t!("grouping.error_invalid_name"),
        GroupingError::EmptySelection => t!("grouping.error_empty_selection"),
        GroupingError::UnknownDate(date) => {
            t!("grouping.error_unknown_date", date = date.format("%Y-%m-%d"))
        }
        GroupingError::UnknownGroup(position) => {
            t!("grouping.error_unknown_group", position = position + 1)
        }
    }
    .to_string()
}

pub fn print_scan_summary(session: &SortSession) {
    let count = session.counts();
    println!();
    println!(
        "{}",
        style(t!(
            "report.scan_summary",
            total = count.total(),
            dates = session.all_dates().len()
        ))
        .green()
    );
    println!("  {}", format_count(&count));
}

pub fn print_transfer_plan(session: &SortSession, target: &TransferTarget, mode: TransferMode) {
    let total: usize = session.groups().iter().map(|g| g.files().len()).sum();
    let mode_text = match mode {
        TransferMode::Copy => t!("sorter.mode_copy"),
        TransferMode::Move => t!("sorter.mode_move"),
    };

    println!();
    println!("{}", style(t!("report.plan_title")).cyan().bold());
    println!(
        "  {}",
        t!("report.plan_summary", groups = session.groups().len(), files = total)
    );
    println!("  {} {}", style(t!("report.plan_mode")).dim(), mode_text);
    println!("  {} {}", style(t!("report.plan_photos")).dim(), target.photo_root.display());
    println!("  {} {}", style(t!("report.plan_videos")).dim(), target.video_root.display());
    println!();

    for group in session.groups() {
        let count = group.count();
        if count.photos > 0 {
            println!(
                "  {} {}",
                style("→").dim(),
                destination_folder(&target.photo_root, group).display()
            );
        }
        if count.videos > 0 {
            println!(
                "  {} {}",
                style("→").dim(),
                destination_folder(&target.video_root, group).display()
            );
        }
    }
    println!();
}

pub fn print_transfer_result(result: &TransferResult) {
    println!();
    println!("{}", style(t!("report.result_title")).cyan().bold());

    if result.is_success() {
        println!(
            "  {}",
            style(t!("report.result_success", count = result.transferred)).green()
        );
        return;
    }

    println!(
        "  {}",
        style(t!(
            "report.result_with_errors",
            count = result.transferred,
            errors = result.errors.len()
        ))
        .yellow()
    );
    for failure in result.errors.iter().take(MAX_LISTED_ERRORS) {
        println!(
            "  {} {}: {}",
            style("•").red(),
            failure.filename,
            failure.message
        );
    }
    if result.errors.len() > MAX_LISTED_ERRORS {
        println!(
            "  {} {}",
            style("⋯").dim(),
            t!("report.more_errors", count = result.errors.len() - MAX_LISTED_ERRORS)
        );
    }
}
