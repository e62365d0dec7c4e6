use crate::component::media_sorter::{format_count, scan_with_spinner};
use crate::tools::{count_by_type, count_index_by_type, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Input;
use log::info;
use rust_i18n::t;
use std::path::PathBuf;

/// 掃描總覽元件
pub struct ScanOverview;

impl Default for ScanOverview {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOverview {
    pub const fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("overview.title")).cyan().bold());

        let path: String = Input::new()
            .with_prompt(t!("sorter.source_prompt"))
            .interact_text()?;
        let directory = PathBuf::from(path.trim());
        validate_directory_exists(&directory)?;

        let session = scan_with_spinner(&directory)?;
        let index = session.ungrouped();

        if index.is_empty() {
            println!("{}", style(t!("sorter.no_media")).yellow());
            return Ok(());
        }

        println!();
        for (date, files) in index {
            println!(
                "  {} {}  {}",
                style("•").dim(),
                style(date.format("%Y-%m-%d")).cyan(),
                format_count(&count_by_type(files))
            );
        }

        let total = count_index_by_type(index);
        println!();
        println!(
            "{}",
            style(t!(
                "report.scan_summary",
                total = total.total(),
                dates = index.len()
            ))
            .green()
        );
        println!("  {}", format_count(&total));

        info!(
            "掃描總覽 {} - {} 個日期，{} 個檔案",
            directory.display(),
            index.len(),
            total.total()
        );

        Ok(())
    }
}
