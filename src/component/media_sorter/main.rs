//! 依日期整理照片與影片的精靈
//!
//! 來源 → 目的地與模式 → 分組 → 轉移

use super::group_editor::edit_groups;
use super::report::{print_scan_summary, print_transfer_plan, print_transfer_result};
use crate::config::Config;
use crate::tools::{
    SortSession, TransferMode, TransferResult, TransferTarget, validate_directory_exists,
};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// 媒體整理元件
pub struct MediaSorter {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl MediaSorter {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("sorter.title")).cyan().bold());

        // 步驟 1：來源
        let source = prompt_directory(&t!("sorter.source_prompt"))?;
        validate_directory_exists(&source)?;

        // 步驟 2：目的地與模式
        let Some((target, mode)) = self.prompt_destinations()? else {
            return Ok(()); // ESC pressed
        };

        // 步驟 3：掃描與分組
        let mut session = scan_with_spinner(&source)?;
        if session.is_empty() {
            println!("{}", style(t!("sorter.no_media")).yellow());
            return Ok(());
        }
        print_scan_summary(&session);

        if !edit_groups(&mut session)? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        // 步驟 4：轉移
        print_transfer_plan(&session, &target, mode);

        if !confirm_transfer()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(());
        }

        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，不開始轉移");
            return Ok(());
        }

        let result = run_transfer(&session, &target, mode)?;
        print_transfer_result(&result);

        info!(
            "整理完成 - 成功: {}, 失敗: {}",
            result.transferred,
            result.errors.len()
        );

        Ok(())
    }

    fn prompt_destinations(&self) -> Result<Option<(TransferTarget, TransferMode)>> {
        let settings = &self.config.settings;

        let photo_root = prompt_directory_with_default(
            &t!("sorter.photo_destination_prompt"),
            settings.photo_destination.as_deref(),
        )?;
        let video_root = prompt_directory_with_default(
            &t!("sorter.video_destination_prompt"),
            settings.video_destination.as_deref(),
        )?;
        let target = checked_target(photo_root, video_root)?;

        let modes = [TransferMode::Copy, TransferMode::Move];
        let items = vec![t!("sorter.mode_copy"), t!("sorter.mode_move")];
        let default_index = modes
            .iter()
            .position(|&m| m == settings.transfer_mode)
            .unwrap_or(0);

        println!("{}", style(t!("common.esc_hint")).dim());
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("sorter.mode_prompt"))
            .items(&items)
            .default(default_index)
            .interact_opt()?;

        Ok(selection.map(|idx| (target, modes[idx])))
    }
}

/// 照片與影片的目標根目錄都必須是已存在的資料夾
fn checked_target(photo_root: PathBuf, video_root: PathBuf) -> Result<TransferTarget> {
    validate_directory_exists(&photo_root)?;
    validate_directory_exists(&video_root)?;
    Ok(TransferTarget::new(photo_root, video_root))
}

fn prompt_directory(prompt: &str) -> Result<PathBuf> {
    let path: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

fn prompt_directory_with_default(prompt: &str, default: Option<&str>) -> Result<PathBuf> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let path = input.interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

fn confirm_transfer() -> Result<bool> {
    let confirm = Confirm::new()
        .with_prompt(t!("sorter.confirm_transfer"))
        .default(true)
        .interact()?;
    Ok(confirm)
}

/// 掃描期間顯示 spinner
pub(crate) fn scan_with_spinner(source: &Path) -> Result<SortSession> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(t!("sorter.scanning").to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let session = SortSession::scan(source);

    spinner.finish_and_clear();
    Ok(session)
}

fn run_transfer(
    session: &SortSession,
    target: &TransferTarget,
    mode: TransferMode,
) -> Result<TransferResult> {
    let total: usize = session.groups().iter().map(|g| g.files().len()).sum();

    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    let result = session.transfer(target, mode, |progress| {
        progress_bar.set_position(progress.current as u64);
        progress_bar.set_message(progress.filename.to_string());
    });

    progress_bar.finish_with_message(t!("sorter.transfer_finished").to_string());
    Ok(result)
}
