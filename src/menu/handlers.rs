use crate::component::{MediaSorter, ScanOverview};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_media_sorter(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    let sorter = MediaSorter::new(config.clone(), Arc::clone(shutdown_signal));

    if let Err(e) = sorter.run() {
        eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_scan_overview(term: &Term) -> Result<()> {
    let overview = ScanOverview::new();

    if let Err(e) = overview.run() {
        eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
