use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use rust_i18n::t;
use sortit::config::Config;
use sortit::init;
use sortit::menu::show_main_menu;
use sortit::signal::setup_shutdown_signal;
use std::sync::atomic::Ordering;

rust_i18n::i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal()?;

    let config = Config::new();
    rust_i18n::set_locale(config.settings.language.as_str());

    loop {
        if shutdown_signal.load(Ordering::SeqCst) {
            info!("收到中斷訊號，結束程式");
            break;
        }

        match show_main_menu(&term, &shutdown_signal, &config) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("程式正常結束");
                break;
            }
            Err(e) => {
                warn!("程式錯誤: {e}");
                eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
