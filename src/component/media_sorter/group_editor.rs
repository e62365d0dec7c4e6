//! 分組步驟：把掃描到的日期分配到命名群組

use super::report::{describe_group, describe_grouping_error, format_count};
use crate::tools::{SortSession, count_by_type};
use anyhow::Result;
use chrono::NaiveDate;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use rust_i18n::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Create,
    Dissolve,
    Continue,
    Cancel,
}

/// 反覆建立與解散群組，直到使用者繼續或取消
///
/// 回傳 `true` 表示所有日期都已分組，可以進入轉移步驟
pub fn edit_groups(session: &mut SortSession) -> Result<bool> {
    loop {
        print_grouping_state(session);

        let mut actions = Vec::new();
        if !session.ungrouped().is_empty() {
            actions.push(Action::Create);
        }
        if !session.groups().is_empty() {
            actions.push(Action::Dissolve);
        }
        actions.push(Action::Continue);
        actions.push(Action::Cancel);

        let items: Vec<String> = actions.iter().map(|a| action_label(*a)).collect();

        println!("{}", style(t!("common.esc_hint")).dim());
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("grouping.prompt"))
            .items(&items)
            .default(0)
            .interact_opt()?;

        let Some(selection) = selection else {
            return Ok(false);
        };

        match actions[selection] {
            Action::Create => create_group(session)?,
            Action::Dissolve => dissolve_group(session)?,
            Action::Continue => {
                if session.is_fully_grouped() {
                    return Ok(true);
                }
                let message = if session.groups().is_empty() {
                    t!("grouping.no_group")
                } else {
                    t!("grouping.dates_remaining", count = session.ungrouped().len())
                };
                println!("{}", style(message).red());
            }
            Action::Cancel => return Ok(false),
        }
    }
}

fn action_label(action: Action) -> String {
    match action {
        Action::Create => t!("grouping.action_create"),
        Action::Dissolve => t!("grouping.action_dissolve"),
        Action::Continue => t!("grouping.action_continue"),
        Action::Cancel => t!("grouping.action_cancel"),
    }
    .to_string()
}

fn print_grouping_state(session: &SortSession) {
    println!();
    println!("{}", style(t!("grouping.groups_header")).cyan().bold());
    if session.groups().is_empty() {
        println!("  {}", style(t!("grouping.no_groups_yet")).dim());
    }
    for (i, group) in session.groups().iter().enumerate() {
        println!("  {}. {}", i + 1, describe_group(group));
    }

    println!();
    if session.ungrouped().is_empty() {
        println!("{}", style(t!("grouping.all_grouped")).green());
    } else {
        println!(
            "{}",
            style(t!("grouping.dates_remaining", count = session.ungrouped().len())).yellow()
        );
    }
}

fn create_group(session: &mut SortSession) -> Result<()> {
    let dates: Vec<NaiveDate> = session.ungrouped().keys().copied().collect();
    let items: Vec<String> = session
        .ungrouped()
        .iter()
        .map(|(date, files)| {
            format!(
                "{}  ({})",
                date.format("%Y-%m-%d"),
                format_count(&count_by_type(files))
            )
        })
        .collect();

    let Some(picked) = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("grouping.select_dates"))
        .items(&items)
        .interact_opt()?
    else {
        return Ok(());
    };
    let selected: Vec<NaiveDate> = picked.into_iter().map(|i| dates[i]).collect();

    let name: String = Input::new()
        .with_prompt(t!("grouping.name_prompt"))
        .allow_empty(true)
        .interact_text()?;

    match session.form_group(&name, &selected) {
        Ok(group) => println!("{} {}", style("✓").green(), describe_group(group)),
        Err(e) => println!("{}", style(describe_grouping_error(&e)).red()),
    }

    Ok(())
}

fn dissolve_group(session: &mut SortSession) -> Result<()> {
    let items: Vec<String> = session.groups().iter().map(describe_group).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("grouping.dissolve_prompt"))
        .items(&items)
        .default(0)
        .interact_opt()?;

    if let Some(position) = selection {
        session.dissolve_group(position)?;
    }

    Ok(())
}
