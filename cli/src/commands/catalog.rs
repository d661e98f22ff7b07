use colored::*;

use eon_common::scan::catalog::{History, PlatformList};

use crate::commands::Controller;
use crate::terminal::{colors, format, print};

pub async fn platforms(controller: &Controller, q_level: u8) -> bool {
    let Some(list) = controller.platforms().await else {
        return false;
    };
    print_platforms(&list, q_level);
    true
}

pub async fn history(controller: &Controller, limit: u32, q_level: u8) -> bool {
    let Some(history) = controller.history(limit).await else {
        return false;
    };
    print_history(&history, q_level);
    true
}

fn print_platforms(list: &PlatformList, q_level: u8) {
    print::header("supported platforms", q_level);
    for (idx, platform) in list.platforms.iter().enumerate() {
        print::tree_head(idx, platform);
    }
    print::aligned_line("Total", list.total.to_string().color(colors::ACCENT));
}

fn print_history(history: &History, q_level: u8) {
    print::header("scan history", q_level);

    if history.scans.is_empty() {
        print::centerln(&format!("{}", "No scan recorded yet".color(colors::SECONDARY)));
        return;
    }

    let last: usize = history.scans.len();
    for (idx, item) in history.scans.iter().enumerate() {
        print::tree_head(idx, &item.domain);
        print::as_tree_one_level(vec![
            (String::from("ID"), item.scan_id.color(colors::ACCENT)),
            (String::from("Date"), item.timestamp.normal()),
            (String::from("Platform"), item.platform.normal()),
            (String::from("Score"), format::score(item.overall_score)),
        ]);
        if idx + 1 != last {
            crate::eon_print!();
        }
    }
    print::aligned_line("Total", format!("{} ({} shown)", history.total, last));
}
