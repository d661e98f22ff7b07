use colored::*;

use eon_core::health;

use crate::commands::Controller;
use crate::terminal::{colors, print};

pub async fn health(controller: &Controller, q_level: u8) -> bool {
    print::header("backend status", q_level);

    let healthy: bool = health::probe(controller.gateway()).await;
    if !healthy {
        return false;
    }

    if let Some(info) = health::service_info(controller.gateway()).await {
        print::aligned_line("Name", info.name.color(colors::ACCENT));
        print::aligned_line("Version", info.version);
        print::aligned_line("Status", info.status.green());
        if let Some(docs) = info.docs {
            print::aligned_line("Docs", docs);
        }
    }
    true
}
