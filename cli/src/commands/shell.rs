//! Interactive session. The application state lives as long as the session,
//! so `export` and `reset` act on the last displayed scan.

use std::path::Path;

use colored::*;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use eon_common::config::Config;

use crate::commands::{Controller, scan};
use crate::terminal::{colors, print};

#[derive(Debug, PartialEq, Eq)]
enum Action<'a> {
    Scan {
        domain: &'a str,
        include_subdomains: bool,
    },
    Show(&'a str),
    Delete(&'a str),
    Reset,
    Export,
    Save(&'a str),
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse(line: &str) -> Action<'_> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Action::Empty;
    };
    let args: Vec<&str> = words.collect();

    match (verb, args.as_slice()) {
        ("scan", &[domain]) => Action::Scan {
            domain,
            include_subdomains: false,
        },
        ("scan", &[domain, "-s" | "--include-subdomains"])
        | ("scan", &["-s" | "--include-subdomains", domain]) => Action::Scan {
            domain,
            include_subdomains: true,
        },
        ("show", &[scan_id]) => Action::Show(scan_id),
        ("delete", &[scan_id]) => Action::Delete(scan_id),
        ("save", &[path]) => Action::Save(path),
        ("reset", &[]) => Action::Reset,
        ("export", &[]) => Action::Export,
        ("help" | "?", _) => Action::Help,
        ("quit" | "exit" | "q", _) => Action::Quit,
        _ => Action::Unknown(verb),
    }
}

pub async fn shell(controller: &Controller, cfg: &Config) -> anyhow::Result<()> {
    print::header("interactive session", cfg.quiet);
    print_help();

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        stdout
            .write_all(format!("{} ", "eon>".color(colors::PRIMARY).bold()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        controller.target().document().clear_history();

        match parse(&line) {
            Action::Scan {
                domain,
                include_subdomains,
            } => {
                scan::scan(controller, domain, include_subdomains, cfg).await;
            }
            Action::Show(scan_id) => {
                scan::show(controller, scan_id, cfg).await;
            }
            Action::Delete(scan_id) => {
                scan::delete(controller, scan_id).await;
            }
            Action::Reset => controller.reset_form(),
            Action::Export => {
                controller.export_pdf();
            }
            Action::Save(path) => {
                if let Err(e) = scan::save_html(controller, Path::new(path)) {
                    tracing::error!("{e:#}");
                }
            }
            Action::Help => print_help(),
            Action::Quit => break,
            Action::Empty => {}
            Action::Unknown(verb) => {
                tracing::warn!("Unknown command '{verb}', type 'help' for the list");
            }
        }
    }

    print::end_of_program();
    Ok(())
}

fn print_help() {
    print::aligned_line("scan", "<domain> [-s]   audit a domain");
    print::aligned_line("show", "<scan_id>       display a stored scan");
    print::aligned_line("delete", "<scan_id>       delete a stored scan");
    print::aligned_line("reset", "clear the form and results");
    print::aligned_line("export", "export the current scan as PDF");
    print::aligned_line("save", "<file>          save the results as HTML");
    print::aligned_line("quit", "leave the session");
}
