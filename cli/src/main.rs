mod commands;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use commands::{CommandLine, Commands, catalog, health, scan, shell};
use eon_common::config::Config;
use eon_core::{AppState, Outcome, ScanController};
use eon_protocols::HttpGateway;
use terminal::{logging, print, view::TerminalView};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let gateway: Arc<HttpGateway> = Arc::new(HttpGateway::new(&cfg)?);

    if !matches!(commands.command, Commands::Health) {
        let probe_gateway = gateway.clone();
        tokio::spawn(async move {
            eon_core::health::probe(&*probe_gateway).await;
        });
    }

    let controller = ScanController::new(
        gateway,
        TerminalView::new(cfg.quiet),
        Arc::new(AppState::new()),
    );

    let succeeded: bool = match commands.command {
        Commands::Scan {
            domain,
            include_subdomains,
            html,
            export,
        } => {
            print::header("starting audit", cfg.quiet);
            let outcome: Outcome = scan::scan(&controller, &domain, include_subdomains, &cfg).await;
            if export {
                controller.export_pdf();
            }
            if let Some(path) = html {
                scan::save_html(&controller, &path)?;
            }
            outcome.is_success()
        }
        Commands::Show { scan_id, html } => {
            print::header("loading stored scan", cfg.quiet);
            let outcome: Outcome = scan::show(&controller, &scan_id, &cfg).await;
            if let Some(path) = html {
                scan::save_html(&controller, &path)?;
            }
            outcome.is_success()
        }
        Commands::Delete { scan_id } => scan::delete(&controller, &scan_id).await.is_success(),
        Commands::Platforms => catalog::platforms(&controller, cfg.quiet).await,
        Commands::History { limit } => catalog::history(&controller, limit, cfg.quiet).await,
        Commands::Health => health::health(&controller, cfg.quiet).await,
        Commands::Shell => {
            shell::shell(&controller, &cfg).await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
