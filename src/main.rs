use clap::Parser;
use std::process::ExitCode;
use storefront_audit::driver::web::WebSession;
use storefront_audit::results::ScenarioReport;
use storefront_audit::{SearchPage, StorefrontConfig, scenario};

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Starting storefront audit for {}", config.base_url);

    let session = match WebSession::open(&config).await {
        Ok(session) => session,
        Err(e) => {
            ::log::error!("Failed to start browser session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let reports = run(&session, &config, args.command).await;

    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("Failed to serialize reports: {}", e),
    }

    if reports.iter().all(ScenarioReport::passed) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run(
    session: &WebSession,
    config: &StorefrontConfig,
    command: Command,
) -> Vec<ScenarioReport> {
    let page = SearchPage::new(session, &config.selectors);

    match command {
        Command::Audit { query, keyword } => {
            let query = query.unwrap_or_else(|| config.search_term.clone());
            let keyword = keyword.unwrap_or_else(|| config.keyword.clone());
            vec![scenario::keyword_audit(&page, &query, &keyword).await]
        }
        Command::Cart { query, item } => {
            let query = query.unwrap_or_else(|| config.search_term.clone());
            vec![scenario::cart_transaction(&page, &query, item).await]
        }
        Command::Run => vec![
            scenario::keyword_audit(&page, &config.search_term, &config.keyword).await,
            scenario::cart_transaction(&page, &config.search_term, None).await,
        ],
    }
}
