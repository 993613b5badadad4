use clap::Parser;
use shipment_archive::utils::{logger, validation::Validate};
use shipment_archive::{
    ArchiveEngine, CliConfig, FileSurfaceProvider, JsonFileCache, JsonFileStore, TracingNotifier,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shipment-archive CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let cache = JsonFileCache::new(&config.data_dir);
    let store = JsonFileStore::new(&config.data_dir);
    let notifier = TracingNotifier;
    let surfaces = FileSurfaceProvider::new(&config.output_dir);
    let engine = ArchiveEngine::new(store, notifier, surfaces);

    if config.list_responsibles {
        for option in shipment_archive::populate_responsible_options(&cache) {
            println!("{}", option.label);
        }
        return Ok(());
    }

    if config.report {
        engine.print_report().await;
        return Ok(());
    }

    let criteria = config.search_criteria()?;
    let hits = engine.search(&criteria).await;
    for shipment in &hits {
        println!(
            "{} | {} | {}",
            shipment.file_number.as_deref().unwrap_or("-"),
            shipment.client.as_deref().unwrap_or("-"),
            shipment.responsible.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
