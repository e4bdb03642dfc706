use anyhow::Context;
use clap::Parser;
use pricebook_etl::core::output::deserialize;
use pricebook_etl::core::query::{self, PriceQuery};
use pricebook_etl::utils::logger;
use pricebook_etl::{
    CliConfig, Command, EtlEngine, EtlError, LocalStorage, PricebookDocument, PricebookPipeline,
};
use serde::Serialize;

fn run_extract(args: &pricebook_etl::config::ExtractArgs) -> pricebook_etl::Result<String> {
    let config = args.resolve()?;
    tracing::debug!("Extractor config: {:?}", config);

    let pipeline = PricebookPipeline::new(LocalStorage::default(), config)?;
    EtlEngine::new(pipeline).run()
}

fn read_document(path: &str) -> pricebook_etl::Result<PricebookDocument> {
    let bytes = std::fs::read(path)?;
    deserialize(&bytes)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{}", text);
    Ok(())
}

fn fail(e: &EtlError) -> ! {
    tracing::error!("{} (category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match &cli.command {
        Command::Extract(args) => match run_extract(args) {
            Ok(output_path) => println!("✅ Pricebook written to: {}", output_path),
            Err(e) => fail(&e),
        },
        Command::Regions(data) => {
            let document = read_document(&data.data).unwrap_or_else(|e| fail(&e));
            print_json(&query::regions(&document))?;
        }
        Command::Countries { data, region } => {
            let document = read_document(&data.data).unwrap_or_else(|e| fail(&e));
            print_json(&query::countries(&document, region.as_deref()))?;
        }
        Command::Quote {
            data,
            country,
            service,
            parts,
        } => {
            let document = read_document(&data.data).unwrap_or_else(|e| fail(&e));
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            let quote = PriceQuery::parse(service, &parts)
                .and_then(|q| query::quote(&document, country, &q))
                .unwrap_or_else(|e| fail(&e));
            print_json(&quote)?;
        }
    }

    Ok(())
}
