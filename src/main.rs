use anyhow::bail;
use clap::{Parser, Subcommand};
use parts_catalog::search::highlight;
use parts_catalog::{CatalogStore, FilterAxis, Filters, SearchOptions, ingest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parts-catalog")]
#[command(about = "Search an auto-parts catalog export", long_about = None)]
struct Cli {
    /// Path to the JSON catalog export (array of product records)
    #[arg(short = 'f', long = "catalog")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked free-text search
    Search {
        query: String,
        #[arg(short = 'c', long)]
        category: Option<String>,
        #[arg(short = 's', long)]
        subcategory: Option<String>,
        #[arg(short = 'b', long)]
        brand: Option<String>,
        /// Enable the synonym/edit-distance strategy
        #[arg(long)]
        fuzzy: bool,
    },
    /// Distinct dropdown values for one filter axis
    Values {
        /// category, subcategory or brand
        axis: String,
        #[arg(short = 'c', long)]
        category: Option<String>,
        #[arg(short = 's', long)]
        subcategory: Option<String>,
        #[arg(short = 'b', long)]
        brand: Option<String>,
    },
    /// Show one product by exact code
    Show { code: String },
}

fn parse_axis(raw: &str) -> anyhow::Result<FilterAxis> {
    match raw.to_lowercase().as_str() {
        "category" => Ok(FilterAxis::Category),
        "subcategory" => Ok(FilterAxis::Subcategory),
        "brand" => Ok(FilterAxis::Brand),
        other => bail!("unknown axis '{other}' (expected category, subcategory or brand)"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut store = CatalogStore::new();
    store.load(ingest::read_records(&cli.catalog)?)?;

    match cli.command {
        Commands::Search {
            query,
            category,
            subcategory,
            brand,
            fuzzy,
        } => {
            let filters = Filters {
                category,
                subcategory,
                brand,
            };
            let outcome = store.search_with(&query, &filters, SearchOptions { fuzzy });
            for record in &outcome.hits {
                println!(
                    "{:<16} {:<44} $ {:>12}  [{}]",
                    record.code,
                    highlight(&record.description, &query),
                    record.price_display,
                    record.stock_level().label()
                );
            }
            println!(
                "{} resultados encontrados ({} mostrados)",
                outcome.total,
                outcome.hits.len()
            );
        }
        Commands::Values {
            axis,
            category,
            subcategory,
            brand,
        } => {
            let filters = Filters {
                category,
                subcategory,
                brand,
            };
            for value in store.available_values(parse_axis(&axis)?, &filters) {
                println!("{value}");
            }
        }
        Commands::Show { code } => match store.find_by_code(&code) {
            Some(record) => {
                println!("{}  {}", record.code, record.description);
                println!(
                    "{} > {} | {}",
                    record.category, record.subcategory, record.brand
                );
                println!("$ {}  [{}]", record.price_display, record.stock_level().label());
                if !record.feature_list().is_empty() {
                    println!("Características: {}", record.feature_list().join(", "));
                }
                if !record.equivalent_list().is_empty() {
                    println!("Equivalentes: {}", record.equivalent_list().join(", "));
                }
            }
            None => bail!("no product with code '{code}'"),
        },
    }

    Ok(())
}
