//! BKEE corpus explorer CLI
//!
//! Loads the train/dev/test splits of an event-extraction corpus and prints
//! statistics, example documents and label frequency tables.

use anyhow::Result;
use bkee_core::{
    analyze_argument_roles, analyze_entity_types, analyze_event_types,
    find_examples_with_events, render_document, render_frequency_table, render_statistics,
    search_by_entity_type, search_by_event_type, DatasetStatistics, Document, Split,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Print statistics and examples for a BKEE-style JSON Lines corpus
#[derive(Parser)]
#[command(name = "bkee-explore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding train.json, dev.json and test.json
    #[arg(short, long, default_value = "processed")]
    data_dir: PathBuf,

    /// Number of training documents with events to show
    #[arg(short, long, default_value = "3")]
    examples: usize,

    /// Entries shown in the event type and argument role tables
    #[arg(short, long, default_value = "10")]
    top: usize,

    /// Also list training documents containing this event type
    #[arg(long)]
    event_type: Option<String>,

    /// Hide entity, event and relation listings in shown documents
    #[arg(long)]
    no_mentions: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

const SPLITS: [(&str, &str); 3] = [
    ("Training Set", "train"),
    ("Development Set", "dev"),
    ("Test Set", "test"),
];

fn main() -> Result<()> {
    // Load environment variables from .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("=== BKEE Dataset Exploration ===\n");

    let splits: Vec<Split> = SPLITS
        .iter()
        .map(|(_, name)| {
            let split = Split::load(*name, cli.data_dir.join(format!("{}.json", name)));
            println!("{}", split.load_message());
            split
        })
        .collect();

    print_statistics(&splits);

    let train = &splits[0].documents;
    let show_mentions = !cli.no_mentions;

    print_examples(train, cli.examples, show_mentions);

    println!("\n=== Event Type Analysis ===");
    println!("Top {} event types in training data:", cli.top);
    print!("{}", render_frequency_table(&analyze_event_types(train), Some(cli.top)));

    println!("\n=== Entity Type Analysis ===");
    println!("Entity types in training data:");
    let entity_types = analyze_entity_types(train);
    print!("{}", render_frequency_table(&entity_types, None));

    println!("\n=== Argument Role Analysis ===");
    println!("Argument roles in training data:");
    print!("{}", render_frequency_table(&analyze_argument_roles(train), Some(cli.top)));

    println!("\n=== Search Examples ===");
    if let Some((common_type, _)) = entity_types.most_common(Some(1)).first() {
        println!("\nSearching for documents with entity type '{}':", common_type);
        match search_by_entity_type(train, common_type, 1).first() {
            Some(doc) => print!("\n{}", render_document(doc, show_mentions)),
            None => println!("  No examples found for entity type '{}'", common_type),
        }
    }

    if let Some(event_type) = &cli.event_type {
        println!("\nSearching for documents with event type '{}':", event_type);
        let matches = search_by_event_type(train, event_type);
        println!("  Found {} documents", matches.len());
        if let Some(doc) = matches.first() {
            print!("\n{}", render_document(doc, show_mentions));
        }
    }

    println!("\n=== Processing Complete ===");

    Ok(())
}

fn print_statistics(splits: &[Split]) {
    println!("\n=== Dataset Statistics ===");

    for ((title, _), split) in SPLITS.iter().zip(splits) {
        let stats = DatasetStatistics::compute(&split.documents);
        debug!(
            "{}: {} documents, avg {:.2} tokens",
            split.name,
            stats.documents,
            stats.avg_tokens_per_doc()
        );

        println!("\n{}:", title);
        print!("{}", render_statistics(&stats));
    }
}

fn print_examples(train: &[Document], limit: usize, show_mentions: bool) {
    println!("\n=== Example Documents ===");

    let examples = find_examples_with_events(train, limit);
    if !examples.is_empty() {
        println!("\nFound {} examples with event mentions:", examples.len());
        for doc in examples {
            print!("\n{}", render_document(doc, show_mentions));
        }
    } else {
        println!("\nFirst document in training set:");
        if let Some(doc) = train.first() {
            print!("\n{}", render_document(doc, show_mentions));
        }
    }
}
