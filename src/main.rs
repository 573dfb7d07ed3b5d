//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::io::IsTerminal;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::analysis::{
    Corpus, StatsResult, TemporalDecoder, TextNormalizer, aggregate_with, build_corpus,
    messages_per_day_with, normalize_with,
};
use chatstats::cli::Args;
use chatstats::format::{OutputFormat, write_to_format};
use chatstats::message::Backup;
use chatstats::output::write_json;
use chatstats::ChatstatsError;

const TOP_WORDS: usize = 5;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 13] = [
    "", "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        tracing::debug!(error = ?e, "run failed");
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "chatstats=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CHATSTATS_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let config = args.analysis_config()?;
    let format: OutputFormat = args.output_format();

    println!("📈 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.datafile.display());
    println!("💬 Thread:   #{}", config.conversation);
    println!("🕒 Timezone: {}", config.timezone);
    println!("📄 Format:   {}", format);
    println!();

    println!("⏳ Loading backup...");
    let load_start = Instant::now();
    let conversation = Backup::from_path(&args.datafile)?.into_conversation(config.conversation)?;
    println!(
        "   Found {} messages ({:.2}s)",
        conversation.len(),
        load_start.elapsed().as_secs_f64()
    );

    let decoder = TemporalDecoder::new(config.timezone)?;

    // Step 1: Stats (every message, null bodies included)
    let stats = aggregate_with(&conversation, &decoder)?;
    print_stats(&stats);
    if let Some(ref path) = args.stats {
        write_json(&stats, path)?;
        println!("   Stats written to {}", path.display());
    }

    // Step 2: Normalized records
    println!("🧾 Normalizing messages...");
    let records = normalize_with(&conversation, &decoder)?;
    write_to_format(&records, &args.norm_out, format, &config.output)?;
    println!(
        "   {} records → {}",
        records.len(),
        args.norm_out.display()
    );

    // Step 3: Corpus
    println!("🔤 Building corpus...");
    let corpus_start = Instant::now();
    let normalizer = TextNormalizer::from_config(&config.normalizer)?;
    let corpus = build_corpus(&conversation, &normalizer);
    write_to_format(&corpus.entries(), &args.corpus_out, format, &config.output)?;
    println!(
        "   {} distinct words, {} tokens → {} ({:.2}s)",
        corpus.len(),
        corpus.total(),
        args.corpus_out.display(),
        corpus_start.elapsed().as_secs_f64()
    );
    print_top_words(&corpus);

    // Step 4: Daily counts (optional)
    if let Some(ref path) = args.daily {
        println!("📅 Counting messages per day...");
        let days = messages_per_day_with(&conversation, &decoder)?;
        write_to_format(&days, path, format, &config.output)?;
        println!("   {} days → {}", days.len(), path.display());
    }

    println!();
    println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_top_words(corpus: &Corpus) {
    let top: Vec<String> = corpus
        .top(TOP_WORDS)
        .iter()
        .map(|entry| format!("{} ({})", entry.word, entry.count))
        .collect();
    if !top.is_empty() {
        println!("   Top words: {}", top.join(", "));
    }
}

fn print_stats(stats: &StatsResult) {
    println!();
    println!("📊 Stats:");
    println!("   Messages:   {}", stats.count);
    println!("   By hour:    {:?}", stats.hour_histogram);
    println!("   By month:   {:?}", &stats.month_histogram[1..]);
    println!("   By weekday: {:?}", stats.weekday_histogram);

    if let (Some(hour), Some(weekday), Some(month)) = (
        stats.busiest_hour(),
        stats.busiest_weekday(),
        stats.busiest_month(),
    ) {
        println!(
            "   Busiest:    {:02}:00, {}, {}",
            hour, WEEKDAYS[weekday], MONTHS[month]
        );
    }
    println!();
}
