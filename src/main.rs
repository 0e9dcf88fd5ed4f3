mod cache;
mod cli;
mod error;
mod io;
mod letters;
mod profile;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::Write;
use std::time::Duration;

use crate::cache::ProfileStore;
use crate::cli::{CacheSubcommand, Cli, Commands};
use crate::io::fetch::{HttpTextFetcher, TextFetcher};
use crate::io::writer;
use crate::profile::{Classifier, LanguageCode, ProfileBuilder};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_file) = cli.log_file {
        let file = File::create(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match cli.command {
        Commands::Detect(detect_cmd) => handle_detect_command(detect_cmd)?,
        Commands::Cache(cache_cmd) => handle_cache_command(cache_cmd)?,
    }

    Ok(())
}

fn handle_detect_command(cmd: cli::DetectCommand) -> Result<()> {
    let fetcher = HttpTextFetcher::new(Duration::from_secs(cmd.timeout));
    let store = ProfileStore::new(&cmd.cache_dir);
    let builder = ProfileBuilder::new(cmd.sample_count).with_retry_limit(cmd.fetch_retries);
    let classifier = Classifier::new(store, builder);

    info!("Fetching article from {}", cmd.article);
    let text = fetcher
        .fetch_document(&cmd.article)
        .context("Failed to fetch the article to classify")?;

    let matches = classifier.classify(&text, &cmd.languages, &fetcher, |missing| {
        if cmd.assume_yes {
            return true;
        }
        prompt_for_generation(missing)
    })?;

    if matches.is_empty() {
        warn!("No base profiles available; nothing to rank");
    }

    let mut out: Box<dyn Write> = match cmd.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    writer::output_ranking(&matches, &mut out)?;

    if cmd.chart {
        let profiles = classifier.store().load_cached(&cmd.languages)?;
        let mut bases = Vec::new();
        for language in &cmd.languages {
            if let Some(profile) = profiles.get(language) {
                bases.push((language.clone(), profile.clone()));
            }
        }

        let control = classifier.builder().build_control_profile(&text)?;
        writer::render_chart(&bases, &control, &mut out)?;
    }

    Ok(())
}

fn handle_cache_command(cmd: cli::CacheCommand) -> Result<()> {
    let store = ProfileStore::new(&cmd.cache_dir);

    match cmd.command {
        CacheSubcommand::List { detailed } => {
            let summaries = store.list()?;

            println!("language\tpath");
            for summary in &summaries {
                println!("{}\t{}", summary.language, summary.path.display());

                if detailed {
                    if let Some(profile) = store.load(&summary.language)? {
                        println!("\n# Top letters for {}", summary.language);
                        println!("letter\tfrequency");
                        let mut ranked: Vec<_> = letters::alphabet().enumerate().collect();
                        ranked.sort_by(|(a, _), (b, _)| {
                            profile.frequency(*b).partial_cmp(&profile.frequency(*a)).unwrap()
                        });
                        for (idx, letter) in ranked.iter().take(5) {
                            println!("{}\t{:.6}", letter, profile.frequency(*idx));
                        }
                        println!("checksum\t{:.6}\n", profile.checksum());
                    }
                }
            }
        }

        CacheSubcommand::Generate {
            languages,
            sample_count,
            fetch_retries,
            timeout,
            skip_existing,
        } => {
            let fetcher = HttpTextFetcher::new(Duration::from_secs(timeout));
            let builder = ProfileBuilder::new(sample_count).with_retry_limit(fetch_retries);

            for language in languages {
                if store.load(&language)?.is_some() {
                    if skip_existing {
                        warn!("Profile for {} already exists, skipping", language);
                        continue;
                    }
                    return Err(anyhow::anyhow!("Profile for {} already exists", language));
                }

                info!("Generating base profile for {}...", language);
                let profile = builder.build_base_profile(&language, &fetcher)?;
                store.save(&language, &profile)?;
            }
        }

        CacheSubcommand::Remove { language, force } => {
            if !force {
                print!(
                    "Are you sure you want to remove the profile for {}? [y/N] ",
                    language
                );
                std::io::stdout().flush()?;
                let mut input = String::new();
                std::io::stdin().read_line(&mut input)?;
                if !input.trim().eq_ignore_ascii_case("y") {
                    info!("Operation cancelled");
                    return Ok(());
                }
            }

            if store.remove(&language)? {
                info!("Profile for {} removed", language);
            } else {
                warn!("No cached profile for {}", language);
            }
        }
    }

    Ok(())
}

fn prompt_for_generation(missing: &[LanguageCode]) -> bool {
    print!(
        "Missing base profiles for {}. Generate them now? [y/N] ",
        missing.join(", ")
    );
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}
