use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;

use universe_insights::args::{AnalyzeArgs, Command, FlashcardArgs, InsightsArgs};
use universe_insights::charts::plot_reports;
use universe_insights::config::types::ConfigFile;
use universe_insights::config::{apply_config, load_config};
use universe_insights::error::AppResult;
use universe_insights::events::{LogGrammar, load_events};
use universe_insights::flashcards::{FlashcardClientConfig, GeminiClient, generate_from_file};
use universe_insights::output::write_reports;
use universe_insights::reports::ReportEngine;

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches))
}

fn parse_args() -> AppResult<(InsightsArgs, ArgMatches)> {
    let matches = InsightsArgs::command().get_matches_from(std::env::args_os());
    let args = InsightsArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(args: InsightsArgs, matches: &ArgMatches) -> AppResult<()> {
    let config = load_config(args.config.as_deref())?;
    match args.command {
        Command::Analyze(mut analyze) => {
            if let (Some(config), Some(sub_matches)) =
                (config.as_ref(), matches.subcommand_matches("analyze"))
            {
                apply_config(&mut analyze, sub_matches, config)?;
            }
            run_analyze(&analyze).await
        }
        Command::Flashcards(flashcards) => run_flashcards(flashcards, config.as_ref()).await,
    }
}

async fn run_analyze(args: &AnalyzeArgs) -> AppResult<()> {
    let grammar = LogGrammar::new()?;
    let events = load_events(&grammar, Path::new(&args.log_file), args.encoding).await?;

    let engine = ReportEngine::new()?.with_ranking_limit(args.top_n.get());
    let reports = engine.compute(&events);

    write_reports(&reports, args.output_format, args.output.as_deref()).await?;

    if args.no_charts {
        return Ok(());
    }
    let written = plot_reports(&reports, Path::new(&args.charts_path)).await?;
    info!("Wrote {} charts to '{}'", written.len(), args.charts_path);
    Ok(())
}

async fn run_flashcards(args: FlashcardArgs, config: Option<&ConfigFile>) -> AppResult<()> {
    let mut client_config =
        FlashcardClientConfig::from_file(config.and_then(|file| file.flashcards.as_ref()));
    if let Some(model) = args.model {
        client_config.model = model;
    }
    let client = GeminiClient::new(&client_config)?;
    let cards = generate_from_file(&client, Path::new(&args.input)).await?;
    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}
