mod terminal;

use anyhow::{Context, Result};
use browser::ArtistBrowser;
use clap::{Parser, Subcommand};
use colored::Colorize;
use filter_engine::{FilterPipeline, MemberBucket, RangeControl, RangeEdit, YearField};
use sources::{AnySource, FileSource, GroupieApiSource, HttpSource};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use terminal::TerminalView;
use tracing::warn;

/// Groupie - browse and filter the groupie-tracker artist catalog
#[derive(Parser)]
#[command(name = "groupie")]
#[command(about = "Browse and filter music artists", long_about = None)]
struct Cli {
    /// Base URL of the groupie-tracker API
    #[arg(long, env = "GROUPIE_API_URL", default_value = sources::GROUPIE_API_URL)]
    api_url: String,

    /// Endpoint returning complete artist records (overrides --api-url)
    #[arg(long, env = "GROUPIE_URL")]
    url: Option<String>,

    /// JSON file of artist records (overrides --url and --api-url)
    #[arg(short, long, env = "GROUPIE_FILE")]
    file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "filter_engine=trace"
    #[arg(long, env = "GROUPIE_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List artists matching the given filters
    List {
        /// Case-insensitive search over names and members
        #[arg(short, long, default_value = "")]
        search: String,

        /// Earliest creation year
        #[arg(long)]
        creation_min: Option<i32>,

        /// Latest creation year
        #[arg(long)]
        creation_max: Option<i32>,

        /// Earliest first-album year
        #[arg(long)]
        album_min: Option<i32>,

        /// Latest first-album year
        #[arg(long)]
        album_max: Option<i32>,

        /// Member-count buckets, e.g. "1,2,6+" (default: all)
        #[arg(long, value_delimiter = ',')]
        members: Vec<MemberBucket>,

        /// Keep only artists that played here, e.g. "London, Uk" (repeatable)
        #[arg(long)]
        location: Vec<String>,

        /// Log why this artist passes or fails each filter
        #[arg(long)]
        trace: Option<String>,
    },

    /// Show the detail page of one artist
    Show {
        /// Artist ID
        #[arg(long)]
        id: u32,
    },

    /// List known concert locations
    Locations {
        /// Only show locations containing this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Tick only these of the shown locations, then commit (repeatable)
        #[arg(long)]
        select: Vec<String>,
    },

    /// Show statistics for the whole catalog
    Stats,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&cli.log_level))
                .context("Invalid log level")?,
        )
        .with_writer(std::io::stderr)
        .init();

    let source = select_source(&cli);
    let pipeline = match &cli.command {
        Commands::List { trace: Some(name), .. } => FilterPipeline::standard().with_trace_name(name),
        _ => FilterPipeline::standard(),
    };
    let mut browser = ArtistBrowser::new(TerminalView::new()).with_pipeline(pipeline);

    let start = Instant::now();
    match browser.load(&source).await {
        Ok(count) => eprintln!(
            "{} Loaded {} artists in {:.2?}",
            "✓".green(),
            count,
            start.elapsed()
        ),
        // The view already reported the error
        Err(_) => return Ok(ExitCode::FAILURE),
    }

    match cli.command {
        Commands::List {
            search,
            creation_min,
            creation_max,
            album_min,
            album_max,
            members,
            location,
            trace: _,
        } => handle_list(
            &mut browser,
            ListArgs {
                search,
                creation: (creation_min, creation_max),
                album: (album_min, album_max),
                members,
                locations: location,
            },
        ),
        Commands::Show { id } => return Ok(handle_show(&mut browser, id)),
        Commands::Locations { search, select } => handle_locations(&mut browser, &search, &select),
        Commands::Stats => browser.view().present_stats(),
    }

    Ok(ExitCode::SUCCESS)
}

/// `--file` beats `--url`, which beats `--api-url`
fn select_source(cli: &Cli) -> AnySource {
    if let Some(path) = &cli.file {
        FileSource::new(path).into()
    } else if let Some(url) = &cli.url {
        HttpSource::new(url).into()
    } else {
        GroupieApiSource::new(&cli.api_url).into()
    }
}

struct ListArgs {
    search: String,
    creation: (Option<i32>, Option<i32>),
    album: (Option<i32>, Option<i32>),
    members: Vec<MemberBucket>,
    locations: Vec<String>,
}

/// Handle the 'list' command: fill the panel, commit it, then search
fn handle_list(browser: &mut ArtistBrowser<TerminalView>, args: ListArgs) {
    let panel = browser.panel_mut();

    for (field, (min, max)) in [(YearField::Creation, args.creation), (YearField::FirstAlbum, args.album)] {
        if let Some(min) = min {
            panel.edit_range(field, RangeControl::Field, RangeEdit::Min(min));
        }
        if let Some(max) = max {
            panel.edit_range(field, RangeControl::Field, RangeEdit::Max(max));
        }
    }

    if !args.members.is_empty() {
        panel.set_member_buckets(args.members);
    }

    if !args.locations.is_empty() {
        let selection = panel.locations_mut();
        selection.uncheck_all_visible();
        for location in &args.locations {
            if !selection.set_checked(location, true) {
                warn!("Unknown location '{}'", location);
            }
        }
    }

    browser.apply_panel();
    browser.set_search(args.search);
    browser.view().present();
}

/// Handle the 'show' command
fn handle_show(browser: &mut ArtistBrowser<TerminalView>, id: u32) -> ExitCode {
    if browser.select(id).is_none() {
        eprintln!("{} Artist {} not found", "Error:".red().bold(), id);
        return ExitCode::FAILURE;
    }
    browser.view().present();
    ExitCode::SUCCESS
}

/// Handle the 'locations' command
fn handle_locations(browser: &mut ArtistBrowser<TerminalView>, search: &str, select: &[String]) {
    let selection = browser.panel_mut().locations_mut();
    selection.set_search(search);

    if !select.is_empty() {
        selection.uncheck_all_visible();
        for location in select {
            if !selection.set_checked(location, true) {
                warn!("Location '{}' is not shown", location);
            }
        }
    }

    let visible: Vec<String> = selection.visible().map(str::to_string).collect();
    println!(
        "{}",
        format!("{} of {} locations", visible.len(), selection.known().len())
            .bold()
            .blue()
    );
    for location in &visible {
        let mark = if selection.is_checked(location) { "[x]".green() } else { "[ ]".normal() };
        println!("  {} {}", mark, location);
    }

    if !select.is_empty() {
        let filtered = browser.apply_panel().len();
        println!(
            "{} {} locations selected, {} artists match",
            "✓".green(),
            browser.criteria().locations.len(),
            filtered
        );
    }
}
