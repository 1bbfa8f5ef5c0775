use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Candidate, FileSource, HttpSource, Position, Status};
use pipeline::{filter_candidates, FilterSpec};
use portal::{FilterField, PortalSession, PortalView};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod render;

use render::Layout;

/// Recruitment Portal - browse and filter job candidates
#[derive(Parser)]
#[command(name = "recruit-portal")]
#[command(about = "Browse and filter recruitment candidates", long_about = None)]
struct Cli {
    /// Candidate source: a backend base URL or a JSON file
    #[arg(
        short,
        long,
        env = "RECRUIT_PORTAL_SOURCE",
        default_value = HttpSource::DEFAULT_BASE_URL
    )]
    source: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates matching the filters
    List {
        /// Case-insensitive part of the candidate's name
        #[arg(long)]
        name: Option<String>,

        /// Exact position label (needs --name)
        #[arg(long)]
        position: Option<String>,

        /// Exact status label (needs --position)
        #[arg(long)]
        status: Option<String>,

        /// Exact years of experience
        #[arg(long, allow_hyphen_values = true)]
        experience: Option<String>,

        /// How to lay out the results
        #[arg(long, value_enum, default_value_t = Layout::Auto)]
        layout: Layout,
    },

    /// Show the known position and status labels
    Labels,

    /// Measure filter latency over the loaded candidates
    Benchmark {
        /// Number of filter calls to make
        #[arg(long, default_value = "10000")]
        iterations: usize,

        /// Number of threads calling the filter at once
        #[arg(long, default_value = "4")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            name,
            position,
            status,
            experience,
            layout,
        } => {
            let filters = [
                (FilterField::Name, name),
                (FilterField::Position, position),
                (FilterField::Status, status),
                (FilterField::Experience, experience),
            ];
            handle_list(&cli.source, filters, layout).await?
        }
        Commands::Labels => handle_labels(),
        Commands::Benchmark {
            iterations,
            concurrent,
        } => handle_benchmark(&cli.source, iterations, concurrent).await?,
    }

    Ok(())
}

/// Pick a source implementation from the --source value
fn open_session(source: &str) -> Result<PortalSession> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let http = HttpSource::new(source).context("Failed to set up HTTP client")?;
        Ok(PortalSession::new(http))
    } else {
        Ok(PortalSession::new(FileSource::new(source)))
    }
}

async fn load_session(source: &str) -> Result<PortalSession> {
    let mut session = open_session(source)?;
    let start = Instant::now();
    session
        .refresh()
        .await
        .context("Failed to fetch data. Ensure JSON Server is running")?;
    tracing::info!("Loaded candidates in {:?}", start.elapsed());
    Ok(session)
}

/// Handle the 'list' command
async fn handle_list(
    source: &str,
    filters: [(FilterField, Option<String>); 4],
    layout: Layout,
) -> Result<()> {
    let mut session = load_session(source).await?;

    for notice in apply_filters(&mut session, filters) {
        println!("{} {}", "!".yellow().bold(), notice);
    }

    println!("{}", render::header(session.active_count()));
    if let Some(summary) = locked_summary(&session) {
        println!("{}", summary.dimmed());
    }
    println!();

    match session.view() {
        PortalView::Loading => println!("{}", "Loading...".dimmed()),
        PortalView::Failed(message) => println!("{} {}", "✗".red(), message),
        PortalView::Empty => println!("{}", "No results found".dimmed()),
        PortalView::Results(candidates) => {
            let lines = match layout.resolve(render::terminal_columns()) {
                Layout::Cards => render::cards(&candidates),
                _ => render::table(&candidates),
            };
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Set each given filter, collecting a notice for every refused one.
///
/// Fields go in cascade order so a name unlocks position, and so on.
fn apply_filters(
    session: &mut PortalSession,
    filters: [(FilterField, Option<String>); 4],
) -> Vec<String> {
    let mut notices = Vec::new();
    for (field, value) in filters {
        let Some(value) = value else { continue };
        if let Err(e) = session.set_filter(field, value) {
            notices.push(format!("{e} (ignored)"));
        }
    }
    notices
}

/// One line naming the fields still locked, with their unlock hints
fn locked_summary(session: &PortalSession) -> Option<String> {
    let locked = session.locked_fields();
    if locked.is_empty() {
        return None;
    }
    let fields: Vec<String> = locked
        .iter()
        .map(|field| match field.unlock_hint() {
            Some(hint) => format!("{field} ({hint})"),
            None => field.to_string(),
        })
        .collect();
    Some(format!("Locked: {}", fields.join(", ")))
}

/// Handle the 'labels' command
fn handle_labels() {
    println!("{}", "Positions:".bold().blue());
    for position in Position::ALL {
        println!("{}{}", "• ".green(), position);
    }
    println!("{}", "Statuses:".bold().blue());
    for status in Status::ALL {
        let style = portal::status_style(status.label());
        let portal::Rgb(r, g, b) = style.foreground;
        println!("{}{}", "• ".green(), status.label().truecolor(r, g, b));
    }
}

/// Specs the benchmark cycles through, roughly what typing produces
fn benchmark_specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::new(),
        FilterSpec::new().with_name("a"),
        FilterSpec::new().with_name("al"),
        FilterSpec::new().with_name("ali"),
        FilterSpec::new()
            .with_name("ali")
            .with_position("Frontend Developer"),
        FilterSpec::new()
            .with_name("ali")
            .with_position("Frontend Developer")
            .with_status("Hired"),
        FilterSpec::new().with_experience("4"),
        FilterSpec::new().with_experience("4x"),
    ]
}

/// Handle the 'benchmark' command
async fn handle_benchmark(source: &str, iterations: usize, concurrent: usize) -> Result<()> {
    let session = load_session(source).await?;
    let candidates: Arc<Vec<Candidate>> = Arc::new(session.candidates().to_vec());
    let specs = Arc::new(benchmark_specs());
    let concurrent = concurrent.max(1);

    println!(
        "Running {} filter calls over {} candidates on {} threads...",
        iterations,
        candidates.len(),
        concurrent
    );

    // Each worker takes every n-th call so the total is exact
    let wall = Instant::now();
    let mut handles = Vec::with_capacity(concurrent);
    for worker in 0..concurrent {
        let candidates = candidates.clone();
        let specs = specs.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let mut timings = Vec::new();
            for i in (worker..iterations).step_by(concurrent) {
                let spec = &specs[i % specs.len()];
                let start = Instant::now();
                let visible = filter_candidates(&candidates, spec);
                timings.push(start.elapsed());
                std::hint::black_box(visible);
            }
            timings
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for handle in handles {
        timings.extend(handle.await.context("Benchmark worker panicked")?);
    }
    let wall = wall.elapsed();

    if timings.is_empty() {
        println!("No filter calls made");
        return Ok(());
    }

    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg = total / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Wall time: {:?}", wall);
    println!("Average latency: {:?}", avg);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.0} calls/second",
        timings.len() as f64 / wall.as_secs_f64()
    );

    Ok(())
}
