// ABOUTME: Main entry point for the carousel program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default auto-play interval in milliseconds
    #[arg(long, global = true)]
    interval_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake slider controls and initial state into a page
    Render(RenderArgs),

    /// Drive a slider with a sequence of steps and print its state
    Simulate(SimulateArgs),

    /// Re-render a page whenever it changes
    Watch(WatchArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Path to the page source
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the rendered page
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct SimulateArgs {
    /// Path to the page source
    #[arg(short, long)]
    input: PathBuf,

    /// Which slider on the page to drive, in document order
    #[arg(long, default_value_t = 0)]
    slider: usize,

    /// Steps: next, prev, goto:N, dot:N, wait:MS
    #[arg(long, value_delimiter = ',')]
    steps: Vec<String>,

    /// Write the final page state here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct WatchArgs {
    /// Path to the page source
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the rendered page
    #[arg(short, long)]
    output: PathBuf,

    /// Serve the rendering over HTTP
    #[arg(long)]
    serve: bool,

    /// Port for the HTTP server
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Debounce time for file events in milliseconds
    #[arg(long, default_value_t = 500)]
    debounce_ms: u64,
}

fn simulate(args: &SimulateArgs, options: &carousel::BootstrapOptions) -> anyhow::Result<()> {
    let source = carousel::render::read_markup(&args.input)?;
    let document = carousel::markup::parse(&source)?;
    let steps = carousel::parse_steps(&args.steps)?;

    let mut page = carousel::Page::load(document, options);
    let reports = carousel::run_script(&mut page, args.slider, &steps)?;
    for report in &reports {
        println!("{}", report);
    }

    page.unload();
    if let Some(output) = &args.output {
        carousel::render::write_markup(&carousel::markup::to_string(page.document()), output)
            .with_context(|| format!("Failed to write {:?}", output))?;
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.interval_ms == Some(0) {
        anyhow::bail!("--interval-ms must be positive");
    }
    let config = carousel::Config::from_env()?;
    let options = config.get_bootstrap_options(cli.interval_ms);

    match &cli.command {
        Some(Commands::Render(args)) => {
            carousel::render_file(&args.input, &args.output, &options)?;
            println!("Rendered page: {:?}", args.output);
            Ok(())
        }
        Some(Commands::Simulate(args)) => simulate(args, &options),
        Some(Commands::Watch(args)) => {
            let watch_config = carousel::WatchConfig {
                input: args.input.clone(),
                output: args.output.clone(),
                debounce_ms: args.debounce_ms,
                serve: args.serve,
                port: args.port,
            };
            carousel::watch_markup(watch_config, &options)?;
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
