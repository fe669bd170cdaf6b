use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "longscroll", version)]
struct Cli {
    /// Log debug-level diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a page config.
    Validate(ValidateArgs),
    /// Decode a gallery manifest and list its tiles.
    Manifest(ManifestArgs),
    /// Mount a page on a virtual clock and print a JSON snapshot per step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Page config JSON. The built-in page is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ManifestArgs {
    /// Manifest JSON file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Static-assets root used to resolve tile sources.
    #[arg(long, default_value = "/assets/")]
    assets_root: String,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page config JSON. The built-in page is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Local directory laid out like the site root; the manifest is read from here.
    #[arg(long)]
    assets: PathBuf,

    /// Stop after this many milliseconds of virtual time.
    #[arg(long, default_value_t = 18_000)]
    until_ms: u64,

    /// Virtual-time step between snapshots.
    #[arg(long, default_value_t = 1_000)]
    step_ms: u64,

    /// Scroll to this section at the first step.
    #[arg(long)]
    scroll_to: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Manifest(args) => cmd_manifest(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<longscroll::PageConfig> {
    let cfg = match path {
        Some(p) => longscroll::PageConfig::from_path(p)
            .with_context(|| format!("load page config '{}'", p.display()))?,
        None => longscroll::PageConfig::default(),
    };
    cfg.validate().with_context(|| "validate page config")?;
    Ok(cfg)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let elements: usize = cfg.sections.iter().map(|s| s.elements.len()).sum();
    eprintln!(
        "ok: {} hero images, {} sections, {} animated elements",
        cfg.hero.images.len(),
        cfg.sections.len(),
        elements
    );
    Ok(())
}

fn cmd_manifest(args: ManifestArgs) -> anyhow::Result<()> {
    let body = std::fs::read(&args.in_path)
        .with_context(|| format!("read manifest '{}'", args.in_path.display()))?;

    let mut loader = longscroll::ManifestLoader::new(args.in_path.display().to_string());
    loader.begin();
    loader.settle(Ok(longscroll::FetchResponse::ok(body)));

    let view = loader.view(&args.assets_root, &Default::default());
    let mut out = std::io::stdout().lock();
    match view {
        longscroll::GalleryView::Grid { tiles } => {
            for tile in tiles {
                writeln!(out, "{:?}\t{}", tile.kind, tile.src)?;
            }
        }
        longscroll::GalleryView::Empty { label } | longscroll::GalleryView::Loading { label } => {
            writeln!(out, "{label}")?;
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.step_ms > 0, "--step-ms must be > 0");
    let cfg = load_config(args.config.as_deref())?;
    let source = longscroll::DirSource::new(&args.assets);
    let mut page = longscroll::PageController::new(cfg)?;

    let start = longscroll::Millis::ZERO;
    if let Some(request) = page.mount(start)? {
        page.fetch_manifest(&request, &source, start);
    }

    let mut out = std::io::stdout().lock();
    let mut now = start;
    loop {
        page.tick(now);
        if now == start {
            if let Some(section) = &args.scroll_to {
                match page.scroll_to_section(section) {
                    Some(cmd) => {
                        page.scroll(cmd.top, now);
                    }
                    None => eprintln!("unknown section '{section}', not scrolling"),
                }
            }
        }
        let snap = page.snapshot(now);
        serde_json::to_writer(&mut out, &snap).with_context(|| "write snapshot")?;
        writeln!(out)?;

        if now.0 >= args.until_ms {
            break;
        }
        now = longscroll::Millis(now.0.saturating_add(args.step_ms).min(args.until_ms));
    }

    page.unmount();
    Ok(())
}
