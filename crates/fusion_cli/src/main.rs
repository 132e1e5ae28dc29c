//! Quantum Fusion CLI
//!
//! Render, simulate and check the Quantum Fusion landing page.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::FusionConfig;
use fusion_content::SiteContent;
use fusion_core::SectionId;
use fusion_page::{LandingPage, StaticWallet};

/// Upper bound on frames spent waiting for the page to settle
const MAX_SETTLE_FRAMES: usize = 10_000;

#[derive(Parser)]
#[command(name = "fusion")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quantum Fusion landing page CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory containing fusion.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to static HTML
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render with a wallet connected at this address
        #[arg(long, value_name = "ADDRESS")]
        wallet: Option<String>,

        /// Run every animation to completion before rendering
        #[arg(long)]
        settle: bool,
    },

    /// Run the frame loop headless and report reveals
    Simulate {
        /// Frames to run after the last scroll request
        #[arg(short, long, default_value = "300")]
        frames: usize,

        /// Section to scroll to; repeat to visit several in order
        #[arg(short, long = "scroll-to", value_name = "ID")]
        scroll_to: Vec<String>,

        /// Pace frames at the configured frame rate
        #[arg(long)]
        realtime: bool,
    },

    /// Validate site content
    Check {
        /// Content file (embedded or configured content if omitted)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Open a DEX deep link for the token
    Open {
        /// DEX name, e.g. uniswap
        dex: String,

        /// Print the link instead of launching a browser
        #[arg(long)]
        print: bool,
    },

    /// Show token and page information
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = FusionConfig::load_from_dir(&cli.dir)?;

    match cli.command {
        Commands::Render {
            output,
            wallet,
            settle,
        } => cmd_render(&cli.dir, &config, output, wallet, settle),

        Commands::Simulate {
            frames,
            scroll_to,
            realtime,
        } => cmd_simulate(&cli.dir, &config, frames, &scroll_to, realtime),

        Commands::Check { content } => cmd_check(&cli.dir, &config, content),

        Commands::Open { dex, print } => cmd_open(&cli.dir, &config, &dex, print),

        Commands::Info => cmd_info(&cli.dir, &config),
    }
}

fn mount(dir: &Path, config: &FusionConfig) -> Result<LandingPage> {
    let content = config.load_content(dir)?;
    LandingPage::new(content, config.page_config()).context("Failed to mount landing page")
}

/// Run frames until idle; returns the number of frames run
fn settle(page: &mut LandingPage, dt_ms: f64) -> usize {
    let mut frames = 0;
    while !page.is_idle() && frames < MAX_SETTLE_FRAMES {
        page.frame(dt_ms);
        frames += 1;
    }
    if frames == MAX_SETTLE_FRAMES {
        warn!("page did not settle after {} frames", frames);
    }
    frames
}

fn cmd_render(
    dir: &Path,
    config: &FusionConfig,
    output: Option<PathBuf>,
    wallet: Option<String>,
    settle_first: bool,
) -> Result<()> {
    let mut page = mount(dir, config)?;
    if let Some(address) = wallet {
        page.set_wallet(StaticWallet::connected(address))
            .context("Failed to lay out page with wallet")?;
    }

    // One frame reveals whatever is on screen at load
    let dt_ms = page.frame_interval_ms();
    page.frame(dt_ms);
    if settle_first {
        let frames = settle(&mut page, dt_ms);
        debug!("settled after {} frames", frames);
    }

    let html = page.render();
    match output {
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Rendered {} bytes to {}", html.len(), path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn cmd_simulate(
    dir: &Path,
    config: &FusionConfig,
    frames: usize,
    scroll_to: &[String],
    realtime: bool,
) -> Result<()> {
    let mut page = mount(dir, config)?;
    let interval_ms = page.frame_interval_ms();
    let mut last = Instant::now();

    let mut step = |page: &mut LandingPage| {
        let dt_ms = if realtime {
            let target = Duration::from_secs_f64(interval_ms / 1000.0);
            let elapsed = last.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
            let now = Instant::now();
            let dt = (now - last).as_secs_f64() * 1000.0;
            last = now;
            dt
        } else {
            interval_ms
        };

        let report = page.frame(dt_ms);
        for key in &report.revealed {
            info!(frame = report.frame, offset = report.scroll_offset, "revealed {}", key);
        }
        report.animating
    };

    for id in scroll_to {
        match page.scroll_to_section(id) {
            Some(section) => info!("scrolling to #{}", section),
            None => warn!("no section named '{}'", id),
        }
        for _ in 0..MAX_SETTLE_FRAMES {
            if !step(&mut page) {
                break;
            }
        }
    }
    for _ in 0..frames {
        step(&mut page);
    }

    let revealed = page.revealed_keys().len();
    println!("Frames:     {}", page.frame_count());
    println!("Offset:     {:.0}px", page.scroll_offset());
    println!("Revealed:   {}/{}", revealed, page.revealable_count());
    let counters: Vec<String> = page
        .content()
        .about
        .counters
        .iter()
        .zip(page.counter_values())
        .map(|(stat, value)| stat.format(value))
        .collect();
    println!("Counters:   {}", counters.join(", "));
    println!("Idle:       {}", page.is_idle());
    Ok(())
}

fn cmd_check(dir: &Path, config: &FusionConfig, file: Option<PathBuf>) -> Result<()> {
    let file = file.or_else(|| config.site.content.as_ref().map(|path| dir.join(path)));
    let (label, content) = match file {
        Some(path) => (path.display().to_string(), parse_content_file(&path)?),
        None => (
            "embedded content".to_string(),
            SiteContent::parse(fusion_content::EMBEDDED_CONTENT)?,
        ),
    };

    info!("Checking {}", label);
    let issues = content.issues();
    if issues.is_empty() {
        info!("Content is valid");
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  - {}", issue);
    }
    anyhow::bail!("{} content issue(s) in {}", issues.len(), label);
}

/// Parse without validating, so every issue can be reported
fn parse_content_file(path: &Path) -> Result<SiteContent> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    SiteContent::parse(&source).with_context(|| format!("Failed to parse {}", path.display()))
}

fn cmd_open(dir: &Path, config: &FusionConfig, dex: &str, print: bool) -> Result<()> {
    let content = config.load_content(dir)?;
    let Some(link) = content
        .buy
        .dex_links
        .iter()
        .find(|link| link.name.eq_ignore_ascii_case(dex))
    else {
        let known: Vec<&str> = content.buy.dex_links.iter().map(|l| l.name.as_str()).collect();
        anyhow::bail!("Unknown DEX '{}'. Known: {:?}", dex, known);
    };

    let url = link.resolve(&content.token);
    if print {
        println!("{}", url);
        return Ok(());
    }

    info!("Opening {} for {}", link.name, content.token.symbol);
    open::that(&url).with_context(|| format!("Failed to open {}", url))?;
    Ok(())
}

fn cmd_info(dir: &Path, config: &FusionConfig) -> Result<()> {
    let page = mount(dir, config)?;
    let content = page.content();
    let token = &content.token;

    println!("{}", content.brand.name);
    println!("{}", "=".repeat(content.brand.name.len()));
    println!();
    println!("Token:    {} ({})", token.name, token.symbol);
    println!("Address:  {}", token.address);
    println!("Chain:    {}", token.chain_id);
    println!("Decimals: {}", token.decimals);
    println!();
    println!("Allocation:");
    for allocation in &content.tokenomics.allocations {
        println!("  - {:<12} {:>3}%", allocation.name, allocation.percentage);
    }
    println!();
    println!("Sections:");
    for section in SectionId::ALL {
        let offset = page.section_offset(section).unwrap_or_default();
        println!("  - #{:<12} {:>6.0}px", section.as_str(), offset);
    }
    println!();
    let progress = page.roadmap_progress();
    println!(
        "Roadmap:  {} ({})",
        progress.phases_label(),
        progress.progress_label()
    );
    println!(
        "Page:     {:.0}px tall, {} revealable elements",
        page.layout().content_height(),
        page.revealable_count()
    );

    Ok(())
}
