use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use podgen::{
    BuildOptions, FeedBuild, FeedConfig, HostedUrlProvider, ReqwestClient, build_feed,
    load_config, load_source, validate_config,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[~] ");

/// Build podcast feeds from downloaded episodes
#[derive(Parser, Debug)]
#[command(name = "podgen")]
#[command(about = "Build publishable podcast feeds from downloaded episodes")]
#[command(version)]
struct Args {
    /// Path to the TOML configuration file
    config: PathBuf,

    /// Only build the feed with this id
    #[arg(short, long)]
    feed: Option<String>,

    /// Maximum number of enclosure URLs resolved at the same time
    #[arg(short = 'c', long)]
    concurrent: Option<usize>,

    /// Quiet mode - suppress the summary output
    #[arg(short, long)]
    quiet: bool,
}

async fn build_one(
    client: &ReqwestClient,
    provider: &HostedUrlProvider,
    feed_config: &FeedConfig,
    options: &BuildOptions,
    cancel: &CancellationToken,
) -> Result<FeedBuild> {
    let source = load_source(client, &feed_config.source)
        .await
        .with_context(|| format!("loading source feed for '{}'", feed_config.id))?;

    let build = build_feed(cancel, &source, feed_config, provider, options)
        .await
        .with_context(|| format!("building feed '{}'", feed_config.id))?;

    let xml = build.feed.to_xml().context("rendering feed")?;

    match &feed_config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            tokio::fs::write(path, xml)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!(feed_id = %feed_config.id, path = %path.display(), "feed written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(xml.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("writing feed to stdout")?;
        }
    }

    Ok(build)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.podgen.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    validate_config(&config).context("config validation failed")?;

    let Some(base_url) = config.podgen.base_url.as_deref() else {
        bail!("podgen.base_url must be set to publish enclosure URLs");
    };
    let provider = HostedUrlProvider::new(base_url).context("invalid podgen.base_url")?;

    let feeds: Vec<&FeedConfig> = config
        .feed
        .iter()
        .filter(|feed| args.feed.as_ref().is_none_or(|id| &feed.id == id))
        .collect();
    if feeds.is_empty() {
        bail!("no matching feeds configured");
    }

    if !args.quiet {
        eprintln!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podgen".bold().magenta(),
            "- Podcast Feed Builder".dimmed()
        );
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let options = BuildOptions {
        max_concurrent: args.concurrent.unwrap_or(config.podgen.max_concurrent),
        now: None,
    };
    let client = ReqwestClient::new();

    let mut failed = 0;
    for feed_config in feeds {
        match build_one(&client, &provider, feed_config, &options, &cancel).await {
            Ok(build) => {
                if args.quiet {
                    continue;
                }
                eprintln!(
                    "{SUCCESS}{} {} items",
                    feed_config.id.bold().green(),
                    build.feed.items().len().to_string().cyan()
                );
                for diagnostic in build.diagnostics.iter() {
                    eprintln!("   {WARNING}{}", diagnostic.to_string().yellow());
                }
            }
            Err(e) => {
                failed += 1;
                error!(feed_id = %feed_config.id, "{e:#}");
                if !args.quiet {
                    eprintln!(
                        "{FAILURE}{} - {}",
                        feed_config.id.bold().red(),
                        format!("{e:#}").dimmed()
                    );
                }
            }
        }

        if cancel.is_cancelled() {
            break;
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
