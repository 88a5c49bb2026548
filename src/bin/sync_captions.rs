use anyhow::Context;
use clap::Parser;

use photo_album::cli::CommonArgs;
use photo_album::logging::init_tracing;
use photo_album::sync_captions;

/// Add blank rows for new images to captions.csv and drop rows for removed ones
#[derive(Debug, Parser)]
#[command(name = "sync-captions", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("❌ {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.common.quiet, cli.common.verbose)?;

    let config = cli.common.config();
    let report = sync_captions(&config).context("caption sync failed")?;

    println!("✅ Synced {}", config.captions_path.display());
    println!("  images: {}", report.images);
    println!("  new rows added (blank captions): {}", report.added);
    if report.dropped > 0 {
        println!("  rows dropped (images removed): {}", report.dropped);
    }
    println!("  Tip: captions.csv を Excel で編集 → generate-album を実行");

    Ok(())
}
