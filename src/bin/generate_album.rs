use anyhow::Context;
use clap::Parser;

use photo_album::cli::CommonArgs;
use photo_album::logging::init_tracing;
use photo_album::render_album;

/// Render album/index.html from the images folder and captions.csv
#[derive(Debug, Parser)]
#[command(name = "generate-album", version)]
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
    let report = render_album(&config).context("album generation failed")?;

    println!(
        "✅ Generated {} ({} images, {} captioned)",
        report.output.display(),
        report.images,
        report.captioned
    );

    Ok(())
}
