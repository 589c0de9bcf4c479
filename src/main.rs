//! Sitepack CLI - static web bundle builder
//!
//! Usage: sitepack [--gzip]
//!
//! Builds dist/ from the fixed project layout (src/styles.css,
//! src/index.html, optional favicon.ico) and prints a size report.

use anyhow::Result;
use clap::Parser;

use sitepack::{BuildConfig, BuildEvent, BundlePipeline, BundleReport, TailwindCli};

/// Sitepack - static web bundle builder
#[derive(Parser, Debug)]
#[command(name = "sitepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Also write gzip variants of the outputs and report compression ratios
    #[arg(long)]
    gzip: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🚀 Building production bundle...\n");

    let config = BuildConfig::new(std::env::current_dir()?).with_gzip(cli.gzip);
    let pipeline = BundlePipeline::new(config, TailwindCli::new());

    let report = pipeline.run(|event| match event {
        BuildEvent::SetupDist => println!("📁 Setting up dist directory..."),
        BuildEvent::CompileStyles => println!("🎨 Building optimized CSS..."),
        BuildEvent::MinifyMarkup => println!("📄 Minifying HTML..."),
        BuildEvent::CopyAssets => println!("📦 Copying static assets..."),
        BuildEvent::FaviconMissing => println!("⚠️  No favicon.ico found, skipping..."),
        BuildEvent::Compress => println!("🗜️  Gzipping files..."),
    })?;

    print_report(&report);

    Ok(())
}

fn print_report(report: &BundleReport) {
    println!("\n✅ Build completed successfully!\n");
    println!("📊 Bundle sizes:");
    for artifact in &report.artifacts {
        println!("{}", artifact.render());
    }
    println!("\n📁 Output directory: ./dist");
}
