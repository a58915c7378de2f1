use clap::Parser;
use miette::{bail, Result};
use sitecfg::config::read_config;
use sitecfg::data::SiteConfig;
use sitecfg::outline::Outline;
use sitecfg::validate::validate;
use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::args::{Args, SiteArgs};

mod args;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = Args::parse();
    init_tracing();

    match args.command {
        args::Command::Check(site_args) => check(site_args).await,
        args::Command::Outline(site_args) => outline(site_args).await,
    }
}

async fn check(args: SiteArgs) -> Result<()> {
    let cfg = read_config(&args.directory).await?;
    report_issues(&cfg)?;
    tracing::info!("configuration is valid");

    Ok(())
}

async fn outline(args: SiteArgs) -> Result<()> {
    let cfg = read_config(&args.directory).await?;
    report_issues(&cfg)?;
    print!("{}", Outline::of(&cfg));

    Ok(())
}

fn report_issues(cfg: &SiteConfig) -> Result<()> {
    let issues = validate(cfg);

    for issue in &issues {
        tracing::error!("{issue}");
    }
    if !issues.is_empty() {
        bail!("configuration has {} issue(s)", issues.len());
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_max_level(LevelFilter::TRACE)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .compact()
        .init();
}
