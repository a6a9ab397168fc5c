//! `gallery` command-line entry point
//!
//! Exit status: 0 on success, 1 when loading fails, 2 when a page is not
//! found.

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use gallery_site::{init_tracing, Gallery, PageError, SiteConfig};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("gallery")
        .version(gallery_site::VERSION)
        .about("Portfolio gallery catalog")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Override the fixture data directory"),
        )
        .subcommand(Command::new("check").about("Load and validate all fixtures"))
        .subcommand(
            Command::new("wing")
                .about("Print a wing page as JSON")
                .arg(Arg::new("wing").required(true)),
        )
        .subcommand(
            Command::new("project")
                .about("Print a project page as JSON")
                .arg(Arg::new("wing").required(true))
                .arg(Arg::new("slug").required(true)),
        )
        .subcommand(
            Command::new("transcript")
                .about("Print a transcript page as JSON")
                .arg(Arg::new("wing").required(true))
                .arg(Arg::new("slug").required(true)),
        )
        .subcommand(
            Command::new("range")
                .about("List projects in a completion range")
                .arg(
                    Arg::new("min")
                        .long("min")
                        .default_value("0")
                        .value_parser(value_parser!(u8).range(0..=100))
                        .help("Lowest completion, inclusive"),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .default_value("100")
                        .value_parser(value_parser!(u8).range(0..=100))
                        .help("Highest completion, inclusive"),
                ),
        )
}

async fn load_config(matches: &ArgMatches) -> anyhow::Result<SiteConfig> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SiteConfig::load(path).await?,
        None => SiteConfig::default(),
    };
    Ok(match matches.get_one::<PathBuf>("data-dir") {
        Some(dir) => config.with_data_dir(dir.clone()),
        None => config,
    })
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// Print a page, or report a miss with exit status 2
fn emit<T: Serialize>(page: Result<T, PageError>) -> anyhow::Result<ExitCode> {
    match page {
        Ok(page) => {
            print_json(&page)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", err.status(), err);
            Ok(ExitCode::from(2))
        }
    }
}

/// Per-wing counts followed by integrity issues
fn check_report(gallery: &Gallery) -> String {
    let mut out = format!(
        "{} projects, {} transcripts\n",
        gallery.projects().len(),
        gallery.transcripts().len()
    );
    for wing in gallery.registry().iter() {
        let count = gallery.projects().in_wing(wing.id).count();
        let _ = writeln!(out, "  {:<10} {}", wing.name, count);
    }
    let issues = gallery.audit();
    if issues.is_empty() {
        out.push_str("No integrity issues\n");
    } else {
        let _ = writeln!(out, "{} integrity issue(s):", issues.len());
        for issue in &issues {
            let _ = writeln!(out, "  - {issue}");
        }
    }
    out
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("", String::as_str)
}

async fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = load_config(matches).await?;
    init_tracing(&config.log)?;

    let gallery = Gallery::load(&config)
        .await
        .with_context(|| format!("failed to load gallery from {}", config.data_dir.display()))?;

    match matches.subcommand() {
        Some(("check", _)) => {
            print!("{}", check_report(&gallery));
            Ok(ExitCode::SUCCESS)
        }
        Some(("wing", args)) => emit(gallery.wing_page(arg(args, "wing")).await),
        Some(("project", args)) => {
            emit(gallery.project_page(arg(args, "wing"), arg(args, "slug")).await)
        }
        Some(("transcript", args)) => {
            emit(gallery.transcript_page(arg(args, "wing"), arg(args, "slug")).await)
        }
        Some(("range", args)) => {
            let min = args.get_one::<u8>("min").copied().unwrap_or(0);
            let max = args.get_one::<u8>("max").copied().unwrap_or(100);
            print_json(&gallery.completion_range(min, max).await)?;
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(&cli().get_matches()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
