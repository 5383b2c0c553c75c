use crate::inspector::{SampleDescriptor, DEFAULT_MAX_ENTRIES};
use crate::utils::{InspectorError, Result};
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="rnaseq-inspector",
          version=&**FULL_VERSION,
          about="Summarizes RNA-Seq variant calls validated against DNA calls for the inspector viewer",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) 2013-{}     The rnaseq-inspector authors.
This program comes with ABSOLUTELY NO WARRANTY; it is intended for
research use only.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Build the inspector JSON report")]
    Inspect(InspectArgs),
    #[clap(about = "Check comparison tables without writing a report")]
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct InspectArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input-files", alias = "input_files")]
    #[clap(
        help = "Sample name, RNA BAM, DNA BAM, RNA VCF, DNA VCF and comparison table as a comma-delimited string. Can be used more than once"
    )]
    #[clap(value_name = "DESCRIPTOR")]
    #[clap(action = ArgAction::Append)]
    #[arg(value_parser = parse_sample_descriptor)]
    pub input_files: Vec<SampleDescriptor>,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-file", alias = "output_file")]
    #[clap(help = "File to store the JSON report")]
    #[clap(value_name = "JSON")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: PathBuf,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "max-entries")]
    #[clap(value_name = "MAX_ENTRIES")]
    #[clap(help = "Number of highest-coverage sites reported per error class and sample")]
    #[clap(default_value_t = DEFAULT_MAX_ENTRIES)]
    #[arg(value_parser = at_least_one)]
    pub max_entries: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "skip-invalid-rows")]
    #[clap(help = "Skip malformed table rows instead of dropping the whole sample")]
    pub skip_invalid_rows: bool,
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'c')]
    #[clap(long = "tables")]
    #[clap(help = "Comparison tables to check")]
    #[clap(value_name = "TABLE")]
    #[clap(num_args = 1..)]
    #[arg(value_parser = check_file_exists)]
    pub table_paths: Vec<PathBuf>,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn parse_sample_descriptor(s: &str) -> Result<SampleDescriptor> {
    s.parse()
}

fn check_prefix_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(InspectorError::InvalidArgument(format!(
                "Path does not exist: {}",
                parent_dir.display()
            )));
        }
    }
    Ok(path.to_path_buf())
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(InspectorError::InvalidArgument(format!(
            "File does not exist: {}",
            path.display()
        )))
    } else {
        Ok(path.to_path_buf())
    }
}

fn parse_count(s: &str, what: &str) -> Result<usize> {
    let value: usize = s
        .parse()
        .map_err(|_| InspectorError::InvalidArgument(format!("`{}` is not a valid {}", s, what)))?;
    if value >= 1 {
        Ok(value)
    } else {
        Err(InspectorError::InvalidArgument(format!(
            "Number of {} must be at least 1",
            what
        )))
    }
}

fn threads_in_range(s: &str) -> Result<usize> {
    parse_count(s, "threads")
}

fn at_least_one(s: &str) -> Result<usize> {
    parse_count(s, "entries")
}
