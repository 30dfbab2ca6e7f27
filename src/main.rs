// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `ppt`: print primitive Pythagorean triples.
//!
//! ## Usage
//!
//! ```text
//! ppt                 # 1000000 triples, default order
//! ppt -p 13           # 13 triples with rule and parent
//! ppt --order z 0x100 # 256 triples sorted by hypotenuse
//! ```
//!
//! Triples go to stdout; logging goes to stderr and is controlled by `-v` or
//! `RUST_LOG`.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ppt_tree::config::parse_count;
use ppt_tree::output::write_records;
use ppt_tree::{Config, OrderMode, Run, DEFAULT_COUNT};

#[derive(Parser, Debug)]
#[command(
    name = "ppt",
    version,
    about = "Enumerate primitive Pythagorean triples from the (3,4,5) tree"
)]
struct Cli {
    /// Number of triples (decimal, 0x hex or 0-prefixed octal)
    #[arg(
        value_parser = parse_count,
        default_value_t = DEFAULT_COUNT,
        allow_negative_numbers = true
    )]
    count: i64,

    /// Show rule and parent triple for each triple
    #[arg(short = 'p', long = "parent")]
    show_parent: bool,

    /// Display order: none, lex (x then y then z) or z (hypotenuse)
    #[arg(short, long, default_value_t = OrderMode::build_default())]
    order: OrderMode,

    /// Append the rule path from the root to each line
    #[arg(long)]
    lineage: bool,

    /// Log generation statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            count: self.count,
            order: self.order,
            show_parent: self.show_parent,
            lineage: self.lineage,
            stats: self.stats,
        }
    }

    fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.stats => "ppt_tree=info,ppt=info",
            0 => "ppt_tree=warn,ppt=warn",
            1 => "ppt_tree=info,ppt=info",
            2 => "ppt_tree=debug,ppt=debug",
            _ => "ppt_tree=trace,ppt=trace",
        }
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    debug!(?config, "starting");

    let run = Run::execute(&config).context("cannot generate triples")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let lines = write_records(&mut out, run.records(config.record_options()))
        .context("cannot write triples")?;

    debug!(lines, "done");
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_directive());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ppt: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
