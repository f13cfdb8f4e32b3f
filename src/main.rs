use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use notjs::config::Config;
use notjs::run_source_with;

const DEMOS: &[(&str, &str)] = &[
    ("demos/closure.js", include_str!("../demos/closure.js")),
    ("demos/list.js", include_str!("../demos/list.js")),
    ("demos/sum.js", include_str!("../demos/sum.js")),
    ("demos/fib.js", include_str!("../demos/fib.js")),
    ("demos/let.js", include_str!("../demos/let.js")),
];

#[derive(Parser)]
#[command(name = "notjs")]
#[command(about = "Run a script written in a small JavaScript subset")]
struct Cli {
    /// Script to run. Every bundled demo runs when omitted.
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_env();
    let mut out = io::stdout();

    match cli.file {
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!("running {}", path.display());
            run_source_with(&source, &mut out, config)
                .with_context(|| format!("in {}", path.display()))?;
        }
        None => {
            for (name, source) in DEMOS {
                writeln!(out, "// {name}")?;
                run_source_with(source, &mut out, config).with_context(|| format!("in {name}"))?;
            }
        }
    }

    Ok(())
}
