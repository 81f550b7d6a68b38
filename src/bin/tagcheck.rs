/*
** This file is a part of Tagcheck (structural XML well-formedness checker)
** Copyright (C) 2025 The Tagcheck Authors
**
** Tagcheck is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::fs;
use std::io::Read;
use std::io::stdin;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;

use tagcheck::Options;
use tagcheck::Summary;
use tagcheck::Validator;

#[derive(Parser)]
#[command(name = "tagcheck", version)]
#[command(about = "This tool checks the structural well-formedness of XML documents.")]
struct Cli {
    /// Overall statistics
    #[arg(short, long)]
    stat: bool,

    /// Tag counts
    #[arg(short, long)]
    count: bool,

    /// Accept tags left open at the end of a document
    #[arg(long)]
    allow_unclosed: bool,

    /// Reject documents nesting tags deeper than this
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Log more details to stderr, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Documents to check, standard input is read if none given
    #[arg(value_name = "FILE.xml")]
    files: Vec<PathBuf>,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

struct Linter {
    validator: Validator,
    do_stats: bool,
    do_tag_count: bool,
}

impl Linter {
    fn new(options: Options, do_stats: bool, do_tag_count: bool) -> Self {
        Linter {
            validator: Validator::new(options),
            do_stats,
            do_tag_count,
        }
    }

    fn read(file: Option<&Path>) -> Result<Vec<u8>> {
        match file {
            Some(path) => {
                fs::read(path).with_context(|| format!("Error reading file '{}'", path.display()))
            }
            None => {
                let mut bytes = Vec::new();
                stdin()
                    .read_to_end(&mut bytes)
                    .context("Error reading standard input")?;
                Ok(bytes)
            }
        }
    }

    fn report(&self, summary: &Summary) {
        if self.do_stats {
            println!(
                "Tag pairs: {}, empty element tags: {}, declarations: {}, max depth: {}",
                summary.tag_pairs, summary.empty_tags, summary.declarations, summary.max_depth
            );
            println!(
                "Attributes: {}, total size of character data: {} bytes.",
                summary.attributes, summary.text_bytes
            );
        }
        if self.do_tag_count {
            println!("Tag counts:");
            for (tag, count) in &summary.tag_counts {
                println!("  {}: {}", tag, count);
            }
        }
    }

    fn lint_file(&mut self, file: Option<&Path>) -> Result<bool> {
        let name = match file {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        };
        log::info!("checking '{}'", name);
        let bytes = Self::read(file)?;
        match self.validator.validate(&bytes) {
            Ok(summary) => {
                println!("{}: XML attributes are valid", name);
                self.report(&summary);
                Ok(true)
            }
            Err(err) => {
                let location = err.location();
                eprintln!(
                    "Well-formedness error in file '{}' at line {} column {}: {}",
                    name, location.lines, location.column, err
                );
                Ok(false)
            }
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let options = Options::new()
        .allow_unclosed_tags(cli.allow_unclosed)
        .max_depth(cli.max_depth);
    let mut linter = Linter::new(options, cli.stat, cli.count);

    if cli.files.is_empty() {
        return linter.lint_file(None);
    }
    for file in &cli.files {
        if !linter.lint_file(Some(file))? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
