use anyhow::{Context, Result};
use clap::ArgMatches;
use graphnorm_core::{DegeneratePolicy, convert};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

/// Options for a single conversion run, resolved from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    /// `None` reads standard input
    pub input: Option<PathBuf>,
    /// `None` writes standard output
    pub output: Option<PathBuf>,
    pub policy: DegeneratePolicy,
}

impl ConvertOptions {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let policy = if args.get_flag("allow-degenerate") {
            DegeneratePolicy::Propagate
        } else {
            DegeneratePolicy::Reject
        };

        Self {
            input: args.get_one::<String>("input").map(|p| expand_path(p)),
            output: args.get_one::<String>("output").map(|p| expand_path(p)),
            policy,
        }
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Map `-v` / `-q` onto the maximum level written to stderr
pub fn log_level(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the fmt subscriber on stderr so stdout only ever carries commands
pub fn init_logging(verbosity: u8, quiet: bool) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(verbosity, quiet))
        .with_target(false)
        .init();
}

/// Buffer everything the reader yields
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read input")?;
    Ok(content)
}

/// Read the whole input from `path`, or from standard input when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading records from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            debug!("Reading records from stdin");
            read_from(io::stdin().lock())
        }
    }
}

/// Write the rendered commands to `path`, or to standard output when no path is given
pub fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

/// Read, convert and write. The output is only touched once conversion has succeeded.
pub fn handle_convert(options: &ConvertOptions) -> Result<()> {
    let input = read_input(options.input.as_deref())?;
    let rendered = convert(&input, options.policy).context("Conversion failed")?;

    write_output(options.output.as_deref(), &rendered)?;
    info!("Wrote {} commands", rendered.lines().count());

    Ok(())
}
