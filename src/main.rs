//! colorport - generate editor color schemes
//!
//! Converts a built-in style or a definition file into any registered
//! output format and writes it to stdout.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use colorport::{builtin, Background, Config, FormatRegistry, Result, SyntaxStyle};

/// Generate color schemes in different formats
#[derive(Parser, Debug)]
#[command(name = "colorport", version, about)]
#[command(group(
    ArgGroup::new("source")
        .args(["style", "file"])
        .multiple(false)
))]
struct Cli {
    /// Target format (defaults to the configured format)
    format: Option<String>,

    /// Use a built-in style
    #[arg(short = 'S', value_name = "STYLE")]
    style: Option<String>,

    /// Use a style definition file
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<PathBuf>,

    /// Scheme name written into the output
    #[arg(long)]
    name: Option<String>,

    /// Background mode: auto, light or dark
    #[arg(long)]
    background: Option<Background>,

    /// Configuration file (defaults to ~/.colorport.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show available styles and exit
    #[arg(long, exclusive = true)]
    list_styles: bool,

    /// Show available formats and exit
    #[arg(long, exclusive = true)]
    list_formats: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let listing = cli.list_styles || cli.list_formats;
    if !listing && cli.style.is_none() && cli.file.is_none() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "one of -S <STYLE> or -f <FILE> is required",
            )
            .exit();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("COLORPORT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(name) = cli.name {
        config.scheme_name = name;
    }
    if let Some(background) = cli.background {
        config.background = background;
    }
    debug!(?config, "configuration");

    let registry = FormatRegistry::builtin(&config)?;

    if cli.list_styles {
        return print_lines(builtin::names());
    }
    if cli.list_formats {
        return print_lines(registry.names());
    }

    let style = match (&cli.style, &cli.file) {
        (Some(name), _) => {
            info!(style = %name, "converting built-in style");
            SyntaxStyle::from_external(&builtin::find(name)?)?
        }
        (None, Some(path)) => {
            info!(file = %path.display(), "reading definition file");
            let mut reader = BufReader::new(File::open(path)?);
            registry.require("definition")?.read(&mut reader)?
        }
        // Rejected in main
        (None, None) => return Ok(()),
    };

    let format_name = cli.format.as_deref().unwrap_or(&config.default_format);
    let writer = registry.require(format_name)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writer.write(&mut out, &style)?;
    out.flush()?;
    Ok(())
}

fn print_lines(lines: Vec<&str>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
