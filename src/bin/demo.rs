//! sblog Demo Binary
//!
//! Prints a sample of every level and attribute shape with the given
//! options, optionally mirroring into rotated files.

use clap::Parser;
use sblog::{attrs, Level, Logger, LoggerOptions, Style};
use tracing_subscriber::{fmt, EnvFilter};

/// sblog demo
#[derive(Parser, Debug)]
#[command(name = "sblog-demo")]
#[command(about = "Print sample log output with sblog")]
#[command(version)]
struct Args {
    /// Highest verbosity level to print
    #[arg(short, long, default_value = "0")]
    verbosity: u32,

    /// strftime layout for timestamps
    #[arg(short, long, default_value = sblog::format::DEFAULT_TIME_FORMAT)]
    time_format: String,

    /// Existing directory to mirror output into (empty disables)
    #[arg(short = 'd', long, default_value = "")]
    log_dir: String,

    /// Log file name prefix
    #[arg(short, long, default_value = "sblog")]
    prefix: String,

    /// Number of files in the rotation
    #[arg(short = 'n', long, default_value = "1")]
    max_files: u32,

    /// Size threshold per file in bytes
    #[arg(short = 'b', long, default_value = "1000000")]
    max_bytes: u64,

    /// Write files without color escape sequences
    #[arg(long)]
    plain: bool,

    /// Number of extra verbose levels to emit past --verbosity
    #[arg(long, default_value = "1")]
    overshoot: u32,
}

fn main() {
    // Initialize tracing for sblog's own diagnostics (rotation events)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sblog=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = LoggerOptions::builder()
        .current_verbosity_level(args.verbosity)
        .time_format(&args.time_format)
        .log_directory(&args.log_dir)
        .log_name_prefix(&args.prefix)
        .max_file_count(args.max_files)
        .max_file_size_bytes(args.max_bytes)
        .file_style(if args.plain { Style::Plain } else { Style::Ansi })
        .build();

    let logger = match Logger::new(options) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to create logger: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&logger, args.verbosity.saturating_add(args.overshoot)) {
        tracing::error!("Logging failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = logger.close() {
        tracing::error!("Failed to close log files: {}", e);
        std::process::exit(1);
    }
}

fn run(logger: &Logger, max_emitted: u32) -> sblog::Result<()> {
    type Emit = fn(&Logger, &str, &[sblog::Attr]) -> sblog::Result<()>;
    let levels: [(&str, Emit); 4] = [
        ("debug", Logger::debug),
        ("info", Logger::info),
        ("warn", Logger::warn),
        ("error", Logger::error),
    ];

    for (name, emit) in levels {
        emit(logger, &format!("This is a {} message", name), &[])?;
        emit(
            logger,
            &format!("This is a {} message", name),
            &attrs![
                "Keys without values are treated as messages",
                "and are printed on a separate line",
            ],
        )?;
        emit(logger, &format!("A {} message logging a value", name), &attrs!["value" => 10])?;
        emit(
            logger,
            &format!("A {} message logging multiple values", name),
            &attrs!["value1" => 10, "value2" => 11],
        )?;
        emit(
            logger,
            &format!("A {} message", name),
            &attrs!["Separate line", "value" => 10],
        )?;
    }

    for verbosity in 0..=max_emitted {
        logger.log(
            Level::verbose(verbosity),
            &format!("This is a level {} verbose message", verbosity),
            &[],
        )?;
    }

    Ok(())
}
