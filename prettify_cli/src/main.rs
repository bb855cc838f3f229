use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use prettify_cli::Commands;
use prettify_cli::PrettifyCli;
use prettify_core::AtomValue;
use prettify_core::ErrorPolicy;
use prettify_core::PrettifyConfig;
use prettify_core::PrettifyError;
use prettify_core::Rewriter;
use prettify_core::StreamReport;
use prettify_core::prettify_stream;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = PrettifyCli::parse();

	// Respect NO_COLOR env var, --no-color flag and terminals without color.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stderr).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Decode { values }) => run_decode(values),
		Some(Commands::Encode { texts }) => run_encode(texts),
		None => run_filter(&args),
	};

	if let Err(e) = result {
		match e.downcast::<PrettifyError>() {
			// The reader went away, e.g. `caf-prettify < log | head`.
			Ok(err) if is_broken_pipe(&err) => process::exit(0),
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn is_broken_pipe(error: &PrettifyError) -> bool {
	matches!(error, PrettifyError::Io(io_err) if io_err.kind() == io::ErrorKind::BrokenPipe)
}

fn load_config(args: &PrettifyCli) -> Result<PrettifyConfig, Box<dyn std::error::Error>> {
	let mut config = match &args.config {
		Some(path) => PrettifyConfig::load_file(path)?,
		None => {
			let root = std::env::current_dir()?;
			PrettifyConfig::load(&root)?.unwrap_or_default()
		}
	};

	if args.strict {
		config.on_error = ErrorPolicy::Fail;
	}
	if args.bare_atoms {
		config.bare_atoms = true;
	}

	Ok(config)
}

fn run_filter(args: &PrettifyCli) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	tracing::debug!(?config, "loaded configuration");
	let rewriter = Rewriter::new(config);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	let mut total = StreamReport::default();

	if args.files.is_empty() {
		total.merge(prettify_stream(io::stdin().lock(), &mut out, &rewriter)?);
	}

	for path in &args.files {
		let report = if path == Path::new("-") {
			prettify_stream(io::stdin().lock(), &mut out, &rewriter)?
		} else {
			let file = File::open(path)
				.map_err(|e| format!("failed to open `{}`: {e}", path.display()))?;
			prettify_stream(BufReader::new(file), &mut out, &rewriter)?
		};
		total.merge(report);
	}

	out.flush().map_err(PrettifyError::Io)?;

	if args.verbose {
		eprintln!(
			"{} {} line(s) read, {} rewritten, {} left unchanged after errors",
			colored!("summary:", bold),
			total.lines,
			total.changed,
			total.skipped
		);
	} else if total.skipped > 0 {
		eprintln!(
			"{} {} line(s) could not be parsed and were left unchanged",
			colored!("warning:", yellow),
			total.skipped
		);
	}

	Ok(())
}

fn run_decode(values: &[String]) -> Result<(), Box<dyn std::error::Error>> {
	let stdout = io::stdout();
	let mut out = stdout.lock();

	for raw in values {
		let atom: AtomValue = raw.parse()?;
		writeln!(out, "'{atom}'").map_err(PrettifyError::Io)?;
	}

	Ok(())
}

fn run_encode(texts: &[String]) -> Result<(), Box<dyn std::error::Error>> {
	let stdout = io::stdout();
	let mut out = stdout.lock();

	for text in texts {
		let atom = AtomValue::from_text(text)?;
		writeln!(out, "{}", atom.value()).map_err(PrettifyError::Io)?;
	}

	Ok(())
}
