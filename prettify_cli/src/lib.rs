use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Make compiler errors for CAF code readable.",
	long_about = "caf-prettify rewrites compiler output for code built on the C++ Actor \
	              Framework.\n\nTyped actor interfaces such as `caf::typed_mpi<caf::detail::\
	              type_list<...>, caf::detail::type_list<...>>` become `replies_to<...>::with<...>` \
	              and atom constants are decoded into their quoted text.\n\nQuick start:\n  \
	              clang++ main.cpp 2>&1 | caf-prettify\n  caf-prettify build.log\n  caf-prettify \
	              decode 4115129\n  caf-prettify encode get",
	args_conflicts_with_subcommands = true
)]
pub struct PrettifyCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Files to rewrite. Standard input is read when none are given or for
	/// `-`.
	pub files: Vec<PathBuf>,

	/// Path to a config file. Defaults to `caf-prettify.toml` or
	/// `.caf-prettify.toml` in the current directory.
	#[arg(long, short, global = true)]
	pub config: Option<PathBuf>,

	/// Abort on the first line with an unbalanced typed interface instead of
	/// passing it through unchanged.
	#[arg(long, global = true, default_value_t = false)]
	pub strict: bool,

	/// Also decode `atom_constant<N>` outside of typed interfaces.
	#[arg(long, global = true, default_value_t = false)]
	pub bare_atoms: bool,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Decode atom values into their text.
	///
	/// Accepts decimal values and `0x` prefixed hexadecimal values. Prints
	/// one quoted atom per line.
	Decode {
		#[arg(required = true)]
		values: Vec<String>,
	},
	/// Encode texts into atom values.
	///
	/// Each text may hold at most 10 characters from `[ 0-9A-Z_a-z]`. Prints
	/// one decimal value per line.
	Encode {
		#[arg(required = true)]
		texts: Vec<String>,
	},
}
