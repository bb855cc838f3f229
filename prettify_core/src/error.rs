use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum PrettifyError {
	#[error(transparent)]
	#[diagnostic(code(prettify::io_error))]
	Io(#[from] std::io::Error),

	#[error("unbalanced template brackets after `{marker}` at byte {offset}")]
	#[diagnostic(
		code(prettify::unbalanced_brackets),
		help("the expression is truncated or continues on another line; pass the full line")
	)]
	UnbalancedBrackets { marker: String, offset: usize },

	#[error("cannot encode `{0}` as an atom")]
	#[diagnostic(
		code(prettify::invalid_atom),
		help("atoms hold at most 10 characters from `[ 0-9A-Z_a-z]`")
	)]
	InvalidAtom(String),

	#[error("invalid atom value: `{0}`")]
	#[diagnostic(
		code(prettify::invalid_atom_value),
		help("pass an unsigned 64-bit integer in decimal or `0x` hexadecimal form")
	)]
	InvalidAtomValue(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(prettify::config_parse),
		help(
			"check that the config is valid TOML with `substitutions`, `strip_prefixes`, \
			 `bare_atoms` and `on_error` keys"
		)
	)]
	ConfigParse(String),

	#[error("line {line}: {source}")]
	#[diagnostic(code(prettify::line))]
	Line {
		line: usize,
		#[source]
		source: Box<PrettifyError>,
	},
}

pub type PrettifyResult<T> = Result<T, PrettifyError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
