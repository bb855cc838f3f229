use crate::PrettifyConfig;
use crate::PrettifyError;
use crate::PrettifyResult;
use crate::atom;
use crate::scanner::TemplateSpan;
use crate::scanner::find_marker;
use crate::scanner::find_template;
use crate::scanner::is_identifier_byte;
use crate::scanner::split_top_level;

const TYPED_MPI: &str = "typed_mpi<";
const TYPE_LIST: &str = "type_list<";
const ATOM_CONSTANT: &str = "atom_constant<";

/// The templates the rewriter knows how to shorten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
	/// `typed_mpi<type_list<...>, type_list<...>>`, rewritten to
	/// `replies_to<...>::with<...>`.
	TypedInterface,
	/// `atom_constant<N>`, rewritten to the quoted atom text.
	AtomConstant,
}

impl MarkerKind {
	pub const fn needle(self) -> &'static str {
		match self {
			Self::TypedInterface => TYPED_MPI,
			Self::AtomConstant => ATOM_CONSTANT,
		}
	}

	/// Whether an unclosed occurrence is a parse error rather than plain text.
	const fn requires_balance(self) -> bool {
		matches!(self, Self::TypedInterface)
	}

	fn rewrite(self, line: &str, span: &TemplateSpan) -> Option<String> {
		match self {
			Self::TypedInterface => rewrite_typed_interface(line, span),
			Self::AtomConstant => parse_atom_value(&line[span.inner.clone()]).map(quote_atom),
		}
	}
}

/// Rewrites single lines of compiler output.
#[derive(Debug, Clone)]
pub struct Rewriter {
	config: PrettifyConfig,
	markers: Vec<MarkerKind>,
}

impl Rewriter {
	pub fn new(config: PrettifyConfig) -> Self {
		let mut markers = vec![MarkerKind::TypedInterface];
		if config.bare_atoms {
			markers.push(MarkerKind::AtomConstant);
		}

		Self { config, markers }
	}

	pub fn config(&self) -> &PrettifyConfig {
		&self.config
	}

	/// Rewrite one line.
	///
	/// Applies the configured substitutions, rewrites every typed interface
	/// from left to right, then strips the configured qualifiers. Text that
	/// does not match a marker is left alone.
	pub fn rewrite_line(&self, line: &str) -> PrettifyResult<String> {
		let mut line = self.substitute(line);
		let mut cursor = 0;

		while let Some((kind, at)) = self.next_marker(&line, cursor) {
			let span = match find_template(&line, at..line.len(), kind.needle()) {
				Ok(Some(span)) => span,
				Ok(None) => break,
				Err(offset) if kind.requires_balance() => {
					return Err(PrettifyError::UnbalancedBrackets {
						marker: kind.needle().to_string(),
						offset,
					});
				}
				Err(_) => {
					cursor = at + kind.needle().len();
					continue;
				}
			};

			match kind.rewrite(&line, &span) {
				Some(replacement) => {
					tracing::debug!(
						?kind,
						original = &line[span.range()],
						%replacement,
						"rewrote template"
					);
					line.replace_range(span.range(), &replacement);
					cursor = span.start + replacement.len();
				}
				None => cursor = at + kind.needle().len(),
			}
		}

		Ok(self.strip_prefixes(line))
	}

	fn substitute(&self, line: &str) -> String {
		self.config
			.substitutions
			.iter()
			.filter(|substitution| !substitution.from.is_empty())
			.fold(line.to_string(), |line, substitution| {
				line.replace(&substitution.from, &substitution.to)
			})
	}

	fn strip_prefixes(&self, line: String) -> String {
		self.config
			.strip_prefixes
			.iter()
			.filter(|prefix| !prefix.is_empty())
			.fold(line, |line, prefix| line.replace(prefix.as_str(), ""))
	}

	/// The leftmost marker at or after `cursor`.
	fn next_marker(&self, line: &str, cursor: usize) -> Option<(MarkerKind, usize)> {
		self.markers
			.iter()
			.filter_map(|kind| {
				find_marker(line, cursor..line.len(), kind.needle()).map(|at| (*kind, at))
			})
			.min_by_key(|(_, at)| *at)
	}
}

impl Default for Rewriter {
	fn default() -> Self {
		Self::new(PrettifyConfig::default())
	}
}

/// Rewrite a line with the default configuration.
pub fn rewrite_line(line: &str) -> PrettifyResult<String> {
	Rewriter::default().rewrite_line(line)
}

/// Build `replies_to<INPUTS>::with<OUTPUTS>` from the two type lists inside a
/// typed interface. Returns `None` when the span does not hold two lists.
fn rewrite_typed_interface(line: &str, span: &TemplateSpan) -> Option<String> {
	let inputs = find_template(line, span.inner.clone(), TYPE_LIST).ok()??;
	let outputs = find_template(line, inputs.end()..span.inner.end, TYPE_LIST).ok()??;

	let inputs = stringify_list(&line[inputs.inner])?;
	let outputs = stringify_list(&line[outputs.inner])?;

	Some(format!("replies_to<{inputs}>::with<{outputs}>"))
}

fn stringify_list(list: &str) -> Option<String> {
	let arguments = split_top_level(list)?
		.into_iter()
		.map(|argument| stringify_argument(argument.trim()))
		.collect::<Vec<_>>();

	Some(arguments.join(", "))
}

/// Replace an `atom_constant<N>` argument with its quoted text. Anything else,
/// including atom constants with a non-numeric value, is returned unchanged.
fn stringify_argument(argument: &str) -> String {
	atom_literal(argument).unwrap_or_else(|| argument.to_string())
}

fn atom_literal(argument: &str) -> Option<String> {
	let at = find_marker(argument, 0..argument.len(), ATOM_CONSTANT)?;
	let qualifier = &argument[..at];
	let is_qualified = qualifier.is_empty()
		|| (qualifier.ends_with("::")
			&& qualifier
				.bytes()
				.all(|byte| byte == b':' || is_identifier_byte(byte)));
	if !is_qualified {
		return None;
	}

	let body = argument[at + ATOM_CONSTANT.len()..].strip_suffix('>')?;
	parse_atom_value(body).map(quote_atom)
}

/// Parse the value of an atom constant. Accepts a C-style cast in front of
/// the number, e.g. `(caf::atom_value)4115129`, and integer suffixes.
fn parse_atom_value(body: &str) -> Option<u64> {
	let mut body = body.trim();
	if body.starts_with('(') {
		let close = body.find(')')?;
		body = body[close + 1..].trim_start();
	}

	let digits = body.trim_end_matches(['u', 'U', 'l', 'L']);
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	digits.parse().ok()
}

fn quote_atom(value: u64) -> String {
	format!("'{}'", atom::decode(value))
}
