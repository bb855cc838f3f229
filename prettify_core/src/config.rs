use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::PrettifyError;
use crate::PrettifyResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["caf-prettify.toml", ".caf-prettify.toml"];

/// A literal replacement applied to every line before any structural
/// rewriting.
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
pub struct Substitution {
	pub from: String,
	pub to: String,
}

impl Substitution {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// What a stream filter does with a line whose typed interface never closes.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
	/// Emit the line exactly as it was read and log a warning.
	#[default]
	Passthrough,
	/// Abort the whole run with the parse error.
	Fail,
}

/// Configuration loaded from a `caf-prettify.toml` file.
///
/// Every key is optional and falls back to the defaults shown here:
///
/// ```toml
/// strip_prefixes = ["caf::"]
/// bare_atoms = false
/// on_error = "passthrough"
///
/// [[substitutions]]
/// from = "std::__1::"
/// to = "std::"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(default)]
pub struct PrettifyConfig {
	/// Replacements applied in order before rewriting, such as collapsing the
	/// libc++ inline namespace.
	pub substitutions: Vec<Substitution>,
	/// Qualifiers removed from the whole line after rewriting.
	pub strip_prefixes: Vec<String>,
	/// Also decode `atom_constant<N>` outside of typed interfaces.
	pub bare_atoms: bool,
	/// Handling of lines with unbalanced typed interfaces.
	pub on_error: ErrorPolicy,
}

impl Default for PrettifyConfig {
	fn default() -> Self {
		Self {
			substitutions: vec![Substitution::new("std::__1::", "std::")],
			strip_prefixes: vec!["caf::".to_string()],
			bare_atoms: false,
			on_error: ErrorPolicy::default(),
		}
	}
}

impl PrettifyConfig {
	/// Returns the first config file that exists in `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config discovered in `root`. Returns `Ok(None)` when there is
	/// no config file.
	pub fn load(root: &Path) -> PrettifyResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load a config from an explicit path.
	pub fn load_file(path: &Path) -> PrettifyResult<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml(&content)
	}

	pub fn from_toml(content: &str) -> PrettifyResult<Self> {
		toml::from_str(content).map_err(|e| PrettifyError::ConfigParse(e.to_string()))
	}
}
