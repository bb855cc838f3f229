use std::io::BufRead;
use std::io::Write;

use crate::ErrorPolicy;
use crate::PrettifyError;
use crate::PrettifyResult;
use crate::Rewriter;

/// Counters collected while filtering a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamReport {
	/// Number of lines read.
	pub lines: usize,
	/// Lines whose output differs from their input.
	pub changed: usize,
	/// Lines emitted unchanged because they failed to parse or were not UTF-8.
	pub skipped: usize,
}

impl StreamReport {
	pub fn merge(&mut self, other: Self) {
		self.lines += other.lines;
		self.changed += other.changed;
		self.skipped += other.skipped;
	}
}

/// Rewrite `reader` line by line into `writer`.
///
/// Line terminators are written back exactly as read. A line whose typed
/// interface never closes is handled according to the rewriter's
/// [`ErrorPolicy`]: with `Passthrough` it is written out untouched and counted
/// as skipped, with `Fail` the run stops with [`PrettifyError::Line`].
///
/// Lines that are not valid UTF-8 are written out byte for byte and counted as
/// skipped under either policy.
pub fn prettify_stream<R: BufRead, W: Write>(
	mut reader: R,
	mut writer: W,
	rewriter: &Rewriter,
) -> PrettifyResult<StreamReport> {
	let mut report = StreamReport::default();
	let mut buffer = Vec::new();

	loop {
		buffer.clear();
		if reader.read_until(b'\n', &mut buffer)? == 0 {
			break;
		}
		report.lines += 1;

		let (raw, terminator) = split_terminator(&buffer);
		let Ok(content) = std::str::from_utf8(raw) else {
			tracing::warn!(line = report.lines, "leaving line with invalid UTF-8 unchanged");
			report.skipped += 1;
			writer.write_all(&buffer)?;
			continue;
		};

		match rewriter.rewrite_line(content) {
			Ok(rewritten) => {
				if rewritten != content {
					report.changed += 1;
				}
				writer.write_all(rewritten.as_bytes())?;
			}
			Err(error) => {
				match rewriter.config().on_error {
					ErrorPolicy::Fail => {
						return Err(PrettifyError::Line {
							line: report.lines,
							source: Box::new(error),
						});
					}
					ErrorPolicy::Passthrough => {
						tracing::warn!(line = report.lines, %error, "leaving line unchanged");
						report.skipped += 1;
						writer.write_all(raw)?;
					}
				}
			}
		}
		writer.write_all(terminator)?;
	}

	writer.flush()?;
	Ok(report)
}

/// Rewrite a whole string, keeping its line structure.
pub fn prettify_str(input: &str, rewriter: &Rewriter) -> PrettifyResult<String> {
	let mut output = Vec::with_capacity(input.len());
	prettify_stream(input.as_bytes(), &mut output, rewriter)?;

	String::from_utf8(output)
		.map_err(|e| PrettifyError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
	let content_len = if line.ends_with(b"\r\n") {
		line.len() - 2
	} else if line.ends_with(b"\n") {
		line.len() - 1
	} else {
		line.len()
	};

	line.split_at(content_len)
}
