mod common;

use clap::Parser;
use prettify_cli::Commands;
use prettify_cli::PrettifyCli;
use prettify_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

const TYPED_GET: &str = "caf::typed_mpi<caf::detail::type_list<caf::atom_constant<4115129>>, \
                         caf::detail::type_list<int>>";

#[test]
fn filter_rewrites_stdin() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = format!("error: cannot send to 'typed_actor<{TYPED_GET}>'\nplain caf::actor\n");

	common::prettify_cmd()
		.current_dir(tmp.path())
		.write_stdin(input)
		.assert()
		.success()
		.stdout(
			"error: cannot send to 'typed_actor<replies_to<'get'>::with<int>>'\nplain actor\n",
		);

	Ok(())
}

#[test]
fn filter_reads_files_in_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("first.log"), format!("{TYPED_GET}\n"))?;
	std::fs::write(tmp.path().join("second.log"), "std::__1::vector<caf::message>\n")?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.arg("first.log")
		.arg("second.log")
		.assert()
		.success()
		.stdout("replies_to<'get'>::with<int>\nstd::vector<message>\n");

	Ok(())
}

#[test]
fn filter_reports_missing_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.arg("missing.log")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to open `missing.log`"));

	Ok(())
}

#[test]
fn filter_passes_malformed_lines_through() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = format!("caf::typed_mpi<caf::detail::type_list<int>\n{TYPED_GET}\n");

	common::prettify_cmd()
		.current_dir(tmp.path())
		.write_stdin(input)
		.assert()
		.success()
		.stdout("caf::typed_mpi<caf::detail::type_list<int>\nreplies_to<'get'>::with<int>\n")
		.stderr(predicates::str::contains("left unchanged"));

	Ok(())
}

#[test]
fn filter_strict_fails_with_line_number() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.arg("--strict")
		.write_stdin("fine\ncaf::typed_mpi<oops\n")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("line 2").and(predicates::str::contains("unbalanced")));

	Ok(())
}

#[test]
fn filter_bare_atoms_flag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.arg("--bare-atoms")
		.write_stdin("send(caf::atom_constant<4115129>)\n")
		.assert()
		.success()
		.stdout("send('get')\n");

	Ok(())
}

#[test]
fn filter_uses_discovered_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("caf-prettify.toml"),
		"strip_prefixes = [\"caf::\", \"io::\"]\nbare_atoms = true\n",
	)?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.write_stdin("caf::io::broker caf::atom_constant<254666327>\n")
		.assert()
		.success()
		.stdout("broker 'ATOM'\n");

	Ok(())
}

#[test]
fn filter_uses_explicit_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = tmp.path().join("custom.toml");
	std::fs::write(&config, "on_error = \"fail\"\n")?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.arg("--config")
		.arg(&config)
		.write_stdin("caf::typed_mpi<\n")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("line 1"));

	Ok(())
}

#[test]
fn filter_rejects_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("caf-prettify.toml"), "on_error = \"maybe\"\n")?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.write_stdin("caf::actor\n")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn filter_verbose_prints_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::prettify_cmd()
		.current_dir(tmp.path())
		.arg("--verbose")
		.write_stdin(format!("{TYPED_GET}\nplain\n"))
		.assert()
		.success()
		.stderr(predicates::str::contains("2 line(s) read, 1 rewritten"));

	Ok(())
}

#[test]
fn parse_filter_arguments() -> AnyEmptyResult {
	let cli = PrettifyCli::try_parse_from(["caf-prettify", "--strict", "a.log", "-"])?;
	assert!(cli.command.is_none());
	assert!(cli.strict);
	assert_eq!(cli.files.len(), 2);

	let cli = PrettifyCli::try_parse_from(["caf-prettify", "decode", "1", "0x2"])?;
	assert!(matches!(cli.command, Some(Commands::Decode { ref values }) if values.len() == 2));

	Ok(())
}
