mod common;

use prettify_core::AnyEmptyResult;
use rstest::rstest;

#[rstest]
#[case::decimal(&["4115129"], "'get'\n")]
#[case::hex(&["0xF2DE657"], "'ATOM'\n")]
#[case::several(&["4115129", "254666327"], "'get'\n'ATOM'\n")]
#[case::empty_atom(&["0"], "''\n")]
fn decode_prints_quoted_atoms(#[case] values: &[&str], #[case] expected: &str) {
	common::prettify_cmd()
		.arg("decode")
		.args(values)
		.assert()
		.success()
		.stdout(expected.to_string());
}

#[test]
fn decode_rejects_non_numeric_values() {
	common::prettify_cmd()
		.arg("decode")
		.arg("get")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("invalid atom value"));
}

#[test]
fn decode_requires_a_value() {
	common::prettify_cmd().arg("decode").assert().failure();
}

#[test]
fn encode_prints_values() -> AnyEmptyResult {
	let output = common::prettify_cmd()
		.arg("encode")
		.arg("get")
		.arg("ATOM")
		.output()?;

	assert!(output.status.success());
	similar_asserts::assert_eq!(String::from_utf8(output.stdout)?, "4115129\n254666327\n");

	Ok(())
}

#[test]
fn encode_rejects_long_atoms() {
	common::prettify_cmd()
		.arg("encode")
		.arg("much_too_long_atom")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("cannot encode"));
}
