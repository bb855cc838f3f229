/// `get`, as produced by `atom("get")`.
pub const GET_ATOM: u64 = 4_115_129;

/// `ATOM`, as produced by `atom("ATOM")`.
pub const ATOM_ATOM: u64 = 254_666_327;

/// Flag nibble `0xF` with the ten fields `HELLO` followed by five spaces.
pub const HELLO_FULL_ATOM: u64 = 0xF48F_5966_4000_0000;

/// Fields 0–6 hold the junk values 1..=7, field 7 is the start marker and
/// fields 8–9 hold `o` and `k`.
pub const MARKER_IN_STREAM_ATOM: u64 = 0x0042_0C41_461C_FD30;

/// A typed interface the way clang prints it.
pub fn typed_mpi(inputs: &str, outputs: &str) -> String {
	format!("caf::typed_mpi<caf::detail::type_list<{inputs}>, caf::detail::type_list<{outputs}>>")
}

pub fn atom_constant(value: u64) -> String {
	format!("caf::atom_constant<{value}>")
}

/// A realistic clang diagnostic mentioning two typed interfaces.
pub fn clang_diagnostic() -> String {
	format!(
		"error: no viable conversion from 'typed_actor<{}>' to 'typed_actor<{}>'",
		typed_mpi(&atom_constant(GET_ATOM), "int"),
		typed_mpi(&format!("{}, std::__1::string", atom_constant(ATOM_ATOM)), "void"),
	)
}
