//! Argument handling for the `parse_csl` binary

/// Binary name used when the program name is unavailable
pub const DEFAULT_PROGRAM_NAME: &str = "parse_csl";

/// Pick the fixture path out of the raw argument list.
///
/// The first argument after the program name is the path. Anything after it
/// is ignored.
pub fn fixture_path_from_args(args: &[String]) -> Option<&str> {
    args.get(1).map(String::as_str)
}

/// One-line usage message
pub fn usage(args: &[String]) -> String {
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_PROGRAM_NAME);
    format!("Usage: {} <filepath>", program)
}
