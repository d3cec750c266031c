use crate::hash::{MAX_COST, MIN_COST};
use crate::password::MAX_PASSWORD_LEN;
use std::path::Path;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Last path component of argv[0], falling back to the crate name.
pub fn program_name(arg0: Option<&str>) -> String {
    arg0.and_then(|a| Path::new(a).file_name())
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_string()
}

pub fn usage(program: &str, default_cost: u32) -> String {
    format!(
        "{p} v{v} - CLI tool for generating and checking bcrypt hashes
Usage:  {p} [<cost>] | <hash> [-q] | cost <hash> | help
    {p} [<cost>]:         Generate a hash from the password
                              (optional <cost>: {min}..{max}, default: {def})
    {p} <hash> [-q|--quiet]:  Check the password against <hash>
                              (quiet: only the exit status reports the result)
    {p} cost|-c|--cost <hash>: Display the cost of <hash>
    {p} help|-h|--help:   Display this help text
  The password can be piped-in or prompted for, is cut off after {len} bytes.
  Exit status: 0 ok/match, 1 mismatch, 2 usage, 3-8 runtime errors, 10-18 malformed hash.",
        p = program,
        v = VERSION,
        min = MIN_COST,
        max = MAX_COST,
        def = default_cost,
        len = MAX_PASSWORD_LEN,
    )
}
