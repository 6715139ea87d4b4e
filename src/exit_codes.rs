//! Exit code constants for the bumpscan CLI.
//!
//! - 0: Success (including runs that detect no bump)
//! - 1: User error (bad arguments, not a git repository)
//! - 2: Data failure (a tracked file is not valid YAML)
//! - 3: Git operation failure

/// Successful execution. A run that rejects every candidate bump still exits 0.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or the command was run outside a git repository.
pub const USER_ERROR: i32 = 1;

/// Data failure: a file snapshot could not be parsed as YAML.
pub const DATA_FAILURE: i32 = 2;

/// Git operation failure: unresolvable revision, diff or show errors.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, DATA_FAILURE, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(DATA_FAILURE, 2);
        assert_eq!(GIT_FAILURE, 3);
    }
}
