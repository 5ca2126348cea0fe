//! Exit code constants for the gpic CLI.
//!
//! - 0: Success
//! - 1: User error (bad folder, bad config)
//! - 2: Usage error (reported by clap before anything else runs)
//! - 3: Server failure (bind, template compilation, serve loop)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable folder, invalid config, or a failed operation on it.
pub const USER_ERROR: i32 = 1;

/// Server failure: the listener could not be bound or the server stopped with an error.
pub const SERVER_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, SERVER_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn server_failure_does_not_collide_with_clap_usage_code() {
        assert_ne!(SERVER_FAILURE, 2);
        assert_ne!(USER_ERROR, 2);
    }
}
