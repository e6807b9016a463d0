//! The `/kick` command rule.
//!
//! Matching is a literal, case-sensitive prefix check at the very start of
//! the message text, not tokenized parsing. Everything after `"/kick "` is
//! the target handle, taken as-is.

/// Outcome of matching a message text against the kick rule.
#[derive(Debug, PartialEq, Eq)]
pub enum KickCommand<'a> {
    /// A non-empty `@handle` target.
    Kick(&'a str),
    /// The prefix matched but the target is empty or does not start
    /// with `@`. Dropped silently by the handler.
    InvalidTarget(&'a str),
    /// Anything else, including other commands.
    NoMatch,
}

const KICK_PREFIX: &str = "/kick ";

/// Match `text` against the kick rule.
///
/// Uses a safe prefix strip so the boundary cases (`"/kick"` with no space,
/// `"/kick "` with an empty target) cannot under-index.
pub fn parse_kick(text: &str) -> KickCommand<'_> {
    let Some(target) = text.strip_prefix(KICK_PREFIX) else {
        return KickCommand::NoMatch;
    };
    if target.is_empty() || !target.starts_with('@') {
        return KickCommand::InvalidTarget(target);
    }
    KickCommand::Kick(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_handle_target() {
        assert_eq!(parse_kick("/kick @bob"), KickCommand::Kick("@bob"));
    }

    #[test]
    fn target_is_taken_verbatim_to_end_of_line() {
        assert_eq!(
            parse_kick("/kick @bob please"),
            KickCommand::Kick("@bob please")
        );
    }

    #[test]
    fn missing_at_sign_is_invalid() {
        assert_eq!(parse_kick("/kick bob"), KickCommand::InvalidTarget("bob"));
    }

    #[test]
    fn empty_target_is_invalid_not_a_panic() {
        assert_eq!(parse_kick("/kick "), KickCommand::InvalidTarget(""));
    }

    #[test]
    fn bare_command_without_space_is_no_match() {
        assert_eq!(parse_kick("/kick"), KickCommand::NoMatch);
    }

    #[test]
    fn prefix_must_be_at_start() {
        assert_eq!(parse_kick("hey /kick @bob"), KickCommand::NoMatch);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(parse_kick("/Kick @bob"), KickCommand::NoMatch);
    }

    #[test]
    fn other_commands_are_ignored() {
        assert_eq!(parse_kick("/start"), KickCommand::NoMatch);
        assert_eq!(parse_kick("hello group"), KickCommand::NoMatch);
        assert_eq!(parse_kick(""), KickCommand::NoMatch);
    }
}
