//! The modal-prompt seam for mixed-result discard choices.
//!
//! A mixed draw owes the player a choice of which token kind to discard.
//! Frontends implement [`DiscardPrompt`] over whatever input they have; the
//! implementations here cover headless and scripted use.

use dad_core::TokenKind;

/// Asks the player which token kind to discard on a mixed result.
pub trait DiscardPrompt {
    /// Present the drawn counts and return the chosen kind, or `None` if the
    /// player dismissed the prompt. Dismissal is not an error: the move
    /// commits with no discard.
    fn choose_discard(&mut self, law_drawn: u32, chaos_drawn: u32) -> Option<TokenKind>;
}

/// Always dismisses the prompt. The headless default: mixed results commit
/// with zero net change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverChoose;

impl DiscardPrompt for NeverChoose {
    fn choose_discard(&mut self, _law_drawn: u32, _chaos_drawn: u32) -> Option<TokenKind> {
        None
    }
}

/// Always discards the same kind. Used by scripted frontends and tests.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysChoose(pub TokenKind);

impl DiscardPrompt for AlwaysChoose {
    fn choose_discard(&mut self, _law_drawn: u32, _chaos_drawn: u32) -> Option<TokenKind> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_choose_dismisses() {
        assert_eq!(NeverChoose.choose_discard(2, 1), None);
    }

    #[test]
    fn always_choose_returns_its_kind() {
        assert_eq!(
            AlwaysChoose(TokenKind::Chaos).choose_discard(2, 1),
            Some(TokenKind::Chaos)
        );
    }
}
