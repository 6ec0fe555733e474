//! The move resolver: everything between classification and commit.
//!
//! Resolution applies its policies in a fixed order: defining-moment
//! escalation, then the mixed-result discard choice, then the pool cap, then
//! floor clamping, then terminal failure detection. The order matters: a
//! defining moment suppresses the discard prompt entirely, and the cap reads
//! the pool as it was before the delta.

use chrono::Utc;
use rand::rngs::StdRng;

use dad_core::{SpecialMove, TokenKind, TokenPool};

use crate::classify::{Classification, classify};
use crate::error::{DrawError, DrawResult};
use crate::record::{FailureKind, MessageKey, MoveId, MoveRecord, Outcome, TokenDelta};
use crate::sampler::{Draw, draw_tokens};

/// Pool size at which further gains are discarded.
pub const DEFAULT_TOKEN_CAP: u32 = 10;

/// One resolution attempt against a character's pool.
///
/// Transient: built per move, consumed by [`begin_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Name of the character making the move.
    pub character: String,
    /// Display name of the move ("Move" for a generic one).
    pub move_name: String,
    /// Description carried from a special move, if any.
    pub move_description: Option<String>,
    /// The token kind the move is attempting to align with.
    pub approach: TokenKind,
    /// How many tokens to draw. At least 1, at most the pool total.
    pub difficulty: u32,
    /// A difficult move turns a mixed draw into a mixed fail.
    pub difficult: bool,
    /// A defining moment escalates failure to losing every drawn token.
    pub defining: bool,
}

impl MoveRequest {
    /// A generic move with both flags off.
    pub fn new(character: impl Into<String>, approach: TokenKind, difficulty: u32) -> Self {
        Self {
            character: character.into(),
            move_name: "Move".to_string(),
            move_description: None,
            approach,
            difficulty,
            difficult: false,
            defining: false,
        }
    }

    /// A request for one of the character's special moves: the approach is
    /// fixed by the move, and its name and description ride along for
    /// display.
    pub fn special(
        character: impl Into<String>,
        special_move: &SpecialMove,
        difficulty: u32,
    ) -> Self {
        Self {
            character: character.into(),
            move_name: special_move.name.clone(),
            move_description: if special_move.description.is_empty() {
                None
            } else {
                Some(special_move.description.clone())
            },
            approach: special_move.approach,
            difficulty,
            difficult: false,
            defining: false,
        }
    }

    /// Set the difficult flag, builder style.
    pub fn with_difficult(mut self, difficult: bool) -> Self {
        self.difficult = difficult;
        self
    }

    /// Set the defining flag, builder style.
    pub fn with_defining(mut self, defining: bool) -> Self {
        self.defining = defining;
        self
    }
}

/// A move that has been sampled and classified but not yet committed.
///
/// When [`awaits_discard`](Self::awaits_discard) is true the player owes a
/// choice of which token kind to discard; pass it to
/// [`finish`](Self::finish), or pass `None` if they dismissed the prompt.
/// On every other path the choice is ignored.
#[derive(Debug, Clone)]
pub struct PendingMove {
    request: MoveRequest,
    pool_before: TokenPool,
    cap: u32,
    draw: Draw,
    classification: Classification,
}

/// Validate a request, sample the draw, and classify it.
///
/// Fails before sampling if the difficulty is zero or exceeds the pool;
/// nothing is mutated on failure and the RNG is not advanced.
pub fn begin_move(
    pool: TokenPool,
    request: MoveRequest,
    cap: u32,
    rng: &mut StdRng,
) -> DrawResult<PendingMove> {
    if request.difficulty == 0 {
        return Err(DrawError::ZeroDifficulty);
    }
    if request.difficulty > pool.total() {
        return Err(DrawError::InsufficientPool {
            difficulty: request.difficulty,
            available: pool.total(),
        });
    }
    let draw = draw_tokens(&pool, request.difficulty, rng);
    let classification = classify(&draw, request.approach, request.difficult);
    Ok(PendingMove {
        request,
        pool_before: pool,
        cap,
        draw,
        classification,
    })
}

impl PendingMove {
    /// The request this move was begun with.
    pub fn request(&self) -> &MoveRequest {
        &self.request
    }

    /// The tokens that came out of the pool.
    pub fn draw(&self) -> &Draw {
        &self.draw
    }

    /// How the draw classified.
    pub fn outcome(&self) -> Outcome {
        self.classification.outcome
    }

    /// The pool as it was when the move began.
    pub fn pool_before(&self) -> TokenPool {
        self.pool_before
    }

    /// True if the player owes a discard choice: a mixed draw on a move that
    /// is not a defining moment. Defining mixed results never prompt.
    pub fn awaits_discard(&self) -> bool {
        self.classification.outcome.is_mixed() && !self.request.defining
    }

    /// Apply the remaining policies and commit to a record.
    ///
    /// `choice` is the player's discard pick when
    /// [`awaits_discard`](Self::awaits_discard) is true; `None` means the
    /// prompt was dismissed, which applies no discard but still commits.
    pub fn finish(self, choice: Option<TokenKind>) -> MoveRecord {
        let discard = if self.awaits_discard() { choice } else { None };
        let Classification {
            outcome,
            mut delta,
            message,
        } = self.classification;
        let mut messages = vec![message];

        if self.request.defining && outcome.is_failure() {
            // A defining moment gone wrong costs every drawn token of both
            // kinds, overriding the single-token discard rules.
            delta = TokenDelta {
                law: -(self.draw.count(TokenKind::Law) as i32),
                chaos: -(self.draw.count(TokenKind::Chaos) as i32),
            };
            messages.push(MessageKey::DefiningFailure);
        } else if let Some(kind) = discard {
            delta.add(kind, -1);
        }

        let mut max_tokens_reached = false;
        if delta.is_gain() && self.pool_before.total() >= self.cap {
            delta = TokenDelta::zero();
            max_tokens_reached = true;
            messages.push(MessageKey::MaxTokensReached);
        }

        let pool_after = delta.apply(self.pool_before);

        let mut failure = None;
        if pool_after.law == 0 {
            failure = Some(FailureKind::Deadbeat);
        }
        if pool_after.chaos == 0 {
            failure = Some(match failure {
                Some(FailureKind::Deadbeat) => FailureKind::Both,
                _ => FailureKind::Hardass,
            });
        }
        match failure {
            Some(FailureKind::Deadbeat) => messages.push(MessageKey::BecameDeadbeat),
            Some(FailureKind::Hardass) => messages.push(MessageKey::BecameHardass),
            Some(FailureKind::Both) => messages.push(MessageKey::CharacterFailed),
            None => {}
        }

        MoveRecord {
            id: MoveId::new(),
            character: self.request.character,
            move_name: self.request.move_name,
            move_description: self.request.move_description,
            approach: self.request.approach,
            difficulty: self.request.difficulty,
            difficult: self.request.difficult,
            defining: self.request.defining,
            draw: self.draw,
            outcome,
            delta,
            pool_after,
            max_tokens_reached,
            failure,
            messages,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const L: TokenKind = TokenKind::Law;
    const C: TokenKind = TokenKind::Chaos;

    fn request(approach: TokenKind, difficulty: u32) -> MoveRequest {
        MoveRequest::new("Gary", approach, difficulty)
    }

    /// Build a pending move around a hand-picked draw, so scenario tests do
    /// not depend on what the RNG happens to deal.
    fn pending(pool: TokenPool, tokens: &[TokenKind], req: MoveRequest) -> PendingMove {
        let draw = Draw {
            tokens: tokens.to_vec(),
        };
        let classification = classify(&draw, req.approach, req.difficult);
        PendingMove {
            request: req,
            pool_before: pool,
            cap: DEFAULT_TOKEN_CAP,
            draw,
            classification,
        }
    }

    #[test]
    fn all_matching_draw_gains_one_approach_token() {
        let record = pending(TokenPool::new(4, 3), &[L, L, L], request(L, 3)).finish(None);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.delta, TokenDelta { law: 1, chaos: 0 });
        assert_eq!(record.pool_after, TokenPool::new(5, 3));
        assert_eq!(record.failure, None);
        assert!(!record.max_tokens_reached);
        assert_eq!(record.messages, vec![MessageKey::OutcomeSuccess]);
    }

    #[test]
    fn none_matching_draw_discards_one_opposite_token() {
        let record = pending(TokenPool::new(4, 3), &[C, C, C], request(L, 3)).finish(None);
        assert_eq!(record.outcome, Outcome::Failure);
        assert_eq!(record.delta, TokenDelta { law: 0, chaos: -1 });
        assert_eq!(record.pool_after, TokenPool::new(4, 2));
        assert_eq!(record.failure, None);
    }

    #[test]
    fn mixed_draw_awaits_discard_choice() {
        let m = pending(TokenPool::new(4, 3), &[L, C], request(L, 2));
        assert!(m.awaits_discard());
        let record = m.finish(Some(C));
        assert_eq!(record.outcome, Outcome::MixedSuccess);
        assert_eq!(record.delta, TokenDelta { law: 0, chaos: -1 });
        assert_eq!(record.pool_after, TokenPool::new(4, 2));
    }

    #[test]
    fn mixed_discard_can_target_either_kind() {
        let record = pending(TokenPool::new(4, 3), &[L, C], request(L, 2)).finish(Some(L));
        assert_eq!(record.delta, TokenDelta { law: -1, chaos: 0 });
        assert_eq!(record.pool_after, TokenPool::new(3, 3));
    }

    #[test]
    fn dismissed_discard_commits_with_zero_delta() {
        let record = pending(TokenPool::new(4, 3), &[L, C], request(L, 2)).finish(None);
        assert_eq!(record.outcome, Outcome::MixedSuccess);
        assert_eq!(record.delta, TokenDelta::zero());
        assert_eq!(record.pool_after, TokenPool::new(4, 3));
    }

    #[test]
    fn defining_failure_loses_every_drawn_token() {
        let req = request(L, 3).with_defining(true);
        let m = pending(TokenPool::new(4, 3), &[C, C, C], req);
        assert!(!m.awaits_discard());
        let record = m.finish(None);
        assert_eq!(record.outcome, Outcome::Failure);
        assert_eq!(record.delta, TokenDelta { law: 0, chaos: -3 });
        assert_eq!(record.pool_after, TokenPool::new(4, 0));
        assert_eq!(record.failure, Some(FailureKind::Hardass));
        assert_eq!(
            record.messages,
            vec![
                MessageKey::OutcomeFailure,
                MessageKey::DefiningFailure,
                MessageKey::BecameHardass,
            ]
        );
    }

    #[test]
    fn defining_mixed_fail_loses_every_drawn_token_without_prompting() {
        let req = request(L, 3).with_difficult(true).with_defining(true);
        let m = pending(TokenPool::new(4, 3), &[L, L, C], req);
        assert!(!m.awaits_discard());
        let record = m.finish(None);
        assert_eq!(record.outcome, Outcome::MixedFail);
        assert_eq!(record.delta, TokenDelta { law: -2, chaos: -1 });
        assert_eq!(record.pool_after, TokenPool::new(2, 2));
    }

    #[test]
    fn defining_mixed_success_commits_unchanged_and_ignores_any_choice() {
        let req = request(L, 2).with_defining(true);
        let m = pending(TokenPool::new(4, 3), &[L, C], req);
        assert!(!m.awaits_discard());
        let record = m.finish(Some(L));
        assert_eq!(record.outcome, Outcome::MixedSuccess);
        assert_eq!(record.delta, TokenDelta::zero());
        assert_eq!(record.pool_after, TokenPool::new(4, 3));
        assert_eq!(record.messages, vec![MessageKey::OutcomeMixedSuccess]);
    }

    #[test]
    fn defining_success_is_not_escalated() {
        let req = request(L, 2).with_defining(true);
        let record = pending(TokenPool::new(4, 3), &[L, L], req).finish(None);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.delta, TokenDelta { law: 1, chaos: 0 });
        assert!(!record.messages.contains(&MessageKey::DefiningFailure));
    }

    #[test]
    fn gain_at_cap_is_discarded() {
        let record = pending(TokenPool::new(6, 4), &[L, L], request(L, 2)).finish(None);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.delta, TokenDelta::zero());
        assert_eq!(record.pool_after, TokenPool::new(6, 4));
        assert!(record.max_tokens_reached);
        assert_eq!(
            record.messages,
            vec![MessageKey::OutcomeSuccess, MessageKey::MaxTokensReached]
        );
    }

    #[test]
    fn cap_check_is_idempotent() {
        let pool = TokenPool::new(7, 3);
        let first = pending(pool, &[L, L], request(L, 2)).finish(None);
        let second = pending(pool, &[L, L], request(L, 2)).finish(None);
        assert_eq!(first.pool_after, pool);
        assert_eq!(second.pool_after, pool);
    }

    #[test]
    fn cap_uses_the_pre_delta_total() {
        // Total 9 before the gain: the pool may grow to exactly the cap.
        let record = pending(TokenPool::new(5, 4), &[L, L], request(L, 2)).finish(None);
        assert_eq!(record.pool_after, TokenPool::new(6, 4));
        assert!(!record.max_tokens_reached);
    }

    #[test]
    fn cap_never_applies_to_discards() {
        let record = pending(TokenPool::new(6, 4), &[C, C], request(L, 2)).finish(None);
        assert_eq!(record.delta, TokenDelta { law: 0, chaos: -1 });
        assert_eq!(record.pool_after, TokenPool::new(6, 3));
        assert!(!record.max_tokens_reached);
    }

    #[test]
    fn emptying_law_reports_deadbeat() {
        let record = pending(TokenPool::new(1, 3), &[L], request(C, 1)).finish(None);
        assert_eq!(record.outcome, Outcome::Failure);
        assert_eq!(record.pool_after, TokenPool::new(0, 3));
        assert_eq!(record.failure, Some(FailureKind::Deadbeat));
        assert_eq!(
            record.messages,
            vec![MessageKey::OutcomeFailure, MessageKey::BecameDeadbeat]
        );
    }

    #[test]
    fn emptying_chaos_reports_hardass() {
        let record = pending(TokenPool::new(4, 1), &[C], request(L, 1)).finish(None);
        assert_eq!(record.pool_after, TokenPool::new(4, 0));
        assert_eq!(record.failure, Some(FailureKind::Hardass));
    }

    #[test]
    fn emptying_both_sides_reports_both() {
        let req = request(L, 2).with_difficult(true).with_defining(true);
        let record = pending(TokenPool::new(1, 1), &[L, C], req).finish(None);
        assert_eq!(record.pool_after, TokenPool::new(0, 0));
        assert_eq!(record.failure, Some(FailureKind::Both));
        assert_eq!(
            record.messages,
            vec![
                MessageKey::OutcomeMixedFail,
                MessageKey::DefiningFailure,
                MessageKey::CharacterFailed,
            ]
        );
    }

    #[test]
    fn side_that_was_already_empty_still_reports_failure() {
        // A dad at 0 chaos is a hardass even when the move itself succeeds.
        let record = pending(TokenPool::new(3, 0), &[L, L], request(L, 2)).finish(None);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.pool_after, TokenPool::new(4, 0));
        assert_eq!(record.failure, Some(FailureKind::Hardass));
    }

    #[test]
    fn begin_move_rejects_oversized_difficulty() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = begin_move(
            TokenPool::new(2, 1),
            request(L, 5),
            DEFAULT_TOKEN_CAP,
            &mut rng,
        )
        .unwrap_err();
        match err {
            DrawError::InsufficientPool {
                difficulty,
                available,
            } => {
                assert_eq!(difficulty, 5);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn begin_move_rejects_zero_difficulty() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = begin_move(
            TokenPool::new(2, 1),
            request(L, 0),
            DEFAULT_TOKEN_CAP,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, DrawError::ZeroDifficulty));
    }

    #[test]
    fn begin_move_draws_difficulty_tokens() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = begin_move(
            TokenPool::new(4, 3),
            request(L, 3),
            DEFAULT_TOKEN_CAP,
            &mut rng,
        )
        .unwrap();
        assert_eq!(m.draw().size(), 3);
        assert_eq!(m.pool_before(), TokenPool::new(4, 3));
    }

    #[test]
    fn begin_move_is_deterministic_for_a_seed() {
        let pool = TokenPool::new(5, 5);
        let mut rng1 = StdRng::seed_from_u64(1234);
        let mut rng2 = StdRng::seed_from_u64(1234);
        let a = begin_move(pool, request(C, 4), DEFAULT_TOKEN_CAP, &mut rng1).unwrap();
        let b = begin_move(pool, request(C, 4), DEFAULT_TOKEN_CAP, &mut rng2).unwrap();
        assert_eq!(a.draw(), b.draw());
        assert_eq!(a.outcome(), b.outcome());
        let ra = a.finish(Some(L));
        let rb = b.finish(Some(L));
        assert_eq!(ra.delta, rb.delta);
        assert_eq!(ra.pool_after, rb.pool_after);
    }

    #[test]
    fn one_sided_pool_resolves_end_to_end() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = begin_move(
            TokenPool::new(3, 0),
            request(L, 2),
            DEFAULT_TOKEN_CAP,
            &mut rng,
        )
        .unwrap();
        let record = m.finish(None);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.pool_after, TokenPool::new(4, 0));
        assert_eq!(record.failure, Some(FailureKind::Hardass));
    }

    #[test]
    fn special_move_request_carries_name_and_approach() {
        let stern = SpecialMove {
            name: "Stern Lecture".to_string(),
            approach: C,
            description: "An unskippable talking-to.".to_string(),
        };
        let req = MoveRequest::special("Gary", &stern, 2);
        assert_eq!(req.move_name, "Stern Lecture");
        assert_eq!(req.approach, C);
        assert_eq!(
            req.move_description.as_deref(),
            Some("An unskippable talking-to.")
        );
        let record = pending(TokenPool::new(4, 3), &[C, C], req).finish(None);
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.move_name, "Stern Lecture");
        assert_eq!(record.pool_after, TokenPool::new(4, 4));
    }

    #[test]
    fn record_echoes_the_request() {
        let req = request(C, 2).with_difficult(true);
        let record = pending(TokenPool::new(4, 3), &[L, C], req).finish(Some(L));
        assert_eq!(record.character, "Gary");
        assert_eq!(record.move_name, "Move");
        assert_eq!(record.approach, C);
        assert_eq!(record.difficulty, 2);
        assert!(record.difficult);
        assert!(!record.defining);
    }
}
