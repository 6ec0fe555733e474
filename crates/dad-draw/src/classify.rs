//! Outcome classification for a completed draw.
//!
//! Pure: no randomness, no mutation, no I/O. The same draw always classifies
//! the same way, which is what makes the resolution pipeline testable without
//! touching the sampler.

use serde::{Deserialize, Serialize};

use dad_core::TokenKind;

use crate::record::{MessageKey, Outcome, TokenDelta};
use crate::sampler::Draw;

/// The result of classifying a draw: an outcome, the provisional delta, and
/// the message key announcing it.
///
/// For mixed outcomes the delta stays zero here; the discard choice is a
/// resolution-stage policy, not a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// How the draw classified.
    pub outcome: Outcome,
    /// Provisional delta, before resolution policies.
    pub delta: TokenDelta,
    /// The key for the outcome's announcement line.
    pub message: MessageKey,
}

/// Classify a draw against the move's approach.
///
/// The draw's length is the move's difficulty. With `matching` the count of
/// drawn tokens equal to `approach`:
///
/// - all matching: success, gain one token of the approach
/// - none matching: failure, discard one drawn token of the opposite kind
/// - otherwise mixed: fails if the move was difficult, succeeds at a cost if
///   not, with the discard left open for the resolution stage
pub fn classify(draw: &Draw, approach: TokenKind, difficult: bool) -> Classification {
    let matching = draw.count(approach);
    let non_matching = draw.size() - matching;
    let mut delta = TokenDelta::zero();

    if non_matching == 0 {
        delta.add(approach, 1);
        Classification {
            outcome: Outcome::Success,
            delta,
            message: MessageKey::OutcomeSuccess,
        }
    } else if matching == 0 {
        delta.add(approach.opposite(), -1);
        Classification {
            outcome: Outcome::Failure,
            delta,
            message: MessageKey::OutcomeFailure,
        }
    } else if difficult {
        Classification {
            outcome: Outcome::MixedFail,
            delta,
            message: MessageKey::OutcomeMixedFail,
        }
    } else {
        Classification {
            outcome: Outcome::MixedSuccess,
            delta,
            message: MessageKey::OutcomeMixedSuccess,
        }
    }
}
