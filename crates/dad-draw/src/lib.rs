//! Token-draw resolution engine for Dadlands.
//!
//! A move draws `difficulty` tokens blind from a dad's law/chaos pool. The
//! draw is classified (all matching, none matching, or mixed), policies are
//! applied (defining-moment escalation, the mixed-result discard choice, the
//! pool cap, floor clamping, terminal failure detection), and the result is
//! committed as an immutable [`MoveRecord`].
//!
//! Resolution is two-phase: [`begin_move`] samples and classifies, and the
//! returned [`PendingMove`] is finished with the player's discard choice
//! (or `None` when no choice applies). Randomness is injected, so a seeded
//! RNG makes every resolution reproducible.

pub mod classify;
pub mod error;
pub mod record;
pub mod resolve;
pub mod sampler;

pub use classify::{Classification, classify};
pub use error::{DrawError, DrawResult};
pub use record::{FailureKind, MessageKey, MoveId, MoveRecord, Outcome, TokenDelta};
pub use resolve::{DEFAULT_TOKEN_CAP, MoveRequest, PendingMove, begin_move};
pub use sampler::{Draw, draw_tokens};
