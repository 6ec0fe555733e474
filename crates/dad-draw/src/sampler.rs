//! Blind token sampling from a pool.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use dad_core::{TokenKind, TokenPool};

/// An ordered handful of tokens drawn from a pool without replacement.
///
/// The draw's length is the move's difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// The drawn tokens, in draw order.
    pub tokens: Vec<TokenKind>,
}

impl Draw {
    /// Number of tokens drawn.
    pub fn size(&self) -> u32 {
        self.tokens.len() as u32
    }

    /// Count of drawn tokens of one kind.
    pub fn count(&self, kind: TokenKind) -> u32 {
        self.tokens.iter().filter(|t| **t == kind).count() as u32
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.tokens.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Draw `count` tokens from the pool without replacement.
///
/// Builds the flat multiset (`pool.law` law tokens, `pool.chaos` chaos
/// tokens), shuffles the whole thing with an unbiased Fisher-Yates shuffle,
/// and keeps the first `count` elements.
///
/// The caller guarantees `count <= pool.total()`; the resolver refuses
/// oversized requests before sampling ever happens.
pub fn draw_tokens(pool: &TokenPool, count: u32, rng: &mut StdRng) -> Draw {
    let mut tokens: Vec<TokenKind> = Vec::with_capacity(pool.total() as usize);
    for _ in 0..pool.law {
        tokens.push(TokenKind::Law);
    }
    for _ in 0..pool.chaos {
        tokens.push(TokenKind::Chaos);
    }
    tokens.shuffle(rng);
    tokens.truncate(count as usize);
    Draw { tokens }
}
