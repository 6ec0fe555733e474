//! Configuration for a table session.

use dad_draw::DEFAULT_TOKEN_CAP;

/// Configuration for a table session.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// RNG seed for reproducible draws.
    pub seed: u64,
    /// Pool size at which gains are discarded.
    pub token_cap: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            token_cap: DEFAULT_TOKEN_CAP,
        }
    }
}

impl TableConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the pool cap.
    pub fn with_token_cap(mut self, cap: u32) -> Self {
        self.token_cap = cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.token_cap, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = TableConfig::default().with_seed(123).with_token_cap(12);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.token_cap, 12);
    }
}
