/// Nesting limit used when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Highest `max_depth` a config will hold. Decoding recurses once per
/// level, so the limit itself must stay well inside a default thread stack.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Configuration for a parse session.
///
/// ```text
/// ┌───────────┬─────────────────────────────────────────────────────┐
/// │ Field     │ Purpose                                             │
/// ├───────────┼─────────────────────────────────────────────────────┤
/// │ max_depth │ Deepest nesting level a node may sit at. The root   │
/// │           │ is depth 0; deeper nodes fail with MaxDepthExceeded │
/// └───────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// The limit keeps recursion bounded on adversarial input. Each level of
/// nesting costs at least two input bytes, so realistic inputs stay far
/// below the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Builder-style override of [`max_depth`](Self::max_depth), clamped
    /// to [`MAX_DEPTH_LIMIT`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_depth_is_clamped() {
        assert_eq!(DecoderConfig::default().with_max_depth(8).max_depth, 8);
        assert_eq!(
            DecoderConfig::default().with_max_depth(usize::MAX).max_depth,
            MAX_DEPTH_LIMIT
        );
    }
}
