//! Blinking caret that trails typed text

/// Square-wave blink: visible for one half period, hidden for the next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caret {
    half_period_ms: u32,
}

impl Caret {
    pub const DEFAULT_HALF_PERIOD_MS: u32 = 500;

    /// A zero half period means the caret never blinks.
    pub fn new(half_period_ms: u32) -> Self {
        Self { half_period_ms }
    }

    pub fn half_period_ms(&self) -> u32 {
        self.half_period_ms
    }

    /// Whether the caret is drawn `elapsed_ms` after mount
    pub fn visible_at(&self, elapsed_ms: u64) -> bool {
        if self.half_period_ms == 0 {
            return true;
        }
        (elapsed_ms / u64::from(self.half_period_ms)) % 2 == 0
    }

    /// Glyph for the current phase
    pub fn glyph_at(&self, elapsed_ms: u64) -> &'static str {
        if self.visible_at(elapsed_ms) {
            "|"
        } else {
            " "
        }
    }
}

impl Default for Caret {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_PERIOD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink_phases() {
        let caret = Caret::default();
        assert!(caret.visible_at(0));
        assert!(caret.visible_at(499));
        assert!(!caret.visible_at(500));
        assert!(!caret.visible_at(999));
        assert!(caret.visible_at(1_000));
    }

    #[test]
    fn test_steady_caret() {
        let caret = Caret::new(0);
        assert!(caret.visible_at(12_345));
        assert_eq!(caret.glyph_at(750), "|");
    }
}
