//! Character-by-character text reveal
//!
//! [`TypingState`] is the pure part of the typing effect: it knows the
//! source text, how far it has been revealed, and how to take one step.
//! Scheduling lives in [`crate::scheduler`].

use folio_core::ConfigError;
use unicode_segmentation::UnicodeSegmentation;

/// Unit the reveal advances by on each tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealUnit {
    /// Extended grapheme clusters (emoji, combining marks stay whole)
    #[default]
    Grapheme,
    /// Unicode scalar values
    Char,
}

/// Snapshot of a typing run, emitted on every advance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    /// Number of units revealed so far
    pub revealed: usize,
    /// Total number of units in the source text
    pub len: usize,
    /// True once `revealed == len`
    pub complete: bool,
}

/// Progress of revealing one string
#[derive(Clone, Debug)]
pub struct TypingState {
    text: String,
    cadence_ms: u32,
    unit: RevealUnit,
    /// Byte offset at which each unit ends
    boundaries: Vec<usize>,
    revealed: usize,
}

impl TypingState {
    /// Create a grapheme-stepped typing state
    pub fn new(text: impl Into<String>, cadence_ms: u32) -> Result<Self, ConfigError> {
        Self::with_unit(text, cadence_ms, RevealUnit::Grapheme)
    }

    pub fn with_unit(
        text: impl Into<String>,
        cadence_ms: u32,
        unit: RevealUnit,
    ) -> Result<Self, ConfigError> {
        if cadence_ms == 0 {
            return Err(ConfigError::InvalidCadence(cadence_ms));
        }

        let text = text.into();
        let boundaries = match unit {
            RevealUnit::Grapheme => text
                .grapheme_indices(true)
                .map(|(start, g)| start + g.len())
                .collect(),
            RevealUnit::Char => text
                .char_indices()
                .map(|(start, c)| start + c.len_utf8())
                .collect(),
        };

        Ok(Self {
            text,
            cadence_ms,
            unit,
            boundaries,
            revealed: 0,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cadence_ms(&self) -> u32 {
        self.cadence_ms
    }

    pub fn unit(&self) -> RevealUnit {
        self.unit
    }

    /// Length of the source text in reveal units
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Number of units currently revealed
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.boundaries.len()
    }

    /// The revealed prefix of the source text
    pub fn visible(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    /// Reveal one more unit
    ///
    /// Returns `false` once the text is complete; completed states never
    /// move again.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Whether this state was built from the same inputs
    pub fn same_source(&self, text: &str, cadence_ms: u32) -> bool {
        self.text == text && self.cadence_ms == cadence_ms
    }

    pub fn frame(&self) -> TypingFrame {
        TypingFrame {
            revealed: self.revealed,
            len: self.len(),
            complete: self.is_complete(),
        }
    }
}
