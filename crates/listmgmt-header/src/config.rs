//! Parser configuration.

/// How field values that fail to parse are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Drop invalid entries; a field with nothing usable is treated as absent.
    #[default]
    Tolerant,
    /// Fail the whole parse on the first invalid field value.
    Strict,
}

/// Which line wins when a field appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later lines replace earlier ones.
    #[default]
    LastWins,
    /// The first line that sets a field is kept.
    FirstWins,
}

/// Header parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Error handling mode.
    pub mode: ParseMode,
    /// Repeated field handling.
    pub duplicates: DuplicatePolicy,
}

impl ParseConfig {
    /// Creates the default tolerant, last-wins configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict configuration.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_mode(ParseMode::Strict)
    }

    /// Sets the error handling mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the duplicate field policy.
    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Returns true for [`ParseMode::Strict`].
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.mode, ParseMode::Strict)
    }
}
