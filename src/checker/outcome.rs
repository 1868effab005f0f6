use std::path::{Path, PathBuf};

/// Why a candidate file was skipped instead of compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two lines, so there is no header line to inspect.
    TooShort,
    /// The file could not be read or was not valid UTF-8.
    Unreadable,
}

/// Result of checking one candidate file against the header rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Matched {
        path: PathBuf,
    },
    Mismatched {
        path: PathBuf,
        declared: String,
    },
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
}

impl CheckOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Matched { path }
            | Self::Mismatched { path, .. }
            | Self::Skipped { path, .. } => path,
        }
    }

    /// The name the header line declared, for mismatches.
    #[must_use]
    pub fn declared(&self) -> Option<&str> {
        match self {
            Self::Mismatched { declared, .. } => Some(declared),
            Self::Matched { .. } | Self::Skipped { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    #[must_use]
    pub const fn is_mismatched(&self) -> bool {
        matches!(self, Self::Mismatched { .. })
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}
