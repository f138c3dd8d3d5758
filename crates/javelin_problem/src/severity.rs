//! Severity flags: one level bit plus optional modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The user-facing level of a problem, ordered from quietest to loudest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// The problem is not reported at all.
    Ignore,
    /// An informational note.
    Info,
    /// A warning that does not stop compilation.
    Warning,
    /// An error.
    Error,
}

impl Level {
    /// Returns the severity flags carrying exactly this level bit.
    pub const fn flags(self) -> SeverityFlags {
        match self {
            Level::Ignore => SeverityFlags::IGNORE,
            Level::Info => SeverityFlags::INFO,
            Level::Warning => SeverityFlags::WARNING,
            Level::Error => SeverityFlags::ERROR,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Ignore => write!(f, "ignore"),
            Level::Info => write!(f, "info"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// A severity bitmask: exactly one level bit combined with modifiers.
///
/// The abort modifiers are requests for the caller to unwind to a given
/// granularity; nothing in this crate acts on them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityFlags(u32);

impl SeverityFlags {
    /// Warning level.
    pub const WARNING: SeverityFlags = SeverityFlags(0x0001);
    /// Error level.
    pub const ERROR: SeverityFlags = SeverityFlags(0x0002);
    /// Info level.
    pub const INFO: SeverityFlags = SeverityFlags(0x0004);
    /// Ignore level.
    pub const IGNORE: SeverityFlags = SeverityFlags(0x0008);
    /// The error comes from a configurable option rather than the language.
    pub const OPTIONAL: SeverityFlags = SeverityFlags(0x0010);
    /// The error stops code generation for the enclosing declaration.
    pub const FATAL: SeverityFlags = SeverityFlags(0x0020);
    /// Request to abort the whole compilation.
    pub const ABORT_COMPILATION: SeverityFlags = SeverityFlags(0x0040);
    /// Request to abort the current compilation unit.
    pub const ABORT_COMPILATION_UNIT: SeverityFlags = SeverityFlags(0x0080);
    /// Request to abort the current type.
    pub const ABORT_TYPE: SeverityFlags = SeverityFlags(0x0100);
    /// Request to abort the current method.
    pub const ABORT_METHOD: SeverityFlags = SeverityFlags(0x0200);
    /// The error is a consequence of an earlier one.
    pub const SECONDARY_ERROR: SeverityFlags = SeverityFlags(0x0400);
    /// The compiler itself failed.
    pub const INTERNAL_ERROR: SeverityFlags = SeverityFlags(0x0800);
    /// The problem reports unused code.
    pub const UNUSED: SeverityFlags = SeverityFlags(0x1000);

    /// Every level bit.
    pub const LEVEL_MASK: u32 = 0x000F;
    /// Every abort bit.
    pub const ABORT_MASK: u32 = 0x03C0;

    /// Creates flags from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set.
    pub const fn contains(self, other: SeverityFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns these flags with the bits of `other` cleared.
    pub const fn without(self, other: SeverityFlags) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the level, or `None` if no level bit is set.
    ///
    /// With more than one level bit the loudest wins; well-formed flags never
    /// carry more than one.
    pub const fn level(self) -> Option<Level> {
        if self.0 & Self::ERROR.0 != 0 {
            Some(Level::Error)
        } else if self.0 & Self::WARNING.0 != 0 {
            Some(Level::Warning)
        } else if self.0 & Self::INFO.0 != 0 {
            Some(Level::Info)
        } else if self.0 & Self::IGNORE.0 != 0 {
            Some(Level::Ignore)
        } else {
            None
        }
    }

    /// Returns `true` if exactly one level bit is set.
    pub const fn has_single_level(self) -> bool {
        (self.0 & Self::LEVEL_MASK).count_ones() == 1
    }

    /// Returns `true` for the ignore level.
    pub const fn is_ignore(self) -> bool {
        self.0 & Self::IGNORE.0 != 0
    }

    /// Returns `true` for the error level.
    pub const fn is_error(self) -> bool {
        self.0 & Self::ERROR.0 != 0
    }

    /// Returns `true` for the warning level.
    pub const fn is_warning(self) -> bool {
        self.0 & Self::WARNING.0 != 0
    }

    /// Returns `true` for the info level.
    pub const fn is_info(self) -> bool {
        self.0 & Self::INFO.0 != 0
    }

    /// Returns `true` if the fatal modifier is set.
    pub const fn is_fatal(self) -> bool {
        self.0 & Self::FATAL.0 != 0
    }

    /// Returns `true` if the optional modifier is set.
    pub const fn is_optional(self) -> bool {
        self.0 & Self::OPTIONAL.0 != 0
    }

    /// Returns `true` for errors the language mandates, i.e. non-optional errors.
    pub const fn is_mandatory(self) -> bool {
        self.0 & (Self::ERROR.0 | Self::OPTIONAL.0) == Self::ERROR.0
    }

    /// Returns only the abort request bits.
    pub const fn abort_bits(self) -> SeverityFlags {
        Self(self.0 & Self::ABORT_MASK)
    }

    /// Returns `true` if no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SeverityFlags {
    type Output = SeverityFlags;

    fn bitor(self, rhs: SeverityFlags) -> SeverityFlags {
        SeverityFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for SeverityFlags {
    fn bitor_assign(&mut self, rhs: SeverityFlags) {
        self.0 |= rhs.0;
    }
}

impl From<Level> for SeverityFlags {
    fn from(level: Level) -> Self {
        level.flags()
    }
}

const FLAG_NAMES: &[(SeverityFlags, &str)] = &[
    (SeverityFlags::WARNING, "WARNING"),
    (SeverityFlags::ERROR, "ERROR"),
    (SeverityFlags::INFO, "INFO"),
    (SeverityFlags::IGNORE, "IGNORE"),
    (SeverityFlags::OPTIONAL, "OPTIONAL"),
    (SeverityFlags::FATAL, "FATAL"),
    (SeverityFlags::ABORT_COMPILATION, "ABORT_COMPILATION"),
    (SeverityFlags::ABORT_COMPILATION_UNIT, "ABORT_COMPILATION_UNIT"),
    (SeverityFlags::ABORT_TYPE, "ABORT_TYPE"),
    (SeverityFlags::ABORT_METHOD, "ABORT_METHOD"),
    (SeverityFlags::SECONDARY_ERROR, "SECONDARY_ERROR"),
    (SeverityFlags::INTERNAL_ERROR, "INTERNAL_ERROR"),
    (SeverityFlags::UNUSED, "UNUSED"),
];

impl fmt::Debug for SeverityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "SeverityFlags(0x{:X})", self.0)
        } else {
            write!(f, "SeverityFlags({})", names.join(" | "))
        }
    }
}
