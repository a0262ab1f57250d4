// Backend variant identifiers.
//
// The host asks `getSpellcheckerType()` for a small integer identifying the
// active engine. Codes are part of the wire contract and must stay stable.

/// Identifies a concrete spellcheck backend variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Embedded wordlist backend loaded from an in-memory byte buffer.
    Wordlist,
    /// Reserved: macOS system spellchecker.
    SystemMac,
    /// Reserved: Windows system spellchecker.
    SystemWindows,
}

impl BackendKind {
    /// Stable wire code reported to the host.
    pub fn code(self) -> u32 {
        match self {
            BackendKind::Wordlist => 0,
            BackendKind::SystemMac => 1,
            BackendKind::SystemWindows => 2,
        }
    }

    /// Inverse of [`code`](Self::code). Returns `None` for unassigned codes.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(BackendKind::Wordlist),
            1 => Some(BackendKind::SystemMac),
            2 => Some(BackendKind::SystemWindows),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(BackendKind::Wordlist.code(), 0);
        assert_eq!(BackendKind::SystemMac.code(), 1);
        assert_eq!(BackendKind::SystemWindows.code(), 2);
    }

    #[test]
    fn from_code_round_trips() {
        for kind in [
            BackendKind::Wordlist,
            BackendKind::SystemMac,
            BackendKind::SystemWindows,
        ] {
            assert_eq!(BackendKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(BackendKind::from_code(99), None);
    }
}
