//! Wire arguments: one length-delimited byte buffer per command argument.

use std::fmt;

/// A single command argument as it goes on the wire.
///
/// The length is always explicit (it is the slice length), so arguments may
/// contain NUL and any other byte.
#[derive(Clone, PartialEq, Eq)]
pub enum WireArgument<'a> {
    /// Borrowed from the caller; never freed by the builder
    Borrowed(&'a [u8]),
    /// Allocated by the builder; freed exactly once when dropped
    Owned(Vec<u8>),
}

impl<'a> WireArgument<'a> {
    /// The argument bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WireArgument::Borrowed(b) => b,
            WireArgument::Owned(v) => v,
        }
    }

    /// Explicit length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True for zero-length arguments.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the builder allocated this buffer.
    pub fn is_owned(&self) -> bool {
        matches!(self, WireArgument::Owned(_))
    }
}

impl fmt::Debug for WireArgument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_owned() { "Owned" } else { "Borrowed" };
        write!(f, "{}({:?})", tag, String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<'a> From<&'a [u8]> for WireArgument<'a> {
    fn from(b: &'a [u8]) -> Self {
        WireArgument::Borrowed(b)
    }
}

impl<'a> From<&'a str> for WireArgument<'a> {
    fn from(s: &'a str) -> Self {
        WireArgument::Borrowed(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_length_keeps_nul_bytes() {
        let arg = WireArgument::Borrowed(b"\x00\x01");
        assert_eq!(arg.len(), 2);
        assert!(!arg.is_owned());
    }

    #[test]
    fn test_owned_and_borrowed_compare_by_variant() {
        let a = WireArgument::Owned(b"x".to_vec());
        let b = WireArgument::Borrowed(b"x");
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_ne!(a, b);
    }
}
