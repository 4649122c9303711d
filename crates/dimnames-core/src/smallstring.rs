/// A stack-allocated fixed-capacity string with explicit length.
///
/// Axis labels are short and copied on every propagation step, so they live
/// inline instead of on the heap. Unused slots are always `'\0'`, which keeps
/// the derived comparisons and hash consistent with the visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmallString<const MAX_LEN: usize> {
    data: [char; MAX_LEN],
    len: usize,
}

/// Error type for SmallString operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallStringError {
    TooLong { actual: usize, max: usize },
}

impl<const MAX_LEN: usize> SmallString<MAX_LEN> {
    /// Create an empty SmallString.
    pub const fn new() -> Self {
        Self {
            data: ['\0'; MAX_LEN],
            len: 0,
        }
    }

    /// Create a SmallString from a string slice.
    ///
    /// Returns an error if the string has more than `MAX_LEN` characters.
    pub fn from_str(s: &str) -> Result<Self, SmallStringError> {
        let actual = s.chars().count();
        if actual > MAX_LEN {
            return Err(SmallStringError::TooLong {
                actual,
                max: MAX_LEN,
            });
        }

        let mut data = ['\0'; MAX_LEN];
        for (slot, ch) in data.iter_mut().zip(s.chars()) {
            *slot = ch;
        }

        Ok(Self { data, len: actual })
    }

    /// Characters of the string.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.len].iter().copied()
    }

    /// Check if the string is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of characters.
    pub fn capacity(&self) -> usize {
        MAX_LEN
    }

    /// Compare against a string slice without allocating.
    pub fn eq_str(&self, s: &str) -> bool {
        self.chars().eq(s.chars())
    }
}

impl<const MAX_LEN: usize> Default for SmallString<MAX_LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEN: usize> std::fmt::Display for SmallString<MAX_LEN> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_and_display() {
        let s = SmallString::<8>::from_str("row").unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.capacity(), 8);
        assert_eq!(s.to_string(), "row");
        assert!(s.eq_str("row"));
        assert!(!s.eq_str("rows"));
    }

    #[test]
    fn test_too_long() {
        let err = SmallString::<3>::from_str("time").unwrap_err();
        assert_eq!(err, SmallStringError::TooLong { actual: 4, max: 3 });
    }

    #[test]
    fn test_multibyte_counts_chars() {
        let s = SmallString::<3>::from_str("αβγ").unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_string(), "αβγ");
    }

    #[test]
    fn test_equality_ignores_padding() {
        let a = SmallString::<8>::from_str("x").unwrap();
        let b = SmallString::<8>::from_str("x").unwrap();
        let c = SmallString::<8>::from_str("xy").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(SmallString::<4>::new().is_empty());
    }
}
