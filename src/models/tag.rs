use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Highest number of tags a bitmask can address while keeping `!0` free for "all tags"
pub const MAX_TAGS: usize = 31;

/// Bitmask of tags (virtual workspaces) a window or view belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct TagMask(pub u32);

impl TagMask {
    /// No tag at all; for rules this means "keep the current view"
    pub const EMPTY: TagMask = TagMask(0);
    /// Every tag
    pub const ALL: TagMask = TagMask(!0);

    /// Mask with only the tag at `index` set, empty when `index` is past the last bit
    pub const fn single(index: usize) -> Self {
        if index < 32 {
            TagMask(1 << index)
        } else {
            TagMask::EMPTY
        }
    }

    /// Mask for tag `index` of a table with `tag_count` entries
    pub fn checked_single(index: usize, tag_count: usize) -> Option<Self> {
        (index < tag_count.min(32)).then(|| TagMask::single(index))
    }

    /// Mask covering every tag of a table with `tag_count` entries
    pub fn full(tag_count: usize) -> Self {
        if tag_count >= 32 {
            TagMask::ALL
        } else {
            TagMask((1u32 << tag_count) - 1)
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, index: usize) -> bool {
        index < 32 && self.0 & (1 << index) != 0
    }

    /// Whether every set bit addresses one of `tag_count` declared tags
    pub fn fits(self, tag_count: usize) -> bool {
        tag_count >= 32 || self.0 < (1u32 << tag_count)
    }

    /// Indices of the tags set in this mask, lowest first
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |i| self.0 & (1 << i) != 0)
    }
}

impl BitOr for TagMask {
    type Output = TagMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        TagMask(self.0 | rhs.0)
    }
}

impl BitAnd for TagMask {
    type Output = TagMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        TagMask(self.0 & rhs.0)
    }
}

impl fmt::Display for TagMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == TagMask::ALL {
            return write!(f, "all");
        }
        if self.is_empty() {
            return write!(f, "-");
        }
        let tags: Vec<String> = self.indices().map(|i| (i + 1).to_string()).collect();
        write!(f, "{}", tags.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_contains() {
        let mask = TagMask::single(4);
        assert_eq!(mask.bits(), 16);
        assert!(mask.contains(4));
        assert!(!mask.contains(3));
    }

    #[test]
    fn test_single_past_last_bit() {
        assert_eq!(TagMask::single(31).bits(), 1 << 31);
        assert_eq!(TagMask::single(32), TagMask::EMPTY);
        assert_eq!(TagMask::single(usize::MAX), TagMask::EMPTY);
    }

    #[test]
    fn test_checked_single() {
        assert_eq!(TagMask::checked_single(8, 9), Some(TagMask(256)));
        assert_eq!(TagMask::checked_single(9, 9), None);
        assert_eq!(TagMask::checked_single(40, 64), None);
    }

    #[test]
    fn test_fits_tag_count() {
        assert!(TagMask(3).fits(9));
        assert!(TagMask::single(8).fits(9));
        assert!(!TagMask::single(9).fits(9));
        assert!(!TagMask::ALL.fits(9));
        assert_eq!(TagMask::full(9).bits(), 0x1ff);
    }

    #[test]
    fn test_display() {
        assert_eq!(TagMask(3).to_string(), "1,2");
        assert_eq!(TagMask::ALL.to_string(), "all");
        assert_eq!(TagMask::EMPTY.to_string(), "-");
    }
}
