use std::{
    convert::TryFrom,
    fmt, iter,
    num::TryFromIntError,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A measure of text length. Also, equivalently, an index into text.
///
/// This is a UTF-8 bytes offset stored as `u32`.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
pub struct TextSize {
    pub(crate) raw: u32,
}

impl fmt::Debug for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TextSize {
    /// Creates a new `TextSize` at the given `offset`.
    #[inline]
    pub const fn new(offset: u32) -> Self {
        Self { raw: offset }
    }

    /// The text size of some primitive text-like object.
    #[inline]
    pub fn of(text: &str) -> TextSize {
        TextSize::try_from(text.len()).unwrap_or_else(|_| panic!("text longer than u32::MAX"))
    }

    /// Returns the size as a raw `u32`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.raw
    }

    /// Returns the size as a `usize`.
    #[inline]
    pub const fn to_usize(self) -> usize {
        self.raw as usize
    }

    /// Checked addition. Returns `None` if overflow occurred.
    #[inline]
    pub fn checked_add(self, rhs: TextSize) -> Option<TextSize> {
        self.raw.checked_add(rhs.raw).map(|raw| TextSize { raw })
    }

    /// Checked subtraction. Returns `None` if overflow occurred.
    #[inline]
    pub fn checked_sub(self, rhs: TextSize) -> Option<TextSize> {
        self.raw.checked_sub(rhs.raw).map(|raw| TextSize { raw })
    }
}

impl From<u32> for TextSize {
    #[inline]
    fn from(raw: u32) -> Self {
        TextSize::new(raw)
    }
}

impl From<TextSize> for u32 {
    #[inline]
    fn from(value: TextSize) -> Self {
        value.to_u32()
    }
}

impl TryFrom<usize> for TextSize {
    type Error = TryFromIntError;
    #[inline]
    fn try_from(value: usize) -> Result<Self, TryFromIntError> {
        Ok(u32::try_from(value)?.into())
    }
}

impl From<TextSize> for usize {
    #[inline]
    fn from(value: TextSize) -> Self {
        value.to_usize()
    }
}

impl Add for TextSize {
    type Output = TextSize;
    #[inline]
    fn add(self, rhs: TextSize) -> TextSize {
        TextSize {
            raw: self.raw + rhs.raw,
        }
    }
}

impl Sub for TextSize {
    type Output = TextSize;
    #[inline]
    fn sub(self, rhs: TextSize) -> TextSize {
        TextSize {
            raw: self.raw - rhs.raw,
        }
    }
}

impl<A> AddAssign<A> for TextSize
where
    TextSize: Add<A, Output = TextSize>,
{
    #[inline]
    fn add_assign(&mut self, rhs: A) {
        *self = *self + rhs;
    }
}

impl<S> SubAssign<S> for TextSize
where
    TextSize: Sub<S, Output = TextSize>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: S) {
        *self = *self - rhs;
    }
}

impl iter::Sum for TextSize {
    #[inline]
    fn sum<I: Iterator<Item = TextSize>>(iter: I) -> TextSize {
        iter.fold(0.into(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(TextSize, u32);

    #[test]
    fn text_size_of_counts_utf8_bytes() {
        assert_eq!(TextSize::of("if"), TextSize::new(2));
        assert_eq!(TextSize::of("é"), TextSize::new(2));
    }

    #[test]
    fn checked_arithmetic() {
        let a = TextSize::new(3);
        let b = TextSize::new(5);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(TextSize::new(2)));
        assert_eq!(a.checked_add(b), Some(TextSize::new(8)));
    }
}
