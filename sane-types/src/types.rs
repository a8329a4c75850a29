use bstr::{BStr, BString};
use serde::{Deserialize, Serialize};
use std::{ffi::c_void, fmt, ptr::null_mut};

pub type Byte = u8;

pub type Char = u8;

pub type Int = i32;

/// Owned SANE string. Backends may return arbitrary bytes, so this is not `String`.
pub type SaneString = BString;

pub type StringConst<'a> = &'a BStr;

/// Size of a [`Word`] in bytes.
pub const WORD_SIZE: usize = 4;

/// Number of fractional bits in a [`Fixed`] value.
pub const FIXED_SCALE_SHIFT: u32 = 16;

/// The basic 32-bit SANE value.
///
/// On the wire words are ordered most significant byte first.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Int);

impl Word {
    pub const fn new(value: Int) -> Self {
        Self(value)
    }

    pub const fn get(self) -> Int {
        self.0
    }

    pub const fn to_be_bytes(self) -> [u8; WORD_SIZE] {
        self.0.to_be_bytes()
    }

    pub const fn from_be_bytes(bytes: [u8; WORD_SIZE]) -> Self {
        Self(Int::from_be_bytes(bytes))
    }
}

impl From<Int> for Word {
    fn from(value: Int) -> Self {
        Self(value)
    }
}

impl From<Word> for Int {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Boolean stored in a [`Word`]. Any non-zero word reads as true.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaneBool(Word);

impl SaneBool {
    pub const TRUE: Self = Self(Word::new(1));
    pub const FALSE: Self = Self(Word::new(0));

    pub const fn word(self) -> Word {
        self.0
    }

    pub const fn is_true(self) -> bool {
        self.0.get() != 0
    }
}

impl From<bool> for SaneBool {
    fn from(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}

impl From<SaneBool> for bool {
    fn from(value: SaneBool) -> Self {
        value.is_true()
    }
}

impl From<Word> for SaneBool {
    fn from(word: Word) -> Self {
        Self(word)
    }
}

/// Signed 16.16 fixed point number stored in a [`Word`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed(Word);

impl Fixed {
    pub const fn from_word(word: Word) -> Self {
        Self(word)
    }

    pub const fn word(self) -> Word {
        self.0
    }

    /// Same as `SANE_FIX`. Values outside of the representable range saturate.
    pub fn from_f64(value: f64) -> Self {
        let scaled = value * f64::from(1u32 << FIXED_SCALE_SHIFT);
        Self(Word::new(scaled as Int))
    }

    /// Same as `SANE_UNFIX`.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0.get()) / f64::from(1u32 << FIXED_SCALE_SHIFT)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_f64().fmt(f)
    }
}

/// Opaque device handle handed out by a backend.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Handle(*mut c_void);

impl Handle {
    pub const fn null() -> Self {
        Self(null_mut())
    }

    /// # Safety
    ///
    /// `ptr` must be a handle returned by a backend, or null.
    pub const unsafe fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:p})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_big_endian_on_the_wire() {
        let word = Word::new(0x0102_0304);
        assert_eq!(word.to_be_bytes(), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(Word::from_be_bytes([0xff, 0xff, 0xff, 0xfe]), Word::new(-2));
    }

    #[test]
    fn word_has_c_layout() {
        assert_eq!(std::mem::size_of::<Word>(), WORD_SIZE);
        assert_eq!(std::mem::size_of::<SaneBool>(), WORD_SIZE);
        assert_eq!(std::mem::size_of::<Fixed>(), WORD_SIZE);
        assert_eq!(std::mem::size_of::<Handle>(), std::mem::size_of::<*mut c_void>());
    }

    #[test]
    fn bool_reads_any_non_zero_word_as_true() {
        assert!(SaneBool::from(Word::new(7)).is_true());
        assert!(!SaneBool::from(Word::new(0)).is_true());
        assert_eq!(SaneBool::from(true), SaneBool::TRUE);
        assert_eq!(SaneBool::TRUE.word(), Word::new(1));
        assert!(!bool::from(SaneBool::FALSE));
    }

    #[test]
    fn fixed_point_conversion() {
        assert_eq!(Fixed::from_f64(1.0).word(), Word::new(0x10000));
        assert_eq!(Fixed::from_f64(-0.5).word(), Word::new(-0x8000));
        assert_eq!(Fixed::from_f64(215.9).to_f64(), 215.899_993_896_484_375);
        assert_eq!(Fixed::from_word(Word::new(0x18000)).to_f64(), 1.5);
    }

    #[test]
    fn null_handle() {
        let handle = Handle::default();
        assert!(handle.is_null());
        assert_eq!(handle, Handle::null());
    }
}
