use crate::{Int, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CURRENT_MAJOR: u8 = 1;
pub const CURRENT_MINOR: u8 = 0;

/// Version code packed into a word: major in bits 24..32, minor in 16..24, build in 0..16.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCode(Word);

impl VersionCode {
    pub const fn new(major: u8, minor: u8, build: u16) -> Self {
        let code = (major as u32) << 24 | (minor as u32) << 16 | build as u32;
        Self(Word::new(code as Int))
    }

    pub const fn current(build: u16) -> Self {
        Self::new(CURRENT_MAJOR, CURRENT_MINOR, build)
    }

    pub const fn from_word(word: Word) -> Self {
        Self(word)
    }

    pub const fn word(self) -> Word {
        self.0
    }

    pub const fn major(self) -> u8 {
        (self.0.get() >> 24) as u8
    }

    pub const fn minor(self) -> u8 {
        (self.0.get() >> 16) as u8
    }

    pub const fn build(self) -> u16 {
        self.0.get() as u16
    }

    /// Frontend and backend can talk if their major versions match.
    pub const fn is_compatible(self, other: Self) -> bool {
        self.major() == other.major()
    }
}

impl fmt::Display for VersionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.build())
    }
}
