use crate::{utils::sane_enum, Int, SaneBool};
use serde::{Deserialize, Serialize};

sane_enum! {
    pub enum Frame {
        Gray = 0,
        Rgb = 1,
        Red = 2,
        Green = 3,
        Blue = 4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub format: Frame,
    pub last_frame: SaneBool,
    pub bytes_per_line: Int,
    pub pixels_per_line: Int,
    /// `-1` while the backend can't tell the number of lines in advance.
    pub lines: Int,
    pub depth: Int,
}

impl Parameters {
    pub fn lines_known(&self) -> bool {
        self.lines >= 0
    }

    /// Red, green and blue channels come in separate frames.
    pub fn is_multi_pass(&self) -> bool {
        matches!(self.format, Frame::Red | Frame::Green | Frame::Blue)
    }

    /// Size of the whole frame in bytes, if the number of lines is known.
    pub fn frame_size(&self) -> Option<usize> {
        if !self.lines_known() {
            return None;
        }

        let bytes_per_line = usize::try_from(self.bytes_per_line).ok()?;
        let lines = usize::try_from(self.lines).ok()?;

        bytes_per_line.checked_mul(lines)
    }
}
