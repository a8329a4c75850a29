use crate::{
    capabilities::{CapabilityError, Capabilities},
    utils::sane_enum,
    Int, SaneString, Word, WORD_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

pub const OPTION_NUM_OPTIONS: &str = "";
pub const OPTION_RESOLUTION: &str = "resolution";
pub const OPTION_PREVIEW: &str = "preview";
pub const OPTION_TL_X: &str = "tl-x";
pub const OPTION_TL_Y: &str = "tl-y";
pub const OPTION_BR_X: &str = "br-x";
pub const OPTION_BR_Y: &str = "br-y";

sane_enum! {
    pub enum ValueType {
        Bool = 0,
        Int = 1,
        Fixed = 2,
        String = 3,
        Button = 4,
        Group = 5,
    }
}

sane_enum! {
    /// Physical unit of an option value.
    pub enum Unit {
        None = 0,
        Pixel = 1,
        Bit = 2,
        Mm = 3,
        Dpi = 4,
        Percent = 5,
        Microsecond = 6,
    }
}

sane_enum! {
    pub enum ConstraintType {
        None = 0,
        Range = 1,
        WordList = 2,
        StringList = 3,
    }
}

impl ValueType {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Fixed)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::None
    }
}

/// Numeric range constraint. Legal values are `min + k * quant`, up to `max`.
///
/// A zero `quant` means every value between the bounds is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SRange {
    pub min: Word,
    pub max: Word,
    #[serde(default)]
    pub quant: Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range maximum {max} is below minimum {min}")]
    Inverted { min: Word, max: Word },

    #[error("range quantization {0} is negative")]
    NegativeQuant(Word),
}

impl SRange {
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.max < self.min {
            return Err(RangeError::Inverted {
                min: self.min,
                max: self.max,
            });
        }

        if self.quant.get() < 0 {
            return Err(RangeError::NegativeQuant(self.quant));
        }

        Ok(())
    }

    pub fn contains(&self, value: Word) -> bool {
        if value < self.min || value > self.max {
            return false;
        }

        let quant = i64::from(self.quant.get());
        quant <= 0 || (i64::from(value.get()) - i64::from(self.min.get())) % quant == 0
    }

    /// Clamp `value` into the range and round it to the nearest quantization step.
    pub fn constrain(&self, value: Word) -> Word {
        let (min, max) = (i64::from(self.min.get()), i64::from(self.max.get()));
        let quant = i64::from(self.quant.get());

        let mut value = i64::from(value.get()).clamp(min, max.max(min));
        if quant > 0 {
            value = (value - min + quant / 2) / quant * quant + min;
            if value > max && value - quant >= min {
                value -= quant;
            }
        }

        // Both bounds are words, so the result fits.
        Word::new(value as Int)
    }
}

/// Restriction on legal option values. The variant decides the constraint type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    #[default]
    None,
    Range(SRange),
    WordList(Vec<Word>),
    StringList(Vec<SaneString>),
}

impl Constraint {
    pub fn constraint_type(&self) -> ConstraintType {
        match self {
            Self::None => ConstraintType::None,
            Self::Range(_) => ConstraintType::Range,
            Self::WordList(_) => ConstraintType::WordList,
            Self::StringList(_) => ConstraintType::StringList,
        }
    }
}

/// Describes one controllable setting of a device.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub name: SaneString,
    #[serde(default)]
    pub title: SaneString,
    #[serde(default)]
    pub desc: SaneString,
    #[serde(rename = "type")]
    pub ty: ValueType,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default = "word_size")]
    pub size: Int,
    #[serde(default = "Capabilities::empty")]
    pub cap: Capabilities,
    #[serde(default)]
    pub constraint: Constraint,
}

fn word_size() -> Int {
    WORD_SIZE as Int
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error(transparent)]
    Capabilities(#[from] CapabilityError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("size {size} is invalid for {ty:?} value")]
    Size { ty: ValueType, size: Int },

    #[error("{constraint:?} constraint can't restrict {ty:?} value")]
    ConstraintMismatch {
        ty: ValueType,
        constraint: ConstraintType,
    },

    #[error("{0:?} constraint is empty")]
    EmptyList(ConstraintType),
}

impl OptionDescriptor {
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint.constraint_type()
    }

    pub fn validate(&self) -> Result<(), DescriptorError> {
        self.cap.validate()?;

        let size_ok = match self.ty {
            ValueType::Bool => self.size == word_size(),
            ValueType::Int | ValueType::Fixed => self.size > 0 && self.size % word_size() == 0,
            ValueType::String => self.size > 0,
            ValueType::Button | ValueType::Group => true,
        };
        if !size_ok {
            return Err(DescriptorError::Size {
                ty: self.ty,
                size: self.size,
            });
        }

        let mismatch = DescriptorError::ConstraintMismatch {
            ty: self.ty,
            constraint: self.constraint_type(),
        };

        match &self.constraint {
            Constraint::None => {}
            Constraint::Range(range) => {
                if !self.ty.is_numeric() {
                    return Err(mismatch);
                }
                range.validate()?;
            }
            Constraint::WordList(words) => {
                if !self.ty.is_numeric() {
                    return Err(mismatch);
                }
                if words.is_empty() {
                    return Err(DescriptorError::EmptyList(ConstraintType::WordList));
                }
            }
            Constraint::StringList(strings) => {
                if self.ty != ValueType::String {
                    return Err(mismatch);
                }
                if strings.is_empty() {
                    return Err(DescriptorError::EmptyList(ConstraintType::StringList));
                }
            }
        }

        Ok(())
    }
}

impl Debug for OptionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Option")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("description", &self.desc)
            .field("type", &self.ty)
            .field("unit", &self.unit)
            .field("size", &self.size)
            .field("capabilities", &self.cap)
            .field("constraint", &self.constraint)
            .finish()
    }
}
