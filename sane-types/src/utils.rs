use crate::Int;
use thiserror::Error;

/// A raw integer that does not name any member of a SANE tag enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {ty} value {value}")]
pub struct InvalidTag {
    pub ty: &'static str,
    pub value: Int,
}

/// Generate a new enum over SANE integer tags.
///
/// The generated enum is `#[repr(i32)]` and implements [`std::clone::Clone`],
/// [`std::marker::Copy`], [`std::fmt::Debug`], [`serde::Serialize`],
/// [`serde::Deserialize`], [`strum::EnumIter`], [`strum::IntoStaticStr`],
/// `TryFrom<Int>`, `TryFrom<Word>` and `From<Self>` for `Int` and `Word`.
///
/// Syntax: pub enum Ident { Variant = value, ... }. Visibility is optional.
macro_rules! sane_enum {
    (
        $(#[$meta:meta])*
        $visibility:vis enum $enum_name:ident {
            $( $(#[$variant_meta:meta])* $n:ident = $v:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            strum::EnumIter, strum::IntoStaticStr,
        )]
        $visibility enum $enum_name {
            $( $(#[$variant_meta])* $n = $v ),*
        }

        impl $enum_name {
            /// Raw C value of the tag.
            pub const fn value(self) -> $crate::Int {
                self as $crate::Int
            }
        }

        impl ::core::convert::TryFrom<$crate::Int> for $enum_name {
            type Error = $crate::InvalidTag;

            fn try_from(value: $crate::Int) -> ::core::result::Result<Self, Self::Error> {
                match value {
                    $( v if v == Self::$n as $crate::Int => Ok(Self::$n), )*
                    value => Err($crate::InvalidTag {
                        ty: stringify!($enum_name),
                        value,
                    }),
                }
            }
        }

        impl ::core::convert::TryFrom<$crate::Word> for $enum_name {
            type Error = $crate::InvalidTag;

            fn try_from(word: $crate::Word) -> ::core::result::Result<Self, Self::Error> {
                Self::try_from(word.get())
            }
        }

        impl ::core::convert::From<$enum_name> for $crate::Int {
            fn from(value: $enum_name) -> Self {
                value as $crate::Int
            }
        }

        impl ::core::convert::From<$enum_name> for $crate::Word {
            fn from(value: $enum_name) -> Self {
                $crate::Word::new(value as $crate::Int)
            }
        }
    };
}

pub(crate) use sane_enum;
