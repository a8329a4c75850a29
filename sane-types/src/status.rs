use crate::{utils::sane_enum, Int};
use thiserror::Error;

pub type Result<T> = ::core::result::Result<T, SaneError>;

sane_enum! {
    /// Outcome of a SANE operation.
    pub enum SStatus {
        Good = 0,
        Unsupported = 1,
        Cancelled = 2,
        DeviceBusy = 3,
        Inval = 4,
        Eof = 5,
        Jammed = 6,
        NoDocs = 7,
        CoverOpen = 8,
        IoError = 9,
        NoMem = 10,
        AccessDenied = 11,
    }
}

impl SStatus {
    /// Human-readable description of the status.
    ///
    /// `Good` has no description and yields an empty string.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Good => "",
            Self::Unsupported => "Operation not supported",
            Self::Cancelled => "Operation was cancelled",
            Self::DeviceBusy => "Device busy",
            Self::Inval => "Invalid argument",
            Self::Eof => "End of file reached",
            Self::Jammed => "Document feeder jammed",
            Self::NoDocs => "Document feeder out of documents",
            Self::CoverOpen => "Scanner cover is open",
            Self::IoError => "Error during device I/O",
            Self::NoMem => "Out of memory",
            Self::AccessDenied => "Access to resource has been denied",
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Good => Ok(()),
            Self::Unsupported => Err(SaneError::Unsupported),
            Self::Cancelled => Err(SaneError::Cancelled),
            Self::DeviceBusy => Err(SaneError::DeviceBusy),
            Self::Inval => Err(SaneError::Inval),
            Self::Eof => Err(SaneError::EOF),
            Self::Jammed => Err(SaneError::Jammed),
            Self::NoDocs => Err(SaneError::NoDocs),
            Self::CoverOpen => Err(SaneError::CoverOpen),
            Self::IoError => Err(SaneError::IO),
            Self::NoMem => Err(SaneError::NoMem),
            Self::AccessDenied => Err(SaneError::AccessDenied),
        }
    }
}

/// Same as `sane_strstatus`, but over a raw status code.
///
/// Codes outside of [`SStatus`] yield an empty string, just like `Good`.
pub fn strstatus(status: Int) -> &'static str {
    SStatus::try_from(status)
        .map(SStatus::message)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SaneError {
    #[error("Operation not supported")]
    Unsupported,

    #[error("Operation was cancelled")]
    Cancelled,

    #[error("Device busy")]
    DeviceBusy,

    #[error("Invalid argument")]
    Inval,

    #[error("End of file reached")]
    EOF,

    #[error("Document feeder jammed")]
    Jammed,

    #[error("Document feeder out of documents")]
    NoDocs,

    #[error("Scanner cover is open")]
    CoverOpen,

    #[error("Error during device I/O")]
    IO,

    #[error("Out of memory")]
    NoMem,

    #[error("Access to resource has been denied")]
    AccessDenied,
}

impl SaneError {
    pub const fn status(self) -> SStatus {
        match self {
            Self::Unsupported => SStatus::Unsupported,
            Self::Cancelled => SStatus::Cancelled,
            Self::DeviceBusy => SStatus::DeviceBusy,
            Self::Inval => SStatus::Inval,
            Self::EOF => SStatus::Eof,
            Self::Jammed => SStatus::Jammed,
            Self::NoDocs => SStatus::NoDocs,
            Self::CoverOpen => SStatus::CoverOpen,
            Self::IO => SStatus::IoError,
            Self::NoMem => SStatus::NoMem,
            Self::AccessDenied => SStatus::AccessDenied,
        }
    }
}

impl From<SaneError> for SStatus {
    fn from(err: SaneError) -> Self {
        err.status()
    }
}

/// Convert a raw status code returned by a backend.
///
/// A code outside of [`SStatus`] is reported as [`SaneError::Inval`].
pub fn from_status(status: Int) -> Result<()> {
    match SStatus::try_from(status) {
        Ok(status) => status.into_result(),
        Err(err) => {
            log::warn!("Got {err}, treat as invalid argument");
            Err(SaneError::Inval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn good_has_empty_message() {
        assert_eq!(SStatus::Good.message(), "");
        assert_eq!(strstatus(0), "");
    }

    #[test]
    fn unknown_codes_have_empty_message() {
        assert_eq!(strstatus(12), "");
        assert_eq!(strstatus(-1), "");
        assert_eq!(strstatus(Int::MAX), "");
    }

    #[test]
    fn every_error_has_a_message() {
        for status in SStatus::iter().filter(|s| *s != SStatus::Good) {
            assert!(!status.message().is_empty(), "{status:?}");
            assert_eq!(strstatus(status.value()), status.message());
        }
    }

    #[test]
    fn message_table() {
        assert_eq!(strstatus(1), "Operation not supported");
        assert_eq!(strstatus(4), "Invalid argument");
        assert_eq!(strstatus(5), "End of file reached");
        assert_eq!(strstatus(9), "Error during device I/O");
        assert_eq!(strstatus(11), "Access to resource has been denied");
    }

    #[test]
    fn error_display_matches_message() {
        for status in SStatus::iter() {
            match status.into_result() {
                Ok(()) => assert_eq!(status, SStatus::Good),
                Err(err) => {
                    assert_eq!(err.to_string(), status.message());
                    assert_eq!(err.status(), status);
                }
            }
        }
    }

    #[test]
    fn codes_round_trip() {
        for (code, status) in SStatus::iter().enumerate() {
            let code = code as Int;
            assert_eq!(status.value(), code);
            assert_eq!(SStatus::try_from(code), Ok(status));
            assert_eq!(Int::from(status), code);
        }
        assert!(SStatus::try_from(12 as Int).is_err());
    }

    #[test]
    fn raw_status_conversion() {
        fn open(status: Int) -> Result<&'static str> {
            from_status(status)?;
            Ok("opened")
        }

        assert_eq!(open(0), Ok("opened"));
        assert_eq!(open(3), Err(SaneError::DeviceBusy));
        assert_eq!(open(42), Err(SaneError::Inval));
    }
}
