//! SANE (Scanner Access Now Easy) types and constants.
//!
//! Nothing here talks to a scanner. These are the values a backend and its
//! frontends exchange: primitive types, status codes, option descriptors
//! with their capabilities and constraints, and device records.

#![allow(non_upper_case_globals)]

mod auth;
mod capabilities;
mod control;
mod device;
mod init;
mod options;
mod parameters;
mod status;
mod types;
mod utils;
mod version;

pub use auth::{Authorize, Credentials, CredentialsError, MAX_PASSWORD_LEN, MAX_USERNAME_LEN};
pub use capabilities::{Capabilities, CapabilityError};
pub use control::{Action, Info};
pub use device::Device;
pub use init::init;
pub use options::{
    Constraint, ConstraintType, DescriptorError, OptionDescriptor, RangeError, SRange, Unit,
    ValueType, OPTION_BR_X, OPTION_BR_Y, OPTION_NUM_OPTIONS, OPTION_PREVIEW, OPTION_RESOLUTION,
    OPTION_TL_X, OPTION_TL_Y,
};
pub use parameters::{Frame, Parameters};
pub use status::{from_status, strstatus, Result, SStatus, SaneError};
pub use types::{
    Byte, Char, Fixed, Handle, Int, SaneBool, SaneString, StringConst, Word, FIXED_SCALE_SHIFT,
    WORD_SIZE,
};
pub use utils::InvalidTag;
pub use version::{VersionCode, CURRENT_MAJOR, CURRENT_MINOR};
