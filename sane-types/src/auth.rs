use crate::{Char, StringConst};
use bstr::BStr;
use std::fmt;
use thiserror::Error;

/// Size of the username buffer, including the NUL terminator.
pub const MAX_USERNAME_LEN: usize = 128;

/// Size of the password buffer, including the NUL terminator.
pub const MAX_PASSWORD_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("{field} is {len} bytes long, but at most {max} bytes fit")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} contains NUL byte")]
    Nul { field: &'static str },
}

/// Username and password buffers filled in by an [`Authorize`] callback.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: [Char; MAX_USERNAME_LEN],
    password: [Char; MAX_PASSWORD_LEN],
}

impl Credentials {
    pub fn new() -> Self {
        Self {
            username: [0; MAX_USERNAME_LEN],
            password: [0; MAX_PASSWORD_LEN],
        }
    }

    pub fn username(&self) -> &BStr {
        until_nul(&self.username)
    }

    pub fn password(&self) -> &BStr {
        until_nul(&self.password)
    }

    pub fn set_username<V: AsRef<[u8]>>(&mut self, username: V) -> Result<(), CredentialsError> {
        fill("username", &mut self.username, username.as_ref())
    }

    pub fn set_password<V: AsRef<[u8]>>(&mut self, password: V) -> Result<(), CredentialsError> {
        fill("password", &mut self.password, password.as_ref())
    }

    pub fn clear(&mut self) {
        self.username.fill(0);
        self.password.fill(0);
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username())
            .field("password", &"***")
            .finish()
    }
}

fn until_nul(buf: &[Char]) -> &BStr {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    buf[..len].into()
}

fn fill(field: &'static str, buf: &mut [Char], value: &[u8]) -> Result<(), CredentialsError> {
    // Last byte is reserved for the terminator.
    let max = buf.len() - 1;
    if value.len() > max {
        return Err(CredentialsError::TooLong {
            field,
            len: value.len(),
            max,
        });
    }

    if value.contains(&0) {
        return Err(CredentialsError::Nul { field });
    }

    buf.fill(0);
    buf[..value.len()].copy_from_slice(value);

    Ok(())
}

/// Source of credentials for protected resources.
///
/// A backend calls it with the name of the resource it needs access to.
pub trait Authorize {
    fn authorize(&mut self, resource: StringConst<'_>, credentials: &mut Credentials);
}

impl<F> Authorize for F
where
    F: FnMut(&BStr, &mut Credentials),
{
    fn authorize(&mut self, resource: StringConst<'_>, credentials: &mut Credentials) {
        self(resource, credentials)
    }
}
