use crate::{Int, SaneString, VersionCode};
use serde::{Deserialize, Serialize};

/// Identifies a scanning device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub name: SaneString,
    pub vendor: SaneString,
    pub model: SaneString,
    #[serde(rename = "type")]
    pub ty: SaneString,

    pub email_backend_author: SaneString,
    pub backend_website: SaneString,
    pub device_location: SaneString,
    pub comment: SaneString,
    pub reserved_string: SaneString,

    pub backend_version_code: VersionCode,
    pub backend_capability_flags: Int,
    pub reserved_int: Int,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{name}' (vendor '{vendor}', model '{model}', type '{ty}')",
            name = self.name,
            vendor = self.vendor,
            model = self.model,
            ty = self.ty,
        )
    }
}
