use crate::utils::sane_enum;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

sane_enum! {
    /// What `sane_control_option` is asked to do with an option.
    pub enum Action {
        GetValue = 0,
        SetValue = 1,
        SetAuto = 2,
    }
}

bitflags! {
    /// Side effects a backend reports after setting an option.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Info: u32 {
        const Inexact = 1 << 0;
        const ReloadOptions = 1 << 1;
        const ReloadParams = 1 << 2;

        const _ = !0;
    }
}
