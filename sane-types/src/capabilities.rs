use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags! {
    /// How the value of an option can be read and written.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Capabilities: u32 {
        const SoftSelect = 1;
        const HardSelect = Self::SoftSelect.bits() << 1;
        const SoftDetect = Self::HardSelect.bits() << 1;
        const Emulated = Self::SoftDetect.bits() << 1;
        const Automatic = Self::Emulated.bits() << 1;
        const Inactive = Self::Automatic.bits() << 1;
        const Advanced = Self::Inactive.bits() << 1;
        const Hidden = Self::Advanced.bits() << 1;
        const AlwaysSettable = Self::Hidden.bits() << 1;

        const _ = !0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("option is both software and hardware selectable")]
    SelectConflict,

    #[error("software selectable option is not software detectable")]
    SoftSelectWithoutDetect,
}

impl Capabilities {
    pub fn validate(self) -> Result<(), CapabilityError> {
        if self.contains(Self::SoftSelect | Self::HardSelect) {
            return Err(CapabilityError::SelectConflict);
        }

        if self.contains(Self::SoftSelect) && !self.contains(Self::SoftDetect) {
            return Err(CapabilityError::SoftSelectWithoutDetect);
        }

        Ok(())
    }

    pub fn is_active(self) -> bool {
        !self.contains(Self::Inactive)
    }

    pub fn is_settable(self) -> bool {
        self.contains(Self::SoftSelect)
    }

    pub fn is_auto_settable(self) -> bool {
        self.contains(Self::Automatic)
    }

    pub fn is_detectable(self) -> bool {
        self.contains(Self::SoftDetect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_consecutive_bits() {
        let flags: Vec<u32> = Capabilities::all()
            .iter_names()
            .map(|(_, flag)| flag.bits())
            .collect();

        assert_eq!(flags.len(), 9);
        assert_eq!(flags[0], 0x01);
        for pair in flags.windows(2) {
            assert_eq!(pair[1], pair[0] << 1);
            assert_eq!(pair[0] & pair[1], 0);
        }
    }

    #[test]
    fn raw_values() {
        assert_eq!(Capabilities::SoftSelect.bits(), 0x01);
        assert_eq!(Capabilities::SoftDetect.bits(), 0x04);
        assert_eq!(Capabilities::Automatic.bits(), 0x10);
        assert_eq!(Capabilities::Advanced.bits(), 0x40);
        assert_eq!(Capabilities::AlwaysSettable.bits(), 0x100);
    }

    #[test]
    fn unknown_bits_survive() {
        let raw = 0x8000_0005;
        assert_eq!(Capabilities::from_bits_retain(raw).bits(), raw);
    }

    #[test]
    fn validation() {
        let soft = Capabilities::SoftSelect | Capabilities::SoftDetect;
        assert_eq!(soft.validate(), Ok(()));
        assert_eq!(Capabilities::HardSelect.validate(), Ok(()));
        assert_eq!(Capabilities::empty().validate(), Ok(()));

        assert_eq!(
            (soft | Capabilities::HardSelect).validate(),
            Err(CapabilityError::SelectConflict)
        );
        assert_eq!(
            Capabilities::SoftSelect.validate(),
            Err(CapabilityError::SoftSelectWithoutDetect)
        );
    }

    #[test]
    fn helpers() {
        let cap = Capabilities::SoftSelect | Capabilities::SoftDetect | Capabilities::Inactive;
        assert!(cap.is_settable());
        assert!(cap.is_detectable());
        assert!(!cap.is_active());
        assert!(!cap.is_auto_settable());
    }
}
