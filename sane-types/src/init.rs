use crate::{auth::Authorize, SStatus, VersionCode};

/// Initialize the SANE vocabulary.
///
/// Nothing to set up yet: the call always succeeds, `version_code` is not
/// inspected and `authorize` is never called.
pub fn init(version_code: VersionCode, authorize: Option<&mut dyn Authorize>) -> SStatus {
    let _ = version_code;

    log::trace!(
        "Call init(version_code, {authorize})",
        authorize = if authorize.is_some() { "callback" } else { "0x0" },
    );

    SStatus::Good
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::Credentials, Word};
    use bstr::BStr;

    #[test]
    fn always_good() {
        assert_eq!(init(VersionCode::default(), None), SStatus::Good);
        assert_eq!(init(VersionCode::current(0), None), SStatus::Good);
        assert_eq!(init(VersionCode::from_word(Word::new(-1)), None), SStatus::Good);
    }

    #[test]
    fn callback_is_never_called() {
        let mut calls = 0;
        let mut authorize = |_: &BStr, _: &mut Credentials| calls += 1;

        for version in [VersionCode::new(1, 0, 0), VersionCode::new(2, 7, 9)] {
            assert_eq!(init(version, Some(&mut authorize)), SStatus::Good);
        }

        assert_eq!(calls, 0);
    }
}
