use anyhow::Context;
use sane_types::{Device, OptionDescriptor};
use serde::Deserialize;
use std::{fs, path::Path};

/// Description of devices a backend exposes, as checked by `sanecheck`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "Default::default")]
    pub devices: Vec<DeviceDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceDescription {
    pub device: Device,

    #[serde(default = "Default::default")]
    pub options: Vec<OptionDescriptor>,
}

impl Config {
    pub fn read_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let dpath = path.display();

        let raw = fs::read_to_string(path).with_context(|| format!("reading file '{dpath}'"))?;
        let config = Self::parse(&raw).with_context(|| format!("parsing file '{dpath}'"))?;

        Ok(config)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sane_types::{Capabilities, Constraint, SRange, Unit, ValueType, VersionCode, Word};

    const DESCRIPTION: &str = r#"
        [[devices]]
        [devices.device]
        name = "pixma:04A91912_4B2A6C"
        vendor = "CANON"
        model = "Canon PIXMA MG3000 Series"
        type = "multi-function peripheral"
        backend_version_code = 16777249

        [[devices.options]]
        name = "resolution"
        title = "Scan resolution"
        type = "Int"
        unit = "Dpi"
        cap = "SoftSelect | SoftDetect"
        constraint = { word_list = [75, 150, 300, 600] }

        [[devices.options]]
        name = "tl-x"
        type = "Fixed"
        unit = "Mm"
        cap = "SoftSelect | SoftDetect | Automatic"
        constraint = { range = { min = 0, max = 14149222, quant = 0 } }

        [[devices.options]]
        name = "mode"
        type = "String"
        size = 32
        constraint = { string_list = ["Color", "Gray"] }
    "#;

    #[test]
    fn parse_description() {
        let config = Config::parse(DESCRIPTION).unwrap();
        assert_eq!(config.devices.len(), 1);

        let description = &config.devices[0];
        assert_eq!(description.device.vendor, "CANON");
        assert_eq!(description.device.ty, "multi-function peripheral");
        assert_eq!(description.device.backend_version_code, VersionCode::new(1, 0, 33));
        assert_eq!(description.device.comment, "");

        let [resolution, tl_x, mode] = &description.options[..] else {
            panic!("expected three options, got {:#?}", description.options);
        };

        assert_eq!(resolution.ty, ValueType::Int);
        assert_eq!(resolution.unit, Unit::Dpi);
        assert_eq!(resolution.size, 4);
        assert_eq!(resolution.cap, Capabilities::SoftSelect | Capabilities::SoftDetect);

        assert!(tl_x.cap.is_auto_settable());
        assert_eq!(
            tl_x.constraint,
            Constraint::Range(SRange {
                min: Word::new(0),
                max: Word::new(14149222),
                quant: Word::new(0),
            })
        );

        assert_eq!(mode.size, 32);
        assert_eq!(mode.unit, Unit::None);
        assert!(mode.cap.is_empty());
        assert_eq!(mode.constraint, Constraint::StringList(vec!["Color".into(), "Gray".into()]));
    }

    #[test]
    fn empty_description() {
        let config = Config::parse("").unwrap();
        assert!(config.devices.is_empty());
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let raw = r#"
            [[devices]]
            [devices.device]
            name = "test:0"

            [[devices.options]]
            name = "speed"
            type = "Int"
            unit = "Furlong"
        "#;

        assert!(Config::parse(raw).is_err());
    }
}
