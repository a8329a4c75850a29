use crate::config::{Config, DeviceDescription};
use anyhow::{anyhow, Context};
use bstr::{BStr, ByteSlice};
use sane_types::{ValueType, CURRENT_MAJOR, OPTION_NUM_OPTIONS};
use std::collections::HashSet;

/// Check every device and option description, returning all problems found.
pub fn check_config(config: &Config) -> Vec<anyhow::Error> {
    let mut problems = Vec::new();

    let mut device_names = HashSet::new();
    for (i, description) in config.devices.iter().enumerate() {
        let name = description.device.name.as_bstr();

        if !name.is_empty() && !device_names.insert(name) {
            problems.push(anyhow!("device '{name}' is described more than once"));
        }

        problems.extend(check_device(i, description));
    }

    problems
}

fn check_device(i: usize, description: &DeviceDescription) -> Vec<anyhow::Error> {
    let device = &description.device;
    let mut problems = Vec::new();

    if device.name.is_empty() {
        problems.push(anyhow!("device #{i} has no name"));
    }

    let version = device.backend_version_code;
    if version.major() != CURRENT_MAJOR {
        log::warn!(
            "Device '{name}' reports backend version {version}, expected major version {CURRENT_MAJOR}",
            name = device.name,
        );
    }

    log::debug!("Check device {device}");

    let mut option_names: HashSet<&BStr> = HashSet::new();
    for (j, option) in description.options.iter().enumerate() {
        let option_name = option.name.as_bstr();

        if let Err(err) = option
            .validate()
            .with_context(|| format!("option '{option_name}' (#{j}) of device '{}'", device.name))
        {
            problems.push(err);
        }

        // Option #0 holds the number of options and has no name.
        if option.ty == ValueType::Group || (j == 0 && option_name == OPTION_NUM_OPTIONS) {
            continue;
        }

        if option_name.is_empty() {
            problems.push(anyhow!("option #{j} of device '{}' has no name", device.name));
        } else if !option_names.insert(option_name) {
            problems.push(anyhow!(
                "option '{option_name}' of device '{}' is declared more than once",
                device.name
            ));
        }
    }

    log::debug!(
        "Device '{name}' has {count} options, {problems} problems",
        name = device.name,
        count = description.options.len(),
        problems = problems.len(),
    );

    problems
}
