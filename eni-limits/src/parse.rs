//! Parser for the compact `"<adapters>,<ipv4>,<ipv6>"` limit encoding used in configuration.

use crate::error::LimitParseError;
use crate::limits::InstanceLimits;

const FIELD_NAMES: [&str; 3] = ["adapters", "ipv4", "ipv6"];

/// Parses `"4,15,15"` (whitespace anywhere is ignored) into [`InstanceLimits`].
///
/// The hypervisor type is always left empty; only the static table and the
/// provider API carry it.
pub fn parse_limit_string(value: &str) -> Result<InstanceLimits, LimitParseError> {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let fields: Vec<&str> = stripped.split(',').collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(LimitParseError::InvalidFormat {
            value: value.to_string(),
            fields: fields.len(),
        });
    }

    let mut parsed = [0u32; 3];
    for (i, field) in fields.iter().enumerate() {
        parsed[i] = field
            .parse::<u32>()
            .map_err(|source| LimitParseError::InvalidInteger {
                field: FIELD_NAMES[i],
                value: field.to_string(),
                source,
            })?;
    }
    Ok(InstanceLimits::new(parsed[0], parsed[1], parsed[2]))
}

/// Splits a command-line mapping `"m5.large=4,15,15"` into instance type and raw limit string.
pub fn parse_mapping_pair(arg: &str) -> Result<(String, String), LimitParseError> {
    let (instance_type, limit) = arg
        .split_once('=')
        .ok_or_else(|| LimitParseError::InvalidMapping(arg.to_string()))?;
    let instance_type = instance_type.trim();
    if instance_type.is_empty() {
        return Err(LimitParseError::InvalidMapping(arg.to_string()));
    }
    Ok((instance_type.to_string(), limit.to_string()))
}
