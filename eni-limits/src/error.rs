//! Registry-related errors.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors from [`parse_limit_string`](crate::parse_limit_string) and mapping arguments.
#[derive(Debug, Error)]
pub enum LimitParseError {
    /// The value did not split into exactly three comma-separated fields.
    #[error("invalid limit value {value:?}: expected 3 comma-separated fields, got {fields}")]
    InvalidFormat { value: String, fields: usize },
    /// A field was not a non-negative base-10 integer.
    #[error("invalid {field} count {value:?}: {source}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// A `TYPE=LIMITS` mapping without `=` or with an empty instance type.
    #[error("invalid instance limit mapping {0:?}: expected TYPE=ADAPTERS,IPV4,IPV6")]
    InvalidMapping(String),
}

/// Errors from an [`InstanceTypeSource`](crate::InstanceTypeSource).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or HTTP status failure.
    #[error("fetch instance types: {0}")]
    Http(String),
    /// The response body was not a valid instance-type catalog.
    #[error("decode instance types: {0}")]
    Decode(#[from] serde_json::Error),
    /// The catalog URL could not be parsed.
    #[error("invalid instance-type catalog URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The server returned a pagination token it had already returned.
    #[error("instance-type catalog repeated NextToken {0:?}")]
    RepeatedNextToken(String),
    /// The fetch did not complete within the configured timeout.
    #[error("fetch instance types timed out")]
    Timeout,
}

/// Errors returned by registry updates.
#[derive(Debug, Error)]
pub enum LimitsError {
    /// A user-defined mapping had an unparsable limit string.
    #[error("instance type {instance_type}: {source}")]
    Parse {
        instance_type: String,
        #[source]
        source: LimitParseError,
    },
    /// The authoritative source could not be fetched; the registry is unchanged.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
