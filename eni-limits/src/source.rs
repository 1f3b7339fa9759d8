//! Instance-type catalog sources: where authoritative limits come from.
//!
//! The HTTP source reads the JSON shape of the EC2 `DescribeInstanceTypes` response,
//! following `NextToken` pagination.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FetchError;
use crate::limits::InstanceLimits;

/// Network section of an instance-type description. Unset fields read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInfo {
    #[serde(default)]
    pub maximum_network_interfaces: Option<u32>,
    #[serde(default)]
    pub ipv4_addresses_per_interface: Option<u32>,
    #[serde(default)]
    pub ipv6_addresses_per_interface: Option<u32>,
}

/// One entry of the provider's instance-type catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeInfo {
    pub instance_type: String,
    #[serde(default)]
    pub network_info: Option<NetworkInfo>,
    #[serde(default)]
    pub hypervisor: Option<String>,
}

impl InstanceTypeInfo {
    /// Limits described by this entry; missing counts become 0 and a missing hypervisor `""`.
    pub fn limits(&self) -> InstanceLimits {
        let network = self.network_info.clone().unwrap_or_default();
        InstanceLimits {
            adapters: network.maximum_network_interfaces.unwrap_or(0),
            ipv4: network.ipv4_addresses_per_interface.unwrap_or(0),
            ipv6: network.ipv6_addresses_per_interface.unwrap_or(0),
            hypervisor_type: self.hypervisor.clone().unwrap_or_default(),
        }
    }
}

/// Provides the current instance-type catalog for the caller's account and region.
#[async_trait]
pub trait InstanceTypeSource: Send + Sync {
    /// Fetch every instance type the provider currently describes.
    async fn instance_types(&self) -> Result<Vec<InstanceTypeInfo>, FetchError>;
}

/// Fetches a URL body. Abstraction for testing.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET the URL and return the response body as string.
    async fn get(&self, url: &str) -> Result<String, String>;
}

/// Reqwest-based HTTP client.
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<String, String> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstanceTypesPage {
    #[serde(default)]
    instance_types: Vec<InstanceTypeInfo>,
    #[serde(default)]
    next_token: Option<String>,
}

/// Reads the catalog from an HTTP endpoint serving `DescribeInstanceTypes` JSON pages.
pub struct HttpInstanceTypeSource {
    base_url: Url,
    http_client: Arc<dyn HttpClient>,
}

impl HttpInstanceTypeSource {
    /// Create with the given URL and the reqwest client.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create with a custom HTTP client. Fails if `base_url` is not an absolute URL.
    pub fn with_client(
        base_url: &str,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|source| FetchError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn page_url(&self, next_token: Option<&str>) -> String {
        let mut url = self.base_url.clone();
        if let Some(token) = next_token {
            url.query_pairs_mut().append_pair("NextToken", token);
        }
        url.into()
    }
}

#[async_trait]
impl InstanceTypeSource for HttpInstanceTypeSource {
    async fn instance_types(&self) -> Result<Vec<InstanceTypeInfo>, FetchError> {
        let mut out = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut next_token: Option<String> = None;
        loop {
            let url = self.page_url(next_token.as_deref());
            let body = self.http_client.get(&url).await.map_err(FetchError::Http)?;
            let page: DescribeInstanceTypesPage = serde_json::from_str(&body)?;
            out.extend(page.instance_types);
            match page.next_token {
                Some(token) if !token.is_empty() => {
                    if !seen_tokens.insert(token.clone()) {
                        return Err(FetchError::RepeatedNextToken(token));
                    }
                    next_token = Some(token);
                }
                _ => break,
            }
        }
        Ok(out)
    }
}

/// Serves a fixed catalog. Useful offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticInstanceTypeSource {
    instance_types: Vec<InstanceTypeInfo>,
}

impl StaticInstanceTypeSource {
    pub fn new(instance_types: Vec<InstanceTypeInfo>) -> Self {
        Self { instance_types }
    }
}

#[async_trait]
impl InstanceTypeSource for StaticInstanceTypeSource {
    async fn instance_types(&self) -> Result<Vec<InstanceTypeInfo>, FetchError> {
        Ok(self.instance_types.clone())
    }
}
