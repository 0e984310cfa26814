//! Service settings tools: hostname, root password, kernel features,
//! reverse DNS, IP addresses and usage statistics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::ServiceParams;
use super::services::service_path;

/// Parameters for changing the hostname.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeHostnameParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// New hostname, e.g. "web1" or "web1.example.com".
    pub hostname: String,
}

pub struct ChangeHostnameTool;

impl ApiTool for ChangeHostnameTool {
    const NAME: &'static str = "change_hostname";
    const DESCRIPTION: &'static str = "Change the hostname of a service. Use a valid DNS label or fully qualified name. Takes effect after the next restart.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ChangeHostnameParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/change-hostname")
    }
}

/// Parameters for changing the root password.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeRootPasswordParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// New root password. At least 8 characters with upper and lower case
    /// letters and digits.
    pub password: String,
}

pub struct ChangeRootPasswordTool;

impl ApiTool for ChangeRootPasswordTool {
    const NAME: &'static str = "change_root_password";
    const DESCRIPTION: &'static str = "Set a new root password on a running service. The provider enforces password complexity (at least 8 characters, mixed case and digits); weak passwords are rejected upstream.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ChangeRootPasswordParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/change-password")
    }
}

pub struct GetServiceSettingsTool;

impl ApiTool for GetServiceSettingsTool {
    const NAME: &'static str = "get_service_settings";
    const DESCRIPTION: &'static str = "Get the configurable settings of a service, including the state of the ppp, fuse, tuntap and nfs kernel features.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/settings")
    }
}

/// Container features that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFeature {
    Ppp,
    Fuse,
    Tuntap,
    Nfs,
}

impl ServiceFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ppp => "ppp",
            Self::Fuse => "fuse",
            Self::Tuntap => "tuntap",
            Self::Nfs => "nfs",
        }
    }
}

impl fmt::Display for ServiceFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for toggling a container feature.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToggleFeatureParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Feature to switch: one of ppp, fuse, tuntap, nfs.
    #[serde(skip_serializing)]
    pub feature: ServiceFeature,
}

pub struct ToggleServiceFeatureTool;

impl ApiTool for ToggleServiceFeatureTool {
    const NAME: &'static str = "toggle_service_feature";
    const DESCRIPTION: &'static str = "Switch a container kernel feature on or off (it flips the current state). Supported features: ppp, fuse, tuntap (needed for VPNs), nfs. Check the current state with get_service_settings first. A restart may be required.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ToggleFeatureParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(
            &params.order_no,
            &format!("/settings/{}/toggle", params.feature),
        )
    }
}

/// Parameters for setting a PTR record.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReverseDnsParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// IP address assigned to the service (see list_service_ips).
    pub ip: String,

    /// Hostname the address should resolve back to.
    pub hostname: String,
}

pub struct SetReverseDnsTool;

impl ApiTool for SetReverseDnsTool {
    const NAME: &'static str = "set_reverse_dns";
    const DESCRIPTION: &'static str = "Set the reverse DNS (PTR) record of one of the service's IP addresses. The hostname should already resolve forward to that IP.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ReverseDnsParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/reverse-dns")
    }
}

pub struct ListServiceIpsTool;

impl ApiTool for ListServiceIpsTool {
    const NAME: &'static str = "list_service_ips";
    const DESCRIPTION: &'static str = "List the IPv4 and IPv6 addresses assigned to a service together with their reverse DNS records.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/ips")
    }
}

pub struct GetServiceStatisticsTool;

impl ApiTool for GetServiceStatisticsTool {
    const NAME: &'static str = "get_service_statistics";
    const DESCRIPTION: &'static str = "Get resource usage of a service: CPU, memory, disk and traffic for the current billing period.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/statistics")
    }
}
