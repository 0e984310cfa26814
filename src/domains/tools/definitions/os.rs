//! Operating system tools for existing services.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{ServiceParams, exclusive};
use super::services::service_path;

pub struct ListOsTemplatesTool;

impl ApiTool for ListOsTemplatesTool {
    const NAME: &'static str = "list_os_templates";
    const DESCRIPTION: &'static str = "List the operating system templates that can be installed on a specific service. Use the returned id as `os` in reinstall_os.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/os")
    }
}

/// Parameters for reinstalling the operating system.
///
/// Field names follow the reinstall endpoint, which uses `ssh_key` where
/// ordering uses `sshKey`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReinstallOsParams {
    /// Service order number, e.g. "VP57068".
    #[serde(rename = "orderNo", skip_serializing)]
    pub order_no: String,

    /// Operating system template id (see list_os_templates).
    pub os: u64,

    /// Root password for the fresh system. At least 8 characters with upper
    /// and lower case letters and digits. Mutually exclusive with ssh_key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Id of an uploaded SSH key (see list_ssh_keys). Mutually exclusive with password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<u64>,
}

pub struct ReinstallOsTool;

impl ApiTool for ReinstallOsTool {
    const NAME: &'static str = "reinstall_os";
    const DESCRIPTION: &'static str = "Reinstall the operating system of a service. ALL DATA ON THE SERVICE IS ERASED; confirm with the user first. Provide either `password` or `ssh_key` (the id of an uploaded key, note the snake_case name), not both.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ReinstallOsParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/reinstall")
    }

    fn validate(params: &Self::Params) -> Result<(), ArgumentError> {
        exclusive(
            ("password", params.password.is_some()),
            ("ssh_key", params.ssh_key.is_some()),
        )
    }
}
