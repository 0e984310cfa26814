//! Service lifecycle tools: listing, inspection, power actions and cancellation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{PageParams, ServiceParams, segment, with_page};

/// Build `/account/services/{orderNo}` followed by `suffix`.
pub(crate) fn service_path(order_no: &str, suffix: &str) -> Result<String, ArgumentError> {
    Ok(format!(
        "/account/services/{}{}",
        segment("orderNo", order_no)?,
        suffix
    ))
}

pub struct ListServicesTool;

impl ApiTool for ListServicesTool {
    const NAME: &'static str = "list_services";
    const DESCRIPTION: &'static str = "List the VPS services on the account with their order numbers, plans, status and expiry dates. Use the order number (e.g. VP57068) with the other service tools.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PageParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        with_page("/account/services".to_string(), params.page)
    }
}

pub struct GetServiceTool;

impl ApiTool for GetServiceTool {
    const NAME: &'static str = "get_service";
    const DESCRIPTION: &'static str = "Get full details of one service: plan, resources, IP addresses, operating system, location and billing period.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "")
    }
}

pub struct GetServiceStatusTool;

impl ApiTool for GetServiceStatusTool {
    const NAME: &'static str = "get_service_status";
    const DESCRIPTION: &'static str = "Get the live power state of a service (running, stopped, installing) and any pending task.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/status")
    }
}

pub struct StartServiceTool;

impl ApiTool for StartServiceTool {
    const NAME: &'static str = "start_service";
    const DESCRIPTION: &'static str = "Power on a stopped service.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/start")
    }
}

pub struct StopServiceTool;

impl ApiTool for StopServiceTool {
    const NAME: &'static str = "stop_service";
    const DESCRIPTION: &'static str = "Power off a running service. Running processes are terminated; confirm with the user before stopping production machines.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/stop")
    }
}

pub struct RestartServiceTool;

impl ApiTool for RestartServiceTool {
    const NAME: &'static str = "restart_service";
    const DESCRIPTION: &'static str = "Reboot a service. Some settings (hostname, feature toggles) only take effect after a restart.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/restart")
    }
}

/// Parameters for cancelling a service.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CancelServiceParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Free-text reason for the cancellation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Cancel right away instead of at the end of the paid period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,
}

pub struct CancelServiceTool;

impl ApiTool for CancelServiceTool {
    const NAME: &'static str = "cancel_service";
    const DESCRIPTION: &'static str = "Request cancellation of a service. By default the service stays active until the end of the paid period; with immediate=true it is terminated and its data destroyed. Always confirm with the user first.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = CancelServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/cancel")
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::request_for;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_services_without_page() {
        let request = request_for::<ListServicesTool>(json!({})).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/account/services");
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_list_services_with_page() {
        let request = request_for::<ListServicesTool>(json!({"page": 3})).unwrap();
        assert_eq!(request.path, "/account/services?page=3");
    }

    #[test]
    fn test_power_actions_have_no_body() {
        let args = json!({"orderNo": "VP57068"});
        for (request, suffix) in [
            (request_for::<StartServiceTool>(args.clone()).unwrap(), "start"),
            (request_for::<StopServiceTool>(args.clone()).unwrap(), "stop"),
            (request_for::<RestartServiceTool>(args.clone()).unwrap(), "restart"),
        ] {
            assert_eq!(request.method, HttpMethod::Post);
            assert_eq!(request.path, format!("/account/services/VP57068/{}", suffix));
            assert_eq!(request.body, None);
        }
    }

    #[test]
    fn test_get_service_requires_order_no() {
        assert!(request_for::<GetServiceTool>(json!({})).is_err());
        let request = request_for::<GetServiceStatusTool>(json!({"orderNo": "VP1"})).unwrap();
        assert_eq!(request.path, "/account/services/VP1/status");
    }

    #[test]
    fn test_order_no_must_be_single_segment() {
        let result = request_for::<GetServiceTool>(json!({"orderNo": "VP1/../../account"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_cancel_service_optional_fields() {
        let request = request_for::<CancelServiceTool>(json!({"orderNo": "VP1"})).unwrap();
        assert_eq!(request.body, None);

        let request = request_for::<CancelServiceTool>(
            json!({"orderNo": "VP1", "reason": "moving", "immediate": false}),
        )
        .unwrap();
        assert_eq!(
            request.body,
            Some(json!({"reason": "moving", "immediate": false}))
        );
    }
}
