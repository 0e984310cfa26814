//! Ordering tools: plan catalogue, price calculation and order confirmation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{NoParams, Payment, PlanParams, exclusive};

pub struct ListPlansTool;

impl ApiTool for ListPlansTool {
    const NAME: &'static str = "list_plans";
    const DESCRIPTION: &'static str = "List the VPS plans available for ordering with CPU, memory, disk, traffic and monthly price.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/order/plans".to_string())
    }
}

pub struct GetPlanTool;

impl ApiTool for GetPlanTool {
    const NAME: &'static str = "get_plan";
    const DESCRIPTION: &'static str = "Get the details of one orderable plan, including the billing periods it can be ordered for.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PlanParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        Ok(format!("/order/plans/{}", params.plan_id))
    }
}

pub struct ListPlanResourcesTool;

impl ApiTool for ListPlanResourcesTool {
    const NAME: &'static str = "list_plan_resources";
    const DESCRIPTION: &'static str = "List the configurable resources for a plan (location, extra IPs, backups, control panel...). Each option has a resource id to pass in `resources` when pricing or ordering. Pick at most one option per resource group.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PlanParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        Ok(format!("/order/plans/{}/resources", params.plan_id))
    }
}

/// Parameters for pricing a configuration.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OrderPriceParams {
    /// Plan id (see list_plans).
    pub plan: u64,

    /// Resource option ids (see list_plan_resources).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<u64>>,

    /// Billing period in months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

pub struct CalculateOrderPriceTool;

impl ApiTool for CalculateOrderPriceTool {
    const NAME: &'static str = "calculate_order_price";
    const DESCRIPTION: &'static str = "Calculate the price of a plan with the selected resources and billing period without placing an order.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = OrderPriceParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/order/configuration/price".to_string())
    }
}

/// Parameters for placing an order.
///
/// Field names follow the order endpoint, which uses camelCase `sshKey`
/// where the reinstall endpoint uses `ssh_key`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderServiceParams {
    /// Plan id (see list_plans).
    pub plan: u64,

    /// Resource option ids (see list_plan_resources).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<u64>>,

    /// How the order is paid.
    pub payment: Payment,

    /// Operating system template id (see list_operating_systems).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<u64>,

    /// Root password for the new server. At least 8 characters with upper and
    /// lower case letters and digits. Mutually exclusive with sshKey.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_password: Option<String>,

    /// Id of an uploaded SSH key (see list_ssh_keys). Mutually exclusive with rootPassword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<u64>,

    /// Billing period in months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

pub struct OrderServiceTool;

impl ApiTool for OrderServiceTool {
    const NAME: &'static str = "order_service";
    const DESCRIPTION: &'static str = "Order a new VPS. This creates a billable order: price it with calculate_order_price and confirm with the user first. Provide either `rootPassword` or `sshKey` (the id of an uploaded key, note the camelCase name), not both. The response contains the order and, for online payments, a URL to complete payment.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = OrderServiceParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/order/configuration/confirm".to_string())
    }

    fn validate(params: &Self::Params) -> Result<(), ArgumentError> {
        exclusive(
            ("rootPassword", params.root_password.is_some()),
            ("sshKey", params.ssh_key.is_some()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::request_for;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_service_omits_absent_fields() {
        let request = request_for::<OrderServiceTool>(json!({
            "plan": 100,
            "resources": [901, 907],
            "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""}
        }))
        .unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/order/configuration/confirm");

        let body = request.body.unwrap();
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(
            body,
            json!({
                "plan": 100,
                "resources": [901, 907],
                "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""}
            })
        );
    }

    #[test]
    fn test_order_service_passes_optional_fields_unchanged() {
        let request = request_for::<OrderServiceTool>(json!({
            "plan": 100,
            "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""},
            "os": 31,
            "sshKey": 5,
            "period": 6
        }))
        .unwrap();
        let body = request.body.unwrap();
        assert_eq!(body["os"], json!(31));
        assert_eq!(body["sshKey"], json!(5));
        assert_eq!(body["period"], json!(6));
        assert!(body.get("rootPassword").is_none());
        assert!(body.get("resources").is_none());
    }

    #[test]
    fn test_order_service_rejects_password_and_key() {
        let err = request_for::<OrderServiceTool>(json!({
            "plan": 100,
            "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""},
            "rootPassword": "Secr3tPass",
            "sshKey": 5
        }))
        .unwrap_err();
        assert!(err.to_string().contains("rootPassword"));
    }

    #[test]
    fn test_order_service_rejects_snake_case_key() {
        let result = request_for::<OrderServiceTool>(json!({
            "plan": 100,
            "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""},
            "ssh_key": 5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_calculate_price() {
        let request =
            request_for::<CalculateOrderPriceTool>(json!({"plan": 100, "period": 12})).unwrap();
        assert_eq!(request.path, "/order/configuration/price");
        assert_eq!(request.body, Some(json!({"plan": 100, "period": 12})));
    }

    #[test]
    fn test_plan_catalogue_paths() {
        assert_eq!(request_for::<ListPlansTool>(json!({})).unwrap().path, "/order/plans");
        assert_eq!(
            request_for::<GetPlanTool>(json!({"planId": 100})).unwrap().path,
            "/order/plans/100"
        );
        assert_eq!(
            request_for::<ListPlanResourcesTool>(json!({"planId": 100}))
                .unwrap()
                .path,
            "/order/plans/100/resources"
        );
    }
}
