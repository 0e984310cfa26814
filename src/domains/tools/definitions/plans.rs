//! Plan change tools for existing services.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{Payment, ServiceParams};
use super::services::service_path;

pub struct ListUpgradePlansTool;

impl ApiTool for ListUpgradePlansTool {
    const NAME: &'static str = "list_upgrade_plans";
    const DESCRIPTION: &'static str = "List the plans a service can be moved to. Downgrades may be limited by current disk usage.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/plans")
    }
}

/// Parameters identifying a service and a target plan.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanChangeParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Target plan id (see list_upgrade_plans).
    #[serde(skip_serializing)]
    pub plan_id: u64,
}

pub struct GetPlanChangePriceTool;

impl ApiTool for GetPlanChangePriceTool {
    const NAME: &'static str = "get_plan_change_price";
    const DESCRIPTION: &'static str = "Quote the prorated price of moving a service to another plan for the remainder of its billing period. Read-only; nothing is charged.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PlanChangeParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, &format!("/plans/{}", params.plan_id))
    }
}

/// Parameters for changing the plan of a service.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangePlanParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Target plan id (see list_upgrade_plans).
    #[serde(skip_serializing)]
    pub plan_id: u64,

    /// How the price difference is paid.
    pub payment: Payment,
}

pub struct ChangePlanTool;

impl ApiTool for ChangePlanTool {
    const NAME: &'static str = "change_plan";
    const DESCRIPTION: &'static str = "Move a service to another plan and pay the prorated difference. Quote with get_plan_change_price and confirm with the user first. The response may contain a payment URL to complete.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = ChangePlanParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, &format!("/plans/{}", params.plan_id))
    }
}
