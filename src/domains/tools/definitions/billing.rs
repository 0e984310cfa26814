//! Renewal and auto-renew tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{Payment, ServiceParams};
use super::services::service_path;

pub struct GetRenewalOptionsTool;

impl ApiTool for GetRenewalOptionsTool {
    const NAME: &'static str = "get_renewal_options";
    const DESCRIPTION: &'static str = "List the renewal periods available for a service with their prices and the current expiry date.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/renewal")
    }
}

/// Parameters for renewing a service.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenewServiceParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Renewal period in months, as offered by get_renewal_options.
    pub period: u32,

    /// How the renewal is paid.
    pub payment: Payment,
}

pub struct RenewServiceTool;

impl ApiTool for RenewServiceTool {
    const NAME: &'static str = "renew_service";
    const DESCRIPTION: &'static str = "Renew a service for the given period. Creates an invoice; the response may contain a payment URL. Confirm the amount with the user first.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = RenewServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/renewal")
    }
}

/// Parameters for the auto-renew switch.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AutoRenewParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Whether the service renews automatically from the account balance.
    pub enabled: bool,
}

pub struct SetAutoRenewTool;

impl ApiTool for SetAutoRenewTool {
    const NAME: &'static str = "set_auto_renew";
    const DESCRIPTION: &'static str = "Enable or disable automatic renewal of a service from the account balance.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = AutoRenewParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/auto-renew")
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::request_for;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renew_service_body() {
        let request = request_for::<RenewServiceTool>(json!({
            "orderNo": "VP3",
            "period": 12,
            "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""}
        }))
        .unwrap();
        assert_eq!(request.path, "/account/services/VP3/renewal");
        assert_eq!(
            request.body,
            Some(json!({
                "period": 12,
                "payment": {"payment": 1, "successUrl": "", "cancelUrl": ""}
            }))
        );
    }

    #[test]
    fn test_renew_requires_payment() {
        assert!(request_for::<RenewServiceTool>(json!({"orderNo": "VP3", "period": 12})).is_err());
    }

    #[test]
    fn test_set_auto_renew_false_is_sent() {
        let request =
            request_for::<SetAutoRenewTool>(json!({"orderNo": "VP3", "enabled": false})).unwrap();
        assert_eq!(request.path, "/account/services/VP3/auto-renew");
        assert_eq!(request.body, Some(json!({"enabled": false})));
    }

    #[test]
    fn test_renewal_options_path() {
        let request = request_for::<GetRenewalOptionsTool>(json!({"orderNo": "VP3"})).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/account/services/VP3/renewal");
    }
}
