//! Common building blocks shared across tool definitions.
//!
//! Path helpers, pagination and the parameter structs reused by many tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domains::tools::descriptor::ArgumentError;

/// Check that a path argument is usable as a single URL segment.
///
/// The value is interpolated literally, so it must be non-empty and free of
/// separators that would change the shape of the URL.
pub fn segment<'a>(field: &str, value: &'a str) -> Result<&'a str, ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::new(format!("`{}` must not be empty", field)));
    }
    if value == "." || value == ".." {
        return Err(ArgumentError::new(format!("`{}` must not be a relative segment", field)));
    }
    if value
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
    {
        return Err(ArgumentError::new(format!(
            "`{}` must be a single path segment, got {:?}",
            field, value
        )));
    }
    Ok(value)
}

/// Append `?page=N` when a page was requested.
pub fn with_page(path: String, page: Option<u32>) -> Result<String, ArgumentError> {
    let Some(page) = page else {
        return Ok(path);
    };
    if page == 0 {
        return Err(ArgumentError::new("`page` starts at 1"));
    }
    let query = serde_urlencoded::to_string(&[("page", page)])
        .map_err(|e| ArgumentError::new(format!("Cannot encode page: {}", e)))?;
    Ok(format!("{}?{}", path, query))
}

/// Reject argument sets where two mutually exclusive fields are both given.
pub fn exclusive(first: (&str, bool), second: (&str, bool)) -> Result<(), ArgumentError> {
    if first.1 && second.1 {
        return Err(ArgumentError::new(format!(
            "`{}` and `{}` are mutually exclusive; supply only one",
            first.0, second.0
        )));
    }
    Ok(())
}

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

/// Parameters for paginated list tools.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PageParams {
    /// Page number to fetch, starting at 1. Omit for the first page.
    #[serde(default, skip_serializing)]
    pub page: Option<u32>,
}

/// Parameters identifying one service.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,
}

/// Parameters identifying one orderable plan.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanParams {
    /// Plan identifier as returned by `list_plans`.
    #[serde(skip_serializing)]
    pub plan_id: u64,
}

/// Parameters identifying one key (SSH or API).
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeyParams {
    /// Key identifier as returned by the corresponding list tool.
    #[serde(skip_serializing)]
    pub key_id: u64,
}

/// Payment details for ordering, renewal, plan changes and backup plans.
///
/// Passed through to the upstream API unexamined; extra fields are kept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment method identifier (see `list_payment_methods`).
    pub payment: u64,

    /// URL the customer is sent to after a successful payment. May be empty.
    pub success_url: String,

    /// URL the customer is sent to when the payment is cancelled. May be empty.
    pub cancel_url: String,

    /// Additional provider-specific fields, forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Build the request a tool would send for the given JSON arguments.
#[cfg(test)]
pub(crate) fn request_for<T: crate::domains::tools::ApiTool>(
    args: Value,
) -> Result<crate::core::api::ApiRequest, crate::domains::tools::ToolError> {
    let arguments = match args {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    crate::domains::tools::ToolDescriptor::of::<T>().build_request(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_accepts_order_numbers() {
        assert_eq!(segment("orderNo", "VP57068"), Ok("VP57068"));
    }

    #[test]
    fn test_segment_rejects_separators() {
        assert!(segment("orderNo", "").is_err());
        assert!(segment("orderNo", "VP1/stop").is_err());
        assert!(segment("orderNo", "VP1?x=1").is_err());
        assert!(segment("orderNo", "VP 1").is_err());
        assert!(segment("orderNo", "..%2F").is_err());
        assert!(segment("orderNo", "..").is_err());
    }

    #[test]
    fn test_with_page() {
        assert_eq!(with_page("/a".into(), None).unwrap(), "/a");
        assert_eq!(with_page("/a".into(), Some(2)).unwrap(), "/a?page=2");
        assert!(with_page("/a".into(), Some(0)).is_err());
    }

    #[test]
    fn test_exclusive() {
        assert!(exclusive(("a", true), ("b", false)).is_ok());
        assert!(exclusive(("a", false), ("b", false)).is_ok());
        let err = exclusive(("rootPassword", true), ("sshKey", true)).unwrap_err();
        assert!(err.0.contains("rootPassword"));
        assert!(err.0.contains("sshKey"));
    }

    #[test]
    fn test_payment_keeps_extra_fields() {
        let payment: Payment = serde_json::from_value(json!({
            "payment": 1,
            "successUrl": "",
            "cancelUrl": "",
            "coupon": "SPRING"
        }))
        .unwrap();
        assert_eq!(payment.extra.get("coupon"), Some(&json!("SPRING")));
        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            json!({"payment": 1, "successUrl": "", "cancelUrl": "", "coupon": "SPRING"})
        );
    }

    #[test]
    fn test_payment_requires_method() {
        let result: Result<Payment, _> =
            serde_json::from_value(json!({"successUrl": "", "cancelUrl": ""}));
        assert!(result.is_err());
    }
}
