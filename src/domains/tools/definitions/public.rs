//! Public catalogue tools. These endpoints need no account context.

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::NoParams;

pub struct ListLocationsTool;

impl ApiTool for ListLocationsTool {
    const NAME: &'static str = "list_locations";
    const DESCRIPTION: &'static str = "List the data center locations where servers can be deployed.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/public/locations".to_string())
    }
}

pub struct ListOperatingSystemsTool;

impl ApiTool for ListOperatingSystemsTool {
    const NAME: &'static str = "list_operating_systems";
    const DESCRIPTION: &'static str = "List the operating system templates offered for new orders. Use the id as `os` in order_service.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/public/os".to_string())
    }
}

pub struct ListPaymentMethodsTool;

impl ApiTool for ListPaymentMethodsTool {
    const NAME: &'static str = "list_payment_methods";
    const DESCRIPTION: &'static str = "List the accepted payment methods. The numeric id goes into the `payment` field of a payment object (order_service, renew_service, change_plan, order_backup_plan).";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/public/payment-methods".to_string())
    }
}
