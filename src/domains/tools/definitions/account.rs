//! Account tools: account summary, profile and balance.

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::NoParams;

/// Account summary.
pub struct GetAccountTool;

impl ApiTool for GetAccountTool {
    const NAME: &'static str = "get_account";
    const DESCRIPTION: &'static str = "Get a summary of the authenticated account: customer id, email, status and counts of active services.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account".to_string())
    }
}

/// Contact and billing profile.
pub struct GetProfileTool;

impl ApiTool for GetProfileTool {
    const NAME: &'static str = "get_profile";
    const DESCRIPTION: &'static str = "Get the account profile: contact person, company, address and VAT details used on invoices.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account/profile".to_string())
    }
}

/// Prepaid balance.
pub struct GetBalanceTool;

impl ApiTool for GetBalanceTool {
    const NAME: &'static str = "get_balance";
    const DESCRIPTION: &'static str = "Get the prepaid account balance and its currency. Balance can be used as a payment method when ordering or renewing.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account/balance".to_string())
    }
}
