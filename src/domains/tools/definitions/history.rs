//! Account history tools. All of them are paginated.

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{PageParams, with_page};

pub struct ListInvoicesTool;

impl ApiTool for ListInvoicesTool {
    const NAME: &'static str = "list_invoices";
    const DESCRIPTION: &'static str = "List invoices issued to the account, newest first, with number, date, amount and paid status. Results are paginated; pass `page` for older entries.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PageParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        with_page("/account/history/invoices".to_string(), params.page)
    }
}

pub struct ListPaymentsTool;

impl ApiTool for ListPaymentsTool {
    const NAME: &'static str = "list_payments";
    const DESCRIPTION: &'static str = "List payments received on the account with method, amount and date. Results are paginated; pass `page` for older entries.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PageParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        with_page("/account/history/payments".to_string(), params.page)
    }
}

pub struct ListActivityTool;

impl ApiTool for ListActivityTool {
    const NAME: &'static str = "list_activity";
    const DESCRIPTION: &'static str = "List the account activity log (logins, service actions, API calls). Results are paginated; pass `page` for older entries.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = PageParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        with_page("/account/history/activity".to_string(), params.page)
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::request_for;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_invoices_page() {
        let request = request_for::<ListInvoicesTool>(json!({"page": 2})).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/account/history/invoices?page=2");
    }

    #[test]
    fn test_list_invoices_without_page() {
        let request = request_for::<ListInvoicesTool>(json!({})).unwrap();
        assert_eq!(request.path, "/account/history/invoices");
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(request_for::<ListPaymentsTool>(json!({"page": 0})).is_err());
    }

    #[test]
    fn test_page_must_be_number() {
        assert!(request_for::<ListActivityTool>(json!({"page": "2"})).is_err());
    }

    #[test]
    fn test_other_history_paths() {
        assert_eq!(
            request_for::<ListPaymentsTool>(json!({"page": 5})).unwrap().path,
            "/account/history/payments?page=5"
        );
        assert_eq!(
            request_for::<ListActivityTool>(json!({})).unwrap().path,
            "/account/history/activity"
        );
    }
}
