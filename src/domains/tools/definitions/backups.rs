//! Backup tools: snapshots of a service and backup plan subscriptions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{Payment, ServiceParams};
use super::services::service_path;

pub struct ListBackupsTool;

impl ApiTool for ListBackupsTool {
    const NAME: &'static str = "list_backups";
    const DESCRIPTION: &'static str = "List the backups of a service with their ids, creation dates and sizes.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/backups")
    }
}

/// Parameters for creating a backup.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBackupParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Optional note stored with the backup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct CreateBackupTool;

impl ApiTool for CreateBackupTool {
    const NAME: &'static str = "create_backup";
    const DESCRIPTION: &'static str = "Create a manual backup of a service. Requires an active backup plan; when the slot limit is reached the upstream API rejects the request.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = CreateBackupParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/backups")
    }
}

/// Parameters identifying one backup of a service.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BackupParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Backup id (see list_backups).
    #[serde(skip_serializing)]
    pub backup_id: u64,
}

pub struct RestoreBackupTool;

impl ApiTool for RestoreBackupTool {
    const NAME: &'static str = "restore_backup";
    const DESCRIPTION: &'static str = "Restore a service from one of its backups. Current data on the service is overwritten; confirm with the user first.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = BackupParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(
            &params.order_no,
            &format!("/backups/{}/restore", params.backup_id),
        )
    }
}

pub struct DeleteBackupTool;

impl ApiTool for DeleteBackupTool {
    const NAME: &'static str = "delete_backup";
    const DESCRIPTION: &'static str = "Permanently delete one backup of a service.";
    const METHOD: HttpMethod = HttpMethod::Delete;
    type Params = BackupParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, &format!("/backups/{}", params.backup_id))
    }
}

pub struct ListBackupPlansTool;

impl ApiTool for ListBackupPlansTool {
    const NAME: &'static str = "list_backup_plans";
    const DESCRIPTION: &'static str = "List the backup plans (number of slots, schedule, price) that can be added to a service.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = ServiceParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/backup-plans")
    }
}

/// Parameters for subscribing a service to a backup plan.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderBackupPlanParams {
    /// Service order number, e.g. "VP57068".
    #[serde(skip_serializing)]
    pub order_no: String,

    /// Backup plan id (see list_backup_plans).
    pub plan: u64,

    /// How the backup plan is paid.
    pub payment: Payment,
}

pub struct OrderBackupPlanTool;

impl ApiTool for OrderBackupPlanTool {
    const NAME: &'static str = "order_backup_plan";
    const DESCRIPTION: &'static str = "Add a paid backup plan to a service. Billable; confirm the price with the user first.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = OrderBackupPlanParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        service_path(&params.order_no, "/backup-plans")
    }
}
