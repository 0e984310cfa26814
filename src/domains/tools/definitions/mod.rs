//! Tool definitions module.
//!
//! One file per area of the upstream API. Each tool is a unit struct
//! implementing [`ApiTool`](super::ApiTool); the registry lists them all.

pub mod account;
pub mod backups;
pub mod billing;
pub mod common;
pub mod history;
pub mod keys;
pub mod order;
pub mod os;
pub mod plans;
pub mod public;
pub mod services;
pub mod settings;

pub use account::{GetAccountTool, GetBalanceTool, GetProfileTool};
pub use backups::{
    CreateBackupTool, DeleteBackupTool, ListBackupPlansTool, ListBackupsTool, OrderBackupPlanTool,
    RestoreBackupTool,
};
pub use billing::{GetRenewalOptionsTool, RenewServiceTool, SetAutoRenewTool};
pub use common::Payment;
pub use history::{ListActivityTool, ListInvoicesTool, ListPaymentsTool};
pub use keys::{
    AddSshKeyTool, CreateApiKeyTool, DeleteApiKeyTool, DeleteSshKeyTool, GetSshKeyTool,
    ListApiKeysTool, ListSshKeysTool,
};
pub use order::{
    CalculateOrderPriceTool, GetPlanTool, ListPlanResourcesTool, ListPlansTool, OrderServiceTool,
};
pub use os::{ListOsTemplatesTool, ReinstallOsTool};
pub use plans::{ChangePlanTool, GetPlanChangePriceTool, ListUpgradePlansTool};
pub use public::{ListLocationsTool, ListOperatingSystemsTool, ListPaymentMethodsTool};
pub use services::{
    CancelServiceTool, GetServiceStatusTool, GetServiceTool, ListServicesTool, RestartServiceTool,
    StartServiceTool, StopServiceTool,
};
pub use settings::{
    ChangeHostnameTool, ChangeRootPasswordTool, GetServiceSettingsTool, GetServiceStatisticsTool,
    ListServiceIpsTool, ServiceFeature, SetReverseDnsTool, ToggleServiceFeatureTool,
};
