//! SSH key and API key management tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::HttpMethod;
use crate::domains::tools::{ApiTool, descriptor::ArgumentError};

use super::common::{KeyParams, NoParams};

// ============================================================================
// SSH keys
// ============================================================================

pub struct ListSshKeysTool;

impl ApiTool for ListSshKeysTool {
    const NAME: &'static str = "list_ssh_keys";
    const DESCRIPTION: &'static str = "List the SSH public keys uploaded to the account. The key id is what order_service (sshKey) and reinstall_os (ssh_key) expect.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account/ssh-keys".to_string())
    }
}

pub struct GetSshKeyTool;

impl ApiTool for GetSshKeyTool {
    const NAME: &'static str = "get_ssh_key";
    const DESCRIPTION: &'static str = "Get one uploaded SSH key with its name, fingerprint and public key.";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = KeyParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        Ok(format!("/account/ssh-keys/{}", params.key_id))
    }
}

/// Parameters for uploading an SSH key.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddSshKeyParams {
    /// Label for the key.
    pub name: String,

    /// Public key in OpenSSH format, e.g. "ssh-ed25519 AAAA... user@host".
    pub public_key: String,
}

pub struct AddSshKeyTool;

impl ApiTool for AddSshKeyTool {
    const NAME: &'static str = "add_ssh_key";
    const DESCRIPTION: &'static str = "Upload an SSH public key to the account so it can be installed on new or reinstalled servers. Never send a private key.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = AddSshKeyParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account/ssh-keys".to_string())
    }
}

pub struct DeleteSshKeyTool;

impl ApiTool for DeleteSshKeyTool {
    const NAME: &'static str = "delete_ssh_key";
    const DESCRIPTION: &'static str = "Remove an SSH key from the account. Servers that already have the key installed keep it.";
    const METHOD: HttpMethod = HttpMethod::Delete;
    type Params = KeyParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        Ok(format!("/account/ssh-keys/{}", params.key_id))
    }
}

// ============================================================================
// API keys
// ============================================================================

pub struct ListApiKeysTool;

impl ApiTool for ListApiKeysTool {
    const NAME: &'static str = "list_api_keys";
    const DESCRIPTION: &'static str = "List the API keys of the account (names, ids and creation dates; secrets are not returned).";
    const METHOD: HttpMethod = HttpMethod::Get;
    type Params = NoParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account/api-keys".to_string())
    }
}

/// Parameters for creating an API key.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateApiKeyParams {
    /// Label for the new key.
    pub name: String,
}

pub struct CreateApiKeyTool;

impl ApiTool for CreateApiKeyTool {
    const NAME: &'static str = "create_api_key";
    const DESCRIPTION: &'static str = "Create a new API key. The secret is shown only once in the response; tell the user to store it safely.";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Params = CreateApiKeyParams;

    fn path(_params: &Self::Params) -> Result<String, ArgumentError> {
        Ok("/account/api-keys".to_string())
    }
}

pub struct DeleteApiKeyTool;

impl ApiTool for DeleteApiKeyTool {
    const NAME: &'static str = "delete_api_key";
    const DESCRIPTION: &'static str = "Revoke an API key. Deleting the key this server is configured with cuts off all further tool calls.";
    const METHOD: HttpMethod = HttpMethod::Delete;
    type Params = KeyParams;

    fn path(params: &Self::Params) -> Result<String, ArgumentError> {
        Ok(format!("/account/api-keys/{}", params.key_id))
    }
}
