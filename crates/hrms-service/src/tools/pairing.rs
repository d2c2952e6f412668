//! Pairing tools: hand out the connect link, then redeem the Sync Code

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::dto::{LinkAccountArgs, ToolResult};
use crate::services::{PairingService, ServiceContext, ServiceResult};

use super::{parse_args, Tool};

pub const LINKED_MESSAGE: &str =
    "Account successfully linked. I can now assist you with your HR data.";

/// Points the user at the connect page
pub struct GetConnectionLinkTool;

#[async_trait]
impl Tool for GetConnectionLinkTool {
    fn name(&self) -> &str {
        "get_connection_link"
    }

    fn description(&self) -> &str {
        "Provides a link to securely link your account with this assistant."
    }

    async fn execute(
        &self,
        ctx: &ServiceContext,
        _session_id: &str,
        _args: Value,
    ) -> ServiceResult<ToolResult> {
        let link = PairingService::new(ctx).connection_link();
        Ok(ToolResult::text(format!(
            "To access your HRMS data, visit this link and log in: {link}\n\
             After you get your 6-digit 'Sync Code', tell it to me."
        )))
    }
}

/// Redeems a Sync Code into the caller's session
pub struct LinkAccountWithCodeTool;

#[async_trait]
impl Tool for LinkAccountWithCodeTool {
    fn name(&self) -> &str {
        "link_account_with_code"
    }

    fn description(&self) -> &str {
        "Finish the connection process using the 6-digit sync code."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "sync_code": { "type": "string", "description": "The 6-digit Sync Code shown after login." }
            },
            "required": ["sync_code"]
        })
    }

    async fn execute(
        &self,
        ctx: &ServiceContext,
        session_id: &str,
        args: Value,
    ) -> ServiceResult<ToolResult> {
        let args: LinkAccountArgs = parse_args(args)?;
        PairingService::new(ctx)
            .redeem(&args.sync_code, session_id)
            .await?;
        Ok(ToolResult::text(LINKED_MESSAGE))
    }
}
