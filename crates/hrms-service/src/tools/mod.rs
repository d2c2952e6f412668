//! Assistant-facing tools
//!
//! Each tool has a name, a description, a JSON parameter schema and an async
//! `execute`. Arguments are deserialized into typed DTOs and validated before
//! anything reaches upstream.

pub mod hr;
pub mod pairing;
pub mod registry;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use validator::{Validate, ValidationErrors};

use crate::dto::ToolResult;
use crate::services::{ServiceContext, ServiceError, ServiceResult};

pub use hr::{EndpointTool, UpstreamCall};
pub use pairing::{GetConnectionLinkTool, LinkAccountWithCodeTool};
pub use registry::ToolRegistry;

/// A capability the assistant can invoke by name
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the arguments object
    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "required": [] })
    }

    /// Run the tool on behalf of `session_id`
    async fn execute(
        &self,
        ctx: &ServiceContext,
        session_id: &str,
        args: Value,
    ) -> ServiceResult<ToolResult>;
}

/// Deserialize and validate tool arguments. `null` is read as `{}`.
pub fn parse_args<A>(args: Value) -> ServiceResult<A>
where
    A: DeserializeOwned + Validate,
{
    let args = if args.is_null() { json!({}) } else { args };
    let parsed: A = serde_json::from_value(args)
        .map_err(|e| ServiceError::validation(format!("invalid arguments: {e}")))?;
    parsed
        .validate()
        .map_err(|e| ServiceError::validation(describe(&e)))?;
    Ok(parsed)
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|err| err.message.as_ref().map(ToString::to_string))
        .collect();
    if messages.is_empty() {
        return errors.to_string();
    }
    messages.sort();
    messages.join("; ")
}
