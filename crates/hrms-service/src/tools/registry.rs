//! Tool registry
//!
//! Tools are looked up by name and listed in registration order.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::dto::{ToolDescriptor, ToolResult};
use crate::services::{ServiceContext, ServiceError, ServiceResult};

use super::hr;
use super::pairing::{GetConnectionLinkTool, LinkAccountWithCodeTool};
use super::Tool;

/// Name-indexed set of tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every HRMS tool
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GetConnectionLinkTool);
        registry.register(LinkAccountWithCodeTool);
        registry.register(hr::list_holidays());
        registry.register(hr::list_attendance());
        registry.register(hr::get_monthly_attendance());
        registry.register(hr::get_my_attendance_history());
        registry.register(hr::get_today_attendance());
        registry.register(hr::get_user_salary_info());
        registry.register(hr::create_attendance());
        registry
    }

    /// Add a tool, replacing any tool registered under the same name
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        let tool: Arc<dyn Tool> = Arc::new(tool);
        match self.index.get(&name) {
            Some(&slot) => self.tools[slot] = tool,
            None => {
                self.index.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index.get(name).map(|&slot| Arc::clone(&self.tools[slot]))
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Names, descriptions and parameter schemas of all tools
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|tool| ToolDescriptor {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    /// Invoke a tool by name
    ///
    /// Only an unknown name is an `Err`; failures inside the tool come back
    /// as a `ToolResult::Error` the assistant can act on.
    #[instrument(skip(self, ctx, args))]
    pub async fn invoke(
        &self,
        ctx: &ServiceContext,
        name: &str,
        session_id: &str,
        args: Value,
    ) -> ServiceResult<ToolResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| ServiceError::UnknownTool(name.to_string()))?;

        match tool.execute(ctx, session_id, args).await {
            Ok(result) => {
                info!("Tool completed");
                Ok(result)
            }
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "Tool failed");
                Ok(ToolResult::from(e))
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}
