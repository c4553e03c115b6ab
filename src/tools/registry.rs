use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::{ResearchTool, ReviewDigestTool, ReviewsTool, SearchTool, Tool, VenueTool};
use crate::TravelBlogError;
use crate::envelope::Envelope;
use crate::models::VenueKind;
use crate::providers::TravelProvider;

/// The researcher's tool set, addressable by name
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tool backed by `provider`
    pub fn for_provider(provider: Arc<dyn TravelProvider>) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(SearchTool::new(provider.clone())));
        for kind in VenueKind::ALL {
            registry.register(Arc::new(VenueTool::new(provider.clone(), kind)));
        }
        registry.register(Arc::new(ReviewsTool::new(provider.clone())));
        registry.register(Arc::new(ResearchTool::new(provider.clone())));
        for kind in VenueKind::ALL {
            registry.register(Arc::new(ReviewDigestTool::new(provider.clone(), kind.into())));
        }

        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name();
        info!(tool = %name, "Registering tool");
        self.tools.insert(name, tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Name, description and argument schema of every tool, for the agent layer
    pub fn descriptors(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "parameters": tool.parameters(),
                })
            })
            .collect()
    }

    /// Call a tool by name. Unknown names yield a failure envelope.
    #[tracing::instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Value) -> Envelope<Value> {
        let Some(tool) = self.get(name) else {
            return Envelope::failure(&TravelBlogError::invalid_input(format!(
                "Unknown tool: {name}"
            )));
        };

        let start = Instant::now();
        let envelope = tool.call(arguments).await;
        debug!(
            success = envelope.is_success(),
            "Tool finished in {:.3}s",
            start.elapsed().as_secs_f64()
        );
        envelope
    }
}
