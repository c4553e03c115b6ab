//! Sequential researcher → writer → editor pipeline
//!
//! The writer and editor roles live in the external agent framework; they plug in
//! through [`Stage`]. This crate ships the researcher stage.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::envelope::Envelope;
use crate::tools::{ResearchTool, Tool, ToolRegistry};
use crate::{Result, TravelBlogError};

#[async_trait]
pub trait Stage: Send + Sync {
    /// Role name, used in logs
    fn role(&self) -> &str;

    /// Turn the previous stage's text into this stage's text
    async fn run(&self, input: String) -> Result<String>;
}

/// Stages run strictly one after another, each fed the previous output
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn roles(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.role()).collect()
    }

    /// Run every stage in order; the first failing stage stops the run
    pub async fn run(&self, input: impl Into<String>) -> Result<String> {
        let mut text = input.into();
        for stage in &self.stages {
            info!(role = stage.role(), "Starting stage");
            text = stage.run(text).await?;
            info!(role = stage.role(), "Stage produced {} characters", text.len());
        }
        Ok(text)
    }
}

/// Researcher role: runs the research tool on the destination it is given
pub struct ResearchStage {
    tool: Arc<dyn Tool>,
}

impl ResearchStage {
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self { tool }
    }

    /// Use the registry's research tool
    pub fn from_registry(registry: &ToolRegistry) -> Result<Self> {
        registry
            .get(ResearchTool::NAME)
            .map(Self::new)
            .ok_or_else(|| TravelBlogError::config("Research tool is not registered"))
    }
}

#[async_trait]
impl Stage for ResearchStage {
    fn role(&self) -> &str {
        "Travel Researcher"
    }

    /// A failed tool call degrades the report instead of failing the pipeline
    async fn run(&self, input: String) -> Result<String> {
        match self.tool.call(json!({ "query": input })).await {
            Envelope::Success(value) => Ok(value
                .as_str()
                .map_or_else(|| value.to_string(), str::to_string)),
            Envelope::Failure { error, .. } => {
                warn!("Research for {} failed: {}", input, error);
                Ok(format!("Error while searching for information: {error}"))
            }
        }
    }
}
