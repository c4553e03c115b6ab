use async_trait::async_trait;
use serde_json::Value;
use tracing::error;

use crate::Result;
use crate::envelope::Envelope;

/// A capability exposed to the agent layer as a callable action
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of the tool (e.g., "tripadvisor_hotels")
    fn name(&self) -> String;

    /// A human-readable description of what the tool does
    fn description(&self) -> String;

    /// The JSON Schema for the tool's arguments
    fn parameters(&self) -> Value;

    /// Validate the arguments and execute the tool
    async fn run(&self, arguments: Value) -> Result<Value>;

    /// Execute the tool, folding any error into a failure envelope
    async fn call(&self, arguments: Value) -> Envelope<Value> {
        match self.run(arguments).await {
            Ok(value) => Envelope::Success(value),
            Err(err) => {
                error!(tool = %self.name(), kind = ?err.kind(), "Tool call failed: {}", err);
                Envelope::failure(&err)
            }
        }
    }
}
