use anyhow::Result;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::concierge::Concierge;
use crate::models::lex::OutboundReply;

/// Set by the Lambda execution environment; its presence selects this hosting mode.
pub const RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

pub fn is_lambda_environment() -> bool {
    std::env::var_os(RUNTIME_API_VAR).is_some()
}

/// Polls the Lambda runtime API until the environment shuts down.
/// Invocations never return an error: the concierge degrades instead.
pub async fn run(concierge: Concierge) -> Result<()> {
    info!("Starting Lambda runtime loop");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let concierge = concierge.clone();
        async move {
            info!("Invocation {}", event.context.request_id);
            Ok::<OutboundReply, Error>(concierge.handle(&event.payload).await)
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {e}"))
}
