// switchyard/examples/basic_pipeline.rs

use switchyard::{action_fn, Outcome, Pipeline, RunContext};
use tracing::info;

#[tokio::main]
async fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Basic Pipeline Example ---");

  // 1. Define the actions. Each one receives the previous output as its input.
  let alpha = action_fn("alpha", [], |_ctx, counter: i32| async move {
    info!("Alpha executed: counter = {}", counter + 1);
    Outcome::success(counter + 1)
  });
  let beta = action_fn("beta", [], |_ctx, counter: i32| async move {
    info!("Beta executed: counter = {}", counter * 2);
    Outcome::success(counter * 2)
  });
  let gamma = action_fn("gamma", [], |_ctx, counter: i32| async move {
    info!("Gamma executed: counter = {}", counter - 1);
    Outcome::success(counter - 1)
  });

  // 2. Wire them in a straight line: alpha -> beta -> gamma on Success.
  let pipeline = Pipeline::new("basic", [&alpha, &beta, &gamma]);

  // 3. Run it.
  let outcome = pipeline.run(&RunContext::new(), 5).await;

  // 4. Inspect the outcome.
  info!(
    "Pipeline finished with direction {} and output {}",
    outcome.direction, outcome.output
  );
  assert_eq!(outcome.output, 11);
  assert!(outcome.is_success());
}
