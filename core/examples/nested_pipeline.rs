// switchyard/examples/nested_pipeline.rs

use switchyard::{action_fn, ActionPlan, ActionRef, Direction, Outcome, Pipeline, RunContext};
use tracing::info;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("switchyard=debug,nested_pipeline=info")),
    )
    .init();

  info!("--- Nested Pipeline Example ---");

  // Inner pipeline: normalises a document. It can branch internally, but to
  // its parent it only ever reports Success, Error or Abort.
  let trim = action_fn("trim", [], |_ctx, doc: String| async move { Outcome::success(doc.trim().to_string()) });
  let validate = action_fn("validate", [Direction::custom("empty")], |_ctx, doc: String| async move {
    if doc.is_empty() {
      Outcome::new(doc, Direction::custom("empty"))
    } else {
      Outcome::success(doc)
    }
  });
  let placeholder = action_fn("placeholder", [], |_ctx, _doc: String| async move {
    Outcome::error("<empty>".to_string(), anyhow::anyhow!("document was empty"))
  });
  let lowercase = action_fn("lowercase", [], |_ctx, doc: String| async move { Outcome::success(doc.to_lowercase()) });

  let mut normalise = Pipeline::new("normalise", [&trim, &validate, &lowercase, &placeholder]);
  normalise.set_run_plan(
    &validate,
    Some(
      ActionPlan::new()
        .route(Direction::SUCCESS, &lowercase)
        .route("empty", &placeholder),
    ),
  );
  normalise.set_run_plan(&lowercase, None);
  let normalise = ActionRef::new(normalise);

  // Outer pipeline: the nested pipeline is just another member.
  let publish = action_fn("publish", [], |ctx, doc: String| async move {
    info!("Publishing {:?} from {}", doc, ctx.run_path().unwrap_or("<root>"));
    Outcome::success(format!("published:{doc}"))
  });
  let pipeline = Pipeline::new("ingest", [&normalise, &publish]);

  let ok = pipeline.run(&RunContext::new(), "  Hello World  ".to_string()).await;
  info!("First document: {} -> {:?}", ok.direction, ok.output);

  let failed = pipeline.run(&RunContext::new(), "   ".to_string()).await;
  info!(
    "Second document: {} -> {:?} ({})",
    failed.direction,
    failed.output,
    failed.failure.as_ref().map(|err| err.to_string()).unwrap_or_default()
  );
}
