// switchyard/examples/branching_retry.rs

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use switchyard::{action_fn, ActionPlan, Direction, Outcome, Pipeline, RunContext};
use tracing::{info, warn};

#[derive(Debug, Default)]
struct Order {
  id: u32,
  reserved: bool,
  charged: bool,
  notes: Vec<String>,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Branching & Retry Example ---");

  let retry = Direction::custom("retry");
  let attempts = Arc::new(AtomicU32::new(0));

  let reserve = action_fn("reserve_stock", [], |_ctx, mut order: Order| async move {
    order.reserved = true;
    order.notes.push("stock reserved".to_string());
    Outcome::success(order)
  });

  // The payment gateway is flaky for the first two attempts. The retry budget
  // lives in the action itself; the engine only follows the `retry` edge.
  let charge = {
    let attempts = attempts.clone();
    let retry = retry.clone();
    action_fn("charge_card", [retry.clone()], move |_ctx, mut order: Order| {
      let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
      let retry = retry.clone();
      async move {
        match attempt {
          1 | 2 => {
            warn!("Charge attempt {} for order {} timed out", attempt, order.id);
            order.notes.push(format!("charge attempt {attempt} timed out"));
            Outcome::new(order, retry)
          }
          3 => {
            order.charged = true;
            order.notes.push("charged".to_string());
            Outcome::success(order)
          }
          _ => Outcome::error(order, anyhow::anyhow!("retry budget exhausted")),
        }
      }
    })
  };

  let release = action_fn("release_stock", [], |_ctx, mut order: Order| async move {
    order.reserved = false;
    order.notes.push("stock released".to_string());
    Outcome::success(order)
  });

  let confirm = action_fn("send_confirmation", [], |_ctx, mut order: Order| async move {
    order.notes.push("confirmation sent".to_string());
    Outcome::success(order)
  });

  let mut pipeline = Pipeline::new("checkout", [&reserve, &charge, &confirm, &release]);
  pipeline.set_run_plan(
    &charge,
    Some(
      ActionPlan::new()
        .route(retry, &reserve)
        .route(Direction::SUCCESS, &confirm)
        .route(Direction::ERROR, &release),
    ),
  );
  // Confirmation is the happy-path end; release only runs after a failed charge.
  pipeline.set_run_plan(&confirm, None);

  let outcome = pipeline.run(&RunContext::new(), Order { id: 42, ..Order::default() }).await;

  info!("Checkout finished with direction {}", outcome.direction);
  for note in &outcome.output.notes {
    info!("  - {}", note);
  }
  assert!(outcome.is_success());
  assert!(outcome.output.charged);
}
