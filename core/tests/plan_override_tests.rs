// tests/plan_override_tests.rs
mod common;

use common::*;
use switchyard::{ActionPlan, Direction, Pipeline, Route, SwitchyardError};

fn three_steps(log: &VisitLog) -> (Pipeline<String>, [switchyard::ActionRef<String>; 3]) {
  let a = signal_step("a", vec![retry()], Direction::SUCCESS, log);
  let b = signal_step("b", vec![retry()], Direction::SUCCESS, log);
  let c = append_step("c", "C", log);
  let pipeline = Pipeline::new("override", [&a, &b, &c]);
  (pipeline, [a, b, c])
}

#[test]
fn test_none_plan_terminates_every_direction() {
  let log = VisitLog::new();
  let (mut pipeline, [a, _b, _c]) = three_steps(&log);

  pipeline.set_run_plan(&a, None);

  let plan = pipeline.plan_for(&a).expect("a is a member");
  assert_eq!(plan.len(), 4);
  assert!(plan.iter().all(|(_, route)| route.is_terminate()));
}

#[test]
fn test_partial_plan_is_filled_and_replaces_previous_plan() {
  let log = VisitLog::new();
  let (mut pipeline, [a, b, c]) = three_steps(&log);

  pipeline.set_run_plan(&b, Some(ActionPlan::new().route(retry(), &a).route(Direction::SUCCESS, &c)));
  // The second override replaces the first wholesale: `retry` is not carried over.
  pipeline.set_run_plan(&b, Some(ActionPlan::new().route(Direction::ERROR, &a)));

  let plan = pipeline.plan_for(&b).expect("b is a member");
  assert_eq!(plan.get(&Direction::ERROR), Some(&Route::from(&a)));
  assert_eq!(plan.get(&retry()), Some(&Route::Terminate));
  assert_eq!(plan.get(&Direction::SUCCESS), Some(&Route::Terminate));
  assert_eq!(plan.get(&Direction::ABORT), Some(&Route::Terminate));
}

#[test]
fn test_plan_for_terminate_is_rejected() {
  let log = VisitLog::new();
  let (mut pipeline, _) = three_steps(&log);
  let result = pipeline.try_set_run_plan(Route::Terminate, None);
  assert_eq!(result, Err(SwitchyardError::PlanForTerminate));
}

#[test]
fn test_plan_for_non_member_is_rejected() {
  let log = VisitLog::new();
  let (mut pipeline, _) = three_steps(&log);
  let stranger = append_step("stranger", "S", &log);
  let result = pipeline.try_set_run_plan(&stranger, None);
  assert_eq!(
    result,
    Err(SwitchyardError::NotMember {
      pipeline: "override".to_string(),
      action: "stranger".to_string()
    })
  );
}

#[test]
fn test_self_loop_is_rejected_and_table_unchanged() {
  let log = VisitLog::new();
  let (mut pipeline, [a, b, _c]) = three_steps(&log);
  let before = pipeline.plan_for(&b).cloned();

  let result = pipeline.try_set_run_plan(&b, Some(ActionPlan::new().route(retry(), &b)));

  assert_eq!(
    result,
    Err(SwitchyardError::SelfLoop {
      action: "b".to_string(),
      direction: "retry".to_string()
    })
  );
  assert_eq!(pipeline.plan_for(&b).cloned(), before);
  assert_eq!(
    pipeline.plan_for(&a).and_then(|plan| plan.get(&Direction::SUCCESS)),
    Some(&Route::from(&b))
  );
}

#[test]
fn test_non_member_target_is_rejected_and_table_unchanged() {
  let log = VisitLog::new();
  let (mut pipeline, [a, _b, _c]) = three_steps(&log);
  let stranger = append_step("stranger", "S", &log);
  let before = pipeline.plan_for(&a).cloned();

  let result = pipeline.try_set_run_plan(&a, Some(ActionPlan::new().route(Direction::ERROR, &stranger)));

  assert_eq!(
    result,
    Err(SwitchyardError::NonMemberTarget {
      action: "a".to_string(),
      direction: "Error".to_string(),
      target: "stranger".to_string()
    })
  );
  assert_eq!(pipeline.plan_for(&a).cloned(), before);
}

#[test]
fn test_undeclared_direction_is_rejected_and_table_unchanged() {
  let log = VisitLog::new();
  let (mut pipeline, [_a, b, c]) = three_steps(&log);
  let before = pipeline.plan_for(&c).cloned();

  // `c` only declares the reserved directions.
  let result = pipeline.try_set_run_plan(&c, Some(ActionPlan::new().route(retry(), &b)));

  assert_eq!(
    result,
    Err(SwitchyardError::UndeclaredDirection {
      action: "c".to_string(),
      direction: "retry".to_string()
    })
  );
  assert_eq!(pipeline.plan_for(&c).cloned(), before);
}

#[test]
fn test_reserved_directions_are_always_routable() {
  let log = VisitLog::new();
  let a = append_step("a", "A", &log);
  let b = append_step("b", "B", &log);
  let mut pipeline = Pipeline::new("reserved", [&a, &b]);

  let result = pipeline.try_set_run_plan(
    &b,
    Some(
      ActionPlan::new()
        .route(Direction::SUCCESS, &a)
        .route(Direction::ERROR, &a)
        .route(Direction::ABORT, &a),
    ),
  );
  assert!(result.is_ok());
}

#[test]
fn test_undeclared_direction_routed_to_terminate_is_allowed() {
  let log = VisitLog::new();
  let (mut pipeline, [_a, _b, c]) = three_steps(&log);
  let result = pipeline.try_set_run_plan(&c, Some(ActionPlan::new().terminate("skip")));
  assert!(result.is_ok());
  assert_eq!(
    pipeline.plan_for(&c).and_then(|plan| plan.get(&Direction::custom("skip"))),
    Some(&Route::Terminate)
  );
}

#[test]
#[should_panic(expected = "switchyard setup error: plan from 'b' directing 'retry' loops back to itself")]
fn test_set_run_plan_panics_on_self_loop() {
  let log = VisitLog::new();
  let (mut pipeline, [_a, b, _c]) = three_steps(&log);
  pipeline.set_run_plan(&b, Some(ActionPlan::new().route(retry(), &b)));
}
