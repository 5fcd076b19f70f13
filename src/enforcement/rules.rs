//! The solve-all-before-turning ordering rule.

use crate::enforcement::context::TurnContext;
use crate::enforcement::violations::ViolationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of evaluating the ordering rule for one attempt.
pub type OrderingResult = Validation<(), NonEmptyVec<ViolationError>>;

/// Check that every `after` module of the turning key is fully solved.
///
/// Every unsolved prerequisite is reported, not just the first. Passes
/// unconditionally unless the policy in `context` enables the rule.
pub fn check_ordering(context: &TurnContext<'_>) -> OrderingResult {
    if !context.policy.enforce_solve_all_before_turning {
        return Validation::success(());
    }

    let checks: Vec<OrderingResult> = context
        .dependencies
        .after
        .iter()
        .map(|module| {
            if context.fully_solved(module) {
                Validation::success(())
            } else {
                Validation::fail(ViolationError::UnsolvedPrerequisite {
                    module: module.clone(),
                    solved: context.solved_count(module),
                    solvable: context.solvable_count(module),
                })
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
