//! Named-assertion test runs.
//!
//! A [`TestRun`] records the outcome of every assertion step instead of
//! stopping at the first failure, then summarizes them in a [`RunReport`].
//!
//! # Example
//!
//! ```
//! use value_schema_core::{DynamicValue, SchemaNode, validate};
//! use value_schema_harness::TestRun;
//!
//! let report = TestRun::run("Specialty", |run| {
//!     let schema = SchemaNode::string().unrequired().nullable();
//!     run.assert_true("text", validate(&DynamicValue::from("x"), &schema));
//!     run.assert_equal("number", validate(&DynamicValue::from(5), &schema), false);
//! });
//! assert!(report.is_success());
//! assert_eq!(report.step_count(), 2);
//! ```

use std::fmt::Debug;

use tracing::{info, warn};

use crate::error::{HarnessError, Result};

/// Outcome of one assertion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The assertion held.
    Passed,
    /// The assertion did not hold.
    Failed {
        /// Rendered operands, when the assertion compared values.
        detail: Option<String>,
    },
}

/// One recorded assertion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Step name given to the assertion.
    pub name: String,
    /// What happened.
    pub outcome: StepOutcome,
}

/// An in-progress named test run.
#[derive(Debug)]
pub struct TestRun {
    name: String,
    steps: Vec<StepRecord>,
}

impl TestRun {
    /// Starts an empty run.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Runs `body` against a fresh run named `name` and returns its report.
    pub fn run(name: impl Into<String>, body: impl FnOnce(&mut TestRun)) -> RunReport {
        let mut run = TestRun::new(name);
        body(&mut run);
        run.finish()
    }

    /// Records whether `left == right`.
    pub fn assert_equal<T>(&mut self, step: impl Into<String>, left: T, right: T)
    where
        T: PartialEq + Debug,
    {
        if left == right {
            self.record(step.into(), StepOutcome::Passed);
        } else {
            let detail = format!("left: {left:?}, right: {right:?}");
            self.record(step.into(), StepOutcome::Failed {
                detail: Some(detail),
            });
        }
    }

    /// Records whether `condition` holds.
    pub fn assert_true(&mut self, step: impl Into<String>, condition: bool) {
        let outcome = if condition {
            StepOutcome::Passed
        } else {
            StepOutcome::Failed { detail: None }
        };
        self.record(step.into(), outcome);
    }

    fn record(&mut self, name: String, outcome: StepOutcome) {
        if let StepOutcome::Failed { detail } = &outcome {
            warn!(run = %self.name, step = %name, detail = ?detail, "test step failed");
        }
        self.steps.push(StepRecord { name, outcome });
    }

    /// Returns the steps recorded so far.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Ends the run and summarizes it.
    pub fn finish(self) -> RunReport {
        let report = RunReport {
            name: self.name,
            steps: self.steps,
        };
        if report.is_success() {
            info!(run = %report.name, steps = report.step_count(), "test run succeeded");
        } else {
            warn!(
                run = %report.name,
                failed = report.failed_steps().count(),
                steps = report.step_count(),
                "test run failed"
            );
        }
        report
    }
}

/// Summary of a finished [`TestRun`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Name of the run.
    pub name: String,
    /// Every recorded step, in assertion order.
    pub steps: Vec<StepRecord>,
}

impl RunReport {
    /// Returns `true` if no step failed.
    pub fn is_success(&self) -> bool {
        self.failed_steps().next().is_none()
    }

    /// Returns the number of recorded steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Iterates over failed steps.
    pub fn failed_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|step| step.outcome != StepOutcome::Passed)
    }

    /// Converts the report into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`StepsFailed`](HarnessError::StepsFailed) naming every failed
    /// step.
    pub fn into_result(self) -> Result<()> {
        let failed: Vec<String> = self.failed_steps().map(|step| step.name.clone()).collect();
        if failed.is_empty() {
            Ok(())
        } else {
            Err(HarnessError::StepsFailed {
                run: self.name,
                failed,
            })
        }
    }
}
