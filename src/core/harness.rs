use crate::core::reducer;
use crate::domain::model::{CaseOutcome, Scenario, SuiteReport};
use crate::domain::ports::PairwiseAdder;
use crate::utils::error::Result;

/// Drives a scenario table through one adder strategy and collects pass/fail
/// outcomes. Failures are reported, never enforced; the caller decides what
/// to do with a failing report.
pub struct SuiteRunner<A: PairwiseAdder> {
    adder: A,
}

impl<A: PairwiseAdder> SuiteRunner<A> {
    pub fn new(adder: A) -> Self {
        Self { adder }
    }

    pub fn run(&self, scenarios: &[Scenario]) -> Result<SuiteReport> {
        let mut outcomes = Vec::with_capacity(scenarios.len());
        for (index, scenario) in scenarios.iter().enumerate() {
            let actual = reducer::add(&self.adder, scenario.operands)?;
            let passed = actual == scenario.expected;
            tracing::debug!(
                strategy = self.adder.name(),
                index,
                passed,
                %actual,
                expected = scenario.expected,
                "evaluated scenario"
            );
            outcomes.push(CaseOutcome {
                index,
                passed,
                rendered: render_case(scenario),
            });
        }
        Ok(SuiteReport {
            strategy: self.adder.name(),
            outcomes,
        })
    }
}

/// `<op1> + <op2> [+ <opN>...] = <expected>`, with absent or empty operands
/// rendered as the literal token `nil`.
fn render_case(scenario: &Scenario) -> String {
    let operands: Vec<&str> = scenario
        .operands
        .iter()
        .map(|operand| match operand {
            Some(s) if !s.is_empty() => *s,
            _ => "nil",
        })
        .collect();
    format!("{} = {}", operands.join(" + "), scenario.expected)
}
