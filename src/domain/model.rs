use serde::Serialize;

/// One fixed test case: the operands fed to the reducer and the sum the
/// oracle expects. An absent operand is treated as zero by the reducer and
/// rendered as `nil` in reports.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub operands: &'static [Option<&'static str>],
    pub expected: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub index: usize,
    pub passed: bool,
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub strategy: &'static str,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// Renders the labeled section: a header line naming the strategy, then
    /// one `#<index> <ok|not ok>: ...` line per case.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("{} tests", self.strategy)];
        for outcome in &self.outcomes {
            let status = if outcome.passed { "ok" } else { "not ok" };
            lines.push(format!(
                "#{} {}: {}",
                outcome.index, status, outcome.rendered
            ));
        }
        lines.join("\n")
    }
}

/// The fixed self-test table. Every case must hold for both adder
/// strategies.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            operands: &[Some("999"), Some("999")],
            expected: "1998",
        },
        Scenario {
            operands: &[Some("999"), Some("1")],
            expected: "1000",
        },
        Scenario {
            operands: &[Some("1"), Some("999")],
            expected: "1000",
        },
        Scenario {
            operands: &[Some("0"), Some("0")],
            expected: "0",
        },
        Scenario {
            operands: &[Some(""), Some("0")],
            expected: "0",
        },
        Scenario {
            operands: &[Some(""), Some("")],
            expected: "0",
        },
        Scenario {
            operands: &[Some("999"), Some("999"), Some("45")],
            expected: "2043",
        },
        Scenario {
            operands: &[Some("55"), Some("999"), Some("999")],
            expected: "2053",
        },
    ]
}
