//! Analysis kinds supported by the pipeline

use std::fmt;
use std::str::FromStr;

/// The specialist analyses that can be run against a document
///
/// Each kind maps to one prompt/schema pair and one rendered report. The
/// orchestrator runs the requested kinds one after another; a failure of one
/// kind never aborts the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    /// Payroll diagnostic: salary floors, adjustments, benefits,
    /// supplements, working hours, stability and termination rules
    Payroll,
    /// Accounting-interface diagnostic: posting layout, account
    /// configuration and cost-allocation rules
    AccountingInterface,
}

impl AnalysisKind {
    /// All kinds, in the order the orchestrator runs them
    pub const ALL: [AnalysisKind; 2] =
        [AnalysisKind::Payroll, AnalysisKind::AccountingInterface];

    /// Stable identifier used for file names and schema lookup
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Payroll => "payroll",
            AnalysisKind::AccountingInterface => "accounting_interface",
        }
    }

    /// Human-readable specialist label used in logs and report titles
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::Payroll => "Payroll",
            AnalysisKind::AccountingInterface => "Accounting Interface",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payroll" => Ok(AnalysisKind::Payroll),
            "accounting_interface" | "accounting-interface" => {
                Ok(AnalysisKind::AccountingInterface)
            }
            other => Err(format!("unknown analysis kind '{}'", other)),
        }
    }
}
