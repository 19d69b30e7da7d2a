//! Report section plans
//!
//! A plan maps the top-level keys of an extraction result to document
//! sections. The walk consults the plan for headings and layout; everything
//! below a section is rendered generically, so schema additions inside a
//! section need no renderer change.

use cct_domain::AnalysisKind;

/// How a section's subtree is laid out in the document
#[derive(Debug, Clone, Copy)]
pub enum SectionLayout {
    /// Object rendered as bold-label/value lines, recursing into nested
    /// objects and lists
    Fields,

    /// Array of uniform records rendered as a bordered table with the given
    /// (record key, column header) pairs
    Table(&'static [(&'static str, &'static str)]),

    /// Object of named sub-objects, each under its own subheading; a group
    /// whose gate key holds `false` is omitted entirely
    Groups {
        /// Boolean key that must not be `false` for the group to appear
        gate: Option<&'static str>,
    },
}

/// One top-level section of a report
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// JSON key holding the section subtree
    pub key: &'static str,
    /// Heading shown in the document
    pub heading: &'static str,
    /// Subtree layout
    pub layout: SectionLayout,
}

/// Title and ordered sections for one analysis kind
#[derive(Debug, Clone, Copy)]
pub struct ReportPlan {
    /// Document title
    pub title: &'static str,
    /// Sections in render order
    pub sections: &'static [Section],
}

/// The report plan for an analysis kind
pub fn plan_for(kind: AnalysisKind) -> &'static ReportPlan {
    match kind {
        AnalysisKind::Payroll => &PAYROLL_PLAN,
        AnalysisKind::AccountingInterface => &ACCOUNTING_INTERFACE_PLAN,
    }
}

static PAYROLL_PLAN: ReportPlan = ReportPlan {
    title: "Support Document - Collective Agreement Payroll Analysis",
    sections: &[
        Section {
            key: "document_identification",
            heading: "Document Identification",
            layout: SectionLayout::Fields,
        },
        Section {
            key: "salary_floors",
            heading: "Salary Floors",
            layout: SectionLayout::Table(&[
                ("job_title", "Job Title"),
                ("floor_amount", "Floor Amount"),
            ]),
        },
        Section {
            key: "salary_adjustment",
            heading: "Salary Adjustment",
            layout: SectionLayout::Fields,
        },
        Section {
            key: "benefits",
            heading: "Benefits",
            layout: SectionLayout::Groups {
                gate: Some("granted"),
            },
        },
        Section {
            key: "pay_supplements",
            heading: "Pay Supplements",
            layout: SectionLayout::Groups { gate: None },
        },
        Section {
            key: "working_hours",
            heading: "Working Hours",
            layout: SectionLayout::Groups { gate: None },
        },
        Section {
            key: "job_stability",
            heading: "Job Stability",
            layout: SectionLayout::Groups { gate: None },
        },
        Section {
            key: "termination",
            heading: "Termination Rules",
            layout: SectionLayout::Fields,
        },
    ],
};

static ACCOUNTING_INTERFACE_PLAN: ReportPlan = ReportPlan {
    title: "Support Document - Accounting Interface Analysis",
    sections: &[
        Section {
            key: "layout_specification",
            heading: "Layout Specification",
            layout: SectionLayout::Fields,
        },
        Section {
            key: "posting_concepts",
            heading: "Posting Concepts",
            layout: SectionLayout::Fields,
        },
        Section {
            key: "account_configuration",
            heading: "Ledger Account Configuration",
            layout: SectionLayout::Fields,
        },
        Section {
            key: "cost_allocation",
            heading: "Cost Allocation",
            layout: SectionLayout::Fields,
        },
    ],
};
