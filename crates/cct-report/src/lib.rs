//! CCT Report Layer
//!
//! Renders a structured extraction result into a formatted DOCX support
//! document. Rendering is a recursive walk over the generic JSON tree,
//! driven by a per-kind plan of sections; absent fields are skipped
//! silently and no shape validation is performed, so a partially-filled
//! extraction still yields a useful document.
//!
//! # Examples
//!
//! ```no_run
//! use cct_domain::AnalysisKind;
//! use serde_json::json;
//! use std::path::Path;
//!
//! let data = json!({
//!     "salary_floors": [{"job_title": "Driver", "floor_amount": 2410.0}]
//! });
//! cct_report::render_report(
//!     AnalysisKind::Payroll,
//!     &data,
//!     Path::new("payroll_support.docx"),
//! ).unwrap();
//! ```

#![warn(missing_docs)]

mod plan;
mod render;

pub use plan::{plan_for, ReportPlan, Section, SectionLayout};
pub use render::{render_report, ReportError};
