//! DOCX assembly

use crate::plan::{plan_for, Section, SectionLayout};
use cct_domain::AnalysisKind;
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use serde_json::{Map, Value};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

const TITLE_SIZE: usize = 36;
const HEADING_SIZE: usize = 28;
const SUBHEADING_SIZE: usize = 24;

/// Errors raised while writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Output file could not be created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// DOCX assembly or packaging failed
    #[error("DOCX error: {0}")]
    Docx(String),
}

/// Render a structured extraction result into a DOCX support document
///
/// An empty or non-object `data` value is logged and skipped without
/// creating a file; a missing section or field is skipped silently. The
/// parent directory of `output_path` must exist.
pub fn render_report(
    kind: AnalysisKind,
    data: &Value,
    output_path: &Path,
) -> Result<(), ReportError> {
    let Some(root) = data.as_object().filter(|o| !o.is_empty()) else {
        warn!(
            "Nothing to render for {}; skipping {}",
            kind,
            output_path.display()
        );
        return Ok(());
    };

    let plan = plan_for(kind);
    let mut docx = Docx::new().add_paragraph(heading(plan.title, TITLE_SIZE));

    for section in plan.sections {
        let Some(value) = root.get(section.key) else {
            continue;
        };
        docx = render_section(docx, section, value);
    }

    let file = File::create(output_path)?;
    docx.build()
        .pack(file)
        .map_err(|e| ReportError::Docx(e.to_string()))?;

    info!("Report for {} written to {}", kind, output_path.display());
    Ok(())
}

fn render_section(mut docx: Docx, section: &Section, value: &Value) -> Docx {
    match section.layout {
        SectionLayout::Fields => {
            let Some(obj) = value.as_object().filter(|o| !o.is_empty()) else {
                return docx;
            };
            docx = docx.add_paragraph(heading(section.heading, HEADING_SIZE));
            render_fields(docx, obj)
        }
        SectionLayout::Table(columns) => {
            let Some(rows) = value.as_array().filter(|r| !r.is_empty()) else {
                return docx;
            };
            docx = docx.add_paragraph(heading(section.heading, HEADING_SIZE));
            docx.add_table(record_table(columns, rows))
        }
        SectionLayout::Groups { gate } => {
            let Some(groups) = value.as_object().filter(|o| !o.is_empty()) else {
                return docx;
            };
            docx = docx.add_paragraph(heading(section.heading, HEADING_SIZE));
            for (name, group) in groups {
                let Some(fields) = group.as_object().filter(|o| !o.is_empty()) else {
                    continue;
                };
                if let Some(gate_key) = gate {
                    if fields.get(gate_key) == Some(&Value::Bool(false)) {
                        continue;
                    }
                }
                docx = docx.add_paragraph(heading(&title_case(name), SUBHEADING_SIZE));
                docx = render_fields(docx, fields);
            }
            docx
        }
    }
}

/// Bold-label/value lines for an object, recursing into nested values
fn render_fields(mut docx: Docx, obj: &Map<String, Value>) -> Docx {
    for (key, value) in obj {
        let label = title_case(key);
        match value {
            Value::Null => {}
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                docx = docx.add_paragraph(labeled_value(&label, &scalar_text(value)));
            }
            Value::Array(items) => {
                if items.is_empty() {
                    continue;
                }
                if items.iter().all(|item| !item.is_object() && !item.is_array()) {
                    docx = docx.add_paragraph(bold_line(&format!("{}:", label)));
                    for item in items {
                        docx = docx
                            .add_paragraph(plain_line(&format!("- {}", scalar_text(item))));
                    }
                } else {
                    // Uniform records: derive columns from the first record
                    let columns: Vec<(String, String)> = items
                        .iter()
                        .find_map(|item| item.as_object())
                        .map(|first| {
                            first
                                .keys()
                                .map(|k| (k.clone(), title_case(k)))
                                .collect()
                        })
                        .unwrap_or_default();
                    if columns.is_empty() {
                        continue;
                    }
                    let borrowed: Vec<(&str, &str)> = columns
                        .iter()
                        .map(|(k, h)| (k.as_str(), h.as_str()))
                        .collect();
                    docx = docx.add_paragraph(bold_line(&format!("{}:", label)));
                    docx = docx.add_table(record_table(&borrowed, items));
                }
            }
            Value::Object(nested) => {
                if nested.is_empty() {
                    continue;
                }
                docx = docx.add_paragraph(bold_line(&format!("{}:", label)));
                docx = render_fields(docx, nested);
            }
        }
    }
    docx
}

/// Bordered table with a header row, one row per record
fn record_table<K: AsRef<str>, H: AsRef<str>>(columns: &[(K, H)], rows: &[Value]) -> Table {
    let mut table_rows = Vec::with_capacity(rows.len() + 1);

    table_rows.push(TableRow::new(
        columns
            .iter()
            .map(|(_, header)| {
                TableCell::new().add_paragraph(bold_line(header.as_ref()))
            })
            .collect(),
    ));

    for row in rows {
        table_rows.push(TableRow::new(
            columns
                .iter()
                .map(|(key, _)| {
                    let cell_value = row
                        .get(key.as_ref())
                        .map(scalar_text)
                        .unwrap_or_default();
                    TableCell::new().add_paragraph(plain_line(&cell_value))
                })
                .collect(),
        ));
    }

    Table::new(table_rows)
}

fn heading(text: &str, size: usize) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold().size(size))
}

fn labeled_value(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(format!("{}: ", label)).bold())
        .add_run(Run::new().add_text(value))
}

fn bold_line(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).bold())
}

fn plain_line(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// Scalar rendering: booleans become Yes/No, composites are elided
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// "meal_voucher" → "Meal Voucher"
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payroll_sample() -> Value {
        json!({
            "document_identification": {
                "client_name": "Acme Logistics",
                "validity_period": "2025-01-01 to 2025-12-31"
            },
            "salary_floors": [
                {"job_title": "Driver", "floor_amount": 2410.55},
                {"job_title": "Warehouse Assistant", "floor_amount": 1985.0}
            ],
            "benefits": {
                "meal_voucher": {"granted": true, "amount": "R$ 35.00 per day"},
                "dental_plan": {"granted": false, "details": "none"}
            },
            "termination": {
                "union_assistance_required": "for more than 1 year of service",
                "required_documents": ["termination form", "severance statement"]
            }
        })
    }

    #[test]
    fn test_renders_a_payroll_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll.docx");

        render_report(AnalysisKind::Payroll, &payroll_sample(), &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_empty_value_skips_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");

        render_report(AnalysisKind::Payroll, &json!({}), &path).unwrap();
        assert!(!path.exists());

        render_report(AnalysisKind::Payroll, &Value::Null, &path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_extraction_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.docx");

        let data = json!({"salary_adjustment": {"percentage": "4.5%"}});
        render_report(AnalysisKind::Payroll, &data, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_accounting_report_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounting.docx");

        let data = json!({
            "layout_specification": {
                "file_format": "fixed-width TXT",
                "fields": [
                    {"field": "account", "format": "9(8)", "rule": "left-padded"}
                ]
            },
            "cost_allocation": {"allocates_costs": true}
        });
        render_report(AnalysisKind::AccountingInterface, &data, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_output_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.docx");

        let result = render_report(AnalysisKind::Payroll, &payroll_sample(), &path);
        assert!(matches!(result, Err(ReportError::Io(_))));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("meal_voucher"), "Meal Voucher");
        assert_eq!(title_case("granted"), "Granted");
        assert_eq!(title_case("twelve_by_thirty_six_shift"), "Twelve By Thirty Six Shift");
    }

    #[test]
    fn test_scalar_text_booleans() {
        assert_eq!(scalar_text(&json!(true)), "Yes");
        assert_eq!(scalar_text(&json!(false)), "No");
        assert_eq!(scalar_text(&json!(12.5)), "12.5");
        assert_eq!(scalar_text(&json!("text")), "text");
    }
}
