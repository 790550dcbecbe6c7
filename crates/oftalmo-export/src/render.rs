use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::Serialize;
use tera::{Context, Tera};

use oftalmo_core::models::attendance::{Attendance, ReferenceLink};
use oftalmo_core::models::patient::Patient;
use oftalmo_protocols::intake::{GENERAL_EXAMS, other_exams};

use crate::error::ExportError;

const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.tera");

/// Display format for dates on the printed report.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Everything the printable report shows, flattened for the template.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub patient_name: String,
    pub birth_date: String,
    /// Age on the day of the attendance, not the day of printing.
    pub age: i32,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub consultant: String,
    pub attended_on: String,
    pub score: u8,
    pub exams: Vec<String>,
    /// General exams that were not recommended, in print order.
    pub other_exams: Vec<String>,
    pub justification: String,
    pub bibliography: Vec<String>,
    pub reference_links: Vec<ReferenceLink>,
}

impl ReportContext {
    /// Assemble the report for `attendance`, reading its timestamp in `tz`.
    pub fn new(patient: &Patient, attendance: &Attendance, tz: &TimeZone) -> Self {
        let attended_on = attendance.created_at.to_zoned(tz.clone()).date();

        Self {
            patient_name: patient.name.clone(),
            birth_date: display_date(patient.birth_date),
            age: patient.age_on(attended_on),
            phone: patient.phone.clone(),
            address: patient.address.clone(),
            consultant: attendance.consultant.clone(),
            attended_on: display_date(attended_on),
            score: attendance.score,
            exams: attendance.exams.clone(),
            other_exams: other_exams(GENERAL_EXAMS, &attendance.exams)
                .into_iter()
                .map(str::to_string)
                .collect(),
            justification: attendance.justification.clone(),
            bibliography: attendance.bibliography.clone(),
            reference_links: attendance.reference_links.clone(),
        }
    }
}

/// `dd/mm/YYYY`.
pub fn display_date(date: Date) -> String {
    date.strftime(DISPLAY_DATE_FORMAT).to_string()
}

/// Render the printable HTML report.
pub fn render_report(report: &ReportContext) -> Result<String, ExportError> {
    render_with(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, report)
}

/// Render `report` through a caller-supplied template.
///
/// Names ending in `.html` get Tera's HTML autoescaping.
pub fn render_with(
    template_name: &str,
    template_content: &str,
    report: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}
