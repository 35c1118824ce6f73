use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::ApiError;
use crate::model::employee::Employee;

// A4 landscape, millimetres.
const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const BOTTOM_MARGIN: f32 = 15.0;
const ROW_STEP: f32 = 6.5;

const TITLE_SIZE: f32 = 14.0;
const HEADER_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;

const TITLE_Y: f32 = 196.0;
const FIRST_PAGE_TABLE_TOP: f32 = 186.0;
const OVERFLOW_PAGE_TABLE_TOP: f32 = 196.0;

struct Column {
    label: &'static str,
    x: f32,
    max_chars: usize,
}

const COLUMNS: [Column; 9] = [
    Column { label: "ID", x: 10.0, max_chars: 6 },
    Column { label: "First Name", x: 22.0, max_chars: 15 },
    Column { label: "Last Name", x: 52.0, max_chars: 15 },
    Column { label: "Email", x: 82.0, max_chars: 31 },
    Column { label: "Department", x: 142.0, max_chars: 16 },
    Column { label: "Position", x: 174.0, max_chars: 16 },
    Column { label: "Salary", x: 206.0, max_chars: 14 },
    Column { label: "Date of Joining", x: 234.0, max_chars: 15 },
    Column { label: "Status", x: 264.0, max_chars: 10 },
];

pub fn report_filename(generated_at: DateTime<Utc>) -> String {
    format!("Employees_Report_{}.pdf", generated_at.format("%Y%m%d%H%M%S"))
}

/// Renders the full employee table into a paginated PDF.
///
/// One title line, nine bold column headers, one row per employee in the
/// order given. The header repeats on every overflow page; an empty slice
/// yields a document with title and header only.
pub fn render_employees_pdf(
    employees: &[Employee],
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ApiError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Employees Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ApiError::Report(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ApiError::Report(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    let title = format!(
        "Employees Report - Generated on {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    layer.use_text(title, TITLE_SIZE, Mm(80.0), Mm(TITLE_Y), &bold);

    let mut y = FIRST_PAGE_TABLE_TOP;
    draw_header_row(&layer, &bold, y);
    y -= ROW_STEP;

    for employee in employees {
        if y < BOTTOM_MARGIN {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = OVERFLOW_PAGE_TABLE_TOP;
            draw_header_row(&layer, &bold, y);
            y -= ROW_STEP;
        }

        draw_employee_row(&layer, &regular, y, employee);
        y -= ROW_STEP;
    }

    doc.save_to_bytes().map_err(|e| ApiError::Report(e.to_string()))
}

fn draw_header_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
    for column in &COLUMNS {
        layer.use_text(column.label, HEADER_SIZE, Mm(column.x), Mm(y), font);
    }
}

fn draw_employee_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, employee: &Employee) {
    let cells = [
        employee.id.to_string(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.email.clone(),
        employee.department.clone(),
        employee.position.clone(),
        format_currency(employee.salary),
        employee.date_of_joining.format("%Y-%m-%d").to_string(),
        employee.status.to_string(),
    ];

    for (column, cell) in COLUMNS.iter().zip(cells) {
        layer.use_text(fit(&cell, column.max_chars), BODY_SIZE, Mm(column.x), Mm(y), font);
    }
}

/// `90000.0` -> `$90,000.00`. Salaries are validated non-negative before
/// they reach the store, so no sign handling.
fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn fit(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::EmployeeStatus;
    use chrono::NaiveDate;

    fn employee(id: i64) -> Employee {
        Employee {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: format!("ada{}@example.com", id),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            salary: 90000.0,
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            phone_number: None,
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn currency_is_grouped_with_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(90000.0), "$90,000.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn overwide_cells_are_truncated() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("exactly-10", 10), "exactly-10");
        assert_eq!(fit("a-rather-long-department-name", 10), "a-rathe...");
    }

    #[test]
    fn filename_embeds_the_generation_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-06-01T12:30:45Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(report_filename(at), "Employees_Report_20240601123045.pdf");
    }

    #[test]
    fn empty_store_still_yields_a_pdf() {
        let bytes = render_employees_pdf(&[], Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_a_small_table() {
        let employees: Vec<Employee> = (1..=3).map(employee).collect();
        let bytes = render_employees_pdf(&employees, Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn large_tables_paginate() {
        // Well past one page worth of rows.
        let employees: Vec<Employee> = (1..=120).map(employee).collect();
        let bytes = render_employees_pdf(&employees, Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
