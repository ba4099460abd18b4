//! Which columns an export actually contains, per file format.
//!
//! The request says what the operator asked for; the event decides what was
//! collected in the first place. The spreadsheet keeps phone numbers behind
//! sensitive-data access and only shows food handling for jobs that require
//! it. The PDF lays its table out on a fixed page width instead.

use crate::field::ExportField;
use crate::format::ExportFormat;
use crate::request::ExportRequest;

/// Usable table width on an A4 page with 1.5 cm margins.
pub const PDF_TABLE_WIDTH_CM: f32 = 17.0;

/// What the event collected from its helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOptions {
    pub ask_phone: bool,
    pub ask_shirt: bool,
    pub ask_nutrition: bool,
    pub include_sensitive: bool,
}

/// Food-handling instruction status of the exported job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoodHandling {
    pub requested: bool,
    pub required_by_job: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// First and last name in one cell (PDF).
    Name,
    FirstName,
    Surname,
    Email,
    Phone,
    Shirt,
    Nutrition,
    FoodHandling,
    Comment,
    /// Empty column so a PDF table is never zero columns wide.
    Blank,
}

/// A column with its header and width. Widths are character units in the
/// spreadsheet and centimetres in the PDF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutColumn {
    pub column: Column,
    pub header: &'static str,
    pub width: f32,
}

impl LayoutColumn {
    fn new(column: Column, header: &'static str, width: f32) -> Self {
        Self {
            column,
            header,
            width,
        }
    }
}

/// Effective columns in table order.
pub fn resolve_columns(
    format: ExportFormat,
    request: &ExportRequest,
    event: &EventOptions,
    food: &FoodHandling,
) -> Vec<LayoutColumn> {
    match format {
        ExportFormat::Excel => excel_columns(request, event, food),
        ExportFormat::Pdf => pdf_columns(request, event, food),
    }
}

fn excel_columns(
    request: &ExportRequest,
    event: &EventOptions,
    food: &FoodHandling,
) -> Vec<LayoutColumn> {
    let mut columns = Vec::with_capacity(8);
    if request.get(ExportField::Name) {
        columns.push(LayoutColumn::new(Column::FirstName, "First name", 30.0));
        columns.push(LayoutColumn::new(Column::Surname, "Surname", 30.0));
    }
    if request.get(ExportField::Email) {
        columns.push(LayoutColumn::new(Column::Email, "E-Mail", 30.0));
    }
    if request.get(ExportField::Phone) && event.ask_phone && event.include_sensitive {
        columns.push(LayoutColumn::new(Column::Phone, "Mobile phone", 20.0));
    }
    if request.get(ExportField::Shirt) && event.ask_shirt {
        columns.push(LayoutColumn::new(Column::Shirt, "T-shirt", 10.0));
    }
    if request.get(ExportField::Nutrition) && event.ask_nutrition {
        columns.push(LayoutColumn::new(Column::Nutrition, "Nutrition", 13.0));
    }
    if food.requested && food.required_by_job {
        columns.push(LayoutColumn::new(Column::FoodHandling, "Food handling", 20.0));
    }
    if request.get(ExportField::Comment) {
        columns.push(LayoutColumn::new(Column::Comment, "Comment", 50.0));
    }
    columns
}

/// Fixed-width columns are placed while they fit into the page width and
/// dropped otherwise; the comment takes whatever width is left.
fn pdf_columns(
    request: &ExportRequest,
    event: &EventOptions,
    food: &FoodHandling,
) -> Vec<LayoutColumn> {
    let fixed = [
        (request.get(ExportField::Name), Column::Name, "Name", 5.0),
        (request.get(ExportField::Email), Column::Email, "E-Mail", 5.0),
        (
            request.get(ExportField::Phone) && event.ask_phone,
            Column::Phone,
            "Phone",
            3.0,
        ),
        (
            request.get(ExportField::Shirt) && event.ask_shirt,
            Column::Shirt,
            "T-shirt",
            1.5,
        ),
        (
            request.get(ExportField::Nutrition) && event.ask_nutrition,
            Column::Nutrition,
            "Nutrition",
            2.5,
        ),
        (
            food.requested,
            Column::FoodHandling,
            "Food Handling Instructions",
            4.0,
        ),
    ];

    let mut columns = Vec::with_capacity(8);
    let mut remaining = PDF_TABLE_WIDTH_CM;
    for (wanted, column, header, width) in fixed {
        if !wanted {
            continue;
        }
        if width > remaining {
            tracing::debug!(?column, width, remaining, "pdf column does not fit, dropped");
            continue;
        }
        columns.push(LayoutColumn::new(column, header, width));
        remaining -= width;
    }
    if request.get(ExportField::Comment) {
        columns.push(LayoutColumn::new(Column::Comment, "Comment", remaining));
    }
    if columns.is_empty() {
        columns.push(LayoutColumn::new(Column::Blank, "", 4.0));
    }
    columns
}
