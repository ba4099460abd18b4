//! `regexport columns <format>` – show the effective export layout.

use anyhow::Result;
use regexport_core::columns::{resolve_columns, EventOptions, FoodHandling, LayoutColumn};
use regexport_core::format::ExportFormat;
use regexport_core::sheet::SheetNames;
use regexport_core::ExportRequest;

use super::request::snapshot;
use crate::cli::{EventArgs, SelectionArgs};

pub fn run_columns(
    format: ExportFormat,
    selection: &SelectionArgs,
    event: &EventArgs,
    jobs: &[String],
) -> Result<()> {
    let request = ExportRequest::read(snapshot(selection)?.as_ref())?;
    let columns = layout(format, &request, event);
    let unit = match format {
        ExportFormat::Excel => "chars",
        ExportFormat::Pdf => "cm",
    };
    for column in &columns {
        let header = if column.header.is_empty() {
            "(blank)"
        } else {
            column.header
        };
        println!("{:<28} {:>5} {}", header, column.width, unit);
    }

    if format == ExportFormat::Excel {
        for sheet in sheet_names(jobs) {
            println!("sheet: {sheet}");
        }
    }
    Ok(())
}

fn layout(format: ExportFormat, request: &ExportRequest, event: &EventArgs) -> Vec<LayoutColumn> {
    let options = EventOptions {
        ask_phone: event.ask_phone,
        ask_shirt: event.ask_shirt,
        ask_nutrition: event.ask_nutrition,
        include_sensitive: event.include_sensitive,
    };
    let food = FoodHandling {
        requested: event.food_handling,
        required_by_job: event.job_requires_food_handling,
    };
    resolve_columns(format, request, &options, &food)
}

fn sheet_names(jobs: &[String]) -> Vec<String> {
    let mut names = SheetNames::new();
    jobs.iter().map(|job| names.allocate(job)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regexport_core::columns::Column;
    use regexport_core::ExportField;

    fn event_args() -> EventArgs {
        EventArgs {
            ask_phone: true,
            ask_shirt: false,
            ask_nutrition: false,
            include_sensitive: false,
            food_handling: false,
            job_requires_food_handling: false,
        }
    }

    #[test]
    fn layout_maps_event_flags() {
        let mut request = ExportRequest::default();
        request.set(ExportField::Phone, true);
        let excel = layout(ExportFormat::Excel, &request, &event_args());
        assert!(excel.is_empty());
        let pdf = layout(ExportFormat::Pdf, &request, &event_args());
        assert_eq!(pdf.len(), 1);
        assert_eq!(pdf[0].column, Column::Phone);
    }

    #[test]
    fn sheet_names_are_unique() {
        let jobs = vec!["Bar".to_string(), "Bar".to_string(), "Kitchen: early".to_string()];
        assert_eq!(sheet_names(&jobs), ["Bar", "Bar2", "Kitchen early"]);
    }
}
