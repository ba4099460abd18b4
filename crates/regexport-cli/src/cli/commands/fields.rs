//! `regexport fields` – list export fields.

use regexport_core::ExportField;

pub fn run_fields() {
    for field in ExportField::ALL {
        println!("{:<10} {}", field.param_name(), field.checkbox_id());
    }
}
