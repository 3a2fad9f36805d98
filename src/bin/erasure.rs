//! Generic parameters survive compilation: each slot knows its field type.
//!
//! Run with: cargo run --bin erasure

use colored::Colorize;
use generics_report::erasure::{NumberSlot, Slot};
use generics_report::logging::init_logging;
use generics_report::ReportError;

fn main() -> Result<(), ReportError> {
    init_logging()?;

    let mut slot = Slot::new();
    slot.set_value("abc".to_string());
    println!("{} {}", "Slot<String> field:".bold(), slot.field_type());

    let mut number_slot = NumberSlot::new();
    number_slot.set_value(123.0_f64);
    println!("{} {}", "NumberSlot<f64> field:".bold(), number_slot.field_type());

    Ok(())
}
