//! Formatting a list by element type without inspecting types at runtime.
//!
//! Run with: cargo run --bin overload

use generics_report::describe::list_to_string;
use generics_report::logging::init_logging;
use generics_report::ReportError;

fn main() -> Result<(), ReportError> {
    init_logging()?;

    println!("{}", list_to_string(&[1, 2, 3]));
    println!("{}", list_to_string(&["a", "b", "c"]));

    Ok(())
}
