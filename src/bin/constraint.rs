//! One trait bound, two unrelated types.
//!
//! Run with: cargo run --bin constraint

use generics_report::acquire::{get_value, sum_values, Packaged, Stored};
use generics_report::logging::init_logging;
use generics_report::ReportError;

fn main() -> Result<(), ReportError> {
    init_logging()?;

    let stored = Stored { value: 1 };
    let packaged = Packaged { content: 2 };

    // Static dispatch: `get_value::<&Stored>` and `get_value::<&Packaged>`
    println!("Stored -> {}", get_value(&stored));
    println!("Packaged -> {}", get_value(&packaged));

    let total = sum_values(&[&stored, &packaged]);
    tracing::debug!(total, "summed through dyn Acquire");

    Ok(())
}
