//! Fluent builder with a derived builder that adds one field.
//!
//! Run with: cargo run --bin extended_builder [-- --config demo.toml --format json]

use clap::Parser;
use generics_report::config::DemoConfig;
use generics_report::logging::init_logging;
use generics_report::render::{render, OutputFormat};
use generics_report::{Book, Product, ReportError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Builds a Product and a Book and prints them")]
struct Args {
    /// TOML file with sample values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), ReportError> {
    init_logging()?;
    let args = Args::parse();
    let config = DemoConfig::load_or_default(args.config.as_deref())?;

    let product: Product = Product::builder()
        .name(config.product.name.as_str())
        .price(config.product.price)
        .build();
    println!("{}", render(&product, args.format)?);

    let book: Book = Book::builder()
        .name(config.book.name.as_str())
        .price(config.book.price)
        .author(config.book.author.as_str())
        .build();
    println!("{}", render(&book, args.format)?);

    Ok(())
}
