//! Terminal front-end: one-shot conversions and the interactive session.
//! The only code that writes to stdout/stderr lives under this module and
//! `main.rs`.

pub mod print;
pub mod tui;

use crate::args::ConversionRequest;
use zont::convert;
use zont::error::Result;
use zont::parse;
use zont::zones;

/// One-shot conversion: parse, resolve, convert, print.
pub fn run_conversion(request: &ConversionRequest) -> Result<()> {
    let spec = parse::parse_time(&request.time)?;
    let from = zones::resolve(&request.from)?;
    let to = zones::resolve(&request.to)?;
    let conversion = convert::convert(spec, from, to)?;
    print::print_conversion(&conversion);
    Ok(())
}
