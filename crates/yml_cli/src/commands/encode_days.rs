//! Encode-days command - Show the `days` attribute for a delivery range.

use anyhow::Result;
use clap::Args;

use yml_catalog::DayRange;

#[derive(Args)]
pub struct EncodeDaysArgs {
    /// First delivery day
    #[arg(allow_negative_numbers = true)]
    from: i64,

    /// Last delivery day (0 for a single day)
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    to: i64,
}

pub fn execute(args: EncodeDaysArgs) -> Result<()> {
    let range = DayRange::new(args.from, args.to);
    println!("{}", range);
    Ok(())
}
