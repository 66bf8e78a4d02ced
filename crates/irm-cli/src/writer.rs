//! CSV output of simulated paths.
//!
//! One header row (`Time` followed by one column per path), then one row per
//! grid point in chronological order.  Times are printed with the decimals of
//! the grid step (`0.35`, not `0.35000000000000003`); values keep full
//! precision.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use irm_core::Time;
use irm_methods::PathCollector;

use crate::Result;

/// Write `collector` as CSV to `writer`.
pub fn write_csv<W: Write>(collector: &PathCollector, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(collector.headers())?;

    let decimals = collector.times().get(1).map_or(MAX_DECIMALS, |dt| step_decimals(*dt));
    let mut record = Vec::with_capacity(collector.len() + 1);
    for (t, values) in collector.rows() {
        record.clear();
        record.push(format_time(t, decimals));
        record.extend(values.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

const MAX_DECIMALS: i32 = 15;

/// Decimal places in the shortest representation of `step`.
fn step_decimals(step: Time) -> i32 {
    let text = step.to_string();
    let places = text.split_once('.').map_or(0, |(_, frac)| frac.len());
    (places as i32).min(MAX_DECIMALS)
}

/// `t` rounded to `decimals` places, printed without trailing zeros.
fn format_time(t: Time, decimals: i32) -> String {
    let scale = 10f64.powi(decimals);
    ((t * scale).round() / scale).to_string()
}

/// Create (or truncate) `path` and write `collector` to it.
pub fn write_csv_file(collector: &PathCollector, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(collector, file)
}
