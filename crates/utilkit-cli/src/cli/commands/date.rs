//! Date command: parse a fixed-layout UTC date.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use std::io::Write;
use utilkit_core::calendar::DateLayout;

/// Print epoch milliseconds and the RFC 3339 form of `date`.
pub fn run_date(date: &str, layout: DateLayout, out: &mut dyn Write) -> Result<()> {
    let dt = layout
        .parse(date)
        .with_context(|| format!("cannot parse {date:?} as {layout:?} date"))?;
    writeln!(
        out,
        "{}  {}",
        dt.timestamp_millis(),
        dt.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_millis_and_rfc3339() {
        let mut out = Vec::new();
        run_date("20090211T180303Z", DateLayout::Compact, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1234375383000  2009-02-11T18:03:03Z\n"
        );
    }

    #[test]
    fn wrong_layout_fails() {
        let mut out = Vec::new();
        let err = run_date("20090211T180303Z", DateLayout::Extended, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("too short"));
    }
}
