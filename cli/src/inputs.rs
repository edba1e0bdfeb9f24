use anyhow::{Context, Result};
use availability_lib::DateRange;
use clap::ArgMatches;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Build a range from two positional arguments
pub fn range_arg(args: &ArgMatches, start: &str, end: &str) -> Result<DateRange> {
    let start_text = args
        .get_one::<String>(start)
        .with_context(|| format!("missing {start}"))?;
    let end_text = args
        .get_one::<String>(end)
        .with_context(|| format!("missing {end}"))?;
    DateRange::parse(start_text, end_text)
        .with_context(|| format!("invalid range {start} {end}"))
}

/// Read a JSON list of ranges, like
///    `[{"startDate": "2024-01-01", "endDate": "2024-01-10"}]`
/// Entries with missing or malformed dates are kept, as invalid ranges.
pub fn read_ranges(path: &Path) -> Result<Vec<DateRange>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse ranges in {}", path.display()))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_ranges() {
        let path = std::env::temp_dir().join(format!(
            "avail-read-ranges-{}.json",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(
            br#"[
                {"startDate": "2024-01-01", "endDate": "2024-01-10"},
                {"startDate": "oops", "endDate": "2024-02-10"}
            ]"#,
        )
        .unwrap();
        drop(file);

        let ranges = read_ranges(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            ranges,
            vec![
                DateRange::parse("2024-01-01", "2024-01-10").unwrap(),
                DateRange::from_fields(None, Some("2024-02-10")),
            ]
        );

        assert!(read_ranges(Path::new("/nonexistent/ranges.json")).is_err());
    }
}
