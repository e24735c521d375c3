//! Reader and writer for the delimited road file.
//!
//! One road per line: `roadName,distance;sourceTown;destinationTown`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, warn};

use crate::core::road::Road;

/// One parsed road line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub road: String,
    pub distance: u32,
    pub source: String,
    pub destination: String,
}

/// Parse a single road line (without the trailing newline).
pub fn parse_road_line(line: &str) -> Result<RoadRecord> {
    let (road, rest) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected ',' after road name"))?;
    let (distance, towns) = rest
        .split_once(';')
        .ok_or_else(|| anyhow!("expected ';' after distance"))?;
    let (source, destination) = towns
        .split_once(';')
        .ok_or_else(|| anyhow!("expected ';' between town names"))?;

    let road = required(road, "road name")?;
    let source = required(source, "source town")?;
    let destination = required(destination, "destination town")?;
    let distance: u32 = distance
        .trim()
        .parse()
        .with_context(|| format!("invalid distance '{}'", distance.trim()))?;

    Ok(RoadRecord {
        line: 0,
        road,
        distance,
        source,
        destination,
    })
}

/// Read every road from `path`, skipping blank lines.
///
/// In strict mode the first malformed line is an error. Otherwise malformed
/// lines are logged and skipped.
pub fn read_road_file(path: &Path, strict: bool) -> Result<Vec<RoadRecord>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut records = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_road_line(raw) {
            Ok(record) => records.push(RoadRecord { line, ..record }),
            Err(err) if strict => {
                return Err(err.context(format!("{}:{}", path.display(), line)));
            }
            Err(err) => {
                warn!(path = %path.display(), line, error = %err, "skip malformed road line");
            }
        }
    }
    info!(path = %path.display(), roads = records.len(), "read road file");
    Ok(records)
}

pub fn format_road_line(road: &Road) -> String {
    format!(
        "{},{};{};{}",
        road.name(),
        road.distance(),
        road.source(),
        road.destination()
    )
}

/// Write `roads` to `path`, one line each, in the given order.
pub fn write_road_file<'a, I>(path: &Path, roads: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Road>,
{
    let mut buf = String::new();
    for road in roads {
        check_writable(road)?;
        buf.push_str(&format_road_line(road));
        buf.push('\n');
    }
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}

/// Reject roads whose fields would not read back unchanged.
fn check_writable(road: &Road) -> Result<()> {
    let fields = [
        ("road name", road.name()),
        ("source town", road.source()),
        ("destination town", road.destination()),
    ];
    for (label, value) in fields {
        if value.contains(['\n', '\r']) {
            bail!("road '{}': {} contains a line break", road.name(), label);
        }
        if value.trim() != value {
            bail!(
                "road '{}': {} has leading or trailing whitespace",
                road.name(),
                label
            );
        }
    }
    if road.name().contains(',') {
        bail!("road '{}': road name contains ','", road.name());
    }
    if road.source().contains(';') {
        bail!("road '{}': source town contains ';'", road.name());
    }
    Ok(())
}

fn required(field: &str, label: &str) -> Result<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        bail!("missing {}", label);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SAMPLE_MAP, map_fixture};

    #[test]
    fn parse_line_trims_fields() {
        let record = parse_road_line(" I-95 , 12 ; Baltimore ; Washington DC").expect("parse");
        assert_eq!(record.road, "I-95");
        assert_eq!(record.distance, 12);
        assert_eq!(record.source, "Baltimore");
        assert_eq!(record.destination, "Washington DC");
    }

    #[test]
    fn parse_line_keeps_semicolons_in_destination_tail() {
        let record = parse_road_line("R1,1;A;B;C").expect("parse");
        assert_eq!(record.destination, "B;C");
    }

    #[test]
    fn parse_line_rejects_bad_input() {
        assert!(parse_road_line("R1;5;A;B").is_err());
        assert!(parse_road_line("R1,five;A;B").is_err());
        assert!(parse_road_line("R1,-5;A;B").is_err());
        assert!(parse_road_line("R1,5;A").is_err());
        assert!(parse_road_line(",5;A;B").is_err());
        assert!(parse_road_line("R1,5; ;B").is_err());
    }

    #[test]
    fn read_file_numbers_lines_and_skips_blanks() {
        let (_temp, path) = map_fixture("R1,5;A;B\n\nR2,3;B;C\n");
        let records = read_road_file(&path, true).expect("read");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn strict_read_reports_line() {
        let (_temp, path) = map_fixture("R1,5;A;B\ngarbage\n");
        let err = read_road_file(&path, true).unwrap_err();
        assert!(format!("{:#}", err).contains(":2"));
    }

    #[test]
    fn lenient_read_skips_malformed_lines() {
        let (_temp, path) = map_fixture("R1,5;A;B\ngarbage\nR2,3;B;C\n");
        let records = read_road_file(&path, false).expect("read");
        let names: Vec<&str> = records.iter().map(|record| record.road.as_str()).collect();
        assert_eq!(names, vec!["R1", "R2"]);
    }

    fn write_single(dir: &Path, road: Road) -> Result<()> {
        write_road_file(&dir.join("out.txt"), [&road])
    }

    #[test]
    fn write_rejects_line_breaks_in_any_field() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cases = [
            Road::new("C", "D\nE", 2, "R2"),
            Road::new("C\r", "D", 2, "R2"),
            Road::new("C", "D", 2, "R\n2"),
        ];
        for road in cases {
            let err = write_single(temp.path(), road).unwrap_err();
            assert!(err.to_string().contains("line break"), "{err}");
        }
        assert!(!temp.path().join("out.txt").exists());
    }

    #[test]
    fn write_rejects_untrimmed_names() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = write_single(temp.path(), Road::new(" A", "B", 1, "R1")).unwrap_err();
        assert!(err.to_string().contains("source town"), "{err}");
        let err = write_single(temp.path(), Road::new("A", "B", 1, "R1 ")).unwrap_err();
        assert!(err.to_string().contains("road name"), "{err}");
    }

    #[test]
    fn write_rejects_delimiters_that_split_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = write_single(temp.path(), Road::new("A", "B", 1, "R,1")).unwrap_err();
        assert!(err.to_string().contains("','"), "{err}");
        let err = write_single(temp.path(), Road::new("A;X", "B", 1, "R1")).unwrap_err();
        assert!(err.to_string().contains("';'"), "{err}");
        write_single(temp.path(), Road::new("A", "B;X", 1, "R;1")).expect("tail delimiters");
        let records = read_road_file(&temp.path().join("out.txt"), true).expect("read back");
        assert_eq!(records[0].road, "R;1");
        assert_eq!(records[0].destination, "B;X");
    }

    #[test]
    fn write_then_read_preserves_roads() {
        let (temp, path) = map_fixture(SAMPLE_MAP);
        let records = read_road_file(&path, true).expect("read");
        let roads: Vec<Road> = records
            .iter()
            .map(|record| {
                Road::new(
                    record.source.as_str(),
                    record.destination.as_str(),
                    record.distance,
                    record.road.as_str(),
                )
            })
            .collect();
        let out = temp.path().join("out.txt");
        write_road_file(&out, &roads).expect("write");
        assert_eq!(fs::read_to_string(&out).expect("read back"), SAMPLE_MAP);
    }
}
