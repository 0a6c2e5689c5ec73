//! Point-set loading for the CLI.
//!
//! Accepted formats
//! - JSON: an array of `[x, y]` pairs.
//! - Text: one point per line as `x y`, `x,y` or `(x, y)`; blank lines and
//!   `#` comments are skipped.

use anyhow::{anyhow, bail, Context, Result};
use graham::Point;
use std::path::Path;

/// Fixed demo set printed when no input is given.
pub const DEMO_POINTS: [(i32, i32); 8] = [
    (0, 3),
    (1, 1),
    (2, 2),
    (4, 4),
    (0, 0),
    (1, 2),
    (3, 1),
    (3, 3),
];

pub fn demo_points() -> Vec<Point> {
    DEMO_POINTS.iter().copied().map(Point::from).collect()
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading points from {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    if text.trim_start().starts_with('[') {
        let pairs: Vec<(i32, i32)> =
            serde_json::from_str(text).context("expected a JSON array of [x, y] pairs")?;
        return Ok(pairs.into_iter().map(Point::from).collect());
    }
    let mut out = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let p = parse_line(line).with_context(|| format!("line {}: {raw:?}", lineno + 1))?;
        out.push(p);
    }
    Ok(out)
}

fn parse_line(line: &str) -> Result<Point> {
    let inner = line
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(line);
    let fields: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [x, y] = fields.as_slice() else {
        bail!("expected two coordinates, got {}", fields.len());
    };
    let x: i32 = x.parse().map_err(|e| anyhow!("bad x {x:?}: {e}"))?;
    let y: i32 = y.parse().map_err(|e| anyhow!("bad y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn text_formats_and_comments() {
        let text = "# header\n1 2\n3,4\n(5, -6)\n\n  7 ,8  # trailing\n";
        let pts = parse_points(text).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 2),
                Point::new(3, 4),
                Point::new(5, -6),
                Point::new(7, 8)
            ]
        );
    }

    #[test]
    fn json_pairs() {
        let pts = parse_points("[[0, 0], [2, -1]]").unwrap();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(2, -1)]);
    }

    #[test]
    fn malformed_lines_report_position() {
        let err = parse_points("1 2\n3\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(parse_points("1 x\n").is_err());
        assert!(parse_points("[[1, 2, 3]]").is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.txt");
        fs::write(&path, "0 0\n4 0\n0 4\n").unwrap();
        assert_eq!(read_points(&path).unwrap().len(), 3);
        assert!(read_points(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn demo_set_has_eight_points() {
        assert_eq!(demo_points().len(), 8);
    }
}
