//! Loads maze layouts and start/end scenarios stored in the
//! [Moving AI benchmark format](https://movingai.com/benchmarks/formats.html). Layouts are
//! returned as rows of `0` (open) and `1` (blocked), scenario cells as `(row, column)`.
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed scenario record: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed map header at line {line}: {content:?}")]
    Header { line: usize, content: String },
    #[error("map row {row} has {found} cells, expected {expected}")]
    Row {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map {0}")]
    UnknownMap(String),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

#[allow(unused)]
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    bucket: u32,
    file_name: String,
    w: u32,
    h: u32,
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
    distance: f64,
}

/// A start and end cell as `(row, column)` together with the optimal number of moves between
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub start: (i32, i32),
    pub end: (i32, i32),
    pub distance: f64,
}

impl From<ScenarioRecord> for Scenario {
    fn from(record: ScenarioRecord) -> Scenario {
        // x is the column, y the row
        Scenario {
            start: (record.y1 as i32, record.x1 as i32),
            end: (record.y2 as i32, record.x2 as i32),
            distance: record.distance,
        }
    }
}

fn read(path: &Path) -> Result<String, MapError> {
    fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Parses a `.map` file. `.`, `G` and `S` are passable, every other tile is blocked.
pub fn parse_map(map_str: &str) -> Result<Vec<Vec<u8>>, MapError> {
    let lines: Vec<&str> = map_str.lines().collect();
    let parse_line = |ix: usize, key: &str| -> Result<usize, MapError> {
        let header = || MapError::Header {
            line: ix + 1,
            content: lines.get(ix).unwrap_or(&"").to_string(),
        };
        let (k, v) = lines.get(ix).and_then(|l| l.split_once(' ')).ok_or_else(header)?;
        if k != key {
            return Err(header());
        }
        v.trim().parse::<usize>().map_err(|_| header())
    };
    let h = parse_line(1, "height")?;
    let w = parse_line(2, "width")?;

    let offset = 4;
    let mut rows = Vec::with_capacity(h);
    for row in 0..h {
        let tiles = lines.get(offset + row).map_or(&[][..], |l| l.as_bytes());
        if tiles.len() != w {
            return Err(MapError::Row {
                row,
                expected: w,
                found: tiles.len(),
            });
        }
        rows.push(
            tiles
                .iter()
                .map(|tile| u8::from(![b'.', b'G', b'S'].contains(tile)))
                .collect(),
        );
    }
    Ok(rows)
}

/// Parses a `.map.scen` file: a version line followed by tab-separated records.
pub fn parse_scenarios(scen_str: &str) -> Result<Vec<Scenario>, MapError> {
    // Skip the version line
    let remaining_data = scen_str.lines().skip(1).collect::<Vec<_>>().join("\n");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    csv_reader
        .deserialize::<ScenarioRecord>()
        .map(|record| -> Result<Scenario, MapError> { Ok(record?.into()) })
        .collect()
}

pub fn load_map(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>, MapError> {
    parse_map(&read(path.as_ref())?)
}

pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>, MapError> {
    parse_scenarios(&read(path.as_ref())?)
}

/// Directory holding the `maps/` and `scenarios/` shipped with this crate.
pub fn bundled_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Names of all maps under `root/maps`, relative to it and without extension,
/// e.g. `classic/maze20`.
pub fn get_map_names(root: impl AsRef<Path>) -> Result<Vec<String>, MapError> {
    let maps = root.as_ref().join("maps");
    let mut names = Vec::new();
    for entry in WalkDir::new(&maps) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "map") {
            continue;
        }
        if let Ok(rel_path) = path.with_extension("").strip_prefix(&maps) {
            let name = rel_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Loads the layout and scenarios of map `name` below `root`.
pub fn load_maze_set(
    root: impl AsRef<Path>,
    name: &str,
) -> Result<(Vec<Vec<u8>>, Vec<Scenario>), MapError> {
    let root = root.as_ref();
    if !get_map_names(root)?.iter().any(|n| n == name) {
        return Err(MapError::UnknownMap(name.to_owned()));
    }
    let rows = load_map(root.join("maps").join(format!("{name}.map")))?;
    let scenarios = load_scenarios(root.join("scenarios").join(format!("{name}.map.scen")))?;
    Ok((rows, scenarios))
}

/// Loads one of the bundled maps, see [get_map_names].
pub fn get_maze_set(name: &str) -> Result<(Vec<Vec<u8>>, Vec<Scenario>), MapError> {
    load_maze_set(bundled_root(), name)
}
