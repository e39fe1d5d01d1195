//! Command line front end: loads a map, runs one query and prints the result.
//!
//! ```text
//! terrain_pathfinding MAP_FILE START_X START_Y END_X END_Y [showmap]
//! ```
//!
//! Set `RUST_LOG=debug` to see search statistics on stderr.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use grid_util::point::Point;
use std::path::PathBuf;
use terrain_pathfinding::{PathFinder, DEFAULT_DIMENSION};
use tracing_subscriber::EnvFilter;

/// Find the cheapest route between two cells of a terrain map
#[derive(Parser)]
#[command(name = "terrain_pathfinding")]
#[command(version, long_about = None)]
struct Cli {
    /// Map file, one character per cell
    map_file: PathBuf,
    /// Start column
    start_x: u8,
    /// Start row
    start_y: u8,
    /// End column
    end_x: u8,
    /// End row
    end_y: u8,
    /// Pass `showmap` to print the map with the path drawn in `+`
    #[arg(value_parser = ["showmap"])]
    showmap: Option<String>,
    /// Number of map rows
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    rows: usize,
    /// Number of map columns
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    cols: usize,
}

fn check_coordinate(name: &str, value: u8, extent: usize) -> Result<()> {
    ensure!(
        (value as usize) < extent,
        "Input coordinate {name}={value} is out of range 0..={}",
        extent.saturating_sub(1)
    );
    Ok(())
}

/// Loads the map, runs the query and returns everything that goes to stdout.
fn run(cli: &Cli) -> Result<String> {
    ensure!(
        cli.map_file.is_file(),
        "Path to map file is wrong: {}",
        cli.map_file.display()
    );
    check_coordinate("start_x", cli.start_x, cli.cols)?;
    check_coordinate("start_y", cli.start_y, cli.rows)?;
    check_coordinate("end_x", cli.end_x, cli.cols)?;
    check_coordinate("end_y", cli.end_y, cli.rows)?;

    let mut finder = PathFinder::from_file(&cli.map_file, cli.rows, cli.cols)
        .with_context(|| format!("Failed to load map {}", cli.map_file.display()))?;
    let start = Point::new(cli.start_x as i32, cli.start_y as i32);
    let end = Point::new(cli.end_x as i32, cli.end_y as i32);
    finder.find_path(start, end)?;

    let mut out = format!("\n{}", finder.report());
    if cli.showmap.is_some() {
        out.push('\n');
        out.push_str(&finder.render());
    }
    Ok(out)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    print!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("terrain_pathfinding").chain(args.iter().copied()))
    }

    fn map_file(source: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    #[test]
    fn coordinates_must_lie_inside_the_map() {
        assert!(check_coordinate("start_x", 0, 3).is_ok());
        assert!(check_coordinate("start_x", 2, 3).is_ok());
        let err = check_coordinate("end_y", 3, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input coordinate end_y=3 is out of range 0..=2"
        );
        assert!(check_coordinate("start_y", 0, 0).is_err());
    }

    #[test]
    fn parses_positional_arguments() {
        let cli = parse(&["map.txt", "1", "2", "3", "4"]).unwrap();
        assert_eq!(cli.map_file, PathBuf::from("map.txt"));
        assert_eq!((cli.start_x, cli.start_y, cli.end_x, cli.end_y), (1, 2, 3, 4));
        assert!(cli.showmap.is_none());
        assert_eq!((cli.rows, cli.cols), (DEFAULT_DIMENSION, DEFAULT_DIMENSION));

        let cli = parse(&["map.txt", "0", "0", "2", "2", "showmap", "--rows", "3"]).unwrap();
        assert_eq!(cli.showmap.as_deref(), Some("showmap"));
        assert_eq!((cli.rows, cli.cols), (3, DEFAULT_DIMENSION));
    }

    #[test]
    fn rejects_unknown_trailing_word_and_large_coordinates() {
        assert!(parse(&["map.txt", "0", "0", "2", "2", "drawmap"]).is_err());
        assert!(parse(&["map.txt", "0", "0", "2", "256"]).is_err());
        assert!(parse(&["map.txt", "0", "0", "2"]).is_err());
    }

    #[test]
    fn showmap_appends_rendered_path() {
        let file = map_file("...\n.^.\n...\n");
        let path = file.path().to_str().unwrap();

        let cli = parse(&[path, "0", "0", "2", "0", "--rows", "3", "--cols", "3"]).unwrap();
        let out = run(&cli).unwrap();
        assert!(out.starts_with("\nStart position: (0, 0)\nEnd position: (2, 0)\n"));
        assert!(out.contains("Path found: true\nPath cost: 2.00000\n"));
        assert!(!out.contains('+'));

        let cli = parse(&[path, "0", "0", "2", "0", "showmap", "--rows", "3", "--cols", "3"]).unwrap();
        let out = run(&cli).unwrap();
        assert!(out.ends_with("\n+++\n.^.\n...\n"));
    }

    #[test]
    fn out_of_range_start_is_reported_before_loading() {
        let file = map_file("....");
        let path = file.path().to_str().unwrap();
        let cli = parse(&[path, "2", "0", "0", "0", "--rows", "2", "--cols", "2"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("start_x=2"));

        let cli = parse(&["/nonexistent/map.txt", "0", "0", "0", "0"]).unwrap();
        assert!(run(&cli).unwrap_err().to_string().contains("Path to map file is wrong"));
    }
}
