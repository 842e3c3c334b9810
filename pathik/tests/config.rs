//! Config-driven runs: a TOML file fully determines map and result.

mod common;

use std::io::Write;

use common::bfs_distance;
use pathik::{AgentSearch, MapGenerator, PathikConfig, TieBreak};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_file_drives_run() {
    let file = write_config(
        r#"
[world]
size = 9
density = 0.2
seed = 1234

[search]
tie_break = "oldest"
"#,
    );

    let config = PathikConfig::load(file.path()).unwrap();
    assert_eq!(config.search_config().tie_break, TieBreak::Oldest);

    let mut world = MapGenerator::from_section(&config.world).unwrap();
    assert_eq!(world.size_cells(), 9);
    let expected = bfs_distance(&world);

    let result = AgentSearch::new(&mut world, config.search_config())
        .run()
        .unwrap();
    assert_eq!(result.success.then_some(result.cost), expected);
}

#[test]
fn test_config_and_direct_generation_agree() {
    let file = write_config("[world]\nsize = 11\ndensity = 0.3\nseed = 5\n");
    let config = PathikConfig::load(file.path()).unwrap();

    let from_config = MapGenerator::from_section(&config.world).unwrap();
    let direct = MapGenerator::generate(11, 0.3, 5).unwrap();
    assert_eq!(from_config.render(None), direct.render(None));
}

#[test]
fn test_malformed_config_rejected() {
    let file = write_config("[world\nsize = ");
    assert!(PathikConfig::load(file.path()).is_err());
}
