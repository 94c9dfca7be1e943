//! Tests for the non-interactive scenario runner.

use av_agent::CarSpec;
use av_cli::run_scenario;
use av_core::{Field, Heading, Position};

fn spec(name: &str, x: i32, y: i32, heading: Heading, script: &str) -> CarSpec {
    CarSpec::new(
        name,
        Position::new(x, y),
        heading,
        script.parse().expect("test script parses"),
    )
}

#[test]
fn clean_run_prints_only_the_results_block() {
    let field = Field::new(10, 10).unwrap();
    let specs = vec![
        spec("CarA", 1, 2, Heading::North, "FFRFFFFRRL"),
        spec("CarB", 0, 0, Heading::East, "FF"),
    ];

    let mut output = Vec::new();
    let report = run_scenario(field, specs, &mut output).unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(report.collision_free());
    assert!(!out.contains("Collision detected"));
    assert!(out.contains("After simulation, the result is:"));
    assert!(out.contains("- CarA, (5,4) S"));
    assert!(out.contains("- CarB, (2,0) E"));
}

#[test]
fn collision_prints_both_blocks() {
    let field = Field::new(5, 5).unwrap();
    let specs = vec![
        spec("CarC", 3, 3, Heading::North, "F"),
        spec("CarD", 3, 4, Heading::North, "F"),
    ];

    let mut output = Vec::new();
    let report = run_scenario(field, specs, &mut output).unwrap();
    let out = String::from_utf8(output).unwrap();

    assert_eq!(report.collisions.len(), 1);
    assert!(out.contains("Collision detected at step 1 between CarC and CarD at (3, 4)."));
    assert!(out.contains("- CarC, collides with CarD at (3,4) at step 1"));
}

#[test]
fn placement_contract_violations_fail_the_run() {
    let field = Field::new(5, 5).unwrap();
    let specs = vec![
        spec("CarA", 0, 0, Heading::North, "F"),
        spec("CarA", 1, 1, Heading::North, "F"),
    ];

    let mut output = Vec::new();
    assert!(run_scenario(field, specs, &mut output).is_err());
    assert!(output.is_empty());
}
