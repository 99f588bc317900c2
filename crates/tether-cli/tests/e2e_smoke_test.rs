use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::tempdir;

use tether_cli::{Args, CliError, run};

/// Demo inputs live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        width: None,
        height: None,
        pretty: false,
    }
}

fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.layout.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(demo_path, &output_path)) {
            failed_demos.push((demo_path.clone(), e));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpected = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.layout.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(demo_path, &output_path)) {
            Err(CliError::Input { .. }) => {}
            other => unexpected.push((demo_path.clone(), other)),
        }
    }

    if !unexpected.is_empty() {
        eprintln!("\nError demos that did not fail with an input error:");
        for (path, result) in &unexpected {
            eprintln!("  - {}: {:?}", path.display(), result);
        }
        panic!("{} error demo(s) behaved unexpectedly", unexpected.len());
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_degraded_input_is_laid_out() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("degraded.layout.json");

    run(&args_for(&demos_dir().join("degraded.json"), &output_path)).expect("layout succeeds");

    let json = read_json(&output_path);
    let ids: Vec<&str> = json["positions"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(ids, ["X", "Z"]);

    // X -> Y is dangling; Z keeps both parallel edges and its self-loop
    let edges: Vec<&str> = json["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|edge| edge["id"].as_str().unwrap())
        .collect();
    assert_eq!(edges, ["Z-X", "Z-X", "Z-Z"]);
}

#[test]
fn e2e_output_is_deterministic() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("pipeline.json");
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    run(&args_for(&input, &first)).expect("first run succeeds");
    run(&args_for(&input, &second)).expect("second run succeeds");

    assert_eq!(
        fs::read(&first).expect("Failed to read first output"),
        fs::read(&second).expect("Failed to read second output")
    );
}

#[test]
fn e2e_canvas_overrides_bound_positions() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("small.json");

    let mut args = args_for(&demos_dir().join("pipeline.json"), &output_path);
    args.width = Some(500.0);
    args.height = Some(300.0);
    args.pretty = true;
    run(&args).expect("layout succeeds");

    let json = read_json(&output_path);
    let positions = json["positions"].as_object().unwrap();
    assert_eq!(positions.len(), 5);
    for (id, point) in positions {
        let x = point["x"].as_f64().unwrap();
        let y = point["y"].as_f64().unwrap();
        assert!(
            (80.0..=420.0).contains(&x) && (80.0..=220.0).contains(&y),
            "node {id} at ({x}, {y}) is out of bounds"
        );
    }
}

#[test]
fn e2e_config_file_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("tether.toml");
    let output_path = temp_dir.path().join("configured.json");
    fs::write(
        &config_path,
        "[layout.canvas]\nwidth = 400\nheight = 400\nmargin = 20\n",
    )
    .unwrap();

    let mut args = args_for(&demos_dir().join("pipeline.json"), &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("layout succeeds");

    let json = read_json(&output_path);
    for point in json["positions"].as_object().unwrap().values() {
        let x = point["x"].as_f64().unwrap();
        let y = point["y"].as_f64().unwrap();
        assert!((20.0..=380.0).contains(&x) && (20.0..=380.0).contains(&y));
    }
}

#[test]
fn e2e_invalid_canvas_fails_before_reading_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("never.json");

    let mut args = args_for(&temp_dir.path().join("missing.json"), &output_path);
    args.width = Some(-1.0);

    let result = run(&args);
    assert!(matches!(result, Err(CliError::Layout(_))));
    assert!(!output_path.exists());
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("missing.json"),
        &temp_dir.path().join("out.json"),
    );

    assert!(matches!(run(&args), Err(CliError::Io(_))));
}
