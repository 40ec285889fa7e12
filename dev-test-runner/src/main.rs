//! Fixture-driven checks over whole descriptor files.
//!
//! Every `fixtures/<name>.model.json` is translated and compared against its
//! `fixtures/<name>.schema.json` counterpart. Complements the unit tests with
//! file-level coverage of the loading + translation path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

fn main() -> Result<()> {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let mut cases: Vec<PathBuf> = std::fs::read_dir(&fixtures)
        .with_context(|| format!("failed to list {}", fixtures.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".model.json"))
        })
        .collect();
    cases.sort();

    if cases.is_empty() {
        bail!("no fixtures found in {}", fixtures.display());
    }

    let mut failures = 0usize;
    for model_path in &cases {
        let Some(file_name) = model_path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let name = file_name.trim_end_matches(".model.json");
        let expected_path = fixtures.join(format!("{name}.schema.json"));

        let model = schemacast::ModelSchema::from_file(model_path)
            .with_context(|| format!("invalid model fixture {name}"))?;
        let actual = serde_json::to_value(schemacast::translate(&model))?;

        let expected_src = std::fs::read_to_string(&expected_path)
            .with_context(|| format!("failed to read {}", expected_path.display()))?;
        let expected: serde_json::Value = serde_json::from_str(&expected_src)
            .with_context(|| format!("invalid expected fixture {name}"))?;

        if actual == expected {
            println!("ok   {name}");
        } else {
            failures += 1;
            println!("FAIL {name}");
            println!("  expected: {expected}");
            println!("  actual:   {actual}");
        }
    }

    if failures > 0 {
        bail!("{failures} fixture(s) failed");
    }
    Ok(())
}
