//! Minimal CLI: load descriptor(s) → (schema | fields)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::model::ModelSchema;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// translate document-model descriptors into a portable JSON-Schema view
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// translate and print the portable schema view
    Schema(SchemaOut),
    /// translate and print the flattened top-level field list
    Fields(FieldsOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /definitions/user)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FieldsOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_models(&self) -> Result<Vec<(String, ModelSchema)>> {
        let source_paths = resolve_input_paths(&self.input)?;
        let mut out = Vec::with_capacity(source_paths.len());
        for source_path in source_paths {
            let display = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read {display}"))?;
            let mut document: serde_json::Value = serde_json::from_str(&source)
                .with_context(|| format!("failed to parse JSON in {display}"))?;
            if let Some(pointer) = self.json_pointer.as_deref() {
                document = document
                    .pointer(pointer)
                    .cloned()
                    .with_context(|| {
                        format!("JSON pointer {pointer} matched nothing in {display}")
                    })?;
            }
            let model = ModelSchema::from_json_value(document)
                .with_context(|| format!("invalid model descriptor in {display}"))?;
            out.push((display, model));
        }
        Ok(out)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                let models = target.input_settings.load_models()?;
                let rendered = render_per_source(&models, |model| {
                    Ok(serde_json::to_value(crate::lower::translate(model))?)
                })?;
                write_output(target.out.as_deref(), &rendered)
            }
            Command::Fields(target) => {
                let models = target.input_settings.load_models()?;
                let rendered = render_per_source(&models, |model| {
                    Ok(serde_json::to_value(crate::lower::extract_fields(model))?)
                })?;
                write_output(target.out.as_deref(), &rendered)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// A single input renders bare; multiple inputs render as a source-keyed map.
fn render_per_source<F>(
    models: &[(String, ModelSchema)],
    mut render: F,
) -> Result<serde_json::Value>
where
    F: FnMut(&ModelSchema) -> Result<serde_json::Value>,
{
    if let [(_, model)] = models {
        return render(model);
    }
    let mut by_source = serde_json::Map::new();
    for (source, model) in models {
        by_source.insert(source.clone(), render(model)?);
    }
    Ok(serde_json::Value::Object(by_source))
}

fn write_output(out: Option<&Path>, value: &serde_json::Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn resolve_input_paths<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in
                glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))?
            {
                let path = entry
                    .with_context(|| format!("failed to read a match of glob {pattern}"))?;
                matched_any = true;
                out.push(path);
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
