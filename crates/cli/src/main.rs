//! CLI tool for converting template slides into positioned layouts.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use slide_layout_core::{LayoutExtractor, Slide, TemplateKind};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Convert template slides into freely positionable item layouts.
#[derive(Parser, Debug)]
#[command(name = "slide-layout")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON file(s), each holding a slide object or an array of slides
    #[arg(required_unless_present = "list_templates")]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Write single-line JSON instead of indented JSON
    #[arg(long)]
    compact: bool,

    /// Log every item whose box leaves the canvas
    #[arg(long)]
    report_overflow: bool,

    /// List the known template identifiers and exit
    #[arg(long)]
    list_templates: bool,

    /// Canvas background color
    #[arg(long)]
    background: Option<String>,

    /// Snapping grid size in pixels
    #[arg(long)]
    grid_size: Option<i32>,

    /// Show the grid in the editor
    #[arg(long)]
    show_grid: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.list_templates {
        for kind in TemplateKind::ALL {
            println!("{}", kind);
        }
        return Ok(());
    }

    let extractor = build_extractor(&args);
    let failed = process_inputs(&args, &extractor);
    if failed > 0 {
        log::warn!("{} of {} inputs failed", failed, args.input.len());
    }

    Ok(())
}

/// Convert every input, reporting failures and moving on to the next.
///
/// Returns the number of inputs that failed.
fn process_inputs(args: &Args, extractor: &LayoutExtractor) -> usize {
    let mut failed = 0;

    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        if let Err(e) = process_input(input_path, args, extractor) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed += 1;
        }
    }

    failed
}

/// Convert one input and print or write the result.
fn process_input(input_path: &Path, args: &Args, extractor: &LayoutExtractor) -> Result<()> {
    let output = process_file(input_path, args, extractor)?;

    if args.print {
        println!("{}", output);
    } else {
        let output_path = get_output_path(input_path, args.output.as_ref())?;
        write_output(&output_path, &output)?;
        log::info!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Map command-line flags onto extractor settings.
fn build_extractor(args: &Args) -> LayoutExtractor {
    let mut extractor = LayoutExtractor::new();
    if let Some(color) = &args.background {
        extractor = extractor.with_background_color(color.clone());
    }
    if let Some(size) = args.grid_size {
        extractor = extractor.with_grid_size(size);
    }
    if args.show_grid {
        extractor = extractor.with_show_grid(true);
    }
    extractor
}

/// Convert every slide in one input file and render the result as JSON.
fn process_file(input_path: &Path, args: &Args, extractor: &LayoutExtractor) -> Result<String> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON in {}", input_path.display()))?;

    let (slides, is_deck) = parse_slides(value)?;
    log::debug!("Found {} slides", slides.len());

    let converted = extractor.convert_deck(&slides);

    if args.report_overflow {
        report_overflow(&converted);
    }

    let output = if is_deck {
        serde_json::to_value(&converted)?
    } else {
        serde_json::to_value(&converted[0])?
    };

    let rendered = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };

    Ok(rendered)
}

/// Decode a single slide or an array of slides.
///
/// Returns the slides and whether the input was an array.
fn parse_slides(value: Value) -> Result<(Vec<Slide>, bool)> {
    match value {
        Value::Array(entries) => {
            let slides = entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    Slide::from_value(entry).with_context(|| format!("Slide {} is invalid", i + 1))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((slides, true))
        }
        other => Ok((vec![Slide::from_value(other)?], false)),
    }
}

/// Warn about every item that leaves its canvas.
fn report_overflow(slides: &[Slide]) {
    for (i, slide) in slides.iter().enumerate() {
        let (Some(items), Some(canvas)) = (&slide.items, &slide.canvas_config) else {
            continue;
        };
        for item in items.iter().filter(|item| item.overflows(canvas)) {
            log::warn!(
                "Slide {} ({}): item '{}' at ({}, {}) {}x{} leaves the {}x{} canvas",
                i + 1,
                slide.template_id,
                item.id,
                item.position.x,
                item.position.y,
                item.position.width,
                item.position.height,
                canvas.width,
                canvas.height
            );
        }
    }
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.positioned.json", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    writeln!(file, "{}", content).with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::ffi::OsStr;

    #[test]
    fn test_parse_single_slide() {
        let (slides, is_deck) =
            parse_slides(json!({"templateId": "pyramid", "props": {}})).unwrap();

        assert!(!is_deck);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].template_id, "pyramid");
    }

    #[test]
    fn test_parse_deck_reports_bad_slide() {
        let err = parse_slides(json!([
            {"templateId": "pyramid"},
            {"props": {}}
        ]))
        .unwrap_err();

        assert!(format!("{:#}", err).contains("Slide 2 is invalid"));
    }

    #[test]
    fn test_output_path_next_to_input() {
        let path = get_output_path(Path::new("decks/intro.json"), None).unwrap();
        assert_eq!(path, PathBuf::from("decks/intro.positioned.json"));
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("slide-layout-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_input(dir: &Path, name: &str, value: Value) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn test_failed_input_does_not_stop_the_rest() {
        let dir = scratch_dir("continue");
        let bad = write_input(&dir, "bad.json", json!({"props": {}}));
        let good = write_input(&dir, "good.json", json!({"templateId": "checklist"}));
        let args = Args::parse_from([
            OsStr::new("slide-layout"),
            bad.as_os_str(),
            good.as_os_str(),
        ]);

        let failed = process_inputs(&args, &build_extractor(&args));

        assert_eq!(failed, 1);
        assert!(dir.join("good.positioned.json").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unwritable_output_is_reported_per_input() {
        let dir = scratch_dir("unwritable");
        let first = write_input(&dir, "one.json", json!({"templateId": "checklist"}));
        let second = write_input(&dir, "two.json", json!({"templateId": "pyramid"}));
        // A regular file where the output directory should be.
        let blocker = write_input(&dir, "blocker", json!(null));
        let args = Args::parse_from([
            OsStr::new("slide-layout"),
            OsStr::new("--output"),
            blocker.as_os_str(),
            first.as_os_str(),
            second.as_os_str(),
        ]);

        let failed = process_inputs(&args, &build_extractor(&args));

        assert_eq!(failed, 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_extractor_flags() {
        let args = Args::parse_from([
            "slide-layout",
            "--background",
            "#000000",
            "--grid-size",
            "10",
            "deck.json",
        ]);
        let slide = Slide::from_value(json!({"templateId": "checklist"})).unwrap();
        let canvas = build_extractor(&args).extract(&slide).canvas_config;

        assert_eq!(canvas.background_color, "#000000");
        assert_eq!(canvas.grid_size, 10);
        assert!(!canvas.show_grid);
    }
}
