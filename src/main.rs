use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use json2go::cli::{handle_error, path_mapping, Args, CliConfig, CliUtils};
use json2go::error::{GenerationErrorKind, GenerationError, GenerationResult, INVALID_JSON_SENTINEL};
use json2go::generation::{GenerationEngine, GenerationStatistics, GoStructData};
use json2go::parser::directory::find_json_files;
use json2go::parser::JsonSource;

fn main() -> Result<()> {
    let args = Args::parse();

    let cli = match CliConfig::from_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            handle_error(&e);
            std::process::exit(2);
        }
    };

    if cli.is_verbose() {
        eprintln!(
            "Generating from {} to {}",
            cli.input_description(),
            cli.output_description()
        );
    }

    let outcome = if cli.is_validate_only() {
        handle_validation(&cli)
    } else {
        handle_generation(&cli)
    };

    match outcome {
        // All inputs produced declarations
        Ok(true) => Ok(()),
        // Sentinel output was substituted for at least one input
        Ok(false) => std::process::exit(1),
        Err(e) => {
            handle_error(&e);
            std::process::exit(2);
        }
    }
}

fn handle_validation(cli: &CliConfig) -> GenerationResult<bool> {
    if cli.args.stdin {
        JsonSource::Stdin.parse()?;
        CliUtils::show_success("Valid JSON", cli.is_quiet());
        return Ok(true);
    }

    let Some(input) = &cli.args.input else {
        return Err(missing_input());
    };

    let path = PathBuf::from(input);
    if looks_like_json(input) {
        JsonSource::String(input.clone()).parse()?;
        CliUtils::show_success("Valid JSON", cli.is_quiet());
        Ok(true)
    } else if path.is_file() {
        JsonSource::File(path).parse()?;
        CliUtils::show_success("Valid JSON", cli.is_quiet());
        Ok(true)
    } else if path.is_dir() {
        validate_directory(&path, cli)
    } else {
        Err(missing_path(input))
    }
}

fn handle_generation(cli: &CliConfig) -> GenerationResult<bool> {
    let engine = GenerationEngine::new(cli.generation_config.clone());

    if cli.args.stdin {
        return generate_one(&engine, &JsonSource::Stdin, cli.args.output.as_deref(), cli);
    }

    let Some(input) = &cli.args.input else {
        return Err(missing_input());
    };

    let path = PathBuf::from(input);
    if looks_like_json(input) {
        generate_one(
            &engine,
            &JsonSource::String(input.clone()),
            cli.args.output.as_deref(),
            cli,
        )
    } else if path.is_file() {
        generate_one(
            &engine,
            &JsonSource::File(path),
            cli.args.output.as_deref(),
            cli,
        )
    } else if path.is_dir() {
        generate_directory(&engine, &path, cli)
    } else {
        Err(missing_path(input))
    }
}

/// Inline JSON is recognized the same way files are ruled out: a braced or
/// bracketed literal. Bracketed input still reaches the engine so the
/// non-object shape error surfaces as the sentinel.
fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Generate a declaration for one source and write it to the output surface.
/// Returns false when the sentinel replaced the declaration.
fn generate_one(
    engine: &GenerationEngine,
    source: &JsonSource,
    output: Option<&Path>,
    cli: &CliConfig,
) -> GenerationResult<bool> {
    match engine.generate_from_source(source) {
        Ok(data) => {
            report_collisions(&data, cli);
            write_output(&data.content, output, cli)?;

            if cli.want_stats() {
                let stats = stats_for(&data);
                if !cli.is_quiet() {
                    println!("\n{}", stats.report());
                }
            }

            Ok(true)
        }
        Err(e) if e.replaces_output() => {
            // The whole visible result is the sentinel; detail stays on stderr
            write_output(INVALID_JSON_SENTINEL, output, cli)?;
            if cli.is_verbose() {
                CliUtils::show_warning(&e.user_message(), cli.is_quiet());
            }
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn generate_directory(
    engine: &GenerationEngine,
    input_dir: &Path,
    cli: &CliConfig,
) -> GenerationResult<bool> {
    let output_dir = cli.args.output.as_deref().ok_or_else(|| {
        GenerationError::generation(GenerationErrorKind::configuration(
            "Output directory required for directory generation".to_string(),
        ))
    })?;

    std::fs::create_dir_all(output_dir).map_err(|e| io_error(e, output_dir))?;

    let json_files = find_json_files(input_dir, cli.args.recursive)
        .map_err(|e| io_error(e, input_dir))?;

    if json_files.is_empty() {
        if !cli.is_quiet() {
            println!("No JSON files found in {}", input_dir.display());
        }
        return Ok(true);
    }

    if !cli.is_quiet() {
        println!("Found {} JSON files", json_files.len());
    }

    let progress = (!cli.is_quiet() && json_files.len() > 1)
        .then(|| CliUtils::create_progress_bar(json_files.len() as u64));

    let mut all_ok = true;
    let mut totals = GenerationStatistics::new();

    for json_file in &json_files {
        let relative = json_file.strip_prefix(input_dir).unwrap_or(json_file);
        let output_file =
            path_mapping::map_input_to_output(input_dir, json_file, output_dir, "go");

        if let Some(parent) = output_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_error(e, parent))?;
        }

        match engine.generate_from_source(&JsonSource::File(json_file.clone())) {
            Ok(data) => {
                report_collisions(&data, cli);
                std::fs::write(&output_file, &data.content)
                    .map_err(|e| io_error(e, &output_file))?;
                totals.merge(&stats_for(&data));
                if let Some(pb) = &progress {
                    pb.inc(1);
                } else {
                    CliUtils::show_success(
                        &format!("{} -> {}", relative.display(), output_file.display()),
                        cli.is_quiet(),
                    );
                }
            }
            Err(e) if e.replaces_output() => {
                std::fs::write(&output_file, INVALID_JSON_SENTINEL)
                    .map_err(|err| io_error(err, &output_file))?;
                CliUtils::show_error(&format!("{}: {}", relative.display(), e.user_message()));
                all_ok = false;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                if !cli.continue_on_error() {
                    if let Some(pb) = &progress {
                        pb.abandon();
                    }
                    return Ok(false);
                }
            }
            Err(e) => {
                CliUtils::show_error(&format!("{}: {}", relative.display(), e.user_message()));
                if !cli.continue_on_error() {
                    return Err(e);
                }
                all_ok = false;
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if cli.want_stats() && !cli.is_quiet() {
        println!("\n{}", totals.report());
    }

    Ok(all_ok)
}

fn validate_directory(dir: &Path, cli: &CliConfig) -> GenerationResult<bool> {
    let json_files =
        find_json_files(dir, cli.args.recursive).map_err(|e| io_error(e, dir))?;

    let mut all_ok = true;
    for json_file in json_files {
        let relative = json_file.strip_prefix(dir).unwrap_or(&json_file);
        match JsonSource::File(json_file.clone()).parse() {
            Ok(_) => CliUtils::show_success(&relative.display().to_string(), cli.is_quiet()),
            Err(e) => {
                CliUtils::show_error(&format!("{}: {}", relative.display(), e));
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

fn report_collisions(data: &GoStructData, cli: &CliConfig) {
    if !cli.is_verbose() {
        return;
    }
    for collision in &data.metadata.collisions {
        CliUtils::show_warning(&collision.describe(), cli.is_quiet());
    }
}

fn write_output(content: &str, output: Option<&Path>, cli: &CliConfig) -> GenerationResult<()> {
    match output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| io_error(e, parent))?;
            }
            std::fs::write(output_path, content).map_err(|e| io_error(e, output_path))?;
            CliUtils::show_success(
                &format!("Generated: {}", output_path.display()),
                cli.is_quiet(),
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn stats_for(data: &GoStructData) -> GenerationStatistics {
    GenerationStatistics::for_generation(
        data.metadata.input_size,
        data.metadata.output_size,
        data.metadata.field_count,
        data.metadata.collisions.len(),
        std::time::Duration::from_millis(data.metadata.processing_time_ms),
    )
}

fn io_error(error: std::io::Error, path: &Path) -> GenerationError {
    GenerationError::generation(GenerationErrorKind::io(
        error.to_string(),
        Some(path.to_path_buf()),
    ))
}

fn missing_input() -> GenerationError {
    GenerationError::generation(GenerationErrorKind::configuration(
        "No input provided. Use --stdin or provide an input path".to_string(),
    ))
}

fn missing_path(input: &str) -> GenerationError {
    GenerationError::generation(GenerationErrorKind::io(
        format!("Input path does not exist: {}", input),
        Some(PathBuf::from(input)),
    ))
}
