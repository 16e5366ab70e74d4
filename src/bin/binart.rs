//! Command line access to drawing files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use binart_paint::config::EditorConfig;
use binart_paint::file_format;
use clap::{Parser, Subcommand};
use log::{error, info};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(name = "binart")]
#[command(about = "Inspect and convert binart drawing files")]
#[command(version)]
struct Cli {
    /// Editor config (JSON); the import size limit is taken from it
    #[arg(long, env = "BINART_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the elements of a drawing as JSON
    Decode { path: PathBuf },
    /// Write a tagged RLE drawing from a plain JSON element array
    Encode { input: PathBuf, output: PathBuf },
    /// Element counts and compression ratio
    Stats { path: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Command::Decode { path } => decode(path, &config),
        Command::Encode { input, output } => encode(input, output, &config),
        Command::Stats { path } => stats(path, &config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("binart: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(EditorConfig::load(path)?),
        None => Ok(EditorConfig::default()),
    }
}

fn decode(path: &Path, config: &EditorConfig) -> CliResult {
    let contents = fs::read_to_string(path)?;
    let elements = file_format::decode_document(&contents, config.max_import_chars)?;
    println!("{}", file_format::to_json(&elements)?);
    Ok(())
}

fn encode(input: &Path, output: &Path, config: &EditorConfig) -> CliResult {
    let json = fs::read_to_string(input)?;
    if json.chars().count() > config.max_import_chars {
        return Err(format!("{} exceeds {} characters", input.display(), config.max_import_chars).into());
    }
    let elements = file_format::from_json(&json)?;
    let document = file_format::encode_document(&elements)?;
    fs::write(output, &document)?;
    info!("Wrote {} elements to {}", elements.len(), output.display());
    Ok(())
}

fn stats(path: &Path, config: &EditorConfig) -> CliResult {
    let contents = fs::read_to_string(path)?;
    let elements = file_format::decode_document(&contents, config.max_import_chars)?;

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for element in &elements {
        *counts.entry(element.element_type()).or_default() += 1;
    }

    let json_len = file_format::to_json(&elements)?.len();
    println!("elements: {}", elements.len());
    for (kind, count) in &counts {
        println!("  {kind}: {count}");
    }
    println!("file size: {} bytes", contents.len());
    println!("json size: {json_len} bytes");
    if json_len > 0 {
        println!("ratio: {:.2}", contents.len() as f64 / json_len as f64);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["binart", "encode", "in.json", "out.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Encode { ref input, ref output }
                if input == Path::new("in.json") && output == Path::new("out.txt")
        ));

        let cli = Cli::try_parse_from(["binart", "--config", "editor.json", "stats", "a.txt"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("editor.json")));
        assert!(matches!(cli.command, Command::Stats { .. }));
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["binart", "encode", "in.json"]).is_err());
        assert!(Cli::try_parse_from(["binart", "explode", "a.txt"]).is_err());
    }
}
