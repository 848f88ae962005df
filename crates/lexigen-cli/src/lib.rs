// lexigen-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use lexigen_en::store::{MorphemeStore, StoreError};
use lexigen_en::tokenizer::{LegalitySegmenter, ReferenceLexicon};

/// Default file name of the enriched morpheme store.
pub const ENHANCED_STORE: &str = "morphemes_enhanced.json";

/// Default file name of the raw morpheme store.
pub const RAW_STORE: &str = "morphemes.json";

/// Search for the enriched morpheme store and load it.
///
/// Search order:
/// 1. `data_path` argument (a file, or a directory containing the store)
/// 2. `LEXIGEN_DATA_PATH` environment variable (same handling)
/// 3. `./data/morphemes_enhanced.json`
/// 4. `./morphemes_enhanced.json`
pub fn load_enhanced_store(data_path: Option<&str>) -> Result<MorphemeStore, String> {
    let search_paths = build_search_paths(data_path, ENHANCED_STORE);

    for path in &search_paths {
        if path.is_file() {
            return MorphemeStore::from_path(path).map_err(|e| match e {
                StoreError::Parse(e) => {
                    format!("malformed store at {}: {}", path.display(), e)
                }
                other => other.to_string(),
            });
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        ENHANCED_STORE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the candidate paths for a store file name.
fn build_search_paths(data_path: Option<&str>, file_name: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = data_path {
        push_file_or_dir(&mut paths, PathBuf::from(p), file_name);
    }

    // 2. LEXIGEN_DATA_PATH environment variable
    if let Ok(env_path) = std::env::var("LEXIGEN_DATA_PATH") {
        push_file_or_dir(&mut paths, PathBuf::from(env_path), file_name);
    }

    // 3. data/ subdirectory of the working directory
    paths.push(PathBuf::from("data").join(file_name));

    // 4. Working directory itself
    paths.push(PathBuf::from(file_name));

    paths
}

/// A path argument may name the store file directly or the directory
/// holding it; accept both.
fn push_file_or_dir(paths: &mut Vec<PathBuf>, p: PathBuf, file_name: &str) {
    if p.is_dir() {
        paths.push(p.join(file_name));
    } else {
        paths.push(p);
    }
}

/// Build the default segmenter, optionally parameterized by a word-list
/// file (one word per line).
pub fn build_segmenter(word_list: Option<&str>) -> Result<LegalitySegmenter, String> {
    match word_list {
        None => Ok(LegalitySegmenter::default()),
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read word list {path}: {e}"))?;
            let lexicon = ReferenceLexicon::from_words(contents.lines());
            Ok(LegalitySegmenter::from_lexicon(&lexicon))
        }
    }
}

/// Parse a `--data-path=PATH`, `--data-path PATH`, or `-d PATH` argument
/// from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            if i + 1 < args.len() {
                data_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Parse a `--seed N` argument. Returns `(seed, remaining_args)`.
pub fn parse_seed(args: &[String]) -> (Option<u64>, Vec<String>) {
    let mut seed = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--seed" {
            if i + 1 < args.len() {
                match args[i + 1].parse() {
                    Ok(n) => seed = Some(n),
                    Err(_) => fatal("invalid number for --seed"),
                }
                skip_next = true;
            } else {
                fatal("--seed requires a value");
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (seed, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
