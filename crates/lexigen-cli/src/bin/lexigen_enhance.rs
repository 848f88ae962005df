// lexigen-enhance: run the syllable enhancement pass over a raw
// morpheme store and write the enriched store.
//
// Usage:
//   lexigen-enhance [--input FILE] [--output FILE] [--word-list FILE]
//
// Reads the raw store (default: data/morphemes.json, then
// ./morphemes.json), attaches syllable metadata to every entry, and
// writes the enriched store next to the input (default file name
// morphemes_enhanced.json). Individual entries that cannot be segmented
// are reported and carried through without metadata.

use std::path::PathBuf;

use lexigen_en::enhance::enhance;
use lexigen_en::store::MorphemeStore;
use lexigen_en::syllable::SyllableAnalyzer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexigen_cli::wants_help(&args) {
        println!("lexigen-enhance: Attach syllable metadata to a raw morpheme store.");
        println!();
        println!("Usage: lexigen-enhance [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --input FILE       Raw store (default: data/morphemes.json)");
        println!("  --output FILE      Enriched store (default: morphemes_enhanced.json");
        println!("                     next to the input file)");
        println!("  --word-list FILE   Reference word list for the segmenter");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut word_list: Option<String> = None;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--input" => {
                if i + 1 < args.len() {
                    input = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    lexigen_cli::fatal("--input requires a value");
                }
            }
            "--output" => {
                if i + 1 < args.len() {
                    output = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    lexigen_cli::fatal("--output requires a value");
                }
            }
            "--word-list" => {
                if i + 1 < args.len() {
                    word_list = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    lexigen_cli::fatal("--word-list requires a value");
                }
            }
            other => {
                lexigen_cli::fatal(&format!("unrecognized argument: {other}"));
            }
        }
    }

    println!("Syllable enhancement for morpheme stores");
    println!("========================================");

    let input_path = match input {
        Some(p) => PathBuf::from(p),
        None => {
            let default = PathBuf::from("data").join(lexigen_cli::RAW_STORE);
            if default.is_file() {
                default
            } else {
                PathBuf::from(lexigen_cli::RAW_STORE)
            }
        }
    };
    let output_path = match output {
        Some(p) => PathBuf::from(p),
        None => input_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(lexigen_cli::ENHANCED_STORE),
    };

    let raw = MorphemeStore::from_path(&input_path)
        .unwrap_or_else(|e| lexigen_cli::fatal(&e.to_string()));
    let segmenter = lexigen_cli::build_segmenter(word_list.as_deref())
        .unwrap_or_else(|e| lexigen_cli::fatal(&e));
    let analyzer = SyllableAnalyzer::new(segmenter);

    println!("\nProcessing {} entries from {}...", raw.len(), input_path.display());

    let (enriched, report) = enhance(&raw, &analyzer, |done, total| {
        if done % 100 == 0 {
            println!("Processed {done}/{total} entries...");
        }
    });

    for skipped in &report.skipped {
        eprintln!(
            "Warning: could not analyze entry '{}': {}",
            skipped.key, skipped.reason
        );
    }

    if report.processed == 0 {
        lexigen_cli::fatal("no entries could be processed");
    }

    enriched
        .save(&output_path)
        .unwrap_or_else(|e| lexigen_cli::fatal(&e.to_string()));

    println!(
        "\nSuccess! Processed {}/{} entries",
        report.processed, report.total
    );
    println!("Enhanced store written to {}", output_path.display());
}
