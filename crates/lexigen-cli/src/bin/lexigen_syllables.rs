// lexigen-syllables: show the syllable analysis of words.
//
// Reads words from the command line or stdin (one per line) and prints
// each word's syllable breakdown with character positions.
//
// Usage:
//   lexigen-syllables [--word-list FILE] [WORD...]

use std::io::{self, BufRead, Write};

use lexigen_en::syllable::SyllableAnalyzer;
use lexigen_en::tokenizer::LegalitySegmenter;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexigen_cli::wants_help(&args) {
        println!("lexigen-syllables: Show the syllable analysis of words.");
        println!();
        println!("Usage: lexigen-syllables [--word-list FILE] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --word-list FILE   Reference word list for the segmenter");
        println!("  -h, --help         Print this help");
        return;
    }

    let mut word_list: Option<String> = None;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--word-list" => {
                if i + 1 < args.len() {
                    word_list = Some(args[i + 1].clone());
                    skip_next = true;
                } else {
                    lexigen_cli::fatal("--word-list requires a value");
                }
            }
            s if !s.starts_with('-') => words.push(arg.clone()),
            other => lexigen_cli::fatal(&format!("unrecognized argument: {other}")),
        }
    }

    let segmenter = lexigen_cli::build_segmenter(word_list.as_deref())
        .unwrap_or_else(|e| lexigen_cli::fatal(&e));
    let analyzer = SyllableAnalyzer::new(segmenter);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let analyze_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match analyzer.metadata(word) {
            Ok(meta) => {
                let spans: Vec<String> = meta
                    .components
                    .iter()
                    .map(|c| format!("{} [{}, {})", c.text, c.start(), c.end()))
                    .collect();
                let _ = writeln!(out, "{word}: {} syllables: {}", meta.count, spans.join(" "));
            }
            Err(e) => {
                let _ = writeln!(out, "{word}: {e}");
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            analyze_word(word, &mut out);
        }
    } else {
        for word in &words {
            analyze_word(word, &mut out);
        }
    }
}
