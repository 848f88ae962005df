// lexigen-words: generate words from the whole morpheme database.
//
// Usage:
//   lexigen-words [-d DATA_PATH] [--seed N] [--count N] [--theme NAME]...
//
// Draws uniformly over every form in the store. With --theme, restricts
// prefix/root selection to morphemes whose glosses match the theme.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lexigen_en::generator::{DatabaseWordGenerator, GeneratedWord};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexigen_cli::parse_data_path(&args);
    let (seed, args) = lexigen_cli::parse_seed(&args);

    if lexigen_cli::wants_help(&args) {
        println!("lexigen-words: Generate words from the whole morpheme database.");
        println!();
        println!("Usage: lexigen-words [-d DATA_PATH] [--seed N] [--count N] [--theme NAME]...");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Enriched store file or its directory");
        println!("  --count N              Number of random words (default: 5)");
        println!("  --theme NAME           Also generate one word for this theme");
        println!("                         (repeatable)");
        println!("  --seed N               Seed the generator for reproducible output");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut count: usize = 5;
    let mut themes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--count" => {
                if i + 1 < args.len() {
                    count = args[i + 1]
                        .parse()
                        .unwrap_or_else(|_| lexigen_cli::fatal("invalid number for --count"));
                    skip_next = true;
                } else {
                    lexigen_cli::fatal("--count requires a value");
                }
            }
            "--theme" => {
                if i + 1 < args.len() {
                    themes.push(args[i + 1].clone());
                    skip_next = true;
                } else {
                    lexigen_cli::fatal("--theme requires a value");
                }
            }
            other => {
                lexigen_cli::fatal(&format!("unrecognized argument: {other}"));
            }
        }
    }

    let store = lexigen_cli::load_enhanced_store(data_path.as_deref())
        .unwrap_or_else(|e| lexigen_cli::fatal(&e));
    let generator = DatabaseWordGenerator::new(&store);

    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..u64::MAX));
    let mut rng = StdRng::seed_from_u64(seed);

    if count > 0 {
        println!("Generating {count} random words:");
        let words = generator.generate_many(count, &mut rng);
        if words.is_empty() {
            eprintln!("Warning: no valid words found within the attempt budget");
        }
        for word in &words {
            print_word(word);
        }
    }

    for theme in &themes {
        println!("\nTheme: {theme}");
        match generator.generate_themed(theme, &mut rng) {
            Ok(Some(word)) => print_word(&word),
            Ok(None) => println!("No morphemes found for theme: {theme}"),
            Err(e) => eprintln!("Warning: {e}"),
        }
    }
}

fn print_word(word: &GeneratedWord) {
    println!("\nGenerated word: {}", word.word);
    println!("Segments: {}", word.segments());
    println!("Syllables: {}", word.syllables.count);
    println!("Syllable breakdown: {}", word.breakdown().join("-"));
    if let Some(p) = &word.prefix {
        println!("Prefix meaning: {}", p.meaning.join(", "));
    }
    if let Some(r) = &word.root {
        println!("Root meaning: {}", r.meaning.join(", "));
    }
    if let Some(s) = &word.suffix {
        println!("Suffix meaning: {}", s.meaning.join(", "));
    }
}
