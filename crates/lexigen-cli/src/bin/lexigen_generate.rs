// lexigen-generate: generate one word with a given syllable count.
//
// Usage:
//   lexigen-generate [-d DATA_PATH] [--seed N] SYLLABLES
//
// SYLLABLES must be an integer between 1 and 4. On success prints the
// generated word, its syllable breakdown, and the meanings of the
// committed components.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lexigen_en::generator::{MorphemeGloss, SyllableWordGenerator};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexigen_cli::parse_data_path(&args);
    let (seed, args) = lexigen_cli::parse_seed(&args);

    if lexigen_cli::wants_help(&args) {
        println!("lexigen-generate: Generate a word with a given syllable count.");
        println!();
        println!("Usage: lexigen-generate [-d DATA_PATH] [--seed N] SYLLABLES");
        println!();
        println!("SYLLABLES is an integer between 1 and 4.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Enriched store file or its directory");
        println!("  --seed N               Seed the generator for reproducible output");
        println!("  -h, --help             Print this help");
        return;
    }

    if args.len() != 1 {
        eprintln!("Usage: lexigen-generate [-d DATA_PATH] [--seed N] SYLLABLES");
        eprintln!("Example: lexigen-generate 2");
        std::process::exit(1);
    }

    let target: usize = args[0]
        .parse()
        .unwrap_or_else(|_| lexigen_cli::fatal("syllable count must be an integer"));

    let store = lexigen_cli::load_enhanced_store(data_path.as_deref())
        .unwrap_or_else(|e| lexigen_cli::fatal(&e));
    let generator = SyllableWordGenerator::new(&store);

    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..u64::MAX));
    let mut rng = StdRng::seed_from_u64(seed);

    match generator.generate(target, &mut rng) {
        Ok(word) => {
            println!("{}", word.word);
            println!("Syllable breakdown: {}", word.breakdown().join(" + "));
            print_component("prefix", &word.prefix);
            print_component("root", &word.root);
            print_component("suffix", &word.suffix);
        }
        Err(e) => lexigen_cli::fatal(&e.to_string()),
    }
}

fn print_component(slot: &str, gloss: &Option<MorphemeGloss>) {
    if let Some(g) = gloss {
        println!("{slot}: {} ({})", g.form, g.meaning.join(", "));
    }
}
