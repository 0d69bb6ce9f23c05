use phrase_corrector::{ConfusionMatrix, Corpus, CorrectorConfig, SpellCorrector};
use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
    process,
};

const SMOOTHING: f64 = 1.0;

fn usage() -> ! {
    eprintln!("usage: spellcheck <ngram-counts> <confusion-matrix> [test-sentences] [config.json]");
    process::exit(2);
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        usage();
    }

    for path in &args[..2] {
        if !Path::new(path).exists() {
            eprintln!("File not found: {}", path);
            process::exit(1);
        }
    }

    let corrector = match load(&args[0], &args[1], args.get(3)) {
        Ok(corrector) => corrector,
        Err(e) => {
            eprintln!("Failed to load language resources: {}", e);
            process::exit(1);
        }
    };

    match args.get(2) {
        Some(test_file) => batch(&corrector, test_file),
        None => repl(&corrector),
    }
}

fn load(
    counts: &str,
    confusion: &str,
    config: Option<&String>,
) -> phrase_corrector::Result<SpellCorrector<Corpus, ConfusionMatrix>> {
    let corpus = Corpus::from_counts_file(counts, SMOOTHING)?;
    let matrix = ConfusionMatrix::from_file(confusion)?;
    let config = match config {
        Some(path) => CorrectorConfig::from_json_file(path)?,
        None => CorrectorConfig::default(),
    };
    SpellCorrector::with_config(corpus, matrix, config)
}

fn answer(corrector: &SpellCorrector<Corpus, ConfusionMatrix>, phrase: &str) -> String {
    corrector
        .correct_phrase(phrase)
        .unwrap_or_else(|e| format!("ERROR: {}", e))
}

/// Lines are `phrase=expected` or a bare phrase; `#` starts a comment.
fn batch(corrector: &SpellCorrector<Corpus, ConfusionMatrix>, path: &str) -> io::Result<()> {
    let reader = BufReader::new(File::open(path)?);
    let (mut correct, mut tested) = (0, 0);

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((phrase, expected)) => {
                let result = answer(corrector, phrase);
                tested += 1;
                if result == expected.trim() {
                    correct += 1;
                    println!("{}/{}: {}\t->\t{}", correct, tested, phrase, result);
                } else {
                    println!("Input : {}", phrase);
                    println!("Answer: {}", result);
                    println!("Wanted: {}\n", expected.trim());
                }
            }
            None => {
                println!("Input : {}", line);
                println!("Answer: {}\n", answer(corrector, line));
            }
        }
    }

    if tested > 0 {
        println!("{} of {} sentences corrected as expected", correct, tested);
    }
    Ok(())
}

fn repl(corrector: &SpellCorrector<Corpus, ConfusionMatrix>) -> io::Result<()> {
    println!("Phrase corrector - type a sentence, :q to quit");
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let phrase = input.trim();
        if phrase == ":q" {
            break;
        }
        if phrase.is_empty() {
            continue;
        }
        println!("  {}", answer(corrector, phrase));
    }
    Ok(())
}
