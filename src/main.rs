use std::io::Read;
use std::{env, fs, io, process};

use doc_similarity::{ScoreReport, SimilarityEngine};

// Reads the document batch as a JSON array of strings, either from the
// file given as the first argument or from stdin.
fn read_input() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", serde_json::json!({ "error": message }));
    process::exit(2);
}

fn main() {
    env_logger::init();

    let raw = match read_input() {
        Ok(raw) => raw,
        Err(e) => fail(&format!("could not read input: {e}")),
    };

    // The last element of the array is the query document.
    let texts: Vec<String> = match serde_json::from_str(&raw) {
        Ok(texts) => texts,
        Err(e) => fail(&format!("expected a JSON array of strings: {e}")),
    };

    let engine = SimilarityEngine::new();
    match engine.score_texts(&texts) {
        Ok(scores) => {
            let report = ScoreReport { scores };
            println!("{}", serde_json::to_string(&report).unwrap());
        }
        Err(e) => fail(&e.to_string()),
    }
}
