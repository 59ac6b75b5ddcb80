use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct ParticleData {
    particles: Vec<ParticleEntry>,
    joined_prefixes: Vec<JoinedEntry>,
    bare_prefix_exceptions: Vec<String>,
    conjunctions: Vec<String>,
}

#[derive(Deserialize)]
struct ParticleEntry {
    words: Vec<String>,
    culture: String,
    #[serde(default)]
    requires_capitalized: bool,
}

#[derive(Deserialize)]
struct JoinedEntry {
    letters: String,
    joiner: String,
    culture: String,
    #[serde(default)]
    capitalize_leading: bool,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/particle_data.json")?;
    let data: ParticleData = serde_json::from_str(&json)?;

    // Longest sequences first; the sort is stable so equal-length rules
    // keep their file order, which decides ties between identical folds
    let mut particles = data.particles;
    particles.sort_by(|a, b| b.words.len().cmp(&a.words.len()));

    let mut rules = String::from("&[\n");
    for p in &particles {
        let folded: Vec<String> = p.words.iter().map(|w| fold(w)).collect();
        writeln!(
            rules,
            "    ParticleRule {{ words: &[{}], folded: &[{}], culture: Culture::{}, requires_capitalized: {} }},",
            quoted_comma_separated(&p.words),
            quoted_comma_separated(&folded),
            p.culture,
            p.requires_capitalized,
        )?;
    }
    rules.push(']');
    fs::write(output.join("particle_rules.rs"), rules)?;

    let heads: Vec<String> = particles.iter().map(|p| fold(&p.words[0])).collect();
    write_set(&output.join("particle_heads.rs"), &heads)?;

    let mut joined = data.joined_prefixes;
    joined.sort_by(|a, b| {
        b.letters
            .chars()
            .count()
            .cmp(&a.letters.chars().count())
    });

    let mut prefixes = String::from("&[\n");
    for j in &joined {
        writeln!(
            prefixes,
            "    JoinedPrefix {{ letters: {:?}, folded: {:?}, joiner: Joiner::{}, culture: Culture::{}, capitalize_leading: {} }},",
            j.letters,
            fold(&j.letters),
            j.joiner,
            j.culture,
            j.capitalize_leading,
        )?;
    }
    prefixes.push(']');
    fs::write(output.join("joined_prefixes.rs"), prefixes)?;

    write_set(
        &output.join("bare_prefix_exceptions.rs"),
        &data.bare_prefix_exceptions,
    )?;
    write_set(&output.join("conjunctions.rs"), &data.conjunctions)?;

    Ok(())
}

// The data file is already NFC and uses ASCII punctuation, so lowercasing
// is all it takes to match the runtime folding
fn fold(word: &str) -> String {
    word.to_lowercase()
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut deduped: Vec<&String> = set.iter().collect();
    deduped.sort();
    deduped.dedup();

    let mut builder = phf_codegen::Set::new();
    for v in deduped {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

fn quoted_comma_separated(vs: &[String]) -> String {
    vs.iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
