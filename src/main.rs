use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use namesplit::{nametrim, Engine, Mode, Normalization};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Capitalize personal names and split them into family and given names.
///
/// Pass `-` as the name to read newline-separated names from stdin.
#[derive(Debug, Parser)]
#[command(name = "namesplit", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// File of case exceptions, one per line
    #[arg(long, value_name = "FILE", global = true)]
    case_exceptions: Option<PathBuf>,

    /// File of split exceptions ("Family, Given"), one per line
    #[arg(long, value_name = "FILE", global = true)]
    split_exceptions: Option<PathBuf>,

    /// Unicode normalization applied to exception keys
    #[arg(long, value_enum, default_value = "none", global = true)]
    normalize: NormalizeArg,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical capitalization of a name
    Case {
        #[arg(long, value_enum, default_value = "full")]
        mode: ModeArg,

        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Print a name as "Family, Given"
    Split {
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Print the family and given parts of a name as JSON
    Parts {
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Print a name with its spacing tidied
    Trim {
        #[arg(required = true)]
        name: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NormalizeArg {
    None,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl From<NormalizeArg> for Normalization {
    fn from(arg: NormalizeArg) -> Normalization {
        match arg {
            NormalizeArg::None => Normalization::Identity,
            NormalizeArg::Nfc => Normalization::Nfc,
            NormalizeArg::Nfd => Normalization::Nfd,
            NormalizeArg::Nfkc => Normalization::Nfkc,
            NormalizeArg::Nfkd => Normalization::Nfkd,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Full,
    Family,
    Given,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Mode {
        match arg {
            ModeArg::Full => Mode::Full,
            ModeArg::Family => Mode::Family,
            ModeArg::Given => Mode::Given,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn engine(cli: &Cli) -> Result<Engine> {
    let mut engine = Engine::builder()
        .normalization(cli.normalize.into())
        .build();

    if let Some(ref path) = cli.case_exceptions {
        let count = engine
            .load_case_exceptions(open(path)?)
            .with_context(|| format!("in {}", path.display()))?;
        log::info!("{} case exceptions from {}", count, path.display());
    }
    if let Some(ref path) = cli.split_exceptions {
        let count = engine
            .load_split_exceptions(open(path)?)
            .with_context(|| format!("in {}", path.display()))?;
        log::info!("{} split exceptions from {}", count, path.display());
    }

    Ok(engine)
}

/// Applies `f` to the name given on the command line, or to each line of
/// stdin if that name is `-`.
fn each_name<F>(name: &[String], mut f: F) -> Result<()>
where
    F: FnMut(&str) -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if name.len() == 1 && name[0] == "-" {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if writeln!(out, "{}", f(&line)).is_err() {
                break;
            }
        }
    } else {
        writeln!(out, "{}", f(&name.join(" ")))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let engine = engine(&cli)?;

    match cli.command {
        Command::Case { mode, ref name } => {
            each_name(name, |n| engine.namecase_as(n, mode.into()))
        }
        Command::Split { ref name } => each_name(name, |n| engine.namesplit(n)),
        Command::Parts { ref name } => each_name(name, |n| engine.nameparts(n).to_json()),
        Command::Trim { ref name } => each_name(name, |n| nametrim(n).into_owned()),
    }
}
