use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use haikuname::config::{self, AppConfig};
use haikuname::{
    bulk_random_with, bulk_seeded_with, detect_source, logging, random_generate, seeded_generate,
    BulkPolicy, EntropyPolicy, GenerateArgs, GeneratedName, NameConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate adjective-noun-token names, random or reproducible from a seed
#[derive(Parser, Debug)]
#[command(name = "haikuname")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: <config dir>/haikuname/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the name a seed produces (deterministic)
    Preview {
        seed: String,
        #[command(flatten)]
        name: NameArgs,
    },

    /// Generate a random name
    Generate {
        #[command(flatten)]
        name: NameArgs,
        #[command(flatten)]
        entropy: EntropyArgs,
    },

    /// Generate a batch of unique names
    Bulk {
        /// Number of names
        #[arg(short = 'n', long)]
        count: usize,

        /// Make the batch reproducible from this seed
        #[arg(long)]
        seed: Option<String>,

        #[command(flatten)]
        name: NameArgs,
        #[command(flatten)]
        entropy: EntropyArgs,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Per-call name options. These win over the config file defaults.
#[derive(Args, Debug, Default)]
struct NameArgs {
    /// Separator between name parts
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Number of token characters (0 for none)
    #[arg(short = 'l', long)]
    token_length: Option<u32>,

    /// Use a lowercase hexadecimal token (overrides --token-chars);
    /// `--hex false` switches off a hex default from the config file
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    hex: Option<bool>,

    /// Characters the token is drawn from
    #[arg(long)]
    token_chars: Option<String>,

    /// Comma-separated adjectives replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    adjectives: Vec<String>,

    /// Comma-separated nouns replacing the built-in list
    #[arg(long, value_delimiter = ',')]
    nouns: Vec<String>,

    /// Print JSON records instead of bare names
    #[arg(long)]
    json: bool,
}

impl NameArgs {
    fn options(&self) -> NameConfig {
        NameConfig {
            delimiter: self.delimiter.clone(),
            token_length: self.token_length,
            token_hex: self.hex,
            token_chars: self.token_chars.clone(),
        }
    }

    /// CLI word lists win over the config file; both empty means built-ins.
    fn generate_args(&self, cfg: &AppConfig) -> GenerateArgs {
        let pick = |cli: &Vec<String>, file: &Vec<String>| {
            [cli, file].into_iter().find(|l| !l.is_empty()).cloned()
        };
        let options = self.options();
        GenerateArgs {
            adjectives: pick(&self.adjectives, &cfg.words.adjectives),
            nouns: pick(&self.nouns, &cfg.words.nouns),
            defaults: (!cfg.defaults.is_empty()).then(|| cfg.defaults.clone()),
            options: (!options.is_empty()).then_some(options),
        }
    }
}

#[derive(Args, Debug, Default)]
struct EntropyArgs {
    /// Randomness source (default from config, else auto)
    #[arg(long, value_enum)]
    entropy: Option<EntropyPolicy>,

    /// Allow the predictable clock-based fallback
    #[arg(long)]
    allow_weak_entropy: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    logging::init(&cfg.logging, cli.verbose)?;

    match cli.command {
        Command::Preview { seed, name } => {
            let generated = seeded_generate(&seed, &name.generate_args(&cfg))?;
            print_names(std::slice::from_ref(&generated), name.json)
        }
        Command::Generate { name, entropy } => {
            let mut source = detect_source(
                entropy.entropy.unwrap_or(cfg.generation.entropy),
                entropy.allow_weak_entropy || cfg.generation.allow_weak_entropy,
            )?;
            let generated = random_generate(&name.generate_args(&cfg), source.as_mut())?;
            print_names(std::slice::from_ref(&generated), name.json)
        }
        Command::Bulk {
            count,
            seed,
            name,
            entropy,
        } => {
            let args = name.generate_args(&cfg);
            let policy = BulkPolicy::new(cfg.generation.retry_factor);
            let batch = match seed {
                Some(seed) => bulk_seeded_with(&seed, count, &args, &policy)?,
                None => {
                    let mut source = detect_source(
                        entropy.entropy.unwrap_or(cfg.generation.entropy),
                        entropy.allow_weak_entropy || cfg.generation.allow_weak_entropy,
                    )?;
                    bulk_random_with(count, &args, source.as_mut(), &policy)?
                }
            };
            print_names(&batch, name.json)
        }
        Command::Config { action } => match action {
            ConfigAction::Path => {
                println!("{}", config_path(&cli.config).display());
                Ok(())
            }
            ConfigAction::Show => {
                let contents =
                    toml::to_string_pretty(&cfg).with_context(|| "Failed to serialize config")?;
                print!("{}", contents);
                Ok(())
            }
            ConfigAction::Init { force } => {
                let config_path = config_path(&cli.config);
                if config_path.exists() && !force {
                    bail!(
                        "{} already exists (use --force to overwrite)",
                        config_path.display()
                    );
                }
                match &cli.config {
                    Some(path) => config::save_config_to(&AppConfig::default(), path)?,
                    None => config::save_config(&AppConfig::default())?,
                }
                println!("Wrote {}", config_path.display());
                Ok(())
            }
        },
    }
}

fn config_path(explicit: &Option<PathBuf>) -> PathBuf {
    explicit.clone().unwrap_or_else(config::config_path)
}

fn print_names(names: &[GeneratedName], json: bool) -> Result<()> {
    if json {
        let out = match names {
            [single] => serde_json::to_string_pretty(single),
            _ => serde_json::to_string_pretty(names),
        }
        .with_context(|| "Failed to encode output")?;
        println!("{}", out);
    } else {
        for generated in names {
            println!("{}", generated);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_become_outer_layer() {
        let cli = Cli::parse_from([
            "haikuname",
            "preview",
            "seed-1",
            "--hex",
            "-l",
            "4",
            "--adjectives",
            "brave,calm",
        ]);
        let Command::Preview { name, .. } = cli.command else {
            panic!("expected preview");
        };
        let args = name.generate_args(&AppConfig::default());
        assert_eq!(
            args.options,
            Some(NameConfig::new().token_length(4).token_hex(true))
        );
        assert_eq!(args.adjectives, Some(vec!["brave".into(), "calm".into()]));
        assert_eq!(args.nouns, None);
        assert_eq!(args.defaults, None);
    }

    #[test]
    fn test_config_words_and_defaults_fill_in() {
        let mut cfg = AppConfig::default();
        cfg.words.nouns = vec!["fox".into()];
        cfg.defaults = NameConfig::new().delimiter("_");

        let args = NameArgs::default().generate_args(&cfg);
        assert_eq!(args.nouns, Some(vec!["fox".into()]));
        assert_eq!(args.defaults, Some(NameConfig::new().delimiter("_")));
        assert_eq!(args.options, None);
    }

    #[test]
    fn test_hex_flag_can_switch_off_config_default() {
        let mut cfg = AppConfig::default();
        cfg.defaults = NameConfig::new().token_hex(true);

        let cli = Cli::parse_from(["haikuname", "preview", "s1", "--hex", "false"]);
        let Command::Preview { name, .. } = cli.command else {
            panic!("expected preview");
        };
        let args = name.generate_args(&cfg);
        assert_eq!(args.options, Some(NameConfig::new().token_hex(false)));
        let resolved = args.resolve_config();
        assert!(!resolved.token_hex);
        assert_eq!(resolved.token_chars, "0123456789");

        let cli = Cli::parse_from(["haikuname", "preview", "s1"]);
        let Command::Preview { name, .. } = cli.command else {
            panic!("expected preview");
        };
        assert!(name.generate_args(&cfg).resolve_config().token_hex);
    }

    #[test]
    fn test_preview_matches_library() {
        let cli = Cli::parse_from(["haikuname", "preview", "seed-1", "--hex", "-l", "4"]);
        let Command::Preview { seed, name } = cli.command else {
            panic!("expected preview");
        };
        let args = name.generate_args(&AppConfig::default());
        let generated = seeded_generate(&seed, &args).unwrap();
        assert_eq!(generated.name, "tight-cherry-62aa");
    }
}
