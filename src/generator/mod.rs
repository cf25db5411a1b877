//! Name assembly and the single-name entry points.
//!
//! A name is `adjective<delim>noun<delim>token`. Draw order is fixed:
//! adjective, then noun, then each token character. The stream is stateful,
//! so changing that order changes every name.

pub mod bulk;
pub mod entropy;

use serde::{Deserialize, Serialize};

use crate::config::merge::{merge_config, NameConfig, ResolvedConfig};
use crate::config::words::WordList;
use crate::error::{NameError, Result, WordKind};
use crate::hash::fnv1a32;
use crate::stream::{Mulberry32, NumberStream};
use self::entropy::RandomnessSource;

/// Caller inputs shared by every entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateArgs {
    #[serde(default)]
    pub adjectives: Option<Vec<String>>,
    #[serde(default)]
    pub nouns: Option<Vec<String>>,
    #[serde(default)]
    pub defaults: Option<NameConfig>,
    #[serde(default)]
    pub options: Option<NameConfig>,
}

impl GenerateArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adjectives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adjectives = Some(words.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_nouns<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nouns = Some(words.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_defaults(mut self, defaults: NameConfig) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn with_options(mut self, options: NameConfig) -> Self {
        self.options = Some(options);
        self
    }

    pub(crate) fn word_lists(&self) -> (WordList<'_>, WordList<'_>) {
        (
            WordList::adjectives(self.adjectives.as_deref()),
            WordList::nouns(self.nouns.as_deref()),
        )
    }

    /// Merge options over defaults over the built-ins.
    pub fn resolve_config(&self) -> ResolvedConfig {
        merge_config(
            self.options.as_ref(),
            self.defaults.as_ref(),
            &ResolvedConfig::default(),
        )
    }
}

/// The three pieces of a generated name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameParts {
    pub adjective: String,
    pub noun: String,
    /// Empty when the token length is zero.
    pub token: String,
}

/// One generated name and the parts it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratedName {
    pub name: String,
    pub parts: NameParts,
}

impl std::fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

fn pick_word<'a>(
    list: &WordList<'a>,
    kind: WordKind,
    stream: &mut impl NumberStream,
) -> Result<&'a str> {
    list.ensure_non_empty(kind)?;
    let index = stream.below(list.len());
    list.get(index).ok_or(NameError::EmptyWordList(kind))
}

/// Build a name from `adjectives`, `nouns` and `config`, drawing from `stream`.
pub fn assemble_name(
    adjectives: &WordList<'_>,
    nouns: &WordList<'_>,
    config: &ResolvedConfig,
    stream: &mut impl NumberStream,
) -> Result<GeneratedName> {
    config.validate()?;
    adjectives.ensure_non_empty(WordKind::Adjective)?;
    nouns.ensure_non_empty(WordKind::Noun)?;

    let adjective = pick_word(adjectives, WordKind::Adjective, stream)?;
    let noun = pick_word(nouns, WordKind::Noun, stream)?;

    let alphabet = config.alphabet();
    let token: String = (0..config.token_length)
        .filter_map(|_| alphabet.get(stream.below(alphabet.len())).copied())
        .collect();

    let name = [adjective, noun, token.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(config.delimiter.as_str());

    Ok(GeneratedName {
        name,
        parts: NameParts {
            adjective: adjective.to_string(),
            noun: noun.to_string(),
            token,
        },
    })
}

/// Resolve `args` and assemble one name from a fresh stream seeded with `seed`.
pub fn generate_from_seed(seed: u32, args: &GenerateArgs) -> Result<GeneratedName> {
    let (adjectives, nouns) = args.word_lists();
    let config = args.resolve_config();
    let mut stream = Mulberry32::new(seed);
    assemble_name(&adjectives, &nouns, &config, &mut stream)
}

#[derive(Serialize)]
struct SeedMaterial<'a> {
    seed: &'a str,
    adjectives: Option<&'a [String]>,
    nouns: Option<&'a [String]>,
    defaults: Option<&'a NameConfig>,
    options: Option<&'a NameConfig>,
}

/// Canonical JSON of the seed and every argument, with `null` for absent ones.
pub fn seed_material(seed: &str, args: &GenerateArgs) -> Result<String> {
    let material = SeedMaterial {
        seed,
        adjectives: args.adjectives.as_deref(),
        nouns: args.nouns.as_deref(),
        defaults: args.defaults.as_ref(),
        options: args.options.as_ref(),
    };
    Ok(serde_json::to_string(&material)?)
}

/// Deterministic generation: same `seed` and `args` always give the same name.
pub fn seeded_generate(seed: &str, args: &GenerateArgs) -> Result<GeneratedName> {
    let seed_int = fnv1a32(&seed_material(seed, args)?);
    tracing::debug!(seed, seed_int, "seeded generation");
    generate_from_seed(seed_int, args)
}

/// Non-deterministic generation with a seed drawn from `source`.
pub fn random_generate<S>(args: &GenerateArgs, source: &mut S) -> Result<GeneratedName>
where
    S: RandomnessSource + ?Sized,
{
    let seed_int = source.next_seed()?;
    tracing::debug!(source = source.name(), "random generation");
    generate_from_seed(seed_int, args)
}
