//! Porter stemmer for Portuguese.
//!
//! Implements the Snowball Portuguese algorithm
//! (<https://snowballstem.org/algorithms/portuguese/stemmer.html>).
//!
//! # Algorithm
//!
//! The nasal vowels `ã` and `õ` are first rewritten as `a~` and `o~` so that
//! region scanning sees single-character vowels followed by a consonant.
//!
//! 1. Standard suffix removal, each suffix group restricted to R1, R2 or RV
//! 2. Verb suffix removal in RV, only if step 1 left the word unchanged
//! 3. If step 1 or 2 changed the word: delete a final `i` in RV preceded by `c`
//! 4. Otherwise: delete a residual suffix in RV
//! 5. Delete a final `e`, `é` or `ê` in RV (with `gu`/`ci` handling), or
//!    turn a final `ç` into `c`
//!
//! Regions are recomputed every time a step changes the word. The nasal
//! vowels are restored at the end.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::Stemmer;
//! use ptstem::stemmer::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("gatos"), "gat");
//! assert_eq!(stemmer.stem("rapidamente"), "rapid");
//! assert_eq!(stemmer.stem("nacionalidade"), "nacional");
//! ```

use crate::stemmer::Stemmer;
use crate::stemmer::region::Regions;
use crate::suffix_tree::SuffixTree;

const STANDARD_SUFFIXES: &[&str] = &[
    "amentos", "imentos", "amento", "imento", "adoras", "adores", "aço~es", "ismos", "istas",
    "adora", "aça~o", "antes", "ância", "ezas", "icos", "icas", "ismo", "ável", "ível", "ista",
    "osos", "osas", "ador", "ante", "eza", "ico", "ica", "oso", "osa",
];

const VERB_SUFFIXES: &[&str] = &[
    "aríamos", "eríamos", "iríamos", "ássemos", "êssemos", "íssemos", "aríeis", "eríeis",
    "iríeis", "ásseis", "ésseis", "ísseis", "áramos", "éramos", "íramos", "ávamos", "aremos",
    "eremos", "iremos", "ariam", "eriam", "iriam", "assem", "essem", "issem", "ara~o", "era~o",
    "ira~o", "arias", "erias", "irias", "ardes", "erdes", "irdes", "asses", "esses", "isses",
    "astes", "estes", "istes", "áreis", "areis", "éreis", "ereis", "íreis", "ireis", "áveis",
    "íamos", "armos", "ermos", "irmos", "aria", "eria", "iria", "asse", "esse", "isse", "aste",
    "este", "iste", "arei", "erei", "irei", "aram", "eram", "iram", "avam", "arem", "erem",
    "irem", "ando", "endo", "indo", "adas", "idas", "arás", "aras", "erás", "eras", "irás",
    "avas", "ares", "eres", "ires", "íeis", "ados", "idos", "ámos", "amos", "emos", "imos",
    "iras", "ada", "ida", "ará", "ara", "erá", "era", "irá", "ava", "iam", "ado", "ido", "ias",
    "ais", "eis", "ira", "ia", "ei", "am", "em", "ar", "er", "ir", "as", "es", "is", "eu", "iu",
    "ou",
];

/// Suffix groups consulted by the five steps.
#[derive(Debug, Clone)]
struct SuffixGroups {
    standard: SuffixTree<()>,
    logia: SuffixTree<()>,
    ucao: SuffixTree<()>,
    encia: SuffixTree<()>,
    amente: SuffixTree<()>,
    mente: SuffixTree<()>,
    idade: SuffixTree<()>,
    iva: SuffixTree<()>,
    ira: SuffixTree<()>,
    verb: SuffixTree<()>,
    residual: SuffixTree<()>,
    final_vowel: SuffixTree<()>,
}

impl SuffixGroups {
    fn new() -> Self {
        SuffixGroups {
            standard: STANDARD_SUFFIXES.iter().collect(),
            logia: ["logia", "logias"].into_iter().collect(),
            ucao: ["uça~o", "uço~es"].into_iter().collect(),
            encia: ["ência", "ências"].into_iter().collect(),
            amente: ["amente"].into_iter().collect(),
            mente: ["mente"].into_iter().collect(),
            idade: ["idade", "idades"].into_iter().collect(),
            iva: ["iva", "ivo", "ivas", "ivos"].into_iter().collect(),
            ira: ["ira", "iras"].into_iter().collect(),
            verb: VERB_SUFFIXES.iter().collect(),
            residual: ["os", "a", "i", "o", "á", "í", "ó"].into_iter().collect(),
            final_vowel: ["e", "é", "ê"].into_iter().collect(),
        }
    }
}

/// Remove `suffix` from the end of `word`.
fn strip<'w>(word: &'w str, suffix: &str) -> &'w str {
    &word[..word.len() - suffix.len()]
}

/// Remove `fragment` from `stem` when `fragment` followed by the already
/// removed `suffix` lies inside `region`.
fn strip_in_region<'w>(
    stem: &'w str,
    fragment: &str,
    region: &str,
    suffix: &str,
) -> Option<&'w str> {
    region
        .strip_suffix(suffix)
        .is_some_and(|rest| rest.ends_with(fragment))
        .then(|| strip(stem, fragment))
}

fn encode_nasal_vowels(word: &str) -> String {
    word.replace('ã', "a~").replace('õ', "o~")
}

fn decode_nasal_vowels(word: &str) -> String {
    word.replace("a~", "ã").replace("o~", "õ")
}

/// Porter stemming algorithm implementation for Portuguese.
#[derive(Debug, Clone)]
pub struct PorterStemmer {
    groups: SuffixGroups,
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer {
            groups: SuffixGroups::new(),
        }
    }

    /// Step 1: standard suffix removal.
    fn step1(&self, word: &str, regions: &Regions) -> Option<String> {
        let groups = &self.groups;

        if let Some(suffix) = groups.standard.longest_suffix(regions.r2) {
            return Some(strip(word, suffix).to_string());
        }
        if let Some(suffix) = groups.logia.longest_suffix(regions.r2) {
            return Some(format!("{}log", strip(word, suffix)));
        }
        if let Some(suffix) = groups.ucao.longest_suffix(regions.r2) {
            return Some(format!("{}u", strip(word, suffix)));
        }
        if let Some(suffix) = groups.encia.longest_suffix(regions.r2) {
            return Some(format!("{}ente", strip(word, suffix)));
        }

        if let Some(suffix) = groups.amente.longest_suffix(regions.r1) {
            let stem = strip(word, suffix);
            let stem = match strip_in_region(stem, "iv", regions.r2, suffix) {
                Some(without_iv) => {
                    strip_in_region(without_iv, "at", regions.r2, &format!("iv{suffix}"))
                        .unwrap_or(without_iv)
                }
                None => ["os", "ic", "ad"]
                    .iter()
                    .find_map(|fragment| strip_in_region(stem, fragment, regions.r2, suffix))
                    .unwrap_or(stem),
            };
            return Some(stem.to_string());
        }

        if let Some(suffix) = groups.mente.longest_suffix(regions.r2) {
            let stem = strip(word, suffix);
            let stem = ["ante", "avel", "ível"]
                .iter()
                .find_map(|fragment| strip_in_region(stem, fragment, regions.r2, suffix))
                .unwrap_or(stem);
            return Some(stem.to_string());
        }

        if let Some(suffix) = groups.idade.longest_suffix(regions.r2) {
            let stem = strip(word, suffix);
            let stem = ["abil", "ic", "iv"]
                .iter()
                .find_map(|fragment| strip_in_region(stem, fragment, regions.r2, suffix))
                .unwrap_or(stem);
            return Some(stem.to_string());
        }

        if let Some(suffix) = groups.iva.longest_suffix(regions.r2) {
            let stem = strip(word, suffix);
            let stem = strip_in_region(stem, "at", regions.r2, suffix).unwrap_or(stem);
            return Some(stem.to_string());
        }

        if let Some(suffix) = groups.ira.longest_suffix(regions.rv) {
            let stem = strip(word, suffix);
            if stem.ends_with('e') {
                return Some(format!("{stem}ir"));
            }
        }

        None
    }

    /// Step 2: verb suffix removal.
    fn step2(&self, word: &str, regions: &Regions) -> Option<String> {
        self.groups
            .verb
            .longest_suffix(regions.rv)
            .map(|suffix| strip(word, suffix).to_string())
    }

    /// Step 3: delete a final `i` in RV preceded by `c`.
    fn step3(&self, word: &str, regions: &Regions) -> Option<String> {
        (regions.rv.ends_with('i') && word.ends_with("ci")).then(|| strip(word, "i").to_string())
    }

    /// Step 4: residual suffix removal.
    fn step4(&self, word: &str, regions: &Regions) -> Option<String> {
        self.groups
            .residual
            .longest_suffix(regions.rv)
            .map(|suffix| strip(word, suffix).to_string())
    }

    /// Step 5: final vowel and cedilla handling.
    fn step5(&self, word: &str, regions: &Regions) -> Option<String> {
        if let Some(suffix) = self.groups.final_vowel.longest_suffix(regions.rv) {
            let stem = strip(word, suffix);
            let stem = if stem.ends_with("gu") {
                strip_in_region(stem, "u", regions.rv, suffix).unwrap_or(stem)
            } else if stem.ends_with("ci") {
                strip_in_region(stem, "i", regions.rv, suffix).unwrap_or(stem)
            } else {
                stem
            };
            return Some(stem.to_string());
        }

        word.strip_suffix('ç').map(|stem| format!("{stem}c"))
    }

    fn algorithm(&self, word: &str) -> String {
        let original = encode_nasal_vowels(word);
        let regions = Regions::of(&original);

        let changed = self
            .step1(&original, &regions)
            .or_else(|| self.step2(&original, &regions));

        let stem = match changed {
            Some(stem) => {
                let regions = Regions::of(&stem);
                self.step3(&stem, &regions).unwrap_or(stem)
            }
            None => self
                .step4(&original, &regions)
                .unwrap_or_else(|| original.clone()),
        };

        let regions = Regions::of(&stem);
        let stem = self.step5(&stem, &regions).unwrap_or(stem);

        decode_nasal_vowels(&stem)
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.algorithm(word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
