use std::io::Write;

use ptstem::error::StemmerError;
use ptstem::rules::{ExceptionMode, LengthGuard, RuleSet, RuleTable};
use ptstem::stemmer::orengo::OrengoStemmer;
use ptstem::stemmer::{Stemmer, StemmerType, create_stemmer_with_rules};
use ptstem::suffix_tree::SuffixTree;
use tempfile::NamedTempFile;

const MINIMAL_ORENGO: &str = r#"{
    "name": "minimal",
    "steps": [
        {"name": "pluralreduction", "min_word_size": 3, "exception_mode": "whole_word", "rules": [
            {"suffix": "s", "min_stem_size": 2, "replacement": "", "exceptions": ["lápis"]}
        ]},
        {"name": "femininereduction"},
        {"name": "augmentativediminutivereduction"},
        {"name": "adverbreduction", "rules": [
            {"suffix": "mente", "min_stem_size": 4, "replacement": ""}
        ]},
        {"name": "nounreduction", "rules": [
            {"suffix": "ista", "min_stem_size": 4, "replacement": "", "exceptions": ["batista"]}
        ]},
        {"name": "verbreduction"},
        {"name": "vowelremoval", "rules": [
            {"suffix": "o", "min_stem_size": 3, "replacement": ""}
        ]}
    ]
}"#;

#[test]
fn test_rules_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_ORENGO.as_bytes()).unwrap();

    let rules = RuleSet::from_path(file.path()).unwrap();
    assert_eq!(rules.name, "minimal");
    assert_eq!(rules.rule_count(), 4);

    let stemmer = create_stemmer_with_rules(StemmerType::Orengo, Some(&rules)).unwrap();
    assert_eq!(stemmer.stem("gatos"), "gat");
    assert_eq!(stemmer.stem("lápis"), "lápis");
    assert_eq!(stemmer.stem("rapidamente"), "rapida");
    assert_eq!(stemmer.stem("jornalista"), "jornal");
}

#[test]
fn test_exception_stops_shorter_suffixes() {
    let mut table = RuleTable::new("noun", 0, ExceptionMode::LongestSuffix, LengthGuard::StemSize);
    table.add_rule("ista", 2, "", ["batista"]);
    table.add_rule("a", 2, "", Vec::<String>::new());

    // "batista" is excepted for "ista", so the shorter "a" is not tried
    assert_eq!(table.apply("batista"), "batista");
    assert_eq!(table.apply("anabatista"), "anabatista");
    assert_eq!(table.apply("artista"), "art");
    assert_eq!(table.apply("casa"), "cas");
}

#[test]
fn test_failed_size_check_falls_back_to_shorter_suffix() {
    let mut table = RuleTable::new("verb", 0, ExceptionMode::LongestSuffix, LengthGuard::StemSize);
    table.add_rule("ando", 4, "", Vec::<String>::new());
    table.add_rule("o", 2, "", Vec::<String>::new());

    assert_eq!(table.apply("cantando"), "cant");
    // "ando" needs four stem characters, "o" only two
    assert_eq!(table.apply("cando"), "cand");
}

#[test]
fn test_longest_match() {
    let mut tree = SuffixTree::new();
    tree.insert("s", 1);
    tree.insert("es", 2);
    tree.insert("ões", 3);

    assert_eq!(tree.longest_suffix_and_value("canções"), Some(("ões", &3)));
    assert_eq!(tree.longest_suffix_and_value("flores"), Some(("es", &2)));
    assert_eq!(tree.longest_suffix_and_value("gatos"), Some(("s", &1)));
    assert_eq!(tree.longest_suffix_and_value("gato"), None);

    let matched: Vec<&str> = tree
        .matched_suffixes_and_values("canções")
        .into_iter()
        .map(|(suffix, _)| suffix)
        .collect();
    assert_eq!(matched, vec!["s", "es", "ões"]);
}

#[test]
fn test_invalid_rule_files() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"steps": [{{"name": "pluralreduction", "rules": [{{"suffix": "", "min_stem_size": 1, "replacement": ""}}]}}]}}"#
    )
    .unwrap();
    assert!(matches!(
        RuleSet::from_path(file.path()),
        Err(StemmerError::InvalidRule { .. })
    ));

    let rules = RuleSet::from_json_str(r#"{"steps": [{"name": "pluralreduction"}]}"#).unwrap();
    assert!(matches!(
        OrengoStemmer::with_rules(&rules),
        Err(StemmerError::MissingStep { .. })
    ));
}
