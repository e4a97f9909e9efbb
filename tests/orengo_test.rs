use ptstem::rules::{LengthGuard, RuleSet, RuleTable};
use ptstem::stemmer::orengo::{ORENGO_STEPS, OrengoStemmer};
use ptstem::stemmer::Stemmer;

fn stemmer() -> OrengoStemmer {
    OrengoStemmer::new().unwrap()
}

#[test]
fn test_nouns_and_adjectives() {
    let stemmer = stemmer();
    let cases = [
        ("meninos", "menin"),
        ("livros", "livr"),
        ("noites", "noit"),
        ("nacionalidade", "nacional"),
        ("informação", "inform"),
        ("pensamento", "pens"),
        ("trabalhadores", "trabalh"),
        ("amigável", "amig"),
        ("políticos", "polític"),
        ("cabeças", "cabeç"),
    ];

    for (word, expected) in cases {
        assert_eq!(stemmer.stem(word), expected, "stemming {word}");
    }
}

#[test]
fn test_plural_before_later_steps() {
    let stemmer = stemmer();

    // "gatos" loses the plural "s" first, then the final vowel
    assert_eq!(stemmer.stem("gatos"), "gat");
    assert_eq!(stemmer.stem("gato"), "gat");
    assert_eq!(stemmer.stem("papéis"), "papel");
    assert_eq!(stemmer.stem("pães"), "pão");
    assert_eq!(stemmer.stem("cães"), "cão");
    assert_eq!(stemmer.stem("alemães"), "alem");
}

#[test]
fn test_diminutives_and_adverbs() {
    let stemmer = stemmer();

    assert_eq!(stemmer.stem("casinha"), "cas");
    assert_eq!(stemmer.stem("bonitinho"), "bonit");
    assert_eq!(stemmer.stem("rapidamente"), "rapid");
    assert_eq!(stemmer.stem("felizmente"), "feliz");
}

#[test]
fn test_verbs() {
    let stemmer = stemmer();

    assert_eq!(stemmer.stem("cantando"), "cant");
    assert_eq!(stemmer.stem("cantava"), "cant");
    assert_eq!(stemmer.stem("falou"), "fal");
    assert_eq!(stemmer.stem("correr"), "corr");
}

#[test]
fn test_listed_exceptions_are_not_stemmed() {
    let stemmer = stemmer();

    assert_eq!(stemmer.stem("lápis"), "lápis");
    assert_eq!(stemmer.stem("país"), "país");
    assert_eq!(stemmer.stem("gás"), "gás");
    assert_eq!(stemmer.stem("mãe"), "mãe");
}

#[test]
fn test_short_and_empty_words() {
    let stemmer = stemmer();

    assert_eq!(stemmer.stem(""), "");
    assert_eq!(stemmer.stem("a"), "a");
    assert_eq!(stemmer.stem("os"), "os");
    assert_eq!(stemmer.stem("de"), "de");
}

#[test]
fn test_bundled_rules_define_every_step() {
    let rules = RuleSet::orengo().unwrap();
    for step in ORENGO_STEPS {
        assert!(rules.step(step).is_some(), "missing {step}");
    }
    assert!(rules.rule_count() > 100);
}

#[test]
fn test_plural_exception_matches_whole_plural() {
    let rules = RuleSet::orengo().unwrap();
    let step = rules.step("pluralreduction").unwrap();
    let plural = RuleTable::from_step(step, LengthGuard::StemSize);

    assert_eq!(plural.apply("mães"), "mães");
    assert_eq!(plural.apply("pães"), "pão");

    let stemmer = stemmer();
    assert_eq!(stemmer.stem("mães"), "mães");
    assert_ne!(stemmer.stem("mães"), stemmer.stem("mão"));
}

#[test]
fn test_stems_are_stable() {
    let stemmer = stemmer();
    let words = [
        "gatos",
        "meninos",
        "livros",
        "cantores",
        "pães",
        "canções",
        "informação",
        "rapidamente",
        "cantando",
        "papéis",
    ];

    for word in words {
        let stem = stemmer.stem(word);
        assert_eq!(stemmer.stem(&stem), stem, "restemming {word}");
    }
}
