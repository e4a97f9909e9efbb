use ptstem::stemmer::Stemmer;
use ptstem::stemmer::porter::PorterStemmer;

#[test]
fn test_standard_suffixes() {
    let stemmer = PorterStemmer::new();
    let cases = [
        ("nacionalidade", "nacional"),
        ("informação", "inform"),
        ("trabalhadores", "trabalh"),
        ("amigável", "amig"),
        ("políticos", "polít"),
        ("cantores", "cantor"),
    ];

    for (word, expected) in cases {
        assert_eq!(stemmer.stem(word), expected, "stemming {word}");
    }
}

#[test]
fn test_adverbs() {
    let stemmer = PorterStemmer::new();

    assert_eq!(stemmer.stem("rapidamente"), "rapid");
    assert_eq!(stemmer.stem("felizmente"), "feliz");
}

#[test]
fn test_verb_suffixes() {
    let stemmer = PorterStemmer::new();

    assert_eq!(stemmer.stem("cantando"), "cant");
    assert_eq!(stemmer.stem("cantava"), "cant");
    assert_eq!(stemmer.stem("falou"), "fal");
    assert_eq!(stemmer.stem("correr"), "corr");
}

#[test]
fn test_residual_and_final_vowels() {
    let stemmer = PorterStemmer::new();

    assert_eq!(stemmer.stem("gatos"), "gat");
    assert_eq!(stemmer.stem("livros"), "livr");
    assert_eq!(stemmer.stem("noites"), "noit");
    assert_eq!(stemmer.stem("flores"), "flor");
    assert_eq!(stemmer.stem("caminho"), "caminh");
}

#[test]
fn test_nasal_vowels_survive() {
    let stemmer = PorterStemmer::new();

    assert_eq!(stemmer.stem("canções"), "cançõ");
    assert_eq!(stemmer.stem("alemães"), "alemã");
    assert_eq!(stemmer.stem("cães"), "cã");
}

#[test]
fn test_short_words() {
    let stemmer = PorterStemmer::new();

    assert_eq!(stemmer.stem(""), "");
    assert_eq!(stemmer.stem("a"), "a");
    assert_eq!(stemmer.stem("gás"), "gás");
    assert_eq!(stemmer.stem("país"), "país");
}

#[test]
fn test_ci_after_verb_suffix_loses_i() {
    let stemmer = PorterStemmer::new();

    // the verb suffix goes first, then the "i" left in the new RV
    assert_eq!(stemmer.stem("negociava"), "negoc");
    assert_eq!(stemmer.stem("negociar"), "negoc");
    assert_eq!(stemmer.stem("anunciava"), "anunc");
    assert_eq!(stemmer.stem("acariciava"), "acaric");
}

#[test]
fn test_stems_are_stable() {
    let stemmer = PorterStemmer::new();
    let words = [
        "gatos",
        "cantores",
        "flores",
        "canções",
        "cabeças",
        "nacionalidade",
        "papéis",
        "rapidamente",
        "cantando",
    ];

    for word in words {
        let stem = stemmer.stem(word);
        assert_eq!(stemmer.stem(&stem), stem, "restemming {word}");
    }
}
