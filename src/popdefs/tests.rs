use super::*;
use crate::utils::BookwormError;
use tempfile::TempDir;

/// 创建测试用的释义表
fn create_test_popdefs() -> PopDefs {
    let mut popdefs = PopDefs::new();
    popdefs.set("aardvark", "(n.) A nocturnal burrowing mammal.".to_string());
    popdefs.set("zymurgy", "(n.) The study of fermentation.".to_string());
    popdefs.set("quixotic", "(adj.) Idealistic and impractical.".to_string());
    popdefs
}

#[test]
fn test_unpack_popdefs() {
    let text = "AARDVARK\t(n.) A nocturnal burrowing mammal.\nQUIXOTIC\t(adj.) Idealistic.";
    let defs = unpack_popdefs(text).unwrap();

    assert_eq!(defs.len(), 2);
    assert_eq!(defs["aardvark"], "(n.) A nocturnal burrowing mammal.");
    assert_eq!(defs["quixotic"], "(adj.) Idealistic.");
}

#[test]
fn test_unpack_popdefs_skips_blank_lines() {
    let text = "\nAARDVARK\t(n.) Mammal.\n\n   \nZYMURGY\t(n.) Brewing.\n";
    let defs = unpack_popdefs(text).unwrap();
    assert_eq!(defs.keys().collect::<Vec<_>>(), vec!["aardvark", "zymurgy"]);
}

#[test]
fn test_unpack_popdefs_splits_at_first_tab() {
    let defs = unpack_popdefs("WORD\t(n.) One\tTwo").unwrap();
    assert_eq!(defs["word"], "(n.) One\tTwo");
}

#[test]
fn test_unpack_popdefs_missing_tab() {
    let result = unpack_popdefs("AARDVARK\t(n.) Mammal.\nBROKEN LINE");
    match result {
        Err(BookwormError::MissingTab { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "BROKEN LINE");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_pack_popdefs_sorted_uppercase() {
    let popdefs = create_test_popdefs();
    assert_eq!(
        popdefs.to_text(),
        "AARDVARK\t(n.) A nocturnal burrowing mammal.\n\
         QUIXOTIC\t(adj.) Idealistic and impractical.\n\
         ZYMURGY\t(n.) The study of fermentation."
    );
}

#[test]
fn test_text_roundtrip() {
    let popdefs = create_test_popdefs();
    let reloaded = PopDefs::from_text(&popdefs.to_text()).unwrap();
    assert_eq!(reloaded, popdefs);
}

#[test]
fn test_bytes_roundtrip_latin9() {
    let mut popdefs = create_test_popdefs();
    popdefs.set("euro", "(n.) The currency sign €; café money.".to_string());

    let bytes = popdefs.to_bytes().unwrap();
    // € 在 ISO 8859-15 中是 0xA4
    assert!(bytes.contains(&0xA4));
    assert!(bytes.contains(&0xE9));

    let reloaded = PopDefs::from_bytes(&bytes).unwrap();
    assert_eq!(reloaded.get("euro"), Some("(n.) The currency sign €; café money."));
}

#[test]
fn test_encode_unrepresentable() {
    let mut popdefs = create_test_popdefs();
    popdefs.set("dragon", "(n.) 龙".to_string());

    match popdefs.to_bytes() {
        Err(BookwormError::Unencodable { word, encoding }) => {
            assert_eq!(word, "dragon");
            assert_eq!(encoding, POPDEFS_ENCODING);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_encode_rejects_unstable_key() {
    let mut popdefs = create_test_popdefs();
    popdefs.set("straße", "(n.) A street.".to_string());

    assert!(matches!(
        popdefs.to_bytes(),
        Err(BookwormError::UnstableKey { word }) if word == "straße"
    ));
}

#[test]
fn test_accented_key_roundtrip() {
    let mut popdefs = create_test_popdefs();
    popdefs.set("naïve", "(adj.) Lacking experience.".to_string());

    let bytes = popdefs.to_bytes().unwrap();
    assert_eq!(PopDefs::from_bytes(&bytes).unwrap(), popdefs);
}

#[test]
fn test_case_folding() {
    let mut popdefs = create_test_popdefs();

    assert!(popdefs.contains("AARDVARK"));
    assert_eq!(popdefs.get("Zymurgy"), Some("(n.) The study of fermentation."));

    assert!(popdefs.set("Quixotic", "(adj.) Romantic.".to_string()).is_some());
    assert_eq!(popdefs.count(), 3);

    assert!(popdefs.remove("QUIXOTIC").is_some());
    assert!(popdefs.remove("quixotic").is_none());
    assert_eq!(popdefs.count(), 2);
}

#[test]
fn test_find_definitions_containing() {
    let popdefs = create_test_popdefs();
    assert_eq!(popdefs.find_definitions_containing("MAMMAL"), vec!["aardvark"]);
    assert!(popdefs.find_definitions_containing("dragon").is_empty());
}

#[test]
fn test_stats() {
    let stats = create_test_popdefs().get_stats();
    assert_eq!(stats.definition_count, 3);
    assert!(stats.average_definition_length > 10.0);
    assert!(stats.to_string().contains("释义数量: 3"));

    let empty = PopDefs::new().get_stats();
    assert_eq!(empty.average_definition_length, 0.0);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("popdefs.txt");
    std::fs::write(&file_path, create_test_popdefs().to_bytes().unwrap()).unwrap();

    let loaded = PopDefs::load(&file_path).unwrap();
    assert_eq!(loaded.count(), 3);
    assert!(loaded.words().eq(["aardvark", "quixotic", "zymurgy"]));
}
