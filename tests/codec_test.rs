//! 编解码往返测试
//!
//! 测试场景：
//! - wordlist.txt 的前缀压缩在排序词表上无损往返
//! - popdefs.txt 在大小写折叠后无损往返
//! - 首行非零复制数被视为结构错误

use bookworm_wordlist::popdefs::{decode_popdefs_bytes, encode_popdefs_bytes, Definitions};
use bookworm_wordlist::{
    pack_popdefs, pack_wordlist, unpack_popdefs, unpack_wordlist, BookwormError,
};

/// 生成一份确定性的排序词表
fn sample_words() -> Vec<String> {
    let stems = ["book", "worm", "letter", "tile", "lex", "read"];
    let endings = ["", "s", "ed", "er", "ers", "ing", "ish", "y"];

    let mut words: Vec<String> = stems
        .iter()
        .flat_map(|stem| endings.iter().map(move |end| format!("{}{}", stem, end)))
        .collect();
    words.sort();
    words.dedup();
    words
}

#[test]
fn test_wordlist_roundtrip() {
    let words = sample_words();
    let packed = pack_wordlist(&words);

    assert!(packed.lines().count() == words.len());
    assert_eq!(unpack_wordlist(&packed).unwrap(), words);
}

#[test]
fn test_wordlist_is_compact() {
    let words = sample_words();
    let packed = pack_wordlist(&words);
    let plain: usize = words.iter().map(|w| w.len() + 1).sum();

    assert!(packed.len() < plain);
}

#[test]
fn test_wordlist_repack_is_stable() {
    let packed = pack_wordlist(&sample_words());
    let repacked = pack_wordlist(&unpack_wordlist(&packed).unwrap());
    assert_eq!(packed, repacked);
}

#[test]
fn test_wordlist_roundtrip_repeats_and_prefixes() {
    let cases: &[&[&str]] = &[
        &["cat", "cat", "cat"],
        &["abc", "abcd", "abc"],
        &["tile", "tile", "tiles", "tiles", "tiles"],
        &["worms", "worm", "worm", "wor"],
        &["read", "reader", "read", "reader", "read"],
    ];

    for case in cases {
        let packed = pack_wordlist(*case);
        assert!(!packed.lines().any(|line| line.trim().is_empty()), "blank listing in {:?}", packed);
        assert_eq!(unpack_wordlist(&packed).unwrap(), *case, "packed: {:?}", packed);
    }
}

#[test]
fn test_wordlist_roundtrip_with_duplicates() {
    let mut words: Vec<String> = sample_words()
        .into_iter()
        .flat_map(|w| vec![w.clone(), w])
        .collect();
    words.sort();

    let packed = pack_wordlist(&words);
    assert_eq!(unpack_wordlist(&packed).unwrap(), words);
}

#[test]
fn test_wordlist_documented_example() {
    assert_eq!(pack_wordlist(&["cat", "cats", "dog"]), "cat\n3s\n0dog");
    assert_eq!(unpack_wordlist("cat\n3s\n0dog").unwrap(), vec!["cat", "cats", "dog"]);
}

#[test]
fn test_wordlist_first_listing_error() {
    let error = unpack_wordlist("5abc\ndef").unwrap_err();
    assert!(matches!(error, BookwormError::NothingToCopy { line: 1, copy: 5 }));
    assert!(error.to_string().contains("nothing to copy from"));
}

#[test]
fn test_popdefs_roundtrip() {
    let mut defs = Definitions::new();
    defs.insert("aardvark".to_string(), "(n.) A burrowing mammal.".to_string());
    defs.insert("naïve".to_string(), "(adj.) Lacking experience; Innocent.".to_string());
    defs.insert("quaff".to_string(), "(v.) Drink deeply; (n.) A hearty draft.".to_string());

    assert_eq!(unpack_popdefs(&pack_popdefs(&defs)).unwrap(), defs);
    assert_eq!(decode_popdefs_bytes(&encode_popdefs_bytes(&defs).unwrap()).unwrap(), defs);
}

#[test]
fn test_popdefs_mixed_case_keys_fold() {
    let mut defs = Definitions::new();
    defs.insert("Quaff".to_string(), "(v.) Drink deeply.".to_string());

    let decoded = unpack_popdefs(&pack_popdefs(&defs)).unwrap();
    assert_eq!(decoded.get("quaff").map(String::as_str), Some("(v.) Drink deeply."));
}
