//! wordlist.txt 前缀压缩编解码
//!
//! 每行（listing）由可选的十进制复制数和字母后缀组成：
//! 1. 从上一个单词开头复制"复制数"个字符（省略时沿用上一行的复制数）
//! 2. 追加本行的字母
//!
//! ```text
//! cat      -> cat
//! 3s       -> cats
//! 0dog     -> dog
//! ```

use crate::utils::BookwormError;

/// 解包 wordlist.txt 内容
///
/// 按文件顺序返回单词，不排序、不去重。
pub fn unpack_wordlist(wordlist: &str) -> Result<Vec<String>, BookwormError> {
    let mut words: Vec<String> = Vec::new();
    let mut copy = 0usize;

    for (index, listing) in wordlist.lines().enumerate() {
        let listing = listing.trim();
        if listing.is_empty() {
            continue;
        }

        let split = listing
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(listing.len());
        let (digits, suffix) = listing.split_at(split);

        if !digits.is_empty() {
            copy = digits.parse().map_err(|_| BookwormError::InvalidCopyCount {
                line: index + 1,
                digits: digits.to_string(),
            })?;
        }

        let word = match words.last() {
            Some(previous) => {
                let mut word: String = previous.chars().take(copy).collect();
                word.push_str(suffix);
                word
            }
            None if copy == 0 => suffix.to_string(),
            None => {
                return Err(BookwormError::NothingToCopy {
                    line: index + 1,
                    copy,
                })
            }
        };
        words.push(word);
    }

    Ok(words)
}

/// 打包为 wordlist.txt 格式
///
/// 调用方应先排序以获得最佳压缩率，顺序不影响正确性。
pub fn pack_wordlist<S: AsRef<str>>(words: &[S]) -> String {
    let mut listings = Vec::with_capacity(words.len());
    let mut old_copy = 0usize;
    let mut previous: Option<&str> = None;

    for word in words {
        let word = word.as_ref();

        let Some(old_word) = previous else {
            // 第一个单词无处可复制，完整写出
            listings.push(word.to_string());
            previous = Some(word);
            continue;
        };

        let copy = common_prefix_len(old_word, word);
        let suffix: String = word.chars().skip(copy).collect();

        // 后缀为空时省略复制数会得到空行，解码时被跳过
        if copy != old_copy || suffix.is_empty() {
            listings.push(format!("{}{}", copy, suffix));
        } else {
            listings.push(suffix);
        }

        old_copy = copy;
        previous = Some(word);
    }

    listings.join("\n").trim().to_string()
}

/// 两个单词的公共前缀长度（按字符计）
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}

/// 检查单词能否无损写入 wordlist.txt
///
/// 数字会被当作复制数，空白会被当作分行，都会破坏往返一致性。
pub fn check_packable<S: AsRef<str>>(words: &[S]) -> Result<(), BookwormError> {
    for word in words {
        let word = word.as_ref();
        if word.is_empty() || word.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) {
            return Err(BookwormError::UnpackableWord {
                word: word.to_string(),
            });
        }
    }
    Ok(())
}

/// 解码 wordlist.txt 的原始字节（UTF-8）
pub fn decode_wordlist_bytes(data: &[u8]) -> Result<String, BookwormError> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(data);
    if had_errors {
        return Err(BookwormError::InvalidText { encoding: "UTF-8" });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_pack_example() {
        assert_eq!(pack_wordlist(&["cat", "cats", "dog"]), "cat\n3s\n0dog");
    }

    #[test]
    fn test_unpack_example() {
        assert_eq!(
            unpack_wordlist("cat\n3s\n0dog").unwrap(),
            words(&["cat", "cats", "dog"])
        );
    }

    #[test]
    fn test_copy_count_omitted_when_unchanged() {
        let packed = pack_wordlist(&["bake", "baker", "bakes"]);
        assert_eq!(packed, "bake\n4r\ns");

        let packed = pack_wordlist(&["ant", "anteater", "antelope"]);
        assert_eq!(packed, "ant\n3eater\n4lope");

        let packed = pack_wordlist(&["cab", "cad", "cam"]);
        assert_eq!(packed, "cab\n2d\nm");
    }

    #[test]
    fn test_unpack_sticky_copy_count() {
        assert_eq!(
            unpack_wordlist("cab\n2d\nm\n0dog\nug").unwrap(),
            words(&["cab", "cad", "cam", "dog", "ug"])
        );
    }

    #[test]
    fn test_unpack_skips_blank_lines() {
        assert_eq!(
            unpack_wordlist("\n\ncat\n\n3s\r\n  \n0dog\n").unwrap(),
            words(&["cat", "cats", "dog"])
        );
    }

    #[test]
    fn test_unpack_first_listing_nonzero_copy() {
        let result = unpack_wordlist("\n3cat\n0dog");
        match result {
            Err(BookwormError::NothingToCopy { line, copy }) => {
                assert_eq!(line, 2);
                assert_eq!(copy, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unpack_first_listing_zero_copy() {
        assert_eq!(unpack_wordlist("0cat\n3s").unwrap(), words(&["cat", "cats"]));
    }

    #[test]
    fn test_unpack_copy_longer_than_previous() {
        assert_eq!(unpack_wordlist("cat\n9s").unwrap(), words(&["cat", "cats"]));
    }

    #[test]
    fn test_unpack_huge_copy_count() {
        let result = unpack_wordlist("cat\n99999999999999999999999999s");
        assert!(matches!(result, Err(BookwormError::InvalidCopyCount { line: 2, .. })));
    }

    #[test]
    fn test_prefix_of_previous_word() {
        // 新词是旧词的前缀时，复制整个新词长度
        let packed = pack_wordlist(&["cats", "cat"]);
        assert_eq!(packed, "cats\n3");
        assert_eq!(unpack_wordlist(&packed).unwrap(), words(&["cats", "cat"]));
    }

    #[test]
    fn test_repeated_words() {
        let packed = pack_wordlist(&["cat", "cat", "cat"]);
        assert_eq!(packed, "cat\n3\n3");
        assert_eq!(unpack_wordlist(&packed).unwrap(), words(&["cat", "cat", "cat"]));
    }

    #[test]
    fn test_prefix_of_previous_word_same_copy() {
        let packed = pack_wordlist(&["abc", "abcd", "abc"]);
        assert_eq!(packed, "abc\n3d\n3");
        assert_eq!(unpack_wordlist(&packed).unwrap(), words(&["abc", "abcd", "abc"]));
    }

    #[test]
    fn test_roundtrip_edge_cases() {
        let cases: &[&[&str]] = &[
            &["cat", "cat"],
            &["cats", "cat", "cat"],
            &["ab", "abc", "ab", "abc", "ab"],
            &["dog", "do", "d", "do", "dog"],
            &["bat", "bat", "bats", "bats", "cat"],
            &["a", "a", "a", "b", "b"],
        ];
        for case in cases {
            let list = words(case);
            let packed = pack_wordlist(&list);
            assert_eq!(unpack_wordlist(&packed).unwrap(), list, "packed: {:?}", packed);
        }
    }

    #[test]
    fn test_roundtrip_all_short_sequences() {
        // 字母表 {a, b} 上长度 1~2 的单词组成的全部三词序列
        let alphabet = ["a", "b", "aa", "ab", "ba", "bb"];
        for x in alphabet {
            for y in alphabet {
                for z in alphabet {
                    let list = words(&[x, y, z]);
                    let packed = pack_wordlist(&list);
                    assert_eq!(unpack_wordlist(&packed).unwrap(), list, "packed: {:?}", packed);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_unsorted() {
        let list = words(&["zebra", "apple", "applesauce", "apply", "zeal", "zealot"]);
        let packed = pack_wordlist(&list);
        assert_eq!(unpack_wordlist(&packed).unwrap(), list);
    }

    #[test]
    fn test_roundtrip_sorted_dictionary() {
        let list = words(&[
            "abandon", "abandoned", "abandoning", "abase", "abased", "abate", "abbey",
            "abbot", "abbots", "abdomen", "able", "abler", "ablest", "aboard",
        ]);
        let packed = pack_wordlist(&list);
        assert!(packed.len() < list.iter().map(|w| w.len() + 1).sum::<usize>());
        assert_eq!(unpack_wordlist(&packed).unwrap(), list);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(pack_wordlist::<&str>(&[]), "");
        assert!(unpack_wordlist("").unwrap().is_empty());
        assert!(unpack_wordlist("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("cat", "cats"), 3);
        assert_eq!(common_prefix_len("cats", "cat"), 3);
        assert_eq!(common_prefix_len("cat", "dog"), 0);
        assert_eq!(common_prefix_len("baker", "bakes"), 4);
        assert_eq!(common_prefix_len("", "abc"), 0);
    }

    #[test]
    fn test_check_packable() {
        assert!(check_packable(&["cat", "dog"]).is_ok());
        assert!(matches!(
            check_packable(&["cat", "d0g"]),
            Err(BookwormError::UnpackableWord { word }) if word == "d0g"
        ));
        assert!(check_packable(&["two words"]).is_err());
        assert!(check_packable(&[""]).is_err());
    }

    #[test]
    fn test_decode_wordlist_bytes() {
        assert_eq!(decode_wordlist_bytes(b"cat\n3s").unwrap(), "cat\n3s");
        assert_eq!(decode_wordlist_bytes(b"\xEF\xBB\xBFcat").unwrap(), "cat");
        assert!(matches!(
            decode_wordlist_bytes(b"ca\xFFt"),
            Err(BookwormError::InvalidText { .. })
        ));
    }
}
