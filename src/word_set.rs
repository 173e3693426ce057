//! 单词集合操作
//!
//! 批量编辑依赖的查找、去重、长度校验与孤立释义检测。
//! 涉及查找的函数都要求单词列表已按字典序排序。

use std::collections::BTreeSet;

use crate::utils::is_game_word;

/// 游戏内部允许的最短单词长度
pub const WORD_LENGTH_MIN: usize = 3;

/// 游戏内部允许的最长单词长度
pub const WORD_LENGTH_MAX: usize = 12;

/// 在已排序的列表中二分查找
///
/// 返回第一个匹配项的索引；列表未排序时结果无意义。
pub fn binary_search<S: AsRef<str>>(elements: &[S], value: &str) -> Option<usize> {
    let index = elements.partition_point(|e| e.as_ref() < value);
    if index < elements.len() && elements[index].as_ref() == value {
        Some(index)
    } else {
        None
    }
}

/// 去除重复单词并重新排序，返回删除的数量
pub fn dedupe_words(words: &mut Vec<String>) -> usize {
    let before = words.len();
    let unique: BTreeSet<String> = words.drain(..).collect();
    words.extend(unique);
    before - words.len()
}

/// 检查单词长度是否在游戏允许范围内
pub fn is_len_valid(word: &str) -> bool {
    (WORD_LENGTH_MIN..=WORD_LENGTH_MAX).contains(&word.chars().count())
}

/// 查找孤立释义：释义表中存在但单词列表中已没有的单词
pub fn find_orphans<'a, I, S>(defined: I, sorted_words: &[S]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    S: AsRef<str>,
{
    defined
        .into_iter()
        .filter(|word| binary_search(sorted_words, word).is_none())
        .map(str::to_string)
        .collect()
}

/// 将候选单词拆分为（列表中已有的，列表中没有的）
pub fn split_known<S: AsRef<str>>(
    candidates: Vec<String>,
    sorted_words: &[S],
) -> (Vec<String>, Vec<String>) {
    candidates
        .into_iter()
        .partition(|word| binary_search(sorted_words, word).is_some())
}

/// 人类可读单词文件的扫描结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFileScan {
    /// 去重后仅含 a-z 的单词（已排序）
    pub words: Vec<String>,
    /// 文件内部的重复条目数
    pub duplicates: usize,
    /// 因含 a-z 以外的字符而被拒绝的单词数
    pub non_alpha: usize,
}

impl WordFileScan {
    /// 文件中没有任何单词
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// 扫描以空白分隔的单词文本
///
/// 全部转为小写，去重后只保留仅含 a-z 的单词。
pub fn scan_word_file(text: &str) -> WordFileScan {
    let lowered = text.to_lowercase();
    let listed: Vec<&str> = lowered.split_whitespace().collect();
    let unique: BTreeSet<&str> = listed.iter().copied().collect();
    let duplicates = listed.len() - unique.len();

    let words: Vec<String> = unique
        .iter()
        .filter(|word| is_game_word(word))
        .map(|word| word.to_string())
        .collect();
    let non_alpha = unique.len() - words.len();

    WordFileScan {
        words,
        duplicates,
        non_alpha,
    }
}
