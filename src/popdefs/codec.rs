use std::collections::BTreeMap;

use crate::utils::BookwormError;

/// 单词 -> 释义映射（按单词排序）
pub type Definitions = BTreeMap<String, String>;

/// 解包 popdefs.txt 内容
///
/// 每个非空行在第一个制表符处拆分为单词和释义，单词转为小写。
/// 缺少制表符的行视为文件损坏。
pub fn unpack_popdefs(popdefs: &str) -> Result<Definitions, BookwormError> {
    let mut definitions = Definitions::new();

    for (index, line) in popdefs.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (word, definition) = line.split_once('\t').ok_or_else(|| BookwormError::MissingTab {
            line: index + 1,
            content: line.to_string(),
        })?;

        definitions.insert(word.to_lowercase(), definition.to_string());
    }

    Ok(definitions)
}

/// 打包为 popdefs.txt 格式
pub fn pack_popdefs(definitions: &Definitions) -> String {
    definitions
        .iter()
        .map(|(word, definition)| format!("{}\t{}", word.to_uppercase(), definition))
        .collect::<Vec<_>>()
        .join("\n")
}
