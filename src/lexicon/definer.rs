use indexmap::IndexMap;
use thiserror::Error;
use tracing::warn;

use crate::utils::capitalize;

use super::{Lexicon, PartOfSpeech};

/// 自动释义失败原因
///
/// 均为预期内的否定结果，调用方按条计数即可。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefineFailure {
    #[error("The lexical database is not installed. Install it, then restart the application.")]
    Unavailable,

    #[error("No definition found for '{0}'.")]
    NotFound(String),

    #[error("Lookup failed for '{word}': {message}")]
    LookupFailed { word: String, message: String },
}

/// 自动释义生成器
#[derive(Debug)]
pub struct AutoDefiner {
    lexicon: Lexicon,
}

impl AutoDefiner {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// 词汇数据库是否可用
    pub fn is_available(&self) -> bool {
        self.lexicon.is_available()
    }

    /// 为单词生成游戏释义
    ///
    /// 义项按词性分组（保持首次出现的顺序），格式为
    /// `(n.) Sense one; Sense two; (v.) Sense three.`
    pub fn define(&self, word: &str) -> Result<String, DefineFailure> {
        let database = match &self.lexicon {
            Lexicon::Available(database) => database,
            Lexicon::Unavailable => return Err(DefineFailure::Unavailable),
        };

        let senses = database
            .senses(word)
            .map_err(|e| DefineFailure::LookupFailed {
                word: word.to_string(),
                message: e.to_string(),
            })?;

        let mut groups: IndexMap<PartOfSpeech, Vec<String>> = IndexMap::new();
        for sense in senses {
            groups
                .entry(sense.pos)
                .or_default()
                .push(capitalize(&sense.definition));
        }

        let parts: Vec<String> = groups
            .into_iter()
            .filter_map(|(pos, definitions)| match pos.abbreviation() {
                Some(abbreviation) => Some(format!("({}) {}", abbreviation, definitions.join("; "))),
                None => {
                    warn!(word, pos = pos.code(), "跳过无缩写映射的词性");
                    None
                }
            })
            .collect();

        if parts.is_empty() {
            return Err(DefineFailure::NotFound(word.to_string()));
        }

        Ok(format!("{}.", parts.join("; ")))
    }
}
