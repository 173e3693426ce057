//! 词典（自动释义）模块
//!
//! 外部词汇数据库以 trait 形式接入，可用性由 [`Lexicon`] 能力对象显式表达，
//! 整个会话内保持不变。
//!
//! # 架构设计
//!
//! - **definer**: 自动释义生成器，按词性分组拼接释义
//! - **json**: 基于本地 JSON 文件的词汇数据库
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use bookworm_wordlist::lexicon::{AutoDefiner, JsonLexicon, Lexicon};
//!
//! let lexicon = JsonLexicon::open_or_unavailable(Path::new("lexicon.json"));
//! let definer = AutoDefiner::new(lexicon);
//! match definer.define("zymurgy") {
//!     Ok(definition) => println!("{}", definition),
//!     Err(failure) => eprintln!("{}", failure),
//! }
//! ```

pub mod definer;
pub mod json;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use definer::{AutoDefiner, DefineFailure};
pub use json::JsonLexicon;

/// 词性（WordNet 词性代码）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    /// 卫星形容词
    AdjectiveSatellite,
    Adverb,
    /// 无缩写映射的其他词性
    Other(String),
}

impl PartOfSpeech {
    /// 从 WordNet 词性代码解析
    pub fn from_code(code: &str) -> Self {
        match code {
            "n" => PartOfSpeech::Noun,
            "v" => PartOfSpeech::Verb,
            "a" => PartOfSpeech::Adjective,
            "s" => PartOfSpeech::AdjectiveSatellite,
            "r" => PartOfSpeech::Adverb,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }

    /// WordNet 词性代码
    pub fn code(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::AdjectiveSatellite => "s",
            PartOfSpeech::Adverb => "r",
            PartOfSpeech::Other(code) => code,
        }
    }

    /// 游戏内释义使用的词性缩写
    pub fn abbreviation(&self) -> Option<&'static str> {
        match self {
            PartOfSpeech::Noun => Some("n."),
            PartOfSpeech::Verb => Some("v."),
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => Some("adj."),
            PartOfSpeech::Adverb => Some("adv."),
            PartOfSpeech::Other(_) => None,
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(code: String) -> Self {
        PartOfSpeech::from_code(&code)
    }
}

impl From<PartOfSpeech> for String {
    fn from(pos: PartOfSpeech) -> Self {
        pos.code().to_string()
    }
}

/// 单词的一个义项（synset）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// 词性
    pub pos: PartOfSpeech,
    /// 释义文本
    pub definition: String,
}

impl Sense {
    pub fn new(pos: PartOfSpeech, definition: impl Into<String>) -> Self {
        Self {
            pos,
            definition: definition.into(),
        }
    }
}

/// 词汇数据库查询错误
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Lexical database lookup failed: {0}")]
    Lookup(String),
}

/// 外部词汇数据库
pub trait LexicalDatabase {
    /// 查询单词的全部义项，按数据库返回顺序排列
    fn senses(&self, word: &str) -> Result<Vec<Sense>, LexiconError>;
}

/// 词汇数据库可用性
pub enum Lexicon {
    /// 数据库可用
    Available(Box<dyn LexicalDatabase>),
    /// 数据库缺失，整个会话内不可用
    Unavailable,
}

impl Lexicon {
    /// 包装一个可用的数据库
    pub fn available(database: impl LexicalDatabase + 'static) -> Self {
        Lexicon::Available(Box::new(database))
    }

    /// 检查数据库是否可用
    pub fn is_available(&self) -> bool {
        matches!(self, Lexicon::Available(_))
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lexicon::Available(_) => f.write_str("Lexicon::Available"),
            Lexicon::Unavailable => f.write_str("Lexicon::Unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_codes() {
        for code in ["n", "v", "a", "s", "r"] {
            assert_eq!(PartOfSpeech::from_code(code).code(), code);
        }
        assert_eq!(
            PartOfSpeech::from_code("x"),
            PartOfSpeech::Other("x".to_string())
        );
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(PartOfSpeech::Noun.abbreviation(), Some("n."));
        assert_eq!(PartOfSpeech::Verb.abbreviation(), Some("v."));
        assert_eq!(PartOfSpeech::Adjective.abbreviation(), Some("adj."));
        assert_eq!(PartOfSpeech::AdjectiveSatellite.abbreviation(), Some("adj."));
        assert_eq!(PartOfSpeech::Adverb.abbreviation(), Some("adv."));
        assert_eq!(PartOfSpeech::Other("x".to_string()).abbreviation(), None);
    }

    #[test]
    fn test_sense_serde() {
        let sense: Sense = serde_json::from_str(r#"{"pos":"s","definition":"very small"}"#).unwrap();
        assert_eq!(sense, Sense::new(PartOfSpeech::AdjectiveSatellite, "very small"));

        let json = serde_json::to_string(&Sense::new(PartOfSpeech::Verb, "to run")).unwrap();
        assert_eq!(json, r#"{"pos":"v","definition":"to run"}"#);
    }
}
