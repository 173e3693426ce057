use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::utils::BookwormError;

use super::{LexicalDatabase, Lexicon, LexiconError, Sense};

/// 基于本地 JSON 文件的词汇数据库
///
/// 文件格式：
/// ```json
/// { "run": [ { "pos": "v", "definition": "move fast by using one's feet" } ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonLexicon {
    entries: HashMap<String, Vec<Sense>>,
}

impl JsonLexicon {
    /// 从 JSON 文本解析
    pub fn from_json(json: &str) -> Result<Self, BookwormError> {
        let raw: HashMap<String, Vec<Sense>> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(word, senses)| (word.to_lowercase(), senses))
            .collect();
        Ok(Self { entries })
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self, BookwormError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// 加载词汇数据库，失败时返回不可用状态
    pub fn open_or_unavailable(path: &Path) -> Lexicon {
        match Self::load(path) {
            Ok(lexicon) => {
                info!(path = %path.display(), words = lexicon.len(), "已加载词汇数据库");
                Lexicon::available(lexicon)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "词汇数据库加载失败，自动释义不可用");
                Lexicon::Unavailable
            }
        }
    }

    /// 收录的单词数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexicalDatabase for JsonLexicon {
    fn senses(&self, word: &str) -> Result<Vec<Sense>, LexiconError> {
        Ok(self
            .entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
