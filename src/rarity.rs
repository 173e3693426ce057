//! 单词稀有度判定
//!
//! 使用频率采用 Zipf 刻度：0 表示无数据，1 为最低有记录的频率，常见词约 7~8。

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::utils::BookwormError;

/// 检查稀有度时使用的语言
pub const LANG: &str = "en";

/// 使用频率低于此值的单词应当配有释义
pub const RARE_THRESH: f64 = 3.5;

/// 外部词频数据源
pub trait FrequencySource {
    /// 查询单词在指定语言中的使用频率，未知单词返回 0.0
    fn usage(&self, word: &str, language: &str) -> f64;
}

/// 基于本地词频表的数据源
///
/// 文件格式为每行 `word<TAB>zipf`，`#` 开头的行为注释。
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    language: String,
    scores: HashMap<String, f64>,
}

impl FrequencyTable {
    /// 创建空词频表
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            scores: HashMap::new(),
        }
    }

    /// 从 TSV 文本解析词频表
    pub fn from_tsv(language: &str, text: &str) -> Result<Self, BookwormError> {
        let mut table = Self::new(language);

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = || BookwormError::InvalidFrequency {
                line: index + 1,
                content: line.to_string(),
            };

            let (word, score) = line.split_once('\t').ok_or_else(invalid)?;
            let score: f64 = score.trim().parse().map_err(|_| invalid())?;
            if !score.is_finite() {
                return Err(invalid());
            }

            table.insert(word.trim(), score);
        }

        Ok(table)
    }

    /// 从文件加载词频表
    pub fn load(language: &str, path: &Path) -> Result<Self, BookwormError> {
        let text = fs::read_to_string(path)?;
        Self::from_tsv(language, &text)
    }

    /// 记录单词的使用频率（负值按 0 处理）
    pub fn insert(&mut self, word: &str, score: f64) {
        self.scores.insert(word.to_lowercase(), score.max(0.0));
    }

    /// 词频表中的单词数量
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FrequencySource for FrequencyTable {
    fn usage(&self, word: &str, language: &str) -> f64 {
        if language != self.language {
            return 0.0;
        }
        self.scores.get(&word.to_lowercase()).copied().unwrap_or(0.0)
    }
}

/// 稀有度判定器
pub struct RarityOracle<S> {
    source: S,
    language: String,
}

impl<S: FrequencySource> RarityOracle<S> {
    /// 使用默认语言创建判定器
    pub fn new(source: S) -> Self {
        Self {
            source,
            language: LANG.to_string(),
        }
    }

    /// 获取单词的使用频率
    pub fn usage(&self, word: &str) -> f64 {
        self.source.usage(word, &self.language)
    }

    /// 使用频率低于阈值即为稀有词
    pub fn is_rare(&self, word: &str) -> bool {
        self.usage(word) < RARE_THRESH
    }
}
