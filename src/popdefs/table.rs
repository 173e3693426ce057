use std::fs;
use std::path::Path;

use crate::utils::BookwormError;

use super::codec::{pack_popdefs, unpack_popdefs, Definitions};
use super::encoding::{decode_popdefs_bytes, encode_popdefs_bytes};

/// 释义表统计信息
#[derive(Debug, Clone, serde::Serialize)]
pub struct PopDefsStats {
    pub definition_count: usize,
    pub total_definition_size: usize,
    pub average_definition_length: f64,
}

impl std::fmt::Display for PopDefsStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 释义表统计 ===")?;
        writeln!(f, "释义数量: {}", self.definition_count)?;
        writeln!(f, "释义总长度: {} 字符", self.total_definition_size)?;
        writeln!(f, "平均释义长度: {:.1} 字符", self.average_definition_length)?;
        Ok(())
    }
}

/// 内存中的弹出释义表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopDefs {
    /// 释义映射（小写单词 -> 释义）
    pub entries: Definitions,
}

impl PopDefs {
    /// 创建空释义表
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 popdefs.txt 文本解析
    pub fn from_text(text: &str) -> Result<Self, BookwormError> {
        Ok(Self {
            entries: unpack_popdefs(text)?,
        })
    }

    /// 从 ISO 8859-15 字节解析
    pub fn from_bytes(data: &[u8]) -> Result<Self, BookwormError> {
        Ok(Self {
            entries: decode_popdefs_bytes(data)?,
        })
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self, BookwormError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// 序列化为 popdefs.txt 文本
    pub fn to_text(&self) -> String {
        pack_popdefs(&self.entries)
    }

    /// 序列化为 ISO 8859-15 字节
    pub fn to_bytes(&self) -> Result<Vec<u8>, BookwormError> {
        encode_popdefs_bytes(&self.entries)
    }

    /// 获取单词释义
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// 检查单词是否有释义
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// 设置释义，返回旧释义
    pub fn set(&mut self, word: &str, definition: String) -> Option<String> {
        self.entries.insert(word.to_lowercase(), definition)
    }

    /// 删除释义
    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(&word.to_lowercase())
    }

    /// 所有已释义的单词（已排序）
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// 获取释义数量
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 查找释义中包含指定文本的单词
    pub fn find_definitions_containing(&self, text: &str) -> Vec<&str> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, definition)| definition.to_lowercase().contains(&needle))
            .map(|(word, _)| word.as_str())
            .collect()
    }

    /// 获取统计信息
    pub fn get_stats(&self) -> PopDefsStats {
        let total_definition_size: usize =
            self.entries.values().map(|d| d.chars().count()).sum();

        PopDefsStats {
            definition_count: self.entries.len(),
            total_definition_size,
            average_definition_length: if self.entries.is_empty() {
                0.0
            } else {
                total_definition_size as f64 / self.entries.len() as f64
            },
        }
    }
}
