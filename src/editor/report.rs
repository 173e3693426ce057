/// 批量操作结果报告
///
/// 失败按类别计数汇总，不逐条报错。

use serde::Serialize;

use crate::word_set::{WORD_LENGTH_MAX, WORD_LENGTH_MIN};

/// 批量添加单词的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MassAddReport {
    /// 候选单词数（去重后）
    pub requested: usize,
    /// 列表中已有的单词数
    pub already_present: usize,
    /// 因长度或字符不合法被拒绝的单词数
    pub invalid: usize,
    /// 实际添加的单词数
    pub added: usize,
}

impl std::fmt::Display for MassAddReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.requested > 0 && self.already_present == self.requested {
            return write!(f, "全部 {} 个单词已在单词列表中", self.requested);
        }
        if self.already_present > 0 {
            writeln!(f, "{} 个单词已在单词列表中", self.already_present)?;
        }
        if self.invalid > 0 {
            writeln!(
                f,
                "{} 个单词被拒绝：长度不在 {} 到 {} 个字母之间",
                self.invalid, WORD_LENGTH_MIN, WORD_LENGTH_MAX
            )?;
        }
        write!(f, "向单词列表添加了 {} 个新单词", self.added)
    }
}

/// 批量删除单词的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MassDeleteReport {
    /// 候选单词数（去重后）
    pub requested: usize,
    /// 列表中没有的单词数
    pub not_present: usize,
    /// 实际删除的单词数
    pub deleted: usize,
}

impl std::fmt::Display for MassDeleteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.requested > 0 && self.deleted == 0 {
            return write!(f, "{} 个单词都不在单词列表中", self.requested);
        }
        if self.not_present > 0 {
            writeln!(f, "{} 个单词不在单词列表中", self.not_present)?;
        }
        write!(f, "从单词列表删除了 {} 个单词", self.deleted)
    }
}

/// 批量自动释义的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutoDefineReport {
    /// 需要释义的稀有词数
    pub total: usize,
    /// 成功释义的单词数
    pub defined: usize,
    /// 释义失败的单词
    pub failed: Vec<String>,
}

impl AutoDefineReport {
    /// 是否全部失败
    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.defined == 0
    }
}

impl std::fmt::Display for AutoDefineReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.total == 0 {
            return write!(f, "所有低于使用频率阈值的单词都已有释义");
        }
        if self.all_failed() {
            return write!(f, "{} 个未释义的稀有词全部释义失败", self.total);
        }
        if !self.failed.is_empty() {
            writeln!(
                f,
                "{} 个未释义的稀有词中有 {} 个释义失败",
                self.total,
                self.failed.len()
            )?;
        }
        write!(f, "自动释义了 {} 个单词", self.defined)
    }
}

/// 编辑会话统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub word_count: usize,
    pub definition_count: usize,
    pub duplicate_words: usize,
    pub invalid_length_words: usize,
    pub orphaned_definitions: usize,
    pub packed_size: usize,
    pub unsaved_changes: bool,
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 词库统计信息 ===")?;
        writeln!(f, "单词数量: {}", self.word_count)?;
        writeln!(f, "释义数量: {}", self.definition_count)?;
        writeln!(f, "重复单词: {}", self.duplicate_words)?;
        writeln!(f, "长度不合法的单词: {}", self.invalid_length_words)?;
        writeln!(f, "孤立释义: {}", self.orphaned_definitions)?;
        writeln!(f, "压缩后单词列表大小: {} 字节", self.packed_size)?;
        writeln!(f, "未保存的修改: {}", if self.unsaved_changes { "是" } else { "否" })?;
        Ok(())
    }
}
