/// 词库编辑会话
///
/// 会话独占内存中的单词列表和释义表，所有修改只在内存中进行，
/// 需要显式调用 [`WordListEditor::save`] 才会写回游戏目录。

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::io::{GameFilesReader, GameFilesWriter, RawGameFiles};
use crate::lexicon::{AutoDefiner, DefineFailure};
use crate::popdefs::PopDefs;
use crate::rarity::{FrequencySource, RarityOracle};
use crate::utils::{is_game_word, BookwormError};
use crate::word_set::{binary_search, dedupe_words, find_orphans, is_len_valid, split_known};
use crate::wordlist::{check_packable, decode_wordlist_bytes, pack_wordlist, unpack_wordlist};

use super::report::{AutoDefineReport, MassAddReport, MassDeleteReport, SessionStats};

/// 状态回调（"忙碌文本"）
pub type StatusCallback = Box<dyn FnMut(&str)>;

/// 词库编辑器 - 管理单词列表与释义表的修改状态
///
/// # 核心特性
/// - **Stateful**: 维护未保存标记，支持多次修改后统一保存
/// - **有序**: 单词列表始终保持字典序，查找使用二分法
/// - **可观察**: 长时间操作通过状态回调报告进度
///
/// # 使用示例
///
/// ```rust,ignore
/// use bookworm_wordlist::editor::WordListEditor;
/// use bookworm_wordlist::io::{DefaultGameFilesReader, DefaultGameFilesWriter};
///
/// let mut editor = WordListEditor::load(&DefaultGameFilesReader, game_path)?;
/// let report = editor.mass_add_words(new_words);
/// println!("{}", report);
///
/// editor.save(&DefaultGameFilesWriter, false)?;
/// ```
pub struct WordListEditor {
    /// 游戏目录
    game_path: PathBuf,
    /// 单词列表（已排序）
    words: Vec<String>,
    /// 弹出释义表
    defs: PopDefs,
    /// 是否有未保存的修改
    unsaved_changes: bool,
    /// 状态回调
    on_status: Option<StatusCallback>,
}

impl WordListEditor {
    /// 从内存数据创建编辑器
    pub fn new(game_path: PathBuf, mut words: Vec<String>, defs: PopDefs) -> Self {
        words.sort();
        Self {
            game_path,
            words,
            defs,
            unsaved_changes: false,
            on_status: None,
        }
    }

    /// 从游戏目录加载单词列表和释义表
    pub fn load(reader: &dyn GameFilesReader, game_path: &Path) -> Result<Self, BookwormError> {
        let mut editor = Self::new(game_path.to_path_buf(), Vec::new(), PopDefs::new());
        editor.reload(reader)?;
        Ok(editor)
    }

    /// 设置状态回调
    pub fn with_status_callback(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_status = Some(Box::new(callback));
        self
    }

    /// 报告当前状态
    fn set_busy(&mut self, text: &str) {
        debug!(status = text, "编辑器状态");
        if let Some(callback) = self.on_status.as_mut() {
            callback(text);
        }
    }

    /// 重新从游戏目录加载，丢弃未保存的修改
    pub fn reload(&mut self, reader: &dyn GameFilesReader) -> Result<(), BookwormError> {
        self.set_busy("正在读取游戏文件...");
        let raw = reader.read(&self.game_path)?;

        self.set_busy("正在加载 wordlist.txt...");
        let text = decode_wordlist_bytes(&raw.wordlist)?;
        let mut words = unpack_wordlist(&text)?;
        words.sort();

        self.set_busy("正在加载 popdefs.txt...");
        let defs = PopDefs::from_bytes(&raw.popdefs)?;

        info!(
            path = %self.game_path.display(),
            words = words.len(),
            definitions = defs.count(),
            "已加载游戏文件"
        );

        self.words = words;
        self.defs = defs;
        self.unsaved_changes = false;
        Ok(())
    }

    /// 编码两个游戏文件
    ///
    /// 任一文件编码失败都不会产生输出。
    pub fn encode(&mut self) -> Result<RawGameFiles, BookwormError> {
        self.set_busy("正在编码 wordlist.txt...");
        check_packable(&self.words)?;
        let wordlist = pack_wordlist(&self.words).into_bytes();

        self.set_busy("正在编码 popdefs.txt...");
        let popdefs = self.defs.to_bytes()?;

        Ok(RawGameFiles { wordlist, popdefs })
    }

    /// 保存到游戏目录
    ///
    /// 先完成全部编码再写文件；`backup` 为 true 时先备份现有文件。
    pub fn save(
        &mut self,
        writer: &dyn GameFilesWriter,
        backup: bool,
    ) -> Result<Vec<PathBuf>, BookwormError> {
        let data = self.encode()?;

        let backups = if backup {
            self.set_busy("正在创建备份...");
            writer.backup(&self.game_path)?
        } else {
            Vec::new()
        };

        self.set_busy("正在写入磁盘...");
        writer.write(&data, &self.game_path)?;
        self.unsaved_changes = false;

        info!(path = %self.game_path.display(), words = self.words.len(), "已保存游戏文件");
        Ok(backups)
    }

    /// 游戏目录
    pub fn game_path(&self) -> &Path {
        &self.game_path
    }

    /// 单词列表（已排序）
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// 释义表
    pub fn definitions(&self) -> &PopDefs {
        &self.defs
    }

    /// 是否有未保存的修改
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// 查找单词的索引
    pub fn search(&self, word: &str) -> Option<usize> {
        binary_search(&self.words, &word.to_lowercase())
    }

    /// 获取单词释义
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.defs.get(word)
    }

    /// 添加单个单词
    ///
    /// 返回 Ok(false) 表示单词已存在。
    pub fn add_word(&mut self, word: &str) -> Result<bool, BookwormError> {
        let word = word.trim().to_lowercase();
        if !is_game_word(&word) || !is_len_valid(&word) {
            return Err(BookwormError::InvalidWord(word));
        }

        let index = self.words.partition_point(|w| *w < word);
        if self.words.get(index) == Some(&word) {
            return Ok(false);
        }

        self.words.insert(index, word);
        self.unsaved_changes = true;
        Ok(true)
    }

    /// 删除单词（包括所有重复条目）及其释义
    ///
    /// 返回 false 表示单词不在列表中。
    pub fn delete_word(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        let Some(start) = binary_search(&self.words, &word) else {
            return false;
        };

        let end = start + self.words[start..].partition_point(|w| *w == word);
        self.words.drain(start..end);
        self.defs.remove(&word);
        self.unsaved_changes = true;
        true
    }

    /// 设置释义，返回旧释义
    pub fn set_definition(&mut self, word: &str, definition: &str) -> Option<String> {
        self.unsaved_changes = true;
        self.defs.set(word, definition.trim().to_string())
    }

    /// 删除释义
    pub fn remove_definition(&mut self, word: &str) -> Option<String> {
        let removed = self.defs.remove(word);
        if removed.is_some() {
            self.unsaved_changes = true;
        }
        removed
    }

    /// 批量添加单词
    ///
    /// 跳过已有的单词和长度不合法的单词，结果列表重新排序。
    pub fn mass_add_words(&mut self, candidates: Vec<String>) -> MassAddReport {
        let mut candidates: Vec<String> = candidates.iter().map(|w| w.trim().to_lowercase()).collect();
        dedupe_words(&mut candidates);
        let requested = candidates.len();

        self.set_busy("正在筛选新单词...");
        let (known, new_words) = split_known(candidates, &self.words);

        self.set_busy("正在过滤长度不合法的单词...");
        let (valid, invalid): (Vec<String>, Vec<String>) = new_words
            .into_iter()
            .partition(|w| is_game_word(w) && is_len_valid(w));

        if !valid.is_empty() {
            self.set_busy("正在合并列表...");
            self.words.extend(valid.iter().cloned());
            self.words.sort();
            self.unsaved_changes = true;
        }

        MassAddReport {
            requested,
            already_present: known.len(),
            invalid: invalid.len(),
            added: valid.len(),
        }
    }

    /// 批量删除单词（连同释义）
    pub fn mass_delete_words(&mut self, candidates: Vec<String>) -> MassDeleteReport {
        let mut candidates: Vec<String> = candidates.iter().map(|w| w.trim().to_lowercase()).collect();
        dedupe_words(&mut candidates);
        let requested = candidates.len();

        self.set_busy("正在查找已有的单词...");
        let (known, _) = split_known(candidates, &self.words);

        self.set_busy("正在删除...");
        for word in &known {
            self.delete_word(word);
        }

        MassDeleteReport {
            requested,
            not_present: requested - known.len(),
            deleted: known.len(),
        }
    }

    /// 删除所有长度不合法的单词，返回删除数量
    pub fn delete_invalid_length_words(&mut self) -> usize {
        self.set_busy("正在查找长度不合法的单词...");
        let invalid: Vec<String> = self
            .words
            .iter()
            .filter(|w| !is_len_valid(w))
            .cloned()
            .collect();

        for word in &invalid {
            self.delete_word(word);
        }
        invalid.len()
    }

    /// 查找孤立释义
    pub fn orphaned_definitions(&self) -> Vec<String> {
        find_orphans(self.defs.words(), &self.words)
    }

    /// 删除所有孤立释义，返回删除数量
    pub fn delete_orphaned_definitions(&mut self) -> usize {
        self.set_busy("正在查找孤立释义...");
        let orphaned = self.orphaned_definitions();

        self.set_busy("正在删除孤立释义...");
        for word in &orphaned {
            self.defs.remove(word);
        }
        if !orphaned.is_empty() {
            self.unsaved_changes = true;
        }
        orphaned.len()
    }

    /// 删除重复单词，返回删除数量
    pub fn delete_duplicate_words(&mut self) -> usize {
        self.set_busy("正在查找重复单词...");
        let removed = dedupe_words(&mut self.words);
        if removed > 0 {
            self.unsaved_changes = true;
        }
        removed
    }

    /// 查找使用频率低于阈值且没有释义的单词
    pub fn undefined_rare_words<S: FrequencySource>(&self, oracle: &RarityOracle<S>) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| oracle.is_rare(w) && !self.defs.contains(w))
            .cloned()
            .collect()
    }

    /// 自动释义单个单词，成功时写入释义表
    pub fn auto_define(&mut self, word: &str, definer: &AutoDefiner) -> Result<String, DefineFailure> {
        let definition = definer.define(word)?;
        self.set_definition(word, &definition);
        Ok(definition)
    }

    /// 为所有未释义的稀有词自动生成释义
    ///
    /// 词汇数据库不可用时直接返回错误，不逐词尝试。
    pub fn mass_auto_define<S: FrequencySource>(
        &mut self,
        oracle: &RarityOracle<S>,
        definer: &AutoDefiner,
    ) -> Result<AutoDefineReport, BookwormError> {
        if !definer.is_available() {
            return Err(BookwormError::LexiconUnavailable);
        }

        self.set_busy("正在查找未释义的稀有词...");
        let words_to_define = self.undefined_rare_words(oracle);
        let total = words_to_define.len();

        let mut report = AutoDefineReport {
            total,
            ..Default::default()
        };

        for (i, word) in words_to_define.into_iter().enumerate() {
            self.set_busy(&format!("正在自动释义 {}/{} 个单词...", i + 1, total));
            match definer.define(&word) {
                Ok(definition) => {
                    self.defs.set(&word, definition);
                    report.defined += 1;
                }
                Err(failure) => {
                    debug!(word = %word, reason = %failure, "自动释义失败");
                    report.failed.push(word);
                }
            }
        }

        if report.defined > 0 {
            self.unsaved_changes = true;
        }
        Ok(report)
    }

    /// 获取统计信息
    pub fn get_stats(&self) -> SessionStats {
        let mut unique = self.words.clone();
        let duplicate_words = dedupe_words(&mut unique);

        SessionStats {
            word_count: self.words.len(),
            definition_count: self.defs.count(),
            duplicate_words,
            invalid_length_words: self.words.iter().filter(|w| !is_len_valid(w)).count(),
            orphaned_definitions: self.orphaned_definitions().len(),
            packed_size: pack_wordlist(&self.words).len(),
            unsaved_changes: self.unsaved_changes,
        }
    }
}

impl std::fmt::Debug for WordListEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordListEditor")
            .field("game_path", &self.game_path)
            .field("words", &self.words.len())
            .field("definitions", &self.defs.count())
            .field("unsaved_changes", &self.unsaved_changes)
            .finish()
    }
}
