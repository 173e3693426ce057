use thiserror::Error;
use std::path::{Path, PathBuf};

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum BookwormError {
    #[error("Copy count is {copy} at the first word (line {line}): nothing to copy from")]
    NothingToCopy { line: usize, copy: usize },

    #[error("Invalid copy count {digits:?} on line {line}")]
    InvalidCopyCount { line: usize, digits: String },

    #[error("Missing tab separator on popdefs line {line}: {content:?}")]
    MissingTab { line: usize, content: String },

    #[error("Malformed frequency entry on line {line}: {content:?}")]
    InvalidFrequency { line: usize, content: String },

    #[error("Word {word:?} cannot be written to the word list")]
    UnpackableWord { word: String },

    #[error("Word {0:?} must be 3 to 12 letters from a to z")]
    InvalidWord(String),

    #[error("Definition for {word:?} contains characters that cannot be encoded in {encoding}")]
    Unencodable { word: String, encoding: &'static str },

    #[error("Definition key {word:?} changes when written in upper case and read back")]
    UnstableKey { word: String },

    #[error("Word list is not valid {encoding}")]
    InvalidText { encoding: &'static str },

    #[error("Game files not found in {0:?}")]
    InvalidGamePath(PathBuf),

    #[error("Lexical database is unavailable")]
    LexiconUnavailable,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 检查是否为游戏可用的单词（仅含 a-z）
///
/// 调用方应先转为小写。
pub fn is_game_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_lowercase())
}

/// 首字母大写，其余小写
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// 创建文件备份
pub fn create_backup(file_path: &Path) -> Result<PathBuf, BookwormError> {
    if !file_path.exists() {
        return Err(BookwormError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)
        .map_err(BookwormError::IoError)?;

    Ok(backup_path)
}
