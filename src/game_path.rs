//! 游戏目录定位

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// 单词列表文件名
pub const WORDLIST_FILE: &str = "wordlist.txt";

/// 弹出释义文件名
pub const POPDEFS_FILE: &str = "popdefs.txt";

/// 覆盖默认游戏目录的环境变量
pub const GAME_PATH_ENV: &str = "BOOKWORM_GAME_PATH";

/// 游戏在 C 盘下的默认相对路径
fn game_path_c() -> PathBuf {
    Path::new("Program Files")
        .join("PopCap Games")
        .join("BookWorm Deluxe")
}

/// 当前操作系统下的默认游戏目录
///
/// Windows 直接位于 C 盘；Linux/macOS 位于默认 Wine 前缀内。
pub fn default_game_path() -> PathBuf {
    if cfg!(windows) {
        Path::new("C:\\").join(game_path_c())
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/"))
            .join(".wine")
            .join("drive_c")
            .join(game_path_c())
    }
}

/// 检查目录下是否同时存在两个游戏文件
pub fn is_game_path_valid(path: &Path) -> bool {
    path.join(WORDLIST_FILE).exists() && path.join(POPDEFS_FILE).exists()
}

/// 在建议路径与默认路径之间选择更合适的一个
///
/// 建议路径不存在时使用默认路径；建议路径存在但不含游戏文件时，
/// 若默认路径有效则用默认路径，否则仍保留建议路径。
pub fn choose_best_game_path(suggestion: &Path, default: &Path) -> PathBuf {
    if !suggestion.exists() {
        warn!(suggestion = %suggestion.display(), "指定的游戏目录不存在，使用默认目录");
        return default.to_path_buf();
    }

    if !is_game_path_valid(suggestion) {
        if is_game_path_valid(default) {
            warn!(
                suggestion = %suggestion.display(),
                default = %default.display(),
                "指定的游戏目录无效，而默认目录有效"
            );
            return default.to_path_buf();
        }

        warn!(suggestion = %suggestion.display(), "指定的游戏目录无效，但没有更好的选择");
        return suggestion.to_path_buf();
    }

    info!(path = %suggestion.display(), "使用指定的游戏目录");
    suggestion.to_path_buf()
}

/// 解析最终使用的游戏目录
///
/// 优先级：显式指定（命令行或环境变量）> 系统默认。
pub fn resolve_game_path(explicit: Option<&Path>) -> PathBuf {
    let default = default_game_path();
    match explicit {
        Some(suggestion) => choose_best_game_path(suggestion, &default),
        None => default,
    }
}

/// 找到给定路径中最深的一级实际存在的目录
///
/// 最坏情况下返回文件系统根目录。
pub fn deepest_valid_path(path: &Path) -> PathBuf {
    let mut current = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    while !current.exists() {
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    current
}
