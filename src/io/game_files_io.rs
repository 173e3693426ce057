/// 游戏文件 IO 实现
///
/// 提供基于文件系统的默认读写实现

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use super::traits::{GameFilesReader, GameFilesWriter, RawGameFiles};
use crate::game_path::{is_game_path_valid, POPDEFS_FILE, WORDLIST_FILE};
use crate::utils::{create_backup, BookwormError};

/// 本工具首次提交的时间，早于此时间的游戏文件建议备份
const INITIAL_COMMIT_DATE: &str = "Wed Mar 27 13:07:57 2024 -0400";
const COMMIT_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

/// 默认的游戏文件读取器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultGameFilesReader;

impl GameFilesReader for DefaultGameFilesReader {
    fn read(&self, dir: &Path) -> Result<RawGameFiles, BookwormError> {
        if !is_game_path_valid(dir) {
            return Err(BookwormError::InvalidGamePath(dir.to_path_buf()));
        }

        Ok(RawGameFiles {
            wordlist: fs::read(dir.join(WORDLIST_FILE))?,
            popdefs: fs::read(dir.join(POPDEFS_FILE))?,
        })
    }
}

/// 默认的游戏文件写入器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultGameFilesWriter;

impl GameFilesWriter for DefaultGameFilesWriter {
    fn write(&self, data: &RawGameFiles, dir: &Path) -> Result<(), BookwormError> {
        fs::create_dir_all(dir)?;
        fs::write(dir.join(WORDLIST_FILE), &data.wordlist)?;
        fs::write(dir.join(POPDEFS_FILE), &data.popdefs)?;
        Ok(())
    }

    fn backup(&self, dir: &Path) -> Result<Vec<PathBuf>, BookwormError> {
        [WORDLIST_FILE, POPDEFS_FILE]
            .iter()
            .map(|name| create_backup(&dir.join(name)))
            .collect()
    }
}

/// 游戏文件是否早于本工具，早于则建议在保存前备份
pub fn backup_recommended(dir: &Path) -> Result<bool, BookwormError> {
    if !is_game_path_valid(dir) {
        return Ok(false);
    }

    let initial_commit = initial_commit_time();
    for name in [WORDLIST_FILE, POPDEFS_FILE] {
        let modified: DateTime<FixedOffset> = DateTime::<chrono::Utc>::from(
            fs::metadata(dir.join(name))?.modified()?,
        )
        .fixed_offset();
        if modified < initial_commit {
            return Ok(true);
        }
    }
    Ok(false)
}

fn initial_commit_time() -> DateTime<FixedOffset> {
    // 常量格式固定，解析失败说明常量本身写错
    DateTime::parse_from_str(INITIAL_COMMIT_DATE, COMMIT_DATE_FORMAT)
        .unwrap_or_else(|_| DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset())
}
