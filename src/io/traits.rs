/// IO 抽象层 - trait 定义
///
/// 该模块定义了游戏文件读写的抽象接口，支持依赖注入和测试 mock。

use std::path::{Path, PathBuf};

use crate::utils::BookwormError;

/// 两个游戏文件的原始字节
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGameFiles {
    /// wordlist.txt 的字节（UTF-8）
    pub wordlist: Vec<u8>,
    /// popdefs.txt 的字节（ISO 8859-15）
    pub popdefs: Vec<u8>,
}

/// 游戏文件读取 trait
///
/// # 职责
/// - 从游戏目录读取 wordlist.txt 和 popdefs.txt 的原始字节
/// - 不负责解码，仅负责 IO
pub trait GameFilesReader {
    /// 读取游戏目录中的两个文件
    ///
    /// # 参数
    /// * `dir` - 游戏目录
    fn read(&self, dir: &Path) -> Result<RawGameFiles, BookwormError>;
}

/// 游戏文件写入 trait
///
/// # 职责
/// - 将已编码好的数据写入游戏目录
/// - 不负责编码，仅负责 IO；调用前两个文件都必须已成功编码
pub trait GameFilesWriter {
    /// 写入两个游戏文件
    ///
    /// # 参数
    /// * `data` - 要写入的原始数据
    /// * `dir` - 游戏目录
    fn write(&self, data: &RawGameFiles, dir: &Path) -> Result<(), BookwormError>;

    /// 备份游戏目录中现有的两个文件，返回备份文件路径
    fn backup(&self, dir: &Path) -> Result<Vec<PathBuf>, BookwormError>;
}
