/// IO 抽象层模块
///
/// 该模块提供游戏文件读写的抽象接口，编解码与文件系统访问相互分离。
/// 支持依赖注入、测试 mock 和替换 IO 实现（如内存 IO）。
///
/// # 架构设计
///
/// - **traits**: 定义 Reader/Writer trait 接口
/// - **game_files_io**: wordlist.txt / popdefs.txt 的默认文件系统实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use bookworm_wordlist::io::{DefaultGameFilesReader, GameFilesReader};
///
/// let reader = DefaultGameFilesReader;
/// let raw = reader.read(Path::new("BookWorm Deluxe"))?;
/// ```
pub mod traits;
pub mod game_files_io;

// === 导出 trait 定义 ===
pub use traits::{GameFilesReader, GameFilesWriter, RawGameFiles};

// === 导出默认实现 ===
pub use game_files_io::{backup_recommended, DefaultGameFilesReader, DefaultGameFilesWriter};
