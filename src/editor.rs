/// 编辑器层模块
///
/// 该模块提供有状态的编辑接口。遵循"修改-保存分离"原则，
/// 所有修改操作仅在内存中进行，需要显式调用保存。
///
/// # 架构设计
///
/// - **session**: 词库编辑会话，持有单词列表与释义表
/// - **report**: 批量操作的计数报告
///
/// # 使用示例
///
/// ```rust,ignore
/// use bookworm_wordlist::editor::WordListEditor;
/// use bookworm_wordlist::io::{DefaultGameFilesReader, DefaultGameFilesWriter};
///
/// // 加载 + 编辑 + 保存工作流
/// let mut editor = WordListEditor::load(&DefaultGameFilesReader, &game_path)?;
///
/// let removed = editor.delete_duplicate_words();
/// println!("删除了 {} 个重复单词", removed);
///
/// editor.save(&DefaultGameFilesWriter, true)?;
/// ```
pub mod report;
pub mod session;

// === 导出公共接口 ===
pub use report::{AutoDefineReport, MassAddReport, MassDeleteReport, SessionStats};
pub use session::{StatusCallback, WordListEditor};
