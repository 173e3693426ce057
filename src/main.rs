use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bookworm_wordlist::editor::WordListEditor;
use bookworm_wordlist::game_path::{deepest_valid_path, resolve_game_path, GAME_PATH_ENV};
use bookworm_wordlist::io::{backup_recommended, DefaultGameFilesReader, DefaultGameFilesWriter};
use bookworm_wordlist::lexicon::{AutoDefiner, JsonLexicon, Lexicon};
use bookworm_wordlist::rarity::{FrequencyTable, RarityOracle, LANG};
use bookworm_wordlist::word_set::scan_word_file;
use bookworm_wordlist::PROGRAM_NAME;

#[derive(Parser)]
#[command(name = "bookworm_wordlist")]
#[command(about = "编辑 BookWorm Deluxe 的 wordlist.txt 和 popdefs.txt")]
#[command(version)]
struct Cli {
    /// 游戏目录（包含 wordlist.txt 和 popdefs.txt）
    #[arg(short, long, env = GAME_PATH_ENV, global = true)]
    game_path: Option<PathBuf>,

    /// 词频表文件（每行 word<TAB>zipf）
    #[arg(long, global = true)]
    frequencies: Option<PathBuf>,

    /// 词汇数据库文件（JSON）
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// 保存前备份原文件
    #[arg(long, global = true)]
    backup: bool,

    /// 静默模式(仅输出错误)
    #[arg(long, global = true)]
    quiet: bool,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 显示词库统计信息
    Stats {
        /// 以 JSON 格式输出
        #[arg(long)]
        json: bool,
    },
    /// 导出人类可读的单词列表（每行一个单词）
    Export { output: PathBuf },
    /// 查找单词，并列出释义中提到它的词条
    Search { word: String },
    /// 查询单词的使用频率
    Usage { word: String },
    /// 自动生成单词释义并保存
    Define { word: String },
    /// 添加单词
    Add { words: Vec<String> },
    /// 删除单词（连同释义）
    Delete { words: Vec<String> },
    /// 设置单词释义
    SetDef { word: String, definition: String },
    /// 从文本文件批量添加单词
    AddFile { file: PathBuf },
    /// 从文本文件批量删除单词
    DeleteFile { file: PathBuf },
    /// 删除重复单词
    Dedupe,
    /// 删除长度不合法的单词
    PruneLengths,
    /// 删除孤立释义
    PruneOrphans,
    /// 为所有未释义的稀有词自动生成释义
    AutoDefine,
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match &cli.command {
        Command::Stats { json } => handle_stats(&load_editor(&cli)?, *json),
        Command::Export { output } => handle_export(&load_editor(&cli)?, output, cli.quiet),
        Command::Search { word } => handle_search(&load_editor(&cli)?, word),
        Command::Usage { word } => handle_usage(&cli, word),
        Command::Define { word } => handle_define(&cli, &mut load_editor(&cli)?, word),
        Command::Add { words } => handle_add(&cli, &mut load_editor(&cli)?, words),
        Command::Delete { words } => handle_delete(&cli, &mut load_editor(&cli)?, words),
        Command::SetDef { word, definition } => {
            handle_set_def(&cli, &mut load_editor(&cli)?, word, definition)
        }
        Command::AddFile { file } => handle_add_file(&cli, &mut load_editor(&cli)?, file),
        Command::DeleteFile { file } => handle_delete_file(&cli, &mut load_editor(&cli)?, file),
        Command::Dedupe => {
            let mut editor = load_editor(&cli)?;
            let removed = editor.delete_duplicate_words();
            report(&cli, &format!("找到并删除了 {} 个重复条目", removed));
            save_if_changed(&cli, &mut editor)
        }
        Command::PruneLengths => {
            let mut editor = load_editor(&cli)?;
            let removed = editor.delete_invalid_length_words();
            report(&cli, &format!("找到并删除了 {} 个长度不合法的单词", removed));
            save_if_changed(&cli, &mut editor)
        }
        Command::PruneOrphans => {
            let mut editor = load_editor(&cli)?;
            let removed = editor.delete_orphaned_definitions();
            report(&cli, &format!("找到并删除了 {} 个孤立释义", removed));
            save_if_changed(&cli, &mut editor)
        }
        Command::AutoDefine => handle_auto_define(&cli, &mut load_editor(&cli)?),
    }
}

/// 解析游戏目录并加载游戏文件
fn load_editor(cli: &Cli) -> Result<WordListEditor> {
    let game_path = resolve_game_path(cli.game_path.as_deref());
    WordListEditor::load(&DefaultGameFilesReader, &game_path).with_context(|| {
        format!(
            "无法从 {:?} 加载游戏文件（最近的已存在目录: {:?}）",
            game_path,
            deepest_valid_path(&game_path)
        )
    })
}

/// 非静默模式下输出信息
fn report(cli: &Cli, message: &str) {
    if !cli.quiet {
        println!("{}", message);
    }
}

/// 有未保存的修改时写回游戏目录
fn save_if_changed(cli: &Cli, editor: &mut WordListEditor) -> Result<()> {
    if !editor.has_unsaved_changes() {
        return Ok(());
    }

    let recommended = backup_recommended(editor.game_path()).unwrap_or(false);
    if recommended && !cli.backup {
        tracing::warn!("现有游戏文件早于 {}，建议使用 --backup 保存备份", PROGRAM_NAME);
    }

    let backups = editor
        .save(&DefaultGameFilesWriter, cli.backup)
        .context("保存游戏文件失败")?;

    for backup in &backups {
        report(cli, &format!("已备份: {:?}", backup));
    }
    report(cli, &format!("已保存到: {:?}", editor.game_path()));
    Ok(())
}

/// 加载词频表
fn load_oracle(cli: &Cli) -> Result<RarityOracle<FrequencyTable>> {
    let table = match &cli.frequencies {
        Some(path) => FrequencyTable::load(LANG, path)
            .with_context(|| format!("读取词频表失败: {:?}", path))?,
        None => bail!("需要使用 --frequencies 指定词频表"),
    };
    Ok(RarityOracle::new(table))
}

/// 加载自动释义器
fn load_definer(cli: &Cli) -> AutoDefiner {
    let lexicon = match &cli.lexicon {
        Some(path) => JsonLexicon::open_or_unavailable(path),
        None => Lexicon::Unavailable,
    };
    AutoDefiner::new(lexicon)
}

/// 读取人类可读的单词文件
fn read_word_file(cli: &Cli, file: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("读取单词文件失败: {:?}", file))?;
    let scan = scan_word_file(&text);

    if scan.duplicates > 0 {
        report(cli, &format!("文件内部有 {} 个重复条目", scan.duplicates));
    }
    if scan.non_alpha > 0 {
        report(cli, &format!("{} 个单词因含有 a-z 以外的字符被拒绝", scan.non_alpha));
    }
    if scan.is_empty() {
        bail!("文件中没有找到仅含 a-z 的单词: {:?}", file);
    }
    Ok(scan.words)
}

/// 处理统计信息
fn handle_stats(editor: &WordListEditor, json: bool) -> Result<()> {
    let stats = editor.get_stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats);
        print!("{}", editor.definitions().get_stats());
    }
    Ok(())
}

/// 处理导出
fn handle_export(editor: &WordListEditor, output: &Path, quiet: bool) -> Result<()> {
    let mut text = editor.words().join("\n");
    text.push('\n');
    std::fs::write(output, text).with_context(|| format!("写入文件失败: {:?}", output))?;

    if !quiet {
        println!("导出了 {} 个单词到: {:?}", editor.words().len(), output);
    }
    Ok(())
}

/// 处理查找
fn handle_search(editor: &WordListEditor, word: &str) -> Result<()> {
    match editor.search(word) {
        Some(index) => {
            println!("{}: 第 {} 个单词", word, index + 1);
            if let Some(definition) = editor.definition(word) {
                println!("释义: {}", definition);
            }
        }
        None => println!("{}: 不在单词列表中", word),
    }

    let mentioned_in = editor.definitions().find_definitions_containing(word);
    if !mentioned_in.is_empty() {
        println!("释义中提到该单词的词条: {}", mentioned_in.join(", "));
    }
    Ok(())
}

/// 处理使用频率查询
fn handle_usage(cli: &Cli, word: &str) -> Result<()> {
    let oracle = load_oracle(cli)?;
    let usage = oracle.usage(word);
    println!(
        "{}: {:.2}{}",
        word,
        usage,
        if oracle.is_rare(word) { "（稀有）" } else { "" }
    );
    Ok(())
}

/// 处理单词自动释义
fn handle_define(cli: &Cli, editor: &mut WordListEditor, word: &str) -> Result<()> {
    let definer = load_definer(cli);
    match editor.auto_define(word, &definer) {
        Ok(definition) => {
            report(cli, &format!("{}\t{}", word.to_uppercase(), definition));
            save_if_changed(cli, editor)
        }
        Err(failure) => bail!("{}", failure),
    }
}

/// 处理添加单词
fn handle_add(cli: &Cli, editor: &mut WordListEditor, words: &[String]) -> Result<()> {
    for word in words {
        match editor.add_word(word) {
            Ok(true) => report(cli, &format!("已添加: {}", word)),
            Ok(false) => report(cli, &format!("已存在: {}", word)),
            Err(e) => report(cli, &format!("已拒绝: {}", e)),
        }
    }
    save_if_changed(cli, editor)
}

/// 处理删除单词
fn handle_delete(cli: &Cli, editor: &mut WordListEditor, words: &[String]) -> Result<()> {
    for word in words {
        if editor.delete_word(word) {
            report(cli, &format!("已删除: {}", word));
        } else {
            report(cli, &format!("不在单词列表中: {}", word));
        }
    }
    save_if_changed(cli, editor)
}

/// 处理设置释义
fn handle_set_def(cli: &Cli, editor: &mut WordListEditor, word: &str, definition: &str) -> Result<()> {
    if editor.search(word).is_none() {
        tracing::warn!(word, "该单词不在单词列表中，释义将成为孤立释义");
    }
    editor.set_definition(word, definition);
    save_if_changed(cli, editor)
}

/// 处理批量添加
fn handle_add_file(cli: &Cli, editor: &mut WordListEditor, file: &Path) -> Result<()> {
    let words = read_word_file(cli, file)?;
    let result = editor.mass_add_words(words);
    report(cli, &result.to_string());
    save_if_changed(cli, editor)
}

/// 处理批量删除
fn handle_delete_file(cli: &Cli, editor: &mut WordListEditor, file: &Path) -> Result<()> {
    let words = read_word_file(cli, file)?;
    let result = editor.mass_delete_words(words);
    report(cli, &result.to_string());
    save_if_changed(cli, editor)
}

/// 处理批量自动释义
fn handle_auto_define(cli: &Cli, editor: &mut WordListEditor) -> Result<()> {
    let oracle = load_oracle(cli)?;
    let definer = load_definer(cli);

    let result = editor
        .mass_auto_define(&oracle, &definer)
        .context("批量自动释义失败")?;

    if result.all_failed() {
        bail!("{}", result);
    }
    report(cli, &result.to_string());
    save_if_changed(cli, editor)
}
