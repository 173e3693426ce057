pub mod editor;
pub mod game_path;
pub mod io;
pub mod lexicon;
pub mod popdefs;
pub mod rarity;
pub mod utils;
pub mod word_set;
pub mod wordlist;

// 重新导出主要结构
pub use editor::WordListEditor;
pub use lexicon::{AutoDefiner, DefineFailure, Lexicon};
pub use popdefs::{pack_popdefs, unpack_popdefs, PopDefs};
pub use rarity::{FrequencySource, FrequencyTable, RarityOracle, RARE_THRESH};
pub use utils::BookwormError;
pub use word_set::{binary_search, WORD_LENGTH_MAX, WORD_LENGTH_MIN};
pub use wordlist::{pack_wordlist, unpack_wordlist};
pub use game_path::deepest_valid_path;

// 常量定义
pub const PROGRAM_NAME: &str = "BookWorm Deluxe Wordlist Editor";
