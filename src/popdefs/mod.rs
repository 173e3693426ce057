//! popdefs.txt 弹出释义表
//!
//! 每行格式：`WORD\t(词性缩写) 释义; 另一个释义`。
//! 磁盘上单词为大写，内存中统一为小写；文件编码为 ISO 8859-15。

mod codec;
mod encoding;
mod table;

#[cfg(test)]
mod tests;

pub use codec::{pack_popdefs, unpack_popdefs, Definitions};
pub use encoding::{decode_popdefs_bytes, encode_popdefs_bytes, POPDEFS_ENCODING};
pub use table::{PopDefs, PopDefsStats};
