use encoding_rs::ISO_8859_15;

use crate::utils::BookwormError;

use super::codec::{pack_popdefs, unpack_popdefs, Definitions};

/// popdefs.txt 的文件编码名称
pub const POPDEFS_ENCODING: &str = "ISO 8859-15";

/// 从原始字节解码释义表
///
/// ISO 8859-15 为单字节编码，任何字节序列都能解码。
pub fn decode_popdefs_bytes(data: &[u8]) -> Result<Definitions, BookwormError> {
    let (text, _) = ISO_8859_15.decode_without_bom_handling(data);
    unpack_popdefs(&text)
}

/// 将释义表编码为原始字节
///
/// 任一条目含有 ISO 8859-15 无法表示的字符，或单词大小写往返后发生变化时
/// 返回错误并指出该单词。调用方应在写文件前调用。
pub fn encode_popdefs_bytes(definitions: &Definitions) -> Result<Vec<u8>, BookwormError> {
    for (word, definition) in definitions {
        // 磁盘上为大写，读回时转小写，必须得到同一个单词
        if word.to_uppercase().to_lowercase() != *word {
            return Err(BookwormError::UnstableKey { word: word.clone() });
        }

        let (_, _, had_errors) = ISO_8859_15.encode(&format!("{}\t{}", word.to_uppercase(), definition));
        if had_errors {
            return Err(BookwormError::Unencodable {
                word: word.clone(),
                encoding: POPDEFS_ENCODING,
            });
        }
    }

    let text = pack_popdefs(definitions);
    let (bytes, _, _) = ISO_8859_15.encode(&text);
    Ok(bytes.into_owned())
}
