// src/generator/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("出力ファイルの書き込みに失敗しました: {0}")]
    WriteFailure(#[from] std::io::Error),
    #[error("JSONシリアライズに失敗しました: {0}")]
    Serialize(#[from] serde_json::Error),
}
