// src/generator/json.rs

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::generator::error::GeneratorError;
use crate::models::ActorRoute;

/// JSON文字列の作成
///
/// # 引数
/// - `routes`: アクタ経路レコードの列
///
/// # 戻り値
/// - 経路テーブル全体を表す JSON 配列の文字列
pub fn route_table_to_json(routes: &Vec<ActorRoute>) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string(routes)?)
}

/// JSON出力の書き込み
///
/// 出力先のファイルは毎回作り直される（既存ファイルは切り詰められる）。
///
/// # 引数
/// - `path`: 出力ファイルのパス
/// - `routes`: アクタ経路レコードの列
pub fn write_route_table(path: &str, routes: &Vec<ActorRoute>) -> Result<(), GeneratorError> {
    let json = route_table_to_json(routes)?;
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}
