// src/main.rs

use std::error::Error;

use config::scenario::*;
use generator::framework::*;
use generator::json::*;

mod config;
mod generator;
mod models;

fn main() -> Result<(), Box<dyn Error>> {
    // シナリオの定義
    let scenario = default_scenario();

    // アクタ経路テーブルの生成
    let routes = build_route_table(&scenario);

    // JSON出力の書き込み
    write_route_table("out_data.txt", &routes)?;

    println!("Generation finished. Results saved to out_data.txt");
    Ok(())
}
