// src/models/actor.rs

use serde::Serialize;

use crate::config::Scenario;

/// アクタ経路の構造体
///
/// フィールドの宣言順がそのまま JSON のキー順（actorID, src, dist）になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorRoute {
    #[serde(rename = "actorID")]
    pub actor_id: String, // アクタ識別子（10進文字列）
    pub src: [f64; 3],  // 出発点 [x, y, z] 座標
    pub dist: [f64; 3], // 目的地 [x, y, z] 座標
}

/// 1アクタ分の経路レコードを作成する純粋関数
///
/// # 引数
/// - `index`: アクタ番号（1始まり）
/// - `scenario`: 生成シナリオ
///
/// # 戻り値
/// - アクタ経路レコード
pub fn build_actor_route(index: u32, scenario: &Scenario) -> ActorRoute {
    ActorRoute {
        actor_id: index.to_string(),
        src: scenario.route_src,
        dist: scenario.route_dist,
    }
}
