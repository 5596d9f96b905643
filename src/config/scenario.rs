// src/config/scenario.rs

/// 生成シナリオの構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub actor_count: u32,     // 生成するアクタ数
    pub route_src: [f64; 3],  // 出発点 [x, y, z] 座標
    pub route_dist: [f64; 3], // 目的地 [x, y, z] 座標
}

/// 既定シナリオを返す純粋関数
///
/// # 戻り値
/// - 全アクタ共通の経路端点とアクタ数を持つシナリオ
pub fn default_scenario() -> Scenario {
    Scenario {
        actor_count: 49,
        route_src: [-6776.816428303229, -12590.548065851965, 0.0],
        route_dist: [-10710.589801851864, 950.3394480285897, 0.0],
    }
}
