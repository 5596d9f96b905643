// src/generator/framework.rs

use crate::config::Scenario;
use crate::models::actor::{build_actor_route, ActorRoute};

/// アクタ経路テーブルの生成
///
/// # 引数
/// - `scenario`: 生成シナリオ
///
/// # 戻り値
/// - アクタ番号 1 から昇順に並んだ経路レコードの列
pub fn build_route_table(scenario: &Scenario) -> Vec<ActorRoute> {
    (1..=scenario.actor_count)
        .map(|i| build_actor_route(i, scenario))
        .collect()
}

/// テスト
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_scenario;

    /// test_build_route_table
    /// 既定シナリオから49件のレコードが生成され、actorID が "1" から "49" まで
    /// 昇順かつ一意であることを確認します。
    #[test]
    fn test_build_route_table() {
        let scenario = default_scenario();
        let routes = build_route_table(&scenario);

        assert_eq!(routes.len(), 49);
        assert_eq!(routes[0].actor_id, "1");
        assert_eq!(routes[48].actor_id, "49");
        for (k, route) in routes.iter().enumerate() {
            assert_eq!(route.actor_id, (k + 1).to_string());
        }
    }

    /// test_route_table_constant_vectors
    /// 全レコードの src / dist がシナリオの端点と完全一致することを確認します。
    #[test]
    fn test_route_table_constant_vectors() {
        let scenario = default_scenario();
        let routes = build_route_table(&scenario);

        for route in &routes {
            assert_eq!(route.src, [-6776.816428303229, -12590.548065851965, 0.0]);
            assert_eq!(route.dist, [-10710.589801851864, 950.3394480285897, 0.0]);
        }
    }
}
