// ==========================================
// 供应链分析系统 - 订单派生列服务
// ==========================================
// 职责: 由订单快照派生送达耗时与月度桶
// 红线: 纯函数,不回写订单表; 派生结果独立成表,
//       供履约/成本/趋势引擎共用,避免跨步骤隐式耦合
// ==========================================

use crate::domain::Order;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderFact - 订单派生事实
// ==========================================
// 与订单表按下标一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFact {
    /// 订单号（与源行对应）
    pub order_id: String,

    /// 送达耗时（天）: 实际送达 − 下单; 实际送达缺失为 None
    pub delivery_days: Option<i64>,

    /// 月度桶: 下单日期所在日历月 (YYYY-MM)
    pub year_month: String,
}

// ==========================================
// OrderDerivation - 派生列服务
// ==========================================
// 红线: 无状态,所有方法都是纯函数
pub struct OrderDerivation;

impl OrderDerivation {
    pub fn new() -> Self {
        Self
    }

    /// 为订单快照派生事实表
    pub fn derive(&self, orders: &[Order]) -> Vec<OrderFact> {
        orders
            .iter()
            .map(|order| OrderFact {
                order_id: order.order_id.clone(),
                delivery_days: order.delivery_days(),
                year_month: Self::month_bucket(order),
            })
            .collect()
    }

    /// 下单日期的日历月桶 (YYYY-MM)
    pub fn month_bucket(order: &Order) -> String {
        format!("{:04}-{:02}", order.order_date.year(), order.order_date.month())
    }
}

impl Default for OrderDerivation {
    fn default() -> Self {
        Self::new()
    }
}
