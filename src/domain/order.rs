// ==========================================
// 供应链分析系统 - 订单领域模型
// ==========================================
// 依据: orders_data 表 (一行一订单)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 订单记录
// ==========================================
// 红线: 加载后只读快照,派生列由引擎层另表输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // ===== 主键 =====
    pub order_id: String, // 订单唯一标识

    // ===== 时间信息 =====
    pub order_date: NaiveDate,              // 下单日期
    pub expected_delivery: NaiveDate,       // 预计送达日期
    pub actual_delivery: Option<NaiveDate>, // 实际送达日期（NULL=未记录）

    // ===== 履约标记 =====
    pub on_time: bool, // 上游标记: 是否按时送达 (Yes/No)

    // ===== 维度信息 =====
    pub warehouse: String, // 发货仓库
    pub category: String,  // 商品品类

    // ===== 金额 =====
    pub total_value: f64, // 订单总金额
}

impl Order {
    /// 送达耗时（天）: 实际送达 - 下单日期
    ///
    /// 实际送达日期缺失时返回 None,调用方必须从均值中剔除
    pub fn delivery_days(&self) -> Option<i64> {
        self.actual_delivery
            .map(|actual| (actual - self.order_date).num_days())
    }

    /// 延误天数: 实际送达 - 预计送达
    ///
    /// 仅对迟到订单有业务含义
    pub fn delay_days(&self) -> Option<i64> {
        self.actual_delivery
            .map(|actual| (actual - self.expected_delivery).num_days())
    }
}
