// ==========================================
// 配电网KPI看板演示系统 - KPI目录表
// ==========================================
// 职责: 全部看板KPI定义的静态目录 (纯数据, 无行为)
// 约束: 目录顺序即合成顺序, 不可重排
// 约束: range_low <= range_high (kva 类型忽略区间, 使用固定档位)
// ==========================================

use crate::domain::{KpiSpec, ValueType};

const fn kpi(
    dashboard_id: &'static str,
    department: &'static str,
    name: &'static str,
    value_type: ValueType,
    range_low: f64,
    range_high: f64,
    unit: &'static str,
) -> KpiSpec {
    KpiSpec {
        dashboard_id,
        department,
        name,
        value_type,
        range_low,
        range_high,
        unit,
    }
}

/// KPI目录: (看板, 部门, 名称, 取值类型, 下限, 上限, 单位)
pub const KPI_CATALOG: &[KpiSpec] = &[
    // ===== Dashboard-1 =====
    kpi("Dashboard-1", "Finance", "Feeder Loss (%)", ValueType::Percentage, 3.0, 18.0, "%"),
    kpi("Dashboard-1", "Finance", "DT (Distribution Transformer) Loss (%)", ValueType::Percentage, 2.0, 12.0, "%"),
    kpi("Dashboard-1", "Finance", "LT Loss (%)", ValueType::Percentage, 1.0, 8.0, "%"),
    kpi("Dashboard-1", "Finance", "Billing Efficiency (%)", ValueType::Percentage, 78.0, 98.0, "%"),
    kpi("Dashboard-1", "Finance", "Collection Efficiency (%)", ValueType::Percentage, 72.0, 96.0, "%"),
    kpi("Dashboard-1", "Finance", "AT&C Loss (%)", ValueType::Percentage, 8.0, 28.0, "%"),
    kpi("Dashboard-1", "Finance", "Top X Best/Worst Feeders/DTs", ValueType::Count, 5.0, 20.0, "count"),
    kpi("Dashboard-1", "Finance", "Top High Loss DTs / Feeders", ValueType::Count, 8.0, 35.0, "count"),
    kpi("Dashboard-1", "Finance", "Top High-Loss Feeders / DTs", ValueType::Count, 6.0, 28.0, "count"),
    // ===== Dashboard-2 =====
    kpi("Dashboard-2", "Operation", "SAIDI", ValueType::Minutes, 45.0, 380.0, "min"),
    kpi("Dashboard-2", "Operation", "SAIFI", ValueType::Index, 2.0, 25.0, "interruptions"),
    kpi("Dashboard-2", "Operation", "CAIDI", ValueType::Minutes, 25.0, 95.0, "min"),
    kpi("Dashboard-2", "Operation", "CAIFI", ValueType::Index, 1.0, 18.0, "interruptions"),
    kpi("Dashboard-2", "Operation", "MAIFI", ValueType::Index, 0.2, 8.0, "interruptions"),
    kpi("Dashboard-2", "Operation", "Number of Outages (Frequency)", ValueType::Count, 12.0, 450.0, "count"),
    kpi("Dashboard-2", "Operation", "Duration of Outages (Minutes)", ValueType::Minutes, 120.0, 7200.0, "min"),
    kpi("Dashboard-2", "Operation", "DT/Feeder Reliability Trends (Monthly/Yearly)", ValueType::Percentage, 85.0, 99.5, "%"),
    kpi("Dashboard-2", "Operation", "DTs with High Failure Rate", ValueType::Count, 3.0, 45.0, "count"),
    kpi("Dashboard-2", "Operation", "Detection Accuracy", ValueType::Percentage, 82.0, 98.0, "%"),
    kpi("Dashboard-2", "Operation", "False Positive Rate", ValueType::Percentage, 1.0, 15.0, "%"),
    kpi("Dashboard-2", "Operation", "Field inspection hit-rate", ValueType::Percentage, 65.0, 92.0, "%"),
    kpi("Dashboard-2", "Operation", "MTTI", ValueType::Minutes, 8.0, 95.0, "min"),
    kpi("Dashboard-2", "Operation", "MTTR", ValueType::Minutes, 25.0, 180.0, "min"),
    kpi("Dashboard-2", "Operation", "Alert response time", ValueType::Minutes, 5.0, 45.0, "min"),
    kpi("Dashboard-2", "Operation", "Planned outage suppression rate", ValueType::Percentage, 70.0, 98.0, "%"),
    kpi("Dashboard-2", "Analytics", "Low-voltage pockets", ValueType::Count, 2.0, 28.0, "count"),
    kpi("Dashboard-2", "Operation", "Feeders with Maximum Outages", ValueType::Count, 4.0, 22.0, "count"),
    kpi("Dashboard-2", "Operation", "Reliability Improvement Trend", ValueType::Percentage, 2.0, 18.0, "%"),
    kpi("Dashboard-2", "Operation", "Consumer Service Reliability Score", ValueType::Score, 72.0, 95.0, "score"),
    kpi("Dashboard-2", "Operation", "Composite Reliability Score", ValueType::Score, 68.0, 94.0, "score"),
    kpi("Dashboard-2", "Operation", "Composite Efficiency Score", ValueType::Score, 65.0, 92.0, "score"),
    // ===== Dashboard-3 =====
    kpi("Dashboard-3", "Technical", "% DT Peak Loading", ValueType::Percentage, 45.0, 98.0, "%"),
    kpi("Dashboard-3", "Technical", "% DT Loading", ValueType::Percentage, 38.0, 92.0, "%"),
    kpi("Dashboard-3", "Technical", "DT Load (kVA)", ValueType::Kva, 25.0, 315.0, "kVA"),
    kpi("Dashboard-3", "Technical", "% Loading Bands", ValueType::Percentage, 0.0, 100.0, "%"),
    kpi("Dashboard-3", "Technical", "Top Overloaded DTs / Feeders", ValueType::Count, 5.0, 30.0, "count"),
    kpi("Dashboard-3", "Technical", "Load Rise Trend", ValueType::Percentage, 2.0, 22.0, "%"),
    kpi("Dashboard-3", "Technical", "Consumers exceeding sanctioned load", ValueType::Count, 15.0, 380.0, "count"),
    kpi("Dashboard-3", "Technical", "% Consumers with Load Violation", ValueType::Percentage, 0.5, 12.0, "%"),
    kpi("Dashboard-3", "Technical", "Load Duration Curve & Asset Loading Spread", ValueType::Percentage, 55.0, 88.0, "%"),
    kpi("Dashboard-3", "Technical", "DT Failure Rate (%)", ValueType::Percentage, 0.2, 5.5, "%"),
    kpi("Dashboard-3", "Technical", "Top Overloaded Assets", ValueType::Count, 8.0, 42.0, "count"),
    kpi("Dashboard-3", "Technical", "Top Power Quality Issues", ValueType::Count, 6.0, 35.0, "count"),
    // ===== Dashboard-4 =====
    kpi("Dashboard-4", "Operation", "Voltage Deviation (%)", ValueType::Percentage, 1.0, 12.0, "%"),
    kpi("Dashboard-4", "Operation", "Voltage Deviation Index (VDI)", ValueType::Index, 0.02, 0.95, "index"),
    kpi("Dashboard-4", "Operation", "Frequency Deviation Index (FDI)", ValueType::Index, 0.01, 0.35, "index"),
    kpi("Dashboard-4", "Operation", "Voltage Fluctuation Index", ValueType::Index, 0.01, 0.45, "index"),
    kpi("Dashboard-4", "Operation", "Voltage Unbalance Index", ValueType::Index, 0.02, 0.28, "index"),
    kpi("Dashboard-4", "Operation", "Voltage Drop (V)", ValueType::Count, 5.0, 45.0, "V"),
    kpi("Dashboard-4", "Operation", "Low Power Factor (%) by DT/Feeder", ValueType::Percentage, 60.0, 92.0, "%"),
    kpi("Dashboard-4", "Operation", "Meter Current Unbalance (%)", ValueType::Percentage, 2.0, 18.0, "%"),
    kpi("Dashboard-4", "Operation", "% Time beyond voltage tolerance band", ValueType::Percentage, 0.5, 15.0, "%"),
    kpi("Dashboard-4", "Operation", "% Time with unacceptable current imbalance (>10%)", ValueType::Percentage, 1.0, 22.0, "%"),
    // ===== Dashboard-5 =====
    kpi("Dashboard-5", "Analytics", "Number of Tamper Alerts (Cover Open)", ValueType::Count, 2.0, 85.0, "count"),
    kpi("Dashboard-5", "Analytics", "Number of Tamper Alerts (External Magnet)", ValueType::Count, 0.0, 42.0, "count"),
    kpi("Dashboard-5", "Analytics", "Number of Tamper Alerts (Neutral Disturbance)", ValueType::Count, 1.0, 38.0, "count"),
    kpi("Dashboard-5", "Analytics", "Number of Tamper Alerts (Neutral Missing)", ValueType::Count, 0.0, 25.0, "count"),
    kpi("Dashboard-5", "Analytics", "Consumption Comparison - Energy Gap (kWh)", ValueType::Count, 120.0, 8500.0, "kWh"),
    kpi("Dashboard-5", "Analytics", "Total anomalies detected (by time period)", ValueType::Count, 25.0, 420.0, "count"),
    kpi("Dashboard-5", "Analytics", "Anomalies by type", ValueType::Count, 3.0, 12.0, "types"),
    kpi("Dashboard-5", "Analytics", "Anomalies by severity", ValueType::Count, 2.0, 5.0, "levels"),
    kpi("Dashboard-5", "Analytics", "Anomalies by geography", ValueType::Count, 5.0, 45.0, "zones"),
    kpi("Dashboard-5", "Analytics", "Anomaly trends (daily/weekly/monthly)", ValueType::Percentage, -15.0, 25.0, "%"),
    kpi("Dashboard-5", "Analytics", "Repeat anomaly tracking", ValueType::Count, 3.0, 65.0, "count"),
    // ===== Dashboard-6 =====
    kpi("Dashboard-6", "Analytics", "Theft Suspect Flags", ValueType::Count, 8.0, 120.0, "count"),
    kpi("Dashboard-6", "Analytics", "% Reduction in Theft Events (monthly trend)", ValueType::Percentage, 5.0, 45.0, "%"),
    kpi("Dashboard-6", "Analytics", "Theft / Load diversion", ValueType::Count, 2.0, 55.0, "count"),
    kpi("Dashboard-6", "Analytics", "Areas with Highest Theft Risk", ValueType::Count, 3.0, 28.0, "count"),
    kpi("Dashboard-6", "Finance", "Revenue Recovery Improvement (%)", ValueType::Percentage, 3.0, 28.0, "%"),
    // ===== Dashboard-7 =====
    kpi("Dashboard-7", "Analytics", "Communication health issues", ValueType::Count, 5.0, 95.0, "count"),
    kpi("Dashboard-7", "Technical", "Signal strength statistics", ValueType::Percentage, 72.0, 98.0, "%"),
    kpi("Dashboard-7", "Technical", "Packet loss percentage", ValueType::Percentage, 0.2, 8.0, "%"),
    kpi("Dashboard-7", "Technical", "Communication retry counts", ValueType::Count, 50.0, 850.0, "count"),
    kpi("Dashboard-7", "Technical", "Non-reporting meters (>24 hours)", ValueType::Count, 12.0, 220.0, "count"),
    kpi("Dashboard-7", "Technical", "Communication technology performance (RF/GPRS/PLC)", ValueType::Percentage, 85.0, 99.0, "%"),
    kpi("Dashboard-7", "Technical", "Weak Signal Percentage", ValueType::Percentage, 2.0, 18.0, "%"),
    // ===== Dashboard-8 =====
    kpi("Dashboard-8", "Advanced Analytics", "Auto-indexing consumers and DTRs for correct mapping", ValueType::Count, 1200.0, 45000.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Track updated tag of DTs to Feeders", ValueType::Count, 85.0, 1200.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Track updated tag of consumers to DTs", ValueType::Count, 250.0, 8500.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Re-index consumer/DTR data for correct past-period T&D loss", ValueType::Count, 500.0, 12000.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Mapping Accuracy (95%)", ValueType::Percentage, 88.0, 98.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "DT-to-meter mapping accuracy", ValueType::Percentage, 90.0, 99.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "% meters pending field verification (<5%)", ValueType::Percentage, 0.8, 6.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "Confidence scoring (High/Medium/Low)", ValueType::Percentage, 75.0, 95.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "Total assets tracked (Meters/Feeders/DTs)", ValueType::Count, 5000.0, 85000.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Overloaded DTs identified and monitored", ValueType::Count, 15.0, 180.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Mismatch analysis (Feeder→DT, DT→Meter)", ValueType::Count, 20.0, 450.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Correctly mapped meters (%)", ValueType::Percentage, 88.0, 99.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "Incorrectly mapped meters requiring correction (%)", ValueType::Percentage, 0.5, 8.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "Verification pending count", ValueType::Count, 50.0, 1200.0, "count"),
    kpi("Dashboard-8", "Advanced Analytics", "Correction cycle time (avg days)", ValueType::Count, 2.0, 18.0, "days"),
    kpi("Dashboard-8", "Advanced Analytics", "Transformer utilization rate (% of rated capacity)", ValueType::Percentage, 45.0, 88.0, "%"),
    kpi("Dashboard-8", "Advanced Analytics", "Field verification completion rate", ValueType::Percentage, 82.0, 99.0, "%"),
    // ===== Dashboard-9 =====
    kpi("Dashboard-9", "Analytics", "Tamper sequence detection", ValueType::Count, 5.0, 75.0, "count"),
    kpi("Dashboard-9", "Analytics", "Voltage/Current imbalance", ValueType::Count, 8.0, 95.0, "count"),
    kpi("Dashboard-9", "Analytics", "Power factor deterioration", ValueType::Count, 3.0, 42.0, "count"),
    kpi("Dashboard-9", "Analytics", "Overload / MD breach risk", ValueType::Count, 12.0, 88.0, "count"),
    kpi("Dashboard-9", "Analytics", "Hidden outage pockets", ValueType::Count, 2.0, 35.0, "count"),
    kpi("Dashboard-9", "Analytics", "Data quality issues", ValueType::Count, 15.0, 120.0, "count"),
    kpi("Dashboard-9", "Analytics", "Reverse flow", ValueType::Count, 0.0, 28.0, "count"),
    kpi("Dashboard-9", "Analytics", "Consumption spikes/drops", ValueType::Count, 20.0, 180.0, "count"),
    kpi("Dashboard-9", "Analytics", "Phase-level mapping accuracy", ValueType::Percentage, 82.0, 98.0, "%"),
    kpi("Dashboard-9", "Analytics", "Phase imbalance reduced by minimum 30%", ValueType::Percentage, 28.0, 55.0, "%"),
    kpi("Dashboard-9", "Analytics", "Real-time phase load monitoring per transformer", ValueType::Percentage, 85.0, 99.0, "%"),
    kpi("Dashboard-9", "Analytics", "Imbalance alerts when threshold exceeded", ValueType::Count, 10.0, 95.0, "count"),
    kpi("Dashboard-9", "Analytics", "Phase transfer recommendations (what-if)", ValueType::Count, 5.0, 65.0, "count"),
];
