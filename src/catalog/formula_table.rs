// ==========================================
// 配电网KPI看板演示系统 - 指标口径对照表
// ==========================================
// 职责: KPI名称 -> 描述性口径记录 (公式/数据来源/列/逻辑) 的有序查找表
// 约束: 表顺序即匹配顺序, 首个命中即返回, 不可改为最长匹配
// 约束: 键为规范化短语 (小写, 单空格, 无 ;/ 标点)
// ==========================================

use crate::domain::FormulaMeta;

const fn meta(
    exact_formula: &'static str,
    required_data: &'static str,
    columns_used: &'static str,
    formula_logic: &'static str,
) -> FormulaMeta {
    FormulaMeta {
        exact_formula,
        required_data,
        columns_used,
        formula_logic,
    }
}

/// 口径对照表: 规范化键 -> 四字段口径记录
pub const FORMULA_TABLE: &[(&str, FormulaMeta)] = &[
    (
        "overloaded dts identified",
        meta(
            "% Loading = (√3 × Vavg × Iavg /1000 ÷ Rated kVA) ×100 → Flag if >80%",
            "DT Block: L1/L2/L3 Voltage, L1/L2/L3 Current; Asset Master: Rated Capacity (kVA)",
            "L1/L2/L3 Voltage, L1/L2/L3 Current, Rated kVA",
            "Flag when % Loading > 80%",
        ),
    ),
    (
        "transformer utilization rate",
        meta(
            "(Actual kVA Load ÷ Rated Capacity) ×100",
            "DT Block: Voltage & Current; Asset Master: Rated kVA",
            "Voltage, Current, Rated kVA",
            "Actual kVA Load ÷ Rated Capacity × 100",
        ),
    ),
    (
        "reduction in theft events",
        meta(
            "((Baseline Theft − Current Theft) ÷ Baseline Theft) ×100",
            "Event Log: Theft/Tamper confirmed events",
            "Event type, Timestamp",
            "Baseline vs Current period theft events",
        ),
    ),
    (
        "tamper sequence detection",
        meta(
            "Pattern detection within time window (e.g., Power Fail → Cover Open → Reverse Current)",
            "Event Profile (IS 15959): Meter ID, Timestamp, Event Code, Event Status",
            "Meter ID, Timestamp, Event Code, Event Status",
            "Sequence pattern match in time window",
        ),
    ),
    (
        "power factor deterioration",
        meta(
            "PF = kWh ÷ kVAh; Flag if PF <0.85 sustained",
            "Block Profile: kWh(Imp), kVAh(Imp)",
            "kWh(Imp), kVAh(Imp)",
            "PF = kWh / kVAh; flag when PF < 0.85 sustained",
        ),
    ),
    (
        "overload md breach risk",
        meta(
            "(Max Demand ÷ Sanctioned Load) ×100; Flag if >90%",
            "Consumer Profile: Max Demand; Consumer Master: Sanctioned Load",
            "Max Demand, Sanctioned Load",
            "Flag when (Max Demand / Sanctioned Load) × 100 > 90%",
        ),
    ),
    (
        "real-time phase load monitoring",
        meta(
            "Phase kVA = Vphase × Iphase ÷1000",
            "DT Block: L1/L2/L3 Voltage & Current",
            "L1/L2/L3 Voltage, L1/L2/L3 Current",
            "Per-phase kVA = V × I / 1000",
        ),
    ),
    (
        "phase transfer recommendation",
        meta(
            "Imbalance % = (Max Phase − Avg Phase) ÷ Avg Phase ×100",
            "DT Block: Phase currents; Consumer Phase Mapping",
            "L1/L2/L3 Current, Consumer-Phase mapping",
            "Recommend phase transfer when imbalance % exceeds threshold",
        ),
    ),
    (
        "lt loss",
        meta(
            "(DT Energy − Σ Consumer Energy) ÷ DT Energy ×100",
            "DT Block Energy; Consumer Block Energy",
            "DT Energy, Consumer Energy (sum)",
            "Energy loss % at DT",
        ),
    ),
    (
        "billing efficiency",
        meta(
            "(Billed Energy ÷ Total Energy Supplied) ×100",
            "Billing DB: Billed Units; Energy Input Data",
            "Billed Units, Total Energy Supplied",
            "Billed ÷ Supplied × 100",
        ),
    ),
    (
        "collection efficiency",
        meta(
            "(Amount Collected ÷ Amount Billed) ×100",
            "Billing System Data",
            "Amount Collected, Amount Billed",
            "Collected ÷ Billed × 100",
        ),
    ),
    (
        "at&c loss",
        meta(
            "AT&C = 1 − (Billing Eff × Collection Eff)",
            "Billing + Collection Data",
            "Billing Efficiency, Collection Efficiency",
            "1 − (Billing Eff × Collection Eff)",
        ),
    ),
    (
        "revenue recovery improvement",
        meta(
            "((Recovered ₹ − Baseline ₹) ÷ Baseline ₹) ×100",
            "Revenue DB",
            "Recovered Amount, Baseline Amount",
            "Recovered vs Baseline revenue %",
        ),
    ),
    (
        "saidi",
        meta(
            "Total Interruption Minutes ÷ Total Customers",
            "Outage Event DB; Consumer Count",
            "Interruption minutes, Total Customers",
            "Sum(Outage Minutes) / Total Customers",
        ),
    ),
    (
        "saifi",
        meta(
            "Total Interruptions ÷ Total Customers",
            "Outage Event DB",
            "Interruption count, Total Customers",
            "Total Interruptions / Total Customers",
        ),
    ),
    (
        "caidi",
        meta(
            "SAIDI ÷ SAIFI",
            "SAIDI, SAIFI",
            "SAIDI, SAIFI",
            "SAIDI / SAIFI",
        ),
    ),
    (
        "caifi",
        meta(
            "Total Interruptions ÷ Affected Customers",
            "Outage DB",
            "Interruptions, Affected Customers",
            "Interruptions / Affected Customers",
        ),
    ),
    (
        "maifi",
        meta(
            "Momentary Interruptions ÷ Total Customers",
            "Outage DB (<5 min events)",
            "Momentary interruptions, Total Customers",
            "Momentary (<5 min) / Total Customers",
        ),
    ),
    (
        "number of outages",
        meta(
            "Count (outage events)",
            "Outage Event DB",
            "Outage Event ID, Timestamp",
            "COUNT(outage events)",
        ),
    ),
    (
        "duration of outages",
        meta(
            "Sum (outage duration minutes)",
            "Outage Event DB",
            "Outage start, Outage end",
            "SUM(duration minutes)",
        ),
    ),
    (
        "dt feeder reliability trends",
        meta(
            "Monthly Trend (SAIDI/SAIFI/Outage Minutes)",
            "Outage DB + Asset Mapping",
            "SAIDI, SAIFI, Outage Minutes by month",
            "Trend of SAIDI, SAIFI, outage minutes",
        ),
    ),
    (
        "frequency deviation index",
        meta(
            "Σ |f − fnom|",
            "Frequency samples",
            "Frequency (Hz), Nominal frequency",
            "Sum of |f - fnom| over period",
        ),
    ),
    (
        "low power factor by dt feeder",
        meta(
            "(Blocks with PF < threshold ÷ Total Blocks) ×100",
            "Block Profile: kWh, kVAh",
            "kWh, kVAh per block",
            "PF = kWh/kVAh; % blocks with PF < threshold (e.g. 0.85)",
        ),
    ),
    (
        "dts with high failure rate",
        meta(
            "(Failures ÷ Total DTs) ×100",
            "Maintenance DB",
            "Failure count, Total DTs",
            "Failures / Total DTs × 100",
        ),
    ),
    (
        "field inspection hit-rate",
        meta(
            "(Confirmed Cases ÷ Total Inspections) ×100",
            "Inspection Workflow System",
            "Confirmed cases, Total inspections",
            "Confirmed / Total Inspections × 100",
        ),
    ),
    (
        "mttr",
        meta(
            "Restore Time − Fault Detection Time",
            "Event DB + Ticket System",
            "Restore Time, Fault Detection Time",
            "Mean Time To Restore",
        ),
    ),
    (
        "alert response time",
        meta(
            "Acknowledged Time − Alert Created Time",
            "Alert System Logs",
            "Acknowledged Time, Alert Created Time",
            "Time to acknowledge alert",
        ),
    ),
    (
        "planned outage suppression rate",
        meta(
            "(Muted Alerts ÷ Total Alerts) ×100",
            "Alert System + Outage Schedule",
            "Muted Alerts, Total Alerts",
            "Muted / Total × 100",
        ),
    ),
    (
        "feeders with maximum outages",
        meta(
            "Rank by outage count or duration",
            "Outage DB",
            "Feeder ID, Outage count/duration",
            "Rank feeders by outage count or duration",
        ),
    ),
    (
        "reliability improvement trend",
        meta(
            "Monthly Trend (SAIDI/SAIFI)",
            "Outage DB",
            "SAIDI, SAIFI by month",
            "Trend of SAIDI and SAIFI",
        ),
    ),
    (
        "consumer service reliability score",
        meta(
            "Weighted Composite (SAIDI, SAIFI, Complaints)",
            "Outage DB + Complaint DB",
            "SAIDI, SAIFI, Complaint count",
            "Weighted score from SAIDI, SAIFI, complaints",
        ),
    ),
    (
        "composite reliability score",
        meta(
            "Weighted Reliability KPIs",
            "Reliability Data",
            "SAIDI, SAIFI, CAIDI, etc.",
            "Weighted combination of reliability KPIs",
        ),
    ),
    (
        "composite efficiency score",
        meta(
            "Weighted (Loss + Billing + Collection)",
            "Energy + Billing Data",
            "Loss %, Billing Eff, Collection Eff",
            "Weighted loss, billing, collection",
        ),
    ),
    (
        "loading bands",
        meta(
            "Categorize % Loading into thresholds",
            "DT Block + Rated Capacity",
            "DT Load, Rated kVA",
            "Band by % Loading (e.g. 0–50, 50–80, 80–100, >100)",
        ),
    ),
    (
        "consumers exceeding sanctioned load",
        meta(
            "Max Demand > Sanctioned Load",
            "Consumer Profile + Master Data",
            "Max Demand, Sanctioned Load",
            "Count where Max Demand > Sanctioned Load",
        ),
    ),
    (
        "consumers with load violation",
        meta(
            "(Violators ÷ Total Consumers) ×100",
            "Consumer Demand Data",
            "Violators count, Total Consumers",
            "Violators / Total × 100",
        ),
    ),
    (
        "communication retry counts",
        meta(
            "Count (retry events per meter)",
            "Communication Log",
            "Meter ID, Retry events",
            "COUNT(retry events) per meter",
        ),
    ),
    (
        "dt failure rate",
        meta(
            "(Failures ÷ Total DTs) ×100",
            "Maintenance DB",
            "Failures, Total DTs",
            "Failures / Total DTs × 100",
        ),
    ),
    (
        "top overloaded assets",
        meta(
            "Rank by % Loading or Peak Load",
            "DT Block + Rated Capacity",
            "DT Load, Rated kVA",
            "Rank by % Loading or peak kVA",
        ),
    ),
    (
        "total assets tracked",
        meta(
            "Meters: COUNT(DISTINCT newMeterNumber); Feeders: COUNT(DISTINCT FeederCode); DTs: COUNT(DISTINCT DTRCode)",
            "Asset Master / Mapping tables",
            "newMeterNumber, FeederCode, DTRCode",
            "Meters: COUNT(DISTINCT newMeterNumber); Feeders: COUNT(DISTINCT FeederCode); DTs: COUNT(DISTINCT DTRCode)",
        ),
    ),
    (
        "verification pending count",
        meta(
            "COUNT(*) WHERE QC status not Approved",
            "QC workflow tables",
            "QC1Status, QC2Status, QC3Status",
            "COUNT(*) WHERE QC1Status != 'Approved' OR QC2Status != 'Approved' OR QC3Status != 'Approved'",
        ),
    ),
    (
        "correction cycle time",
        meta(
            "For each meter: Cycle Time = Final_QC_Date − installationDate; Avg = MEAN(Cycle Time)",
            "QC and installation dates",
            "QC1DoneDate, QC2DoneDate, QC3DoneDate, installationDate",
            "Cycle Time = Final_QC_Date − installationDate; Avg Cycle Time = MEAN(Cycle Time)",
        ),
    ),
    (
        "signal strength statistics",
        meta(
            "Mean: AVG(TSP1, TSP2); Min/Max: MIN, MAX; Std Dev: STD(TSP1, TSP2)",
            "Meter communication profile",
            "TSP1 (dBm), TSP2 (dBm)",
            "Mean Signal Strength: AVG(TSP1, TSP2); Min/Max: MIN, MAX; Std Dev: STD(TSP1, TSP2)",
        ),
    ),
    (
        "weak signal percentage",
        meta(
            "Weak % = (Count of meters where TSP < threshold / Total meters) × 100",
            "TSP1, TSP2 (dBm); threshold e.g. -90 dBm",
            "TSP1 (dBm), TSP2 (dBm)",
            "Define weak threshold (e.g. -90 dBm); Weak % = (Meters with TSP < threshold / Total meters) × 100",
        ),
    ),
    (
        "non-reporting meters",
        meta(
            "Meter is non-reporting if: Current_Time − Last_Report_Time > 24 hours",
            "RTC, Meter ID",
            "RTC, newMeterNumber",
            "Last_Report_Time = MAX(RTC) per meter; flag if Current_Time − Last_Report_Time > 24 hours",
        ),
    ),
];
