use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sum;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CashFlowPeriod {
    pub period: String,
    pub inflows: Decimal,
    pub outflows: Decimal,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CashFlowData {
    #[serde(default)]
    pub monthly: Vec<CashFlowPeriod>,
    #[serde(default)]
    pub quarterly: Vec<CashFlowPeriod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CashFlowView {
    #[default]
    Monthly,
    Quarterly,
}

impl CashFlowView {
    pub fn label(&self) -> &'static str {
        match self {
            CashFlowView::Monthly => "Monthly",
            CashFlowView::Quarterly => "Quarterly",
        }
    }
}

/// Which side dominated a period. Zero net counts as inflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Inflow,
    Outflow,
}

impl FlowDirection {
    pub fn of(net: Decimal) -> Self {
        if net.is_sign_negative() && !net.is_zero() {
            FlowDirection::Outflow
        } else {
            FlowDirection::Inflow
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            FlowDirection::Inflow => "+",
            FlowDirection::Outflow => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowRow {
    pub period: String,
    pub inflows: Decimal,
    pub outflows: Decimal,
    pub net: Decimal,
    pub direction: FlowDirection,
}

impl CashFlowRow {
    pub fn new(period: &CashFlowPeriod) -> Self {
        let net = period.inflows - period.outflows;
        Self {
            period: period.period.clone(),
            inflows: period.inflows,
            outflows: period.outflows,
            net,
            direction: FlowDirection::of(net),
        }
    }

    /// Net shown without its sign; `direction` carries the sign instead
    pub fn display_net(&self) -> Decimal {
        self.net.abs()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashFlow {
    pub view: CashFlowView,
    pub rows: Vec<CashFlowRow>,
}

impl CashFlow {
    pub fn new(data: &CashFlowData, view: CashFlowView) -> Self {
        let periods = match view {
            CashFlowView::Monthly => &data.monthly,
            CashFlowView::Quarterly => &data.quarterly,
        };
        Self {
            view,
            rows: periods.iter().map(CashFlowRow::new).collect(),
        }
    }

    pub fn total_inflows(&self) -> Decimal {
        sum(&self.rows, |row| row.inflows)
    }

    pub fn total_outflows(&self) -> Decimal {
        sum(&self.rows, |row| row.outflows)
    }

    pub fn net_cash_flow(&self) -> Decimal {
        self.total_inflows() - self.total_outflows()
    }
}
