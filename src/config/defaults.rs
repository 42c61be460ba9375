//! Built-in indicator, axis and cross-signal tables.
//!
//! Thresholds are read as `(min, max, invert)`: with `invert = false` the
//! indicator is "higher is better" and `min` maps to the worst severity.

use crate::domain::{AxisDefinition, CrossSignalDefinition, HardRange, IndicatorDefinition, Threshold};

type IndicatorRow = (&'static str, &'static str, &'static str, (f64, f64), (f64, f64, bool));

const INDICATORS: &[IndicatorRow] = &[
    // growth
    ("gdp_growth", "Real GDP growth (YoY)", "%", (-30.0, 30.0), (-2.0, 5.0, false)),
    ("industrial_production_yoy", "Industrial production (YoY)", "%", (-50.0, 50.0), (-5.0, 6.0, false)),
    ("manufacturing_pmi", "Manufacturing PMI", "index", (0.0, 100.0), (42.0, 56.0, false)),
    // prices
    ("cpi_yoy", "Consumer prices (YoY)", "%", (-20.0, 100.0), (1.0, 8.0, true)),
    ("core_cpi_yoy", "Core consumer prices (YoY)", "%", (-20.0, 100.0), (1.0, 6.0, true)),
    ("ppi_yoy", "Producer prices (YoY)", "%", (-50.0, 100.0), (0.0, 12.0, true)),
    // labor
    ("unemployment_rate", "Unemployment rate", "%", (0.0, 60.0), (3.0, 9.0, true)),
    ("employment_growth_yoy", "Employment growth (YoY)", "%", (-30.0, 30.0), (-1.5, 2.5, false)),
    ("youth_unemployment_rate", "Youth unemployment rate", "%", (0.0, 80.0), (6.0, 20.0, true)),
    // consumption
    ("retail_sales_mom", "Retail sales (MoM)", "%", (-50.0, 50.0), (-5.0, 2.0, false)),
    ("consumer_confidence", "Consumer confidence", "index", (0.0, 200.0), (80.0, 110.0, false)),
    ("household_debt_gdp", "Household debt to GDP", "%", (0.0, 300.0), (60.0, 110.0, true)),
    // external
    ("current_account", "Current account balance", "USD bn", (-1000.0, 1000.0), (-50.0, 30.0, false)),
    ("export_growth_yoy", "Export growth (YoY)", "%", (-80.0, 200.0), (-10.0, 10.0, false)),
    ("external_debt_gdp", "External debt to GDP", "%", (0.0, 500.0), (20.0, 80.0, true)),
    // currency
    ("exchange_rate_mom", "Exchange rate depreciation (MoM)", "%", (-50.0, 50.0), (-2.0, 7.0, true)),
    ("reserves_mom", "FX reserves (MoM)", "%", (-50.0, 50.0), (-10.0, 2.0, false)),
    ("reserves_import_months", "Reserves in months of imports", "months", (0.0, 60.0), (3.0, 9.0, false)),
    // rates
    ("rate_change_bp", "Policy rate change (MoM)", "bp", (-1000.0, 1000.0), (-25.0, 50.0, true)),
    ("bond_yield_10y", "10Y government bond yield", "%", (-2.0, 50.0), (2.0, 8.0, true)),
    ("yield_curve_spread_bp", "10Y-2Y yield spread", "bp", (-1000.0, 1000.0), (-50.0, 150.0, false)),
    // credit
    ("credit_spread_bp", "Corporate credit spread", "bp", (0.0, 5000.0), (100.0, 600.0, true)),
    ("npl_ratio", "Bank non-performing loan ratio", "%", (0.0, 100.0), (1.0, 8.0, true)),
    ("private_credit_gap", "Private credit-to-GDP gap", "pp", (-100.0, 100.0), (-5.0, 12.0, true)),
    // markets
    ("equity_mom", "Equity index (MoM)", "%", (-80.0, 200.0), (-12.0, 6.0, false)),
    ("house_price_yoy", "House prices (YoY)", "%", (-60.0, 100.0), (-8.0, 10.0, false)),
    ("volatility_index", "Equity volatility index", "index", (0.0, 200.0), (12.0, 45.0, true)),
];

const AXES: &[(&str, &str, [&str; 3])] = &[
    ("growth", "Output & Growth", ["gdp_growth", "industrial_production_yoy", "manufacturing_pmi"]),
    ("prices", "Inflation", ["cpi_yoy", "core_cpi_yoy", "ppi_yoy"]),
    ("labor", "Labor Market", ["unemployment_rate", "employment_growth_yoy", "youth_unemployment_rate"]),
    ("consumption", "Household Demand", ["retail_sales_mom", "consumer_confidence", "household_debt_gdp"]),
    ("external", "External Balance", ["current_account", "export_growth_yoy", "external_debt_gdp"]),
    ("currency", "Currency & Reserves", ["exchange_rate_mom", "reserves_mom", "reserves_import_months"]),
    ("rates", "Monetary Conditions", ["rate_change_bp", "bond_yield_10y", "yield_curve_spread_bp"]),
    ("credit", "Credit & Banking", ["credit_spread_bp", "npl_ratio", "private_credit_gap"]),
    ("markets", "Asset Markets", ["equity_mom", "house_price_yoy", "volatility_index"]),
];

const CROSS_SIGNALS: &[(&str, &str, [&str; 2], &str)] = &[
    ("stagflation", "Stagflation", ["growth", "prices"], "Output contracts while prices keep rising."),
    ("wage_price_spiral", "Wage-price pressure", ["prices", "labor"], "Inflation feeds through a stressed labor market."),
    ("demand_collapse", "Demand collapse", ["growth", "consumption"], "Weak output and household spending reinforce each other."),
    ("external_squeeze", "External squeeze", ["external", "currency"], "External deficits drain reserves and weaken the currency."),
    ("imported_inflation", "Imported inflation", ["currency", "prices"], "Depreciation passes through to consumer prices."),
    ("credit_crunch", "Credit crunch", ["rates", "credit"], "Tight money meets deteriorating credit quality."),
    ("debt_deflation", "Debt deflation", ["credit", "consumption"], "Household balance sheets and bank credit weaken together."),
    ("asset_credit_bust", "Asset-credit bust", ["markets", "credit"], "Falling asset prices impair collateral and lending."),
    ("capital_flight", "Capital flight", ["currency", "markets"], "Outflows hit the currency and local asset prices at once."),
    ("jobless_recession", "Jobless recession", ["growth", "labor"], "Output losses translate into job losses."),
    ("policy_trap", "Policy trap", ["rates", "prices"], "Rate tightening fails to contain inflation."),
    ("export_recession", "Export recession", ["external", "growth"], "Trade weakness drags on domestic output."),
    ("household_squeeze", "Household squeeze", ["consumption", "labor"], "Job stress cuts household demand."),
    ("rate_shock_contagion", "Rate shock contagion", ["markets", "rates"], "Rate moves spill into asset market volatility."),
    ("funding_stress", "Funding stress", ["external", "credit"], "External financing pressure reaches the banking system."),
];

pub fn default_indicators() -> Vec<IndicatorDefinition> {
    INDICATORS
        .iter()
        .map(|&(id, name, unit, (hmin, hmax), (tmin, tmax, invert))| IndicatorDefinition {
            id: id.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            hard_range: HardRange { min: hmin, max: hmax },
            threshold: Threshold { min: tmin, max: tmax, invert },
        })
        .collect()
}

pub fn default_axes() -> Vec<AxisDefinition> {
    AXES.iter()
        .map(|&(id, name, members)| AxisDefinition {
            id: id.to_string(),
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        })
        .collect()
}

pub fn default_cross_signals() -> Vec<CrossSignalDefinition> {
    CROSS_SIGNALS
        .iter()
        .map(|&(id, name, [a, b], description)| CrossSignalDefinition {
            id: id.to_string(),
            name: name.to_string(),
            axes: [a.to_string(), b.to_string()],
            description: description.to_string(),
        })
        .collect()
}
