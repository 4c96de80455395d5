//! Plan detail page cost model.

use serde::{Deserialize, Serialize};

use super::inputs::UserInputs;
use crate::models::{DataCell, FamilyMakeup, PlanRecord, PremiumColumn};
use crate::services::{out_of_pocket_premium, parse_currency_input};

/// Age whose premium is quoted as "the" monthly premium.
pub const REFERENCE_AGE: u8 = 30;

/// Salary share below which a plan is [`AffordabilityBand::Affordable`].
pub const AFFORDABLE_PERCENT: f64 = 10.0;
/// Salary share below which a plan is [`AffordabilityBand::Moderate`].
pub const MODERATE_PERCENT: f64 = 15.0;

/// Query parameters of a plan detail link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_makeup: Option<String>,
    #[serde(
        default,
        alias = "average_monthly_salary",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ichra_amount: Option<String>,
}

impl DetailParams {
    /// Link parameters for submitted listing inputs. Blank fields are left
    /// out.
    pub fn from_inputs(inputs: &UserInputs) -> Self {
        let filled = |text: &str| Some(text.trim()).filter(|t| !t.is_empty()).map(str::to_string);
        Self {
            family_makeup: inputs
                .demo
                .family_makeup
                .map(|f| f.detail_key().to_string()),
            monthly_salary: filled(&inputs.demo.monthly_salary),
            ichra_amount: filled(&inputs.demo.ichra_amount),
        }
    }

    pub fn family(&self) -> Option<FamilyMakeup> {
        self.family_makeup.as_deref().and_then(FamilyMakeup::from_key)
    }

    pub fn salary(&self) -> f64 {
        self.monthly_salary.as_deref().map_or(0.0, parse_currency_input)
    }

    pub fn contribution(&self) -> f64 {
        self.ichra_amount.as_deref().map_or(0.0, parse_currency_input)
    }
}

/// Premium quoted at one age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PremiumPoint {
    pub age: u8,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityBand {
    Affordable,
    Moderate,
    Expensive,
}

impl AffordabilityBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent < AFFORDABLE_PERCENT {
            AffordabilityBand::Affordable
        } else if percent < MODERATE_PERCENT {
            AffordabilityBand::Moderate
        } else {
            AffordabilityBand::Expensive
        }
    }
}

/// Monthly cost as a share of monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryShare {
    pub percent: f64,
    pub band: AffordabilityBand,
    /// `percent` capped at 100, for a progress bar.
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualCost {
    pub without_contribution: f64,
    pub with_contribution: f64,
    /// Only when a contribution is given.
    pub savings: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    Low,
    Moderate,
    High,
}

/// Estimated yearly spend under a healthcare usage level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageScenario {
    pub level: UsageLevel,
    pub annual_premium: f64,
    pub medical_costs: Option<f64>,
    pub total: Option<f64>,
}

const LOW_USAGE_COSTS: f64 = 500.0;
const MODERATE_USAGE_COSTS: f64 = 2000.0;

/// Cost figures shown on a plan's detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDetailView {
    pub family_makeup: Option<FamilyMakeup>,
    pub family_label: Option<&'static str>,
    pub breakdown: Vec<PremiumPoint>,
    pub monthly_premium: Option<f64>,
    pub monthly_salary: f64,
    pub contribution: f64,
    pub your_monthly_cost: Option<f64>,
    pub annual: Option<AnnualCost>,
    pub salary_share: Option<SalaryShare>,
    pub usage: Vec<UsageScenario>,
}

fn amount(cell: Option<&DataCell>) -> Option<f64> {
    cell.and_then(DataCell::as_amount)
}

impl PlanDetailView {
    pub fn build(plan: &PlanRecord, params: &DetailParams) -> Self {
        let family = params.family();
        let salary = params.salary();
        let contribution = params.contribution();

        let columns: &[PremiumColumn] = family.map(FamilyMakeup::detail_columns).unwrap_or(&[]);
        let breakdown: Vec<PremiumPoint> = columns
            .iter()
            .map(|&column| PremiumPoint {
                age: column.age(),
                value: amount(plan.premiums.get(column)),
            })
            .collect();

        let monthly_premium = breakdown
            .iter()
            .find(|point| point.age == REFERENCE_AGE)
            .and_then(|point| point.value);
        let your_monthly_cost = out_of_pocket_premium(monthly_premium, contribution);

        let annual = monthly_premium.zip(your_monthly_cost).map(|(premium, cost)| AnnualCost {
            without_contribution: premium * 12.0,
            with_contribution: cost * 12.0,
            savings: (contribution > 0.0).then(|| contribution * 12.0),
        });

        let salary_share = your_monthly_cost
            .filter(|_| salary > 0.0)
            .map(|cost| {
                let percent = cost / salary * 100.0;
                SalaryShare {
                    percent,
                    band: AffordabilityBand::from_percent(percent),
                    progress: percent.min(100.0),
                }
            });

        let usage: Vec<UsageScenario> = monthly_premium
            .map(|premium| {
                let annual_premium = premium * 12.0;
                let moop = amount(
                    plan.cost_sharing
                        .medical_maximum_out_of_pocket_individual_standard
                        .as_ref(),
                );
                [
                    (UsageLevel::Low, Some(LOW_USAGE_COSTS)),
                    (UsageLevel::Moderate, Some(MODERATE_USAGE_COSTS)),
                    (UsageLevel::High, moop),
                ]
                .into_iter()
                .map(|(level, medical_costs)| UsageScenario {
                    level,
                    annual_premium,
                    medical_costs,
                    total: medical_costs.map(|costs| annual_premium + costs),
                })
                .collect()
            })
            .unwrap_or_default();

        Self {
            family_makeup: family,
            family_label: family.map(FamilyMakeup::label),
            breakdown,
            monthly_premium,
            monthly_salary: salary,
            contribution,
            your_monthly_cost,
            annual,
            salary_share,
            usage,
        }
    }

    /// Whether the salary/contribution analysis has anything to show.
    pub fn has_cost_analysis(&self) -> bool {
        self.monthly_salary > 0.0 || self.contribution > 0.0
    }
}
