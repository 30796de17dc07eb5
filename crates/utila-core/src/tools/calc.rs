//! Calculators: BMI, age breakdown, loan EMI

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ToolError;

/// Measurement system for BMI input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiUnit {
    /// Weight in kilograms, height in centimeters
    Metric,
    /// Weight in pounds, height in inches
    Imperial,
}

/// BMI classification at the conventional 18.5 / 25 / 30 cut-offs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::Normal => "Normal",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
        }
    }

    fn classify(bmi: f64) -> BmiStatus {
        if bmi < 18.5 {
            BmiStatus::Underweight
        } else if bmi < 25.0 {
            BmiStatus::Normal
        } else if bmi < 30.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReport {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub status: BmiStatus,
}

/// Compute BMI. Weight and height must be positive finite numbers.
pub fn body_mass_index(weight: f64, height: f64, unit: BmiUnit) -> Result<BmiReport, ToolError> {
    if !weight.is_finite() || !height.is_finite() || weight <= 0.0 || height <= 0.0 {
        return Err(ToolError::InvalidInput(
            "Weight and height must be positive numbers".to_string(),
        ));
    }

    let raw = match unit {
        BmiUnit::Metric => weight / ((height / 100.0) * (height / 100.0)),
        BmiUnit::Imperial => (weight / (height * height)) * 703.0,
    };

    // Classification happens on the displayed one-decimal value.
    let bmi = (raw * 10.0).round() / 10.0;
    Ok(BmiReport {
        bmi,
        status: BmiStatus::classify(bmi),
    })
}

/// Age expressed as calendar years, remaining months, and an approximate
/// remaining day count (total days modulo 30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i64,
}

/// Compute the age at `target` for someone born on `birth`
pub fn calculate_age(birth: NaiveDate, target: NaiveDate) -> Result<AgeBreakdown, ToolError> {
    if birth > target {
        return Err(ToolError::InvalidInput("Invalid date range".to_string()));
    }

    Ok(AgeBreakdown {
        years: full_years_between(birth, target),
        months: full_months_between(birth, target) % 12,
        days: (target - birth).num_days() % 30,
    })
}

fn full_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

fn full_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months -= 1;
    }
    months
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanReport {
    /// Equated monthly installment, rounded to cents
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// Compute the EMI for a loan of `principal` at `annual_rate` percent over
/// `months` installments.
pub fn loan_emi(principal: f64, annual_rate: f64, months: u32) -> Result<LoanReport, ToolError> {
    if !principal.is_finite() || !annual_rate.is_finite() {
        return Err(ToolError::InvalidInput(
            "Loan parameters must be finite numbers".to_string(),
        ));
    }
    if principal <= 0.0 || annual_rate <= 0.0 || months == 0 {
        return Err(ToolError::InvalidInput(
            "Amount, rate, and tenure must all be positive".to_string(),
        ));
    }

    let r = annual_rate / 12.0 / 100.0;
    let n = months as f64;
    let growth = (1.0 + r).powf(n);
    let emi = principal * r * growth / (growth - 1.0);
    let total_payment = emi * n;

    Ok(LoanReport {
        emi: round_cents(emi),
        total_interest: round_cents(total_payment - principal),
        total_payment: round_cents(total_payment),
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
