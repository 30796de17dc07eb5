//! Native tool operations
//!
//! Every tool whose transformation is pure computation has a command arm
//! here; [`ToolCommand::run`] is the single dispatch point. Browser-kind
//! tools (image, PDF, QR) run client-side and have no arm.

pub mod calc;
pub mod color;
pub mod encode;
pub mod generate;
pub mod text;
pub mod units;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use calc::{AgeBreakdown, BmiReport, BmiStatus, BmiUnit, LoanReport};
pub use color::ColorFormats;
pub use generate::{PasswordOptions, PasswordStrength};
pub use text::{CaseStyle, SortDirection, TextStats};
pub use units::UnitCategory;

/// Tool operation failure, always user-correctable
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// A native tool invocation, tagged by operation
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ToolCommand {
    ConvertCase {
        text: String,
        style: CaseStyle,
    },
    CountText {
        text: String,
    },
    DedupeLines {
        text: String,
    },
    SortLines {
        text: String,
        direction: SortDirection,
    },
    FormatJson {
        text: String,
    },
    MinifyJson {
        text: String,
    },
    EncodeBase64 {
        text: String,
    },
    DecodeBase64 {
        text: String,
    },
    EncodeUrl {
        text: String,
    },
    DecodeUrl {
        text: String,
    },
    Bmi {
        weight: f64,
        height: f64,
        unit: BmiUnit,
    },
    Age {
        birth_date: NaiveDate,
        target_date: NaiveDate,
    },
    LoanEmi {
        principal: f64,
        annual_rate: f64,
        months: u32,
    },
    ColorFormats {
        hex: String,
    },
    GradientCss {
        angle: u16,
        start: String,
        end: String,
    },
    GeneratePassword {
        #[serde(default)]
        options: PasswordOptions,
    },
    GenerateUuids {
        count: usize,
    },
    ConvertUnit {
        category: UnitCategory,
        value: f64,
        from: String,
        to: String,
    },
}

/// Result of a native tool invocation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ToolOutput {
    Text { text: String },
    TextStats { stats: TextStats },
    Bmi { report: BmiReport },
    Age { age: AgeBreakdown },
    Loan { report: LoanReport },
    Color { formats: ColorFormats },
    Password { password: String, strength: PasswordStrength },
    Uuids { uuids: Vec<String> },
    Number { value: f64 },
}

impl ToolCommand {
    /// Catalog id of the tool this command belongs to
    pub fn tool_id(&self) -> &'static str {
        match self {
            ToolCommand::ConvertCase { .. } => "txt-case",
            ToolCommand::CountText { .. } => "txt-count",
            ToolCommand::DedupeLines { .. } => "txt-dup",
            ToolCommand::SortLines { .. } => "txt-sort",
            ToolCommand::FormatJson { .. } | ToolCommand::MinifyJson { .. } => "dev-json",
            ToolCommand::EncodeBase64 { .. } | ToolCommand::DecodeBase64 { .. } => "dev-b64",
            ToolCommand::EncodeUrl { .. } | ToolCommand::DecodeUrl { .. } => "dev-url",
            ToolCommand::Bmi { .. } => "calc-bmi",
            ToolCommand::Age { .. } => "calc-age",
            ToolCommand::LoanEmi { .. } => "calc-loan",
            ToolCommand::ColorFormats { .. } => "col-picker",
            ToolCommand::GradientCss { .. } => "col-grad",
            ToolCommand::GeneratePassword { .. } => "util-pass",
            ToolCommand::GenerateUuids { .. } => "util-uuid",
            ToolCommand::ConvertUnit { .. } => "util-unit",
        }
    }

    /// Execute the command
    pub fn run(&self) -> Result<ToolOutput, ToolError> {
        match self {
            ToolCommand::ConvertCase { text, style } => Ok(ToolOutput::Text {
                text: text::convert_case(text, *style),
            }),
            ToolCommand::CountText { text } => Ok(ToolOutput::TextStats {
                stats: text::text_stats(text),
            }),
            ToolCommand::DedupeLines { text } => Ok(ToolOutput::Text {
                text: text::dedupe_lines(text),
            }),
            ToolCommand::SortLines { text, direction } => Ok(ToolOutput::Text {
                text: text::sort_lines(text, *direction),
            }),
            ToolCommand::FormatJson { text } => Ok(ToolOutput::Text {
                text: encode::format_json(text)?,
            }),
            ToolCommand::MinifyJson { text } => Ok(ToolOutput::Text {
                text: encode::minify_json(text)?,
            }),
            ToolCommand::EncodeBase64 { text } => Ok(ToolOutput::Text {
                text: encode::base64_encode(text),
            }),
            ToolCommand::DecodeBase64 { text } => Ok(ToolOutput::Text {
                text: encode::base64_decode(text)?,
            }),
            ToolCommand::EncodeUrl { text } => Ok(ToolOutput::Text {
                text: encode::url_encode(text),
            }),
            ToolCommand::DecodeUrl { text } => Ok(ToolOutput::Text {
                text: encode::url_decode(text)?,
            }),
            ToolCommand::Bmi {
                weight,
                height,
                unit,
            } => Ok(ToolOutput::Bmi {
                report: calc::body_mass_index(*weight, *height, *unit)?,
            }),
            ToolCommand::Age {
                birth_date,
                target_date,
            } => Ok(ToolOutput::Age {
                age: calc::calculate_age(*birth_date, *target_date)?,
            }),
            ToolCommand::LoanEmi {
                principal,
                annual_rate,
                months,
            } => Ok(ToolOutput::Loan {
                report: calc::loan_emi(*principal, *annual_rate, *months)?,
            }),
            ToolCommand::ColorFormats { hex } => Ok(ToolOutput::Color {
                formats: color::color_formats(hex)?,
            }),
            ToolCommand::GradientCss { angle, start, end } => {
                let gradient = color::gradient_css(*angle, start, end)?;
                Ok(ToolOutput::Text {
                    text: format!("background: {};", gradient),
                })
            }
            ToolCommand::GeneratePassword { options } => {
                let mut rng = rand::thread_rng();
                let password = generate::generate_password(options, &mut rng)?;
                let strength = generate::password_strength(&password);
                Ok(ToolOutput::Password { password, strength })
            }
            ToolCommand::GenerateUuids { count } => Ok(ToolOutput::Uuids {
                uuids: generate::generate_uuids(*count),
            }),
            ToolCommand::ConvertUnit {
                category,
                value,
                from,
                to,
            } => Ok(ToolOutput::Number {
                value: units::convert(*category, *value, from, to)?,
            }),
        }
    }
}
