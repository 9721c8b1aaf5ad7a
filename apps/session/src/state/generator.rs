//! # Generator State
//!
//! Inputs of the order number tab: year, department, initials and the
//! caller-managed sequence.
//!
//! ```text
//!   year ──┐
//!   dept ──┼──► preview()  "25-THA-PB-001"  (placeholders for empty parts)
//!   III  ──┤
//!   SSS  ──┴──► generate(kind) ──► OrderNumber ──► OrderNumberState
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use procure_core::{
    DepartmentCode, Initials, OrderNumber, OrderNumberGenerator, Scheme, Sequence,
    ValidationError,
};

use super::ConfigState;

/// Preview text for an empty department or empty initials.
const MISSING_PART: &str = "???";

/// Which scheme the user picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// `YY-DDD-III-SSS`
    #[default]
    Sequence,
    /// 25 characters, random
    Unique,
}

impl FromStr for SchemeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequence" | "a" => Ok(SchemeKind::Sequence),
            "unique" | "b" => Ok(SchemeKind::Unique),
            other => Err(ValidationError::InvalidFormat {
                field: "scheme".to_string(),
                reason: format!("unknown scheme '{}', expected sequence or unique", other),
            }),
        }
    }
}

/// State of the order number tab.
#[derive(Debug)]
pub struct GeneratorState {
    generator: OrderNumberGenerator,
    /// `None` when the year field was cleared; generation then uses today.
    year: Option<i32>,
    initials: Initials,
    sequence: Sequence,
}

impl GeneratorState {
    pub fn new(config: &ConfigState, today: NaiveDate) -> Self {
        GeneratorState {
            generator: OrderNumberGenerator::for_department(config.department()),
            year: Some(today.year()),
            initials: Initials::from_name(&config.order.contact_person),
            sequence: Sequence::first(),
        }
    }

    pub fn department(&self) -> &DepartmentCode {
        self.generator.department()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn initials(&self) -> &Initials {
        &self.initials
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    pub fn set_department(&mut self, raw: &str) {
        self.generator = OrderNumberGenerator::for_department(DepartmentCode::new(raw));
    }

    /// Blank or non-numeric input clears the year.
    pub fn set_year(&mut self, raw: &str) {
        self.year = raw.trim().parse::<i32>().ok();
    }

    pub fn set_initials(&mut self, raw: &str) {
        self.initials = Initials::parse(raw);
    }

    pub fn set_contact_person(&mut self, name: &str) {
        self.initials = Initials::from_name(name);
    }

    pub fn set_sequence(&mut self, raw: &str) {
        self.sequence = Sequence::parse(raw);
    }

    pub fn increment_sequence(&mut self) {
        self.sequence = self.sequence.increment();
    }

    pub fn reset_sequence(&mut self) {
        self.sequence = Sequence::first();
    }

    /// Scheme A layout of the current inputs. An empty year shows `??`, an
    /// empty department or empty initials show `???`. The sequence always
    /// holds a value.
    pub fn preview(&self) -> String {
        let year = self
            .year
            .map(|y| format!("{:02}", y.rem_euclid(100)))
            .unwrap_or_else(|| "??".to_string());
        let department = match self.department().as_str() {
            "" => MISSING_PART,
            code => code,
        };
        let initials = match self.initials.as_str() {
            "" => MISSING_PART,
            initials => initials,
        };
        format!("{}-{}-{}-{}", year, department, initials, self.sequence)
    }

    /// The date whose year goes into the number.
    fn effective_date(&self, today: NaiveDate) -> NaiveDate {
        match self.year {
            Some(year) => today
                .with_year(year)
                .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
                .unwrap_or(today),
            None => today,
        }
    }

    /// Generates a number with the current inputs. Never fails.
    pub fn generate(&mut self, kind: SchemeKind, today: NaiveDate) -> OrderNumber {
        let scheme = match kind {
            SchemeKind::Sequence => Scheme::Sequence {
                initials: self.initials.clone(),
                sequence: self.sequence,
            },
            SchemeKind::Unique => Scheme::Unique,
        };
        let date = self.effective_date(today);
        self.generator.generate(&scheme, date)
    }
}
