//! # Order Number Generation
//!
//! Two schemes, selected by the caller.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Scheme::Sequence (human readable)                                      │
//! │                                                                         │
//! │     25 - THA - PB - 001                                                 │
//! │     │    │     │    └── caller-managed sequence, zero padded            │
//! │     │    │     └─────── initials of the contact person (max 3)          │
//! │     │    └───────────── department code                                 │
//! │     └────────────────── two-digit year                                  │
//! │                                                                         │
//! │  Scheme::Unique (collision resistant, always 25 characters)             │
//! │                                                                         │
//! │     25THA 3f2a9c0e4b7d18a65f0c                                          │
//! │     │     └── lowercase hex of a random UUID, hyphens stripped,         │
//! │     │         23 minus the department length (20 for THA)               │
//! │     └──────── year + department                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generation never fails. When the OS entropy source errors, a time-seeded
//! pseudo-random generator takes over.

use chrono::{Datelike, NaiveDate};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use ts_rs::TS;
use uuid::Builder;

use crate::{DEFAULT_DEPARTMENT, UNIQUE_ORDER_NUMBER_LEN};

/// Maximum number of initials in a sequence order number.
pub const MAX_INITIALS: usize = 3;

/// Maximum length of a department code.
pub const MAX_DEPARTMENT_LEN: usize = 5;

/// Highest sequence value; incrementing past it wraps to 1.
pub const MAX_SEQUENCE: u16 = 999;

// =============================================================================
// Order Number
// =============================================================================

/// A generated (or manually entered) order number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for OrderNumber {
    fn from(value: &str) -> Self {
        OrderNumber(value.to_string())
    }
}

impl From<String> for OrderNumber {
    fn from(value: String) -> Self {
        OrderNumber(value)
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Department Code
// =============================================================================

/// Department code embedded in every order number.
///
/// Normalized to uppercase and at most [`MAX_DEPARTMENT_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DepartmentCode(String);

impl DepartmentCode {
    pub fn new(raw: &str) -> Self {
        DepartmentCode(
            raw.trim()
                .to_uppercase()
                .chars()
                .take(MAX_DEPARTMENT_LEN)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DepartmentCode {
    fn default() -> Self {
        DepartmentCode(DEFAULT_DEPARTMENT.to_string())
    }
}

impl fmt::Display for DepartmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// Caller-managed sequence number, shown as three digits.
///
/// Not persisted anywhere, so uniqueness is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sequence(u16);

impl Sequence {
    /// Creates a sequence, capped at [`MAX_SEQUENCE`].
    pub fn new(value: u16) -> Self {
        Sequence(value.min(MAX_SEQUENCE))
    }

    /// `001`.
    pub const fn first() -> Self {
        Sequence(1)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// The next sequence value; `999` wraps to `001`.
    pub fn increment(&self) -> Self {
        if self.0 >= MAX_SEQUENCE {
            Sequence::first()
        } else {
            Sequence(self.0 + 1)
        }
    }

    /// Parses form input the way the sequence field behaves: left-padded to
    /// three digits, extra digits cut off. Non-numeric input yields `001`.
    ///
    /// ```rust
    /// use procure_core::order_number::Sequence;
    ///
    /// assert_eq!(Sequence::parse("7").to_string(), "007");
    /// assert_eq!(Sequence::parse("1234").to_string(), "123");
    /// assert_eq!(Sequence::parse("x1").to_string(), "001");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Sequence::first();
        }
        let padded = format!("{:0>3}", raw);
        padded[..3].parse::<u16>().map(Sequence).unwrap_or_default()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::first()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

// =============================================================================
// Initials
// =============================================================================

/// Up to three uppercase initials of the person placing the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Initials(String);

impl Initials {
    /// Derives initials from a contact person's name.
    ///
    /// Takes the first character of every whitespace-separated token, skipping
    /// tokens that do not start with a letter, and uppercases it.
    ///
    /// ```rust
    /// use procure_core::order_number::Initials;
    ///
    /// assert_eq!(Initials::from_name("Prof. Biedermann").as_str(), "PB");
    /// assert_eq!(Initials::from_name("Anna Berta Cäsar Dora").as_str(), "ABC");
    /// assert_eq!(Initials::from_name("2. OG Hausmeister").as_str(), "OH");
    /// ```
    pub fn from_name(name: &str) -> Self {
        Initials(
            name.split_whitespace()
                .filter_map(|token| token.chars().next())
                .filter(|c| c.is_alphabetic())
                .flat_map(char::to_uppercase)
                .take(MAX_INITIALS)
                .collect(),
        )
    }

    /// Normalizes typed initials: uppercase, no whitespace, at most three.
    pub fn parse(raw: &str) -> Self {
        Initials(
            raw.to_uppercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .take(MAX_INITIALS)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Scheme
// =============================================================================

/// Which order number format to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Scheme {
    /// `YY-DDD-III-SSS`, deterministic for a given name, year and sequence.
    Sequence { initials: Initials, sequence: Sequence },
    /// Year + department + random hex, exactly 25 characters. The hex part
    /// shrinks as the department grows (20 for a 3-letter code).
    Unique,
}

// =============================================================================
// Entropy
// =============================================================================

/// Source of random bytes for unique order numbers.
pub trait EntropySource {
    /// Fills `dest` with random bytes, or reports that it cannot.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

impl EntropySource for OsRng {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.try_fill_bytes(dest)
    }
}

impl EntropySource for StdRng {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.try_fill_bytes(dest)
    }
}

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Lower-quality bytes: current time mixed with a process-wide counter,
/// expanded by a seeded PRNG.
fn fallback_bytes() -> [u8; 16] {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let counter = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut rng = StdRng::seed_from_u64(nanos ^ counter.rotate_left(32));
    rng.gen()
}

// =============================================================================
// Generator
// =============================================================================

/// Generates order numbers for one department.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use procure_core::order_number::{Initials, OrderNumberGenerator, Scheme, Sequence};
///
/// let mut generator = OrderNumberGenerator::default();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
///
/// let readable = generator.generate(
///     &Scheme::Sequence {
///         initials: Initials::from_name("Prof. Biedermann"),
///         sequence: Sequence::first(),
///     },
///     date,
/// );
/// assert_eq!(readable.as_str(), "25-THA-PB-001");
///
/// let unique = generator.generate(&Scheme::Unique, date);
/// assert_eq!(unique.len(), 25);
/// assert!(unique.as_str().starts_with("25THA"));
/// ```
#[derive(Debug)]
pub struct OrderNumberGenerator<E = OsRng> {
    department: DepartmentCode,
    entropy: E,
}

impl Default for OrderNumberGenerator<OsRng> {
    fn default() -> Self {
        Self::new(DepartmentCode::default(), OsRng)
    }
}

impl OrderNumberGenerator<OsRng> {
    /// OS-entropy generator for `department`.
    pub fn for_department(department: DepartmentCode) -> Self {
        Self::new(department, OsRng)
    }
}

impl<E: EntropySource> OrderNumberGenerator<E> {
    pub fn new(department: DepartmentCode, entropy: E) -> Self {
        OrderNumberGenerator {
            department,
            entropy,
        }
    }

    pub fn department(&self) -> &DepartmentCode {
        &self.department
    }

    /// Generates an order number for `date` under `scheme`. Never fails.
    pub fn generate(&mut self, scheme: &Scheme, date: NaiveDate) -> OrderNumber {
        let year = two_digit_year(date);
        match scheme {
            Scheme::Sequence { initials, sequence } => {
                sequence_number(year, &self.department, initials, *sequence)
            }
            Scheme::Unique => {
                let token = self.random_token();
                unique_number(year, &self.department, &token)
            }
        }
    }

    /// 32 lowercase hex characters of a random v4 UUID.
    fn random_token(&mut self) -> String {
        let mut bytes = [0u8; 16];
        if self.entropy.try_fill(&mut bytes).is_err() {
            bytes = fallback_bytes();
        }
        Builder::from_random_bytes(bytes)
            .into_uuid()
            .simple()
            .to_string()
    }
}

/// `2025` → `25`.
pub fn two_digit_year(date: NaiveDate) -> u8 {
    date.year().rem_euclid(100) as u8
}

/// Formats a scheme A number from its parts.
pub fn sequence_number(
    year: u8,
    department: &DepartmentCode,
    initials: &Initials,
    sequence: Sequence,
) -> OrderNumber {
    OrderNumber(format!(
        "{:02}-{}-{}-{}",
        year, department, initials, sequence
    ))
}

/// Formats a scheme B number, padding or cutting `token` to reach exactly
/// [`UNIQUE_ORDER_NUMBER_LEN`] characters.
///
/// The department is kept whole, so the token part is
/// `25 - 2 - department.len()` characters: 20 for `THA`, 18 for a
/// 5-letter code, 23 for an empty one.
pub fn unique_number(year: u8, department: &DepartmentCode, token: &str) -> OrderNumber {
    let prefix = format!("{:02}{}", year, department);
    let body = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .chain(std::iter::repeat('0'));
    OrderNumber(
        prefix
            .chars()
            .chain(body)
            .take(UNIQUE_ORDER_NUMBER_LEN)
            .collect(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
