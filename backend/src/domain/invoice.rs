//! Invoice data model.
//!
//! Amounts are held as integer minor units (cents). Conversion from the
//! decimal major-unit value a user types is exact or it fails; there is no
//! rounding anywhere in the model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;
/// Fractional digits a major-unit amount may carry.
const MAX_FRACTION_DIGITS: u32 = 2;
/// Longest customer reference the `invoices.customer_id` column holds.
pub const CUSTOMER_ID_MAX: usize = 255;

/// Validation errors for invoice identifiers and attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvoiceValidationError {
    #[error("invoice id must be a valid UUID")]
    InvalidId,
    #[error("customer id must not be empty")]
    EmptyCustomerId,
    #[error("customer id must be at most {max} characters")]
    CustomerIdTooLong { max: usize },
    #[error("invoice status must be `pending` or `paid`")]
    UnknownStatus,
}

/// Reasons a submitted amount cannot become minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is not a number")]
    NotNumeric,
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("amount has more than two fractional digits")]
    TooPrecise,
    #[error("amount does not fit in minor units")]
    TooLarge,
}

/// Primary key of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Parse an identifier from its textual UUID form.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvoiceValidationError> {
        let raw = raw.as_ref();
        if raw.trim() != raw {
            return Err(InvoiceValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| InvoiceValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque reference to the customer an invoice is billed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Validate and construct a customer reference. Surrounding whitespace is
    /// dropped.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvoiceValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvoiceValidationError::EmptyCustomerId);
        }
        if trimmed.chars().count() > CUSTOMER_ID_MAX {
            return Err(InvoiceValidationError::CustomerIdTooLong {
                max: CUSTOMER_ID_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CustomerId> for String {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CustomerId {
    type Error = InvoiceValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceValidationError;

    /// Matches exactly; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(InvoiceValidationError::UnknownStatus),
        }
    }
}

/// Strictly positive amount in minor units.
///
/// # Examples
/// ```
/// use invoicing::domain::MinorUnits;
///
/// let amount = MinorUnits::parse_major("19.99").expect("valid amount");
/// assert_eq!(amount.get(), 1999);
/// assert_eq!(amount.to_string(), "19.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Wrap a stored minor-unit value.
    pub fn new(value: i64) -> Result<Self, AmountError> {
        if value <= 0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Scale a major-unit decimal to minor units without rounding.
    pub fn from_major(major: Decimal) -> Result<Self, AmountError> {
        if major <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        if major.normalize().scale() > MAX_FRACTION_DIGITS {
            return Err(AmountError::TooPrecise);
        }
        let minor = major
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))
            .and_then(|scaled| scaled.to_i64())
            .ok_or(AmountError::TooLarge)?;
        Self::new(minor)
    }

    /// Parse the textual major-unit amount a user submitted.
    ///
    /// A blank value counts as zero and is therefore not positive.
    pub fn parse_major(raw: &str) -> Result<Self, AmountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AmountError::NotPositive);
        }
        if trimmed.contains(['e', 'E']) {
            return Self::from_major(parse_scientific(trimmed)?);
        }
        match Decimal::from_str(trimmed) {
            Ok(major) => Self::from_major(major),
            Err(_) if looks_numeric(trimmed) => Err(AmountError::TooLarge),
            Err(_) => Err(AmountError::NotNumeric),
        }
    }

    /// Raw minor-unit value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// The amount in major units, always with two fractional digits.
    pub fn to_major(self) -> Decimal {
        Decimal::new(self.0, MAX_FRACTION_DIGITS)
    }
}

// Plain decimal notation that overflowed the parser rather than garbage.
fn looks_numeric(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}

// Exponent notation such as `1e3` or `2.5E-1`. A well-formed literal the
// decimal cannot hold is too large or too precise depending on the exponent.
fn parse_scientific(raw: &str) -> Result<Decimal, AmountError> {
    let (mantissa, exponent) = raw
        .split_once(['e', 'E'])
        .ok_or(AmountError::NotNumeric)?;
    let exponent: i64 = exponent.parse().map_err(|_| AmountError::NotNumeric)?;
    if !looks_numeric(mantissa) {
        return Err(AmountError::NotNumeric);
    }
    Decimal::from_scientific(&format!("{mantissa}e{exponent}")).map_err(|_| {
        if exponent < 0 {
            AmountError::TooPrecise
        } else {
            AmountError::TooLarge
        }
    })
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_major().fmt(f)
    }
}

impl From<MinorUnits> for i64 {
    fn from(value: MinorUnits) -> Self {
        value.0
    }
}

impl TryFrom<i64> for MinorUnits {
    type Error = AmountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalised invoice fields shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer_id: CustomerId,
    pub amount: MinorUnits,
    pub status: InvoiceStatus,
}

impl InvoiceDraft {
    /// Stamp the draft with its issue date, producing a record to insert.
    pub fn issued_on(self, date: NaiveDate) -> NewInvoice {
        NewInvoice {
            customer_id: self.customer_id,
            amount: self.amount,
            status: self.status,
            date,
        }
    }
}

/// Invoice ready to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub customer_id: CustomerId,
    pub amount: MinorUnits,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Persisted invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: MinorUnits,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}
