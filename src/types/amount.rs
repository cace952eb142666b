use crate::types::errors::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A strictly positive, currency-agnostic decimal amount.
///
/// The value is normalized on construction so `100.50` and `100.5` compare
/// and render identically.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }

        Ok(Amount(value.normalize()))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    /// The amount as a double, only if the double reads back as the same decimal.
    fn exact_f64(&self) -> Option<f64> {
        f64::from_str(&self.0.to_string()).ok().filter(|value| {
            Decimal::from_str(&value.to_string()).is_ok_and(|decimal| decimal == self.0)
        })
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map_err(|error| AmountError::InvalidFormat(format!("Value '{value}' is not a number: {error}")))?;

        Amount::new(decimal)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        //NOTE: Whole amounts are written as integers so exports read `100` rather than `100.0`
        if self.0.scale() == 0 {
            if let Some(whole) = self.0.to_i64() {
                return serializer.serialize_i64(whole);
            }
        } else if let Some(value) = self.exact_f64() {
            return serializer.serialize_f64(value);
        }

        //NOTE: Values a double or an i64 cannot hold exactly are written as numeric strings, which every reader accepts
        serializer.collect_str(&self.0)
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a positive number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Amount, E> {
        Amount::new(Decimal::from(value)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Amount, E> {
        Amount::new(Decimal::from(value)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Amount, E> {
        Amount::from_str(&value.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Amount, E> {
        Amount::from_str(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}
