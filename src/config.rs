use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_STORAGE_KEY: &str = "transactions";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Settings shared by the composition root and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Name of the persistence slot holding the serialized collection.
    pub storage_key: String,
    pub currency_symbol: String,
    pub decimal_places: u32
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_places: DEFAULT_DECIMAL_PLACES
        }
    }
}

impl TrackerConfig {
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn with_currency_symbol(mut self, currency_symbol: impl Into<String>) -> Self {
        self.currency_symbol = currency_symbol.into();
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Formats a value for display using Indian digit grouping, e.g.
    /// `₹12,34,567.50`. Display only; stored amounts are never formatted.
    pub fn format_amount(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let text = format!("{:.*}", self.decimal_places as usize, rounded.abs());

        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None)
        };

        let mut formatted = format!("{sign}{}{}", self.currency_symbol, group_indian(integer));

        if let Some(fraction) = fraction {
            formatted.push('.');
            formatted.push_str(fraction);
        }

        formatted
    }
}

/// Last three digits form one group, every two digits before that another.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();

    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }

    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
