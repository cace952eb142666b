use serde_json::Value;

/// An unvalidated record as supplied by a form or an import file.
///
/// Every field is raw text; `ValidationProfile::validate` is the only way to
/// turn a candidate into something the store accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateRecord {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub transaction_type: Option<String>,
    pub context: Option<String>
}

impl CandidateRecord {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        transaction_type: impl Into<String>,
        context: impl Into<String>
    ) -> Self {
        Self {
            date: Some(date.into()),
            description: Some(description.into()),
            amount: Some(amount.into()),
            transaction_type: Some(transaction_type.into()),
            context: Some(context.into())
        }
    }

    /// Reads the known keys of a JSON object. Numbers are kept as their JSON
    /// text, `null` and absent keys become `None`.
    pub(crate) fn from_json(value: &Value) -> Self {
        let field = |key: &str| match value.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string())
        };

        Self {
            date: field("date"),
            description: field("description"),
            amount: field("amount"),
            transaction_type: field("type"),
            context: field("context")
        }
    }

    pub(crate) fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("description", self.description.as_deref()),
            ("amount", self.amount.as_deref()),
            ("date", self.date.as_deref()),
            ("type", self.transaction_type.as_deref()),
            ("context", self.context.as_deref())
        ]
    }
}
