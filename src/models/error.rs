/// A fixture record that could not be turned into a typed model.
///
/// Every variant names the offending record so a bad row in a large fixture
/// can be located without re-reading the whole file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{record}: invalid amount {value:?}")]
    InvalidAmount { record: String, value: String },

    #[error("{record}: amount {value:?} must be an unsigned magnitude")]
    NegativeAmount { record: String, value: String },

    #[error("{record}: invalid timestamp {value:?}")]
    InvalidDateTime { record: String, value: String },

    #[error("{record}: unknown credit/debit indicator {value:?}")]
    UnknownIndicator { record: String, value: String },
}

impl ParseError {
    /// Identifier of the record that failed to parse.
    pub fn record(&self) -> &str {
        match self {
            ParseError::InvalidAmount { record, .. }
            | ParseError::NegativeAmount { record, .. }
            | ParseError::InvalidDateTime { record, .. }
            | ParseError::UnknownIndicator { record, .. } => record,
        }
    }
}
