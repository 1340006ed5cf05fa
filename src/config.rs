use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::AlignerError;

pub const DEFAULT_GAP_PENALTY: i32 = 1;
pub const DEFAULT_MISMATCH_PENALTY: i32 = 1;
pub const DEFAULT_GAP_SYMBOL: char = '-';

/// Linear gap cost and flat mismatch cost. Matches cost nothing.
///
/// Any value is accepted, including negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalties {
    pub gap: i32,
    pub mismatch: i32,
}

impl Penalties {
    pub fn new(gap: i32, mismatch: i32) -> Self {
        Self { gap, mismatch }
    }

    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            0
        } else {
            self.mismatch
        }
    }

    pub fn is_negative(&self) -> bool {
        self.gap < 0 || self.mismatch < 0
    }
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP_PENALTY,
            mismatch: DEFAULT_MISMATCH_PENALTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    pub penalties: Penalties,
    gap_symbol: char,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            penalties: Penalties::default(),
            gap_symbol: DEFAULT_GAP_SYMBOL,
        }
    }
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_penalty(mut self, gap: i32) -> Self {
        self.penalties.gap = gap;
        self
    }

    pub fn with_mismatch_penalty(mut self, mismatch: i32) -> Self {
        self.penalties.mismatch = mismatch;
        self
    }

    pub fn with_penalties(mut self, penalties: Penalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// Gap markers are written into byte sequences, so only ASCII is allowed.
    pub fn with_gap_symbol(mut self, symbol: char) -> Result<Self, AlignerError> {
        if !symbol.is_ascii() {
            return Err(AlignerError::InvalidGapSymbol(symbol));
        }
        self.gap_symbol = symbol;
        Ok(self)
    }

    pub fn penalties(&self) -> Penalties {
        self.penalties
    }

    pub fn gap_symbol(&self) -> char {
        self.gap_symbol
    }

    pub(crate) fn gap_byte(&self) -> u8 {
        // with_gap_symbol and from_reader both reject non-ASCII symbols
        self.gap_symbol as u8
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AlignerError> {
        let config: AlignerConfig = serde_json::from_reader(reader)?;
        if !config.gap_symbol.is_ascii() {
            return Err(AlignerError::InvalidGapSymbol(config.gap_symbol));
        }
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, AlignerError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AlignerConfig::default();
        assert_eq!(config.penalties(), Penalties::new(1, 1));
        assert_eq!(config.gap_symbol(), '-');
        assert_eq!(config.gap_byte(), b'-');
    }

    #[test]
    fn test_builders() {
        let config = AlignerConfig::new()
            .with_gap_penalty(4)
            .with_mismatch_penalty(-2)
            .with_gap_symbol('.')
            .unwrap();
        assert_eq!(config.penalties(), Penalties::new(4, -2));
        assert_eq!(config.gap_byte(), b'.');
    }

    #[test]
    fn test_rejects_non_ascii_gap_symbol() {
        let err = AlignerConfig::new().with_gap_symbol('é').unwrap_err();
        assert!(matches!(err, AlignerError::InvalidGapSymbol('é')));
    }

    #[test]
    fn test_substitution() {
        let penalties = Penalties::new(2, 7);
        assert_eq!(penalties.substitution(b'A', b'A'), 0);
        assert_eq!(penalties.substitution(b'A', b'C'), 7);
    }

    #[test]
    fn test_from_reader() {
        let json = r#"{"penalties": {"gap": 3, "mismatch": 5}, "gap_symbol": "_"}"#;
        let config = AlignerConfig::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.penalties(), Penalties::new(3, 5));
        assert_eq!(config.gap_symbol(), '_');
    }

    #[test]
    fn test_from_reader_partial() {
        let json = r#"{"penalties": {"gap": 2, "mismatch": 1}}"#;
        let config = AlignerConfig::from_reader(json.as_bytes()).unwrap();
        assert_eq!(config.gap_symbol(), DEFAULT_GAP_SYMBOL);
    }

    #[test]
    fn test_from_reader_partial_penalties() {
        let config = AlignerConfig::from_reader(r#"{"penalties": {"gap": 3}}"#.as_bytes()).unwrap();
        assert_eq!(config.penalties(), Penalties::new(3, DEFAULT_MISMATCH_PENALTY));

        let config = AlignerConfig::from_reader(r#"{"penalties": {"mismatch": 4}}"#.as_bytes()).unwrap();
        assert_eq!(config.penalties(), Penalties::new(DEFAULT_GAP_PENALTY, 4));
    }

    #[test]
    fn test_from_reader_invalid() {
        let err = AlignerConfig::from_reader(r#"{"gap_symbol": "é"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, AlignerError::InvalidGapSymbol('é')));

        let err = AlignerConfig::from_reader("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, AlignerError::Serialization(_)));
    }
}
