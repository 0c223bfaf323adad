use crate::error::{LottoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ticket price, numbers per ticket and the inclusive number range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LottoConfig {
    pub price: u64,
    pub ea: usize,
    pub min: u32,
    pub max: u32,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            price: 1000,
            ea: 6,
            min: 1,
            max: 45,
        }
    }
}

impl LottoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.price == 0 {
            return Err(LottoError::config("Ticket price must be greater than 0"));
        }

        if self.ea == 0 {
            return Err(LottoError::config(
                "Numbers per ticket must be greater than 0",
            ));
        }

        if self.min > self.max {
            return Err(LottoError::config(format!(
                "Number range is empty: min {} > max {}",
                self.min, self.max
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    pub matches: usize,
    pub money: u64,
}

/// Match count to prize money. Tier order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeTable {
    tiers: Vec<PrizeTier>,
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self::new(vec![
            PrizeTier { matches: 3, money: 5_000 },
            PrizeTier { matches: 4, money: 50_000 },
            PrizeTier { matches: 5, money: 1_500_000 },
            PrizeTier { matches: 6, money: 2_000_000_000 },
        ])
    }
}

impl PrizeTable {
    pub fn new(tiers: Vec<PrizeTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[PrizeTier] {
        &self.tiers
    }

    /// Prize money for a match count, 0 when no tier pays for it
    pub fn money_for(&self, matches: usize) -> u64 {
        self.tiers
            .iter()
            .find(|tier| tier.matches == matches)
            .map_or(0, |tier| tier.money)
    }

    pub fn validate(&self, ea: usize) -> Result<()> {
        let mut seen = HashSet::new();
        for tier in &self.tiers {
            if tier.matches > ea {
                return Err(LottoError::config(format!(
                    "Prize tier for {} matches exceeds {} numbers per ticket",
                    tier.matches, ea
                )));
            }
            if !seen.insert(tier.matches) {
                return Err(LottoError::config(format!(
                    "Duplicate prize tier for {} matches",
                    tier.matches
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub lotto: LottoConfig,
    #[serde(default)]
    pub prize: PrizeTable,
}

impl GameConfig {
    pub fn new(lotto: LottoConfig, prize: PrizeTable) -> Self {
        Self { lotto, prize }
    }

    /// Load and validate a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.lotto.validate()?;
        self.prize.validate(self.lotto.ea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lotto.price, 1000);
        assert_eq!(config.lotto.ea, 6);
        assert_eq!(config.prize.tiers().len(), 4);
    }

    #[test]
    fn test_invalid_lotto_config() {
        let zero_price = LottoConfig {
            price: 0,
            ..LottoConfig::default()
        };
        assert!(matches!(zero_price.validate(), Err(LottoError::Config(_))));

        let zero_ea = LottoConfig {
            ea: 0,
            ..LottoConfig::default()
        };
        assert!(matches!(zero_ea.validate(), Err(LottoError::Config(_))));

        let empty_range = LottoConfig {
            min: 10,
            max: 9,
            ..LottoConfig::default()
        };
        assert!(matches!(empty_range.validate(), Err(LottoError::Config(_))));
    }

    #[test]
    fn test_prize_table_validation() {
        let too_many = PrizeTable::new(vec![PrizeTier { matches: 7, money: 1 }]);
        assert!(too_many.validate(6).is_err());

        let duplicate = PrizeTable::new(vec![
            PrizeTier { matches: 3, money: 1 },
            PrizeTier { matches: 3, money: 2 },
        ]);
        assert!(duplicate.validate(6).is_err());
    }

    #[test]
    fn test_money_for_missing_tier() {
        let prize = PrizeTable::default();
        assert_eq!(prize.money_for(0), 0);
        assert_eq!(prize.money_for(2), 0);
        assert_eq!(prize.money_for(4), 50_000);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "lotto": {{ "price": 500, "ea": 3, "min": 1, "max": 9 }},
                "prize": [{{ "matches": 3, "money": 10000 }}, {{ "matches": 2, "money": 700 }}]
            }}"#
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lotto.price, 500);
        assert_eq!(config.prize.tiers()[0].matches, 3);
        assert_eq!(config.prize.money_for(2), 700);
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lotto": {{ "price": 2000, "ea": 6, "min": 1, "max": 45 }} }}"#)
            .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.lotto.price, 2000);
        assert_eq!(config.prize, PrizeTable::default());
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lotto": {{ "price": 0, "ea": 6, "min": 1, "max": 45 }} }}"#).unwrap();
        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(LottoError::Config(_))
        ));

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(matches!(
            GameConfig::from_file(garbage.path()),
            Err(LottoError::Serialization(_))
        ));
    }
}
