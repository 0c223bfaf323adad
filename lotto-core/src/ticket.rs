use crate::{LottoConfig, LottoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered set of lotto numbers, generated or picked by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(Vec<u32>);

impl Ticket {
    pub fn new(numbers: Vec<u32>) -> Self {
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check length and range against the config. Repeated numbers are allowed.
    pub fn validate(&self, config: &LottoConfig) -> Result<()> {
        if self.len() != config.ea {
            return Err(LottoError::InvalidTicketLength {
                expected: config.ea,
                got: self.len(),
            });
        }

        if let Some(&number) = self
            .0
            .iter()
            .find(|&&n| n < config.min || n > config.max)
        {
            return Err(LottoError::NumberOutOfRange {
                number,
                min: config.min,
                max: config.max,
            });
        }

        Ok(())
    }

    /// Numbers of this ticket that also appear in `draw`, in this ticket's order
    pub fn matches(&self, draw: &Ticket) -> Vec<u32> {
        match_numbers(&self.0, &draw.0)
    }

    pub fn match_count(&self, draw: &Ticket) -> usize {
        self.0.iter().filter(|n| draw.0.contains(n)).count()
    }
}

impl From<Vec<u32>> for Ticket {
    fn from(numbers: Vec<u32>) -> Self {
        Self::new(numbers)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", number)?;
        }
        write!(f, "]")
    }
}

/// Every user number present in the drawn numbers; duplicates count separately
pub fn match_numbers(user: &[u32], drawn: &[u32]) -> Vec<u32> {
    user.iter().copied().filter(|n| drawn.contains(n)).collect()
}
