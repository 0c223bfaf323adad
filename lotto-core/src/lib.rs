//! Lotto simulator core
//!
//! Buys tickets for a budget, draws winning numbers and renders the
//! purchase listing and prize statistics as console text.

pub mod config;
pub mod error;
pub mod game;
pub mod generator;
pub mod report;
pub mod ticket;

pub use config::{GameConfig, LottoConfig, PrizeTable, PrizeTier};
pub use error::{LottoError, Result};
pub use game::{Lotto, LuckyDraw, Purchase, PurchaseCheck, SeededLotto, MAX_TICKETS};
pub use report::{PrizeReport, PrizeRow, TicketListing, WinningStatistics};
pub use ticket::Ticket;

/// Buy tickets for `money` with a thread-local random source
pub fn buy_lottos(config: &GameConfig, money: u64) -> Result<TicketListing> {
    let mut lotto = Lotto::new(config.clone())?;
    Ok(lotto.buy_lottos(money)?.listing())
}

/// Check the user's numbers against one fresh draw
pub fn set_lucky_number(config: &GameConfig, numbers: Vec<u32>) -> Result<PrizeReport> {
    let mut lotto = Lotto::new(config.clone())?;
    Ok(lotto.set_lucky_number(Ticket::new(numbers))?.report)
}
