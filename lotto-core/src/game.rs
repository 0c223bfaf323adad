use crate::report::{PrizeReport, TicketListing, WinningStatistics};
use crate::{generator, GameConfig, LottoConfig, LottoError, Result, Ticket};
use chrono::{DateTime, Utc};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Upper bound on tickets issued by a single purchase
pub const MAX_TICKETS: usize = 100_000;

/// Tickets bought with one amount of money
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub money: u64,
    pub price: u64,
    pub change: u64,
    pub tickets: Vec<Ticket>,
}

impl Purchase {
    pub fn count(&self) -> usize {
        self.tickets.len()
    }

    pub fn spent(&self) -> u64 {
        self.money - self.change
    }

    pub fn listing(&self) -> TicketListing {
        TicketListing::new(self.tickets.clone())
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.listing(), f)
    }
}

/// Outcome of checking one user ticket against a fresh draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuckyDraw {
    pub ticket: Ticket,
    pub draw: Ticket,
    pub matched: Vec<u32>,
    pub report: PrizeReport,
}

impl fmt::Display for LuckyDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report, f)
    }
}

/// Draw against every ticket of a purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseCheck {
    pub purchase_id: Uuid,
    pub draw: Ticket,
    pub statistics: WinningStatistics,
}

impl fmt::Display for PurchaseCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.statistics, f)
    }
}

/// Game driven by a seedable generator
pub type SeededLotto = Lotto<StdRng>;

/// Lotto game bound to a validated config and a random source
#[derive(Debug)]
pub struct Lotto<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl Lotto<ThreadRng> {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Lotto<StdRng> {
    /// Reproducible game: the same seed yields the same tickets and draws
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Lotto<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    fn lotto(&self) -> &LottoConfig {
        &self.config.lotto
    }

    /// Buy as many tickets as `money` covers. Any remainder is returned as change.
    pub fn buy_lottos(&mut self, money: u64) -> Result<Purchase> {
        let price = self.lotto().price;
        let requested = money / price;
        let count = usize::try_from(requested)
            .ok()
            .filter(|&count| count <= MAX_TICKETS)
            .ok_or(LottoError::TooManyTickets {
                requested,
                max: MAX_TICKETS,
            })?;
        let change = money % price;

        if change > 0 {
            tracing::warn!(
                "{} won does not buy a whole ticket, returning as change",
                change
            );
        }

        let tickets: Vec<Ticket> =
            generator::tickets(&mut self.rng, count, &self.config.lotto).collect();

        let purchase = Purchase {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            money,
            price,
            change,
            tickets,
        };

        tracing::info!(
            "Purchase {} issued {} tickets for {} won",
            purchase.id,
            purchase.count(),
            purchase.spent()
        );
        Ok(purchase)
    }

    /// Generate one winning ticket
    pub fn draw(&mut self) -> Ticket {
        let draw = generator::ticket(&mut self.rng, &self.config.lotto);
        tracing::info!("Drew winning numbers {}", draw);
        draw
    }

    /// Validate the user's ticket, draw once and report the prize
    pub fn set_lucky_number(&mut self, ticket: Ticket) -> Result<LuckyDraw> {
        ticket.validate(self.lotto())?;
        let draw = self.draw();
        Ok(self.check_ticket(ticket, draw))
    }

    pub fn check_ticket(&self, ticket: Ticket, draw: Ticket) -> LuckyDraw {
        let matched = ticket.matches(&draw);
        let report = PrizeReport::new(&self.config.prize, matched.len(), self.lotto().price);

        tracing::debug!(
            "Ticket {} matched {} numbers: {:?}",
            ticket,
            matched.len(),
            matched
        );

        LuckyDraw {
            ticket,
            draw,
            matched,
            report,
        }
    }

    /// Tally a purchase against an existing draw
    pub fn check_purchase(&self, purchase: &Purchase, draw: Ticket) -> PurchaseCheck {
        let statistics =
            WinningStatistics::tally(&self.config.prize, &purchase.tickets, &draw, purchase.price);

        tracing::info!(
            "Purchase {} won {} won in total",
            purchase.id,
            statistics.total_prize
        );

        PurchaseCheck {
            purchase_id: purchase.id,
            draw,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PrizeTable, PrizeTier};

    fn seeded() -> Lotto<StdRng> {
        Lotto::from_seed(GameConfig::default(), 2024).unwrap()
    }

    #[test]
    fn test_buy_lottos_3000() {
        let mut lotto = seeded();
        let purchase = lotto.buy_lottos(3000).unwrap();

        assert_eq!(purchase.count(), 3);
        assert_eq!(purchase.change, 0);
        assert!(purchase.tickets.iter().all(|t| t.len() == 6));

        let text = purchase.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("로또 3개를 발행했습니다."));
        assert_eq!(lines.filter(|l| l.starts_with('[')).count(), 3);
    }

    #[test]
    fn test_buy_lottos_floors_and_keeps_change() {
        let mut lotto = seeded();

        let purchase = lotto.buy_lottos(2500).unwrap();
        assert_eq!(purchase.count(), 2);
        assert_eq!(purchase.change, 500);
        assert_eq!(purchase.spent(), 2000);

        let nothing = lotto.buy_lottos(999).unwrap();
        assert_eq!(nothing.count(), 0);
        assert_eq!(nothing.change, 999);
    }

    #[test]
    fn test_buy_lottos_rejects_oversized_purchase() {
        let mut lotto = seeded();

        let result = lotto.buy_lottos(u64::MAX);
        assert!(matches!(
            result,
            Err(LottoError::TooManyTickets { requested, max: MAX_TICKETS })
                if requested == u64::MAX / 1000
        ));

        let over = (MAX_TICKETS as u64 + 1) * 1000;
        assert!(matches!(
            lotto.buy_lottos(over),
            Err(LottoError::TooManyTickets { .. })
        ));
    }

    #[test]
    fn test_buy_lottos_at_ticket_limit() {
        let config = GameConfig::new(
            LottoConfig {
                price: 1,
                ea: 1,
                min: 1,
                max: 1,
            },
            PrizeTable::default(),
        );
        let mut lotto = Lotto::from_seed(config, 3).unwrap();

        let purchase = lotto.buy_lottos(MAX_TICKETS as u64).unwrap();
        assert_eq!(purchase.count(), MAX_TICKETS);
    }

    #[test]
    fn test_set_lucky_number_report() {
        let mut lotto = seeded();
        let result = lotto
            .set_lucky_number(Ticket::new(vec![1, 2, 3, 4, 5, 6]))
            .unwrap();

        assert_eq!(result.draw.len(), 6);
        assert!(result.report.match_count <= 6);
        assert_eq!(result.report.match_count, result.matched.len());

        let expected_money = PrizeTable::default().money_for(result.report.match_count);
        let expected_rate = (expected_money as f64 / 1000.0) * 100.0;
        assert_eq!(result.report.profit_rate, expected_rate);
        assert!(result
            .to_string()
            .ends_with(&format!("나의 수익률은 {}%입니다", expected_rate)));
    }

    #[test]
    fn test_set_lucky_number_rejects_malformed_ticket() {
        let mut lotto = seeded();
        assert!(lotto.set_lucky_number(Ticket::new(vec![1, 2, 3])).is_err());
        assert!(lotto
            .set_lucky_number(Ticket::new(vec![1, 2, 3, 4, 5, 99]))
            .is_err());
    }

    #[test]
    fn test_check_ticket_against_itself() {
        let lotto = seeded();
        let ticket = Ticket::new(vec![1, 2, 3, 4, 5, 6]);
        let result = lotto.check_ticket(ticket.clone(), ticket);

        assert_eq!(result.report.match_count, 6);
        assert_eq!(result.report.prize_money, 2_000_000_000);
    }

    #[test]
    fn test_check_purchase() {
        let config = GameConfig::new(
            LottoConfig {
                price: 100,
                ea: 2,
                min: 1,
                max: 1,
            },
            PrizeTable::new(vec![PrizeTier { matches: 2, money: 150 }]),
        );
        let mut lotto = Lotto::from_seed(config, 1).unwrap();

        let purchase = lotto.buy_lottos(400).unwrap();
        let draw = lotto.draw();
        assert_eq!(draw, Ticket::new(vec![1, 1]));

        let check = lotto.check_purchase(&purchase, draw);
        assert_eq!(check.statistics.rows[0].count, 4);
        assert_eq!(check.statistics.total_prize, 600);
        assert_eq!(check.statistics.profit_rate, 150.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new(
            LottoConfig {
                price: 0,
                ..LottoConfig::default()
            },
            PrizeTable::default(),
        );
        assert!(Lotto::new(config).is_err());
    }
}
