//! Console reports for purchases and draws.
//!
//! Every report is a plain value that serialises to JSON and renders the
//! Korean console text through `Display`.

use crate::{PrizeTable, Ticket};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage of `spent` recovered as `prize_money`, unrounded
pub fn profit_rate(prize_money: u64, spent: u64) -> f64 {
    if spent == 0 {
        return 0.0;
    }
    (prize_money as f64 / spent as f64) * 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketListing {
    pub count: usize,
    pub tickets: Vec<Ticket>,
}

impl TicketListing {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            count: tickets.len(),
            tickets,
        }
    }
}

impl fmt::Display for TicketListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "로또 {}개를 발행했습니다.", self.count)?;
        for ticket in &self.tickets {
            write!(f, "\n{}", ticket)?;
        }
        Ok(())
    }
}

/// One line of the prize table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeRow {
    pub matches: usize,
    pub money: u64,
    pub count: usize,
}

fn write_prize_table(f: &mut fmt::Formatter<'_>, rows: &[PrizeRow], rate: f64) -> fmt::Result {
    writeln!(f, "당첨 통계")?;
    write!(f, "---------")?;
    for row in rows {
        write!(
            f,
            "\n{}개 일치 ({}원)- {}개",
            row.matches, row.money, row.count
        )?;
    }
    write!(f, "\n나의 수익률은 {}%입니다", rate)
}

/// Prize table for a single ticket's match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeReport {
    pub rows: Vec<PrizeRow>,
    pub match_count: usize,
    pub prize_money: u64,
    pub price: u64,
    pub profit_rate: f64,
}

impl PrizeReport {
    /// The tier whose key equals `match_count` displays the match count,
    /// every other tier displays 0.
    pub fn new(prize: &PrizeTable, match_count: usize, price: u64) -> Self {
        let rows = prize
            .tiers()
            .iter()
            .map(|tier| PrizeRow {
                matches: tier.matches,
                money: tier.money,
                count: if tier.matches == match_count {
                    match_count
                } else {
                    0
                },
            })
            .collect();

        let prize_money = prize.money_for(match_count);

        Self {
            rows,
            match_count,
            prize_money,
            price,
            profit_rate: profit_rate(prize_money, price),
        }
    }
}

impl fmt::Display for PrizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prize_table(f, &self.rows, self.profit_rate)
    }
}

/// Winning-ticket counts per tier across a whole purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinningStatistics {
    pub rows: Vec<PrizeRow>,
    pub total_prize: u64,
    pub spent: u64,
    pub profit_rate: f64,
}

impl WinningStatistics {
    pub fn tally(prize: &PrizeTable, tickets: &[Ticket], draw: &Ticket, price: u64) -> Self {
        let counts: Vec<usize> = tickets.iter().map(|t| t.match_count(draw)).collect();

        let rows: Vec<PrizeRow> = prize
            .tiers()
            .iter()
            .map(|tier| PrizeRow {
                matches: tier.matches,
                money: tier.money,
                count: counts.iter().filter(|&&c| c == tier.matches).count(),
            })
            .collect();

        let total_prize = rows
            .iter()
            .map(|row| row.money.saturating_mul(row.count as u64))
            .fold(0u64, u64::saturating_add);
        let spent = price.saturating_mul(tickets.len() as u64);

        Self {
            rows,
            total_prize,
            spent,
            profit_rate: profit_rate(total_prize, spent),
        }
    }
}

impl fmt::Display for WinningStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prize_table(f, &self.rows, self.profit_rate)
    }
}
