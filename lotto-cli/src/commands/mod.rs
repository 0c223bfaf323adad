use comfy_table::{presets::UTF8_FULL, Table};
use lotto_core::{GameConfig, PrizeRow, SeededLotto, Ticket};
use serde::Serialize;
use std::fmt::Display;

/// Money spent by the default run
pub const DEFAULT_MONEY: u64 = 3000;

/// Numbers checked by the default run
pub const DEFAULT_LUCKY_NUMBERS: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
    pub table: bool,
}

impl Output {
    fn emit<T: Serialize + Display>(&self, value: &T) -> anyhow::Result<()> {
        if self.json {
            return self.emit_json(value);
        }
        println!("{}", value);
        Ok(())
    }

    fn emit_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn emit_prizes<T: Serialize + Display>(
        &self,
        value: &T,
        rows: &[PrizeRow],
        profit_rate: f64,
    ) -> anyhow::Result<()> {
        if self.table && !self.json {
            println!("당첨 통계");
            println!("{}", prize_table(rows));
            println!("나의 수익률은 {}%입니다", profit_rate);
            return Ok(());
        }
        self.emit(value)
    }
}

fn prize_table(rows: &[PrizeRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["일치", "당첨금", "개수"]);

    for row in rows {
        table.add_row(vec![
            format!("{}개", row.matches),
            format!("{}원", row.money),
            format!("{}개", row.count),
        ]);
    }
    table
}

/// Buy 3000 won of tickets, then check [1, 2, 3, 4, 5, 6]
pub fn run_default(lotto: &mut SeededLotto, out: Output) -> anyhow::Result<()> {
    buy(lotto, out, DEFAULT_MONEY)?;
    lucky(lotto, out, DEFAULT_LUCKY_NUMBERS.to_vec())
}

pub fn buy(lotto: &mut SeededLotto, out: Output, money: u64) -> anyhow::Result<()> {
    let purchase = lotto.buy_lottos(money)?;

    if out.json {
        return out.emit(&purchase);
    }
    out.emit(&purchase.listing())
}

pub fn lucky(lotto: &mut SeededLotto, out: Output, numbers: Vec<u32>) -> anyhow::Result<()> {
    let result = lotto.set_lucky_number(Ticket::from(numbers))?;
    out.emit_prizes(&result, &result.report.rows, result.report.profit_rate)
}

/// Buy tickets, draw once and tally every ticket against the draw
pub fn play(lotto: &mut SeededLotto, out: Output, money: u64) -> anyhow::Result<()> {
    let purchase = lotto.buy_lottos(money)?;
    let draw = lotto.draw();
    let check = lotto.check_purchase(&purchase, draw);

    if out.json {
        #[derive(Serialize)]
        struct Play<'a> {
            purchase: &'a lotto_core::Purchase,
            check: &'a lotto_core::PurchaseCheck,
        }
        return out.emit_json(&Play {
            purchase: &purchase,
            check: &check,
        });
    }

    println!("{}", purchase.listing());
    println!("당첨 번호: {}", check.draw);
    out.emit_prizes(
        &check,
        &check.statistics.rows,
        check.statistics.profit_rate,
    )
}

pub fn show_config(config: &GameConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
