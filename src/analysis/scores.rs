use std::collections::HashMap;

use super::model::TickerScore;

/// Per-run ticker accumulator. Rows keep first-contribution order, which is
/// the tie-breaker when ranking.
#[derive(Debug, Default)]
pub(crate) struct ScoreTable {
    rows: Vec<TickerScore>,
    index: HashMap<String, usize>,
}

impl ScoreTable {
    /// The row for `symbol`, created empty on first use.
    pub(crate) fn entry(&mut self, symbol: &str) -> &mut TickerScore {
        let idx = match self.index.get(symbol) {
            Some(&i) => i,
            None => {
                let i = self.rows.len();
                self.rows.push(TickerScore::new(symbol));
                self.index.insert(symbol.to_string(), i);
                i
            }
        };
        &mut self.rows[idx]
    }

    pub(crate) fn into_rows(self) -> Vec<TickerScore> {
        self.rows
    }
}
