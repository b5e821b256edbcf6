//! Thin pass-through to the market-data provider: ticker autocomplete and
//! daily price history for charting the selected opportunities.

mod history;
mod model;
mod search;
mod wire;

pub use history::{PriceHistoryBuilder, price_histories, price_history};
pub use model::{PricePoint, TickerMatch};
pub use search::{TickerSearchBuilder, search};
