use std::collections::BTreeMap;
use std::ops::{AddAssign, Div, Mul, Sub};

use crate::channel::RecordChannel;
use crate::convert::FieldConvert;
use crate::error::AppError;

/// Fields per trade record: timestamp, symbol, quantity, price.
const TRADE_FIELD_COUNT: usize = 4;

/// Running statistics for one security.
///
/// `P` price, `Q` quantity, `W` widened type for the WAP numerator,
/// `T` timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityInfo<P, Q, W, T> {
    /// Largest gap between consecutive timestamps, zero with fewer than
    /// two trades.
    pub max_time_gap: T,
    /// Timestamp of the most recent trade, `None` before the first one.
    /// Only used to compute the next gap.
    pub last_time_stamp: Option<T>,
    pub total_volume: Q,
    pub max_trade_price: P,
    /// Sum of price * quantity in the wider type. The WAP numerator, not
    /// the WAP itself.
    pub wap_price_qty: W,
}

/// Per-symbol trade statistics engine.
///
/// Pulls trade records from a [`RecordChannel`] source, keeps one
/// [`SecurityInfo`] per symbol, and emits one summary record per symbol to a
/// sink in symbol sort order. All field types go through [`FieldConvert`],
/// so the engine can be instantiated with any convertible key and numeric
/// types; [`TradeFileStats`] is the stock instantiation.
pub struct SecurityStats<S, P, Q, W, T> {
    securities: BTreeMap<S, SecurityInfo<P, Q, W, T>>,
    records_read: usize,
}

impl<S, P, Q, W, T> Default for SecurityStats<S, P, Q, W, T> {
    fn default() -> Self {
        Self {
            securities: BTreeMap::new(),
            records_read: 0,
        }
    }
}

impl<S, P, Q, W, T> SecurityStats<S, P, Q, W, T>
where
    S: FieldConvert + Ord,
    P: FieldConvert + Copy + Default + PartialOrd,
    Q: FieldConvert + Copy + Default + AddAssign,
    W: FieldConvert + Copy + Default + AddAssign + Mul<Output = W> + Div<Output = W> + From<P> + From<Q>,
    T: FieldConvert + Copy + Default + PartialOrd + Sub<Output = T>,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the source and fold every valid record into the per-symbol
    /// table. Records with the wrong field count or an unparsable field are
    /// dropped and not counted.
    ///
    /// Returns the number of records processed, or [`AppError::EmptyData`]
    /// when the source produced no usable record at all (checked against
    /// table emptiness, not the counter).
    pub fn load_data(&mut self, source: &mut dyn RecordChannel) -> Result<usize, AppError> {
        while let Some(fields) = source.next_record() {
            if fields.len() != TRADE_FIELD_COUNT {
                tracing::debug!(fields = fields.len(), "Dropping record with wrong field count");
                continue;
            }

            let (time_stamp, symbol, quantity, price) = match Self::parse_trade(&fields) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::debug!(error = %e, "Dropping unparsable record");
                    continue;
                }
            };

            self.apply_trade(time_stamp, symbol, quantity, price);
            self.records_read += 1;
        }

        if self.securities.is_empty() {
            return Err(AppError::EmptyData);
        }

        tracing::info!(
            records = self.records_read,
            securities = self.securities.len(),
            "Loaded trade records"
        );
        Ok(self.records_read)
    }

    /// Write one summary record per symbol, in symbol sort order, as
    /// `[symbol, max_time_gap, total_volume, wap, max_trade_price]`.
    ///
    /// A failed write for one symbol does not stop the rest. Returns the
    /// number of records actually written.
    pub fn print_stats(&self, sink: &mut dyn RecordChannel) -> usize {
        let mut written = 0;
        for (symbol, info) in &self.securities {
            // Truncating for integer W. Cannot divide by zero: every entry
            // in the table has absorbed at least one trade's quantity.
            let wap = info.wap_price_qty / W::from(info.total_volume);

            let fields = [
                symbol.format_field(),
                info.max_time_gap.format_field(),
                info.total_volume.format_field(),
                wap.format_field(),
                info.max_trade_price.format_field(),
            ];
            if sink.write_record(&fields) {
                written += 1;
            }
        }

        tracing::info!(
            records = written,
            securities = self.securities.len(),
            "Wrote statistics records"
        );
        written
    }

    fn parse_trade(fields: &[String]) -> Result<(T, S, Q, P), AppError> {
        let time_stamp = T::parse_field(&fields[0])?;
        let symbol = S::parse_field(&fields[1])?;
        let quantity = Q::parse_field(&fields[2])?;
        let price = P::parse_field(&fields[3])?;
        Ok((time_stamp, symbol, quantity, price))
    }

    fn apply_trade(&mut self, time_stamp: T, symbol: S, quantity: Q, price: P) {
        let info = self.securities.entry(symbol).or_default();

        // Gap against the previous timestamp, before it is overwritten.
        if let Some(last) = info.last_time_stamp {
            let gap = time_stamp - last;
            if gap > info.max_time_gap {
                info.max_time_gap = gap;
            }
        }
        info.last_time_stamp = Some(time_stamp);

        info.total_volume += quantity;

        if price > info.max_trade_price {
            info.max_trade_price = price;
        }

        info.wap_price_qty += W::from(price) * W::from(quantity);
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }

    pub fn security_count(&self) -> usize {
        self.securities.len()
    }

    pub fn get(&self, symbol: &S) -> Option<&SecurityInfo<P, Q, W, T>> {
        self.securities.get(symbol)
    }
}

/// Stock instantiation for trade files: string symbols, integer prices and
/// quantities, 64-bit WAP accumulation and timestamps.
pub type TradeFileStats = SecurityStats<String, i32, i32, i64, i64>;
