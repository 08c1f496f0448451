//! Relative Strength Index over a simple moving average.

/// Number of close-to-close changes averaged per RSI value.
pub const RSI_PERIOD: usize = 14;

/// Computes RSI(14) for a series of closes.
///
/// The change into the first bar counts as no movement, so the first value
/// appears at index 13 and the first 13 entries are `None`. Gains and losses
/// are averaged with a plain trailing mean (not Wilder's smoothing), each
/// window summed from its own samples.
#[must_use]
pub fn rsi(closes: &[f64]) -> Vec<Option<f64>> {
    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let diff = if i == 0 { 0.0 } else { close - closes[i - 1] };
            (diff.max(0.0), (-diff).max(0.0))
        })
        .unzip();

    let warmup = closes.len().min(RSI_PERIOD - 1);
    let period = RSI_PERIOD as f64;

    std::iter::repeat_n(None, warmup)
        .chain(
            gains
                .windows(RSI_PERIOD)
                .zip(losses.windows(RSI_PERIOD))
                .map(|(g, l)| {
                    let avg_gain = g.iter().sum::<f64>() / period;
                    let avg_loss = l.iter().sum::<f64>() / period;
                    rsi_from_averages(avg_gain, avg_loss)
                }),
        )
        .collect()
}

/// Converts average gain and loss into an RSI value.
///
/// Zero average loss gives `100` when there was any gain and `None` when the
/// window saw no movement at all.
#[must_use]
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    let value = 100.0 - 100.0 / (1.0 + rs);
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}
