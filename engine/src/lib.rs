//! ╔══════════════════════════════════════════════════════════════════╗
//! ║   PREDICTION ENGINE — Deterministic trading signal               ║
//! ║                                                                  ║
//! ║   Least-squares trend fit over a compiled-in price series,       ║
//! ║   integer arithmetic only. One input price maps to exactly one   ║
//! ║   journal, so a proof of this computation pins one result.       ║
//! ╚══════════════════════════════════════════════════════════════════╝

pub mod history;
pub mod regression;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use history::{BASE_USD_PRICE, PRICE_HISTORY, PROJECTION_DAY};
pub use regression::{fit, Regression};
pub use signal_journal::Action;

/// BUY requires the projection to clear the input price by 0.5%,
/// i.e. current + current / 200.
pub const THRESHOLD_DIVISOR: u64 = 200;

/// Configuration-time invariant violations of the embedded series.
///
/// These are build defects, not runtime data conditions: the series is
/// compiled in, so a failing fit means the engine itself is broken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("price history has no variance in its index dimension")]
    ZeroIndexVariance,

    #[error("projected price is not positive")]
    NonPositiveProjection,
}

/// Result of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub action: Action,
    /// Regression R² as an integer percentage in [0, 100].
    pub confidence: u64,
    /// Projected price in the input's wei units.
    pub predicted_price: U256,
}

impl Prediction {
    /// Canonical journal bytes for this prediction.
    pub fn to_journal(&self) -> [u8; signal_journal::JOURNAL_LEN] {
        signal_journal::encode(self.action.into(), self.confidence, self.predicted_price)
    }
}

/// Compute the trading signal for a current price in wei.
///
/// Pure and deterministic: fits the embedded USD series, projects one
/// day past it, rescales the projection into the input's wei units
/// against [`BASE_USD_PRICE`], and derives BUY iff the projection
/// clears the 0.5% threshold above the input price.
pub fn predict(current_price_wei: U256) -> Result<Prediction, EngineError> {
    let regression = regression::fit(&PRICE_HISTORY)?;

    let projected_usd = regression.project(PROJECTION_DAY);
    let projected_usd =
        u64::try_from(projected_usd).map_err(|_| EngineError::NonPositiveProjection)?;
    if projected_usd == 0 {
        return Err(EngineError::NonPositiveProjection);
    }

    // Rescale into wei. The multiply needs 256-bit width: an 18-decimal
    // price times a four-digit USD price overflows u64.
    let predicted_price =
        current_price_wei * U256::from(projected_usd) / U256::from(BASE_USD_PRICE);

    let threshold = current_price_wei + current_price_wei / U256::from(THRESHOLD_DIVISOR);
    let action = if predicted_price > threshold {
        Action::Buy
    } else {
        Action::Sell
    };

    Ok(Prediction {
        action,
        confidence: regression.confidence,
        predicted_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEI_3_6: u64 = 3_600_000_000_000_000_000;

    #[test]
    fn upward_trend_generates_buy() {
        let prediction = predict(U256::from(WEI_3_6)).unwrap();

        assert_eq!(prediction.action, Action::Buy, "series trends upward");
        assert_eq!(prediction.confidence, 97);
        assert_eq!(
            prediction.predicted_price,
            U256::from(4_182_750_000_000_000_000u64)
        );
    }

    #[test]
    fn embedded_fit_values() {
        let regression = fit(&PRICE_HISTORY).unwrap();
        assert_eq!(regression.slope, 18);
        assert_eq!(regression.intercept, 3160);
        assert_eq!(regression.project(PROJECTION_DAY), 3718);
    }

    #[test]
    fn action_is_consistent_with_threshold() {
        for wei in [WEI_3_6, 3_750_000_000_000_000_000, 5_000_000_000_000_000_000] {
            let current = U256::from(wei);
            let prediction = predict(current).unwrap();

            let threshold = current + current / U256::from(THRESHOLD_DIVISOR);
            let expected = if prediction.predicted_price > threshold {
                Action::Buy
            } else {
                Action::Sell
            };
            assert_eq!(prediction.action, expected);
            assert!(prediction.confidence <= 100);
            assert!(prediction.predicted_price > U256::ZERO);
        }
    }

    #[test]
    fn identical_inputs_give_identical_predictions() {
        let a = predict(U256::from(WEI_3_6)).unwrap();
        let b = predict(U256::from(WEI_3_6)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_journal(), b.to_journal());
    }

    #[test]
    fn journal_bytes_decode_to_prediction_fields() {
        let prediction = predict(U256::from(WEI_3_6)).unwrap();
        let journal = prediction.to_journal();

        let (action, confidence, price) = signal_journal::decode(&journal).unwrap();
        assert_eq!(action, u8::from(prediction.action));
        assert_eq!(confidence, prediction.confidence);
        assert_eq!(price, prediction.predicted_price);
    }

    #[test]
    fn large_inputs_do_not_overflow() {
        // ~18 ETH in wei, near the top of the u64 range the original
        // host dealt in.
        let prediction = predict(U256::from(18_000_000_000_000_000_000u64)).unwrap();
        assert!(prediction.predicted_price > U256::from(u64::MAX));
    }
}
