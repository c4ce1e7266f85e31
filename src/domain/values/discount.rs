use crate::domain::error::DomainError;
use serde::Serialize;

/// Savings of a deal relative to its original price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Discount {
    /// Whole percent off. Not clamped: pricing errors show up as values
    /// above 100 or below 0.
    pub percent: i64,
    /// `original - current`, negative when the current price is higher.
    pub savings: f64,
}

impl Discount {
    /// Whether a discount badge may be shown at all.
    pub fn is_displayable(&self) -> bool {
        self.percent > 0 && self.savings > 0.0
    }
}

/// Compute the discount for an original/current price pair.
///
/// Fails with [`DomainError::InvalidPrice`] when `original` is not a positive
/// number. Callers render the deal without discount information in that case.
pub fn compute_discount(original: f64, current: f64) -> Result<Discount, DomainError> {
    if !original.is_finite() || original <= 0.0 {
        return Err(DomainError::InvalidPrice(original));
    }
    let savings = original - current;
    let raw = savings / original * 100.0;
    Ok(Discount {
        percent: round_half_up(raw),
        savings,
    })
}

// Halves round toward +inf, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_prices_have_no_discount() {
        let d = compute_discount(100.0, 100.0).unwrap();
        assert_eq!(d.percent, 0);
        assert_eq!(d.savings, 0.0);
        assert!(!d.is_displayable());
    }

    #[test]
    fn test_zero_original_is_invalid() {
        assert!(matches!(
            compute_discount(0.0, 50.0),
            Err(DomainError::InvalidPrice(_))
        ));
        assert!(compute_discount(-10.0, 5.0).is_err());
        assert!(compute_discount(f64::NAN, 5.0).is_err());
        assert!(compute_discount(f64::INFINITY, 5.0).is_err());
    }

    #[test]
    fn test_typical_discount() {
        let d = compute_discount(4199.99, 3299.99).unwrap();
        assert_eq!(d.percent, 21);
        assert!((d.savings - 900.0).abs() < 1e-9);
        assert!(d.is_displayable());
    }

    #[test]
    fn test_rounds_half_up() {
        // 12.5% off
        assert_eq!(compute_discount(200.0, 175.0).unwrap().percent, 13);
        // 2.5% more expensive
        assert_eq!(compute_discount(200.0, 205.0).unwrap().percent, -2);
    }

    #[test]
    fn test_strict_discounts_stay_between_1_and_99() {
        for original in [1.0, 3.5, 10.0, 99.99, 250.0, 4199.99] {
            for factor in [0.01, 0.1, 0.33, 0.5, 0.9, 0.99] {
                let current = original * factor;
                let d = compute_discount(original, current).unwrap();
                assert!((1..=99).contains(&d.percent), "{original} -> {current}: {}", d.percent);
                assert!(d.savings > 0.0);
            }
        }
    }

    #[test]
    fn test_anomalies_pass_through() {
        let overpriced = compute_discount(100.0, 150.0).unwrap();
        assert_eq!(overpriced.percent, -50);
        assert_eq!(overpriced.savings, -50.0);
        assert!(!overpriced.is_displayable());

        let negative_current = compute_discount(100.0, -20.0).unwrap();
        assert_eq!(negative_current.percent, 120);
    }
}
