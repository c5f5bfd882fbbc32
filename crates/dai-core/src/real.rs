//! Real number type and elementary functions

/// Real number used throughout libdai-rs
pub type Real = f64;

/// Natural logarithm of `x`
#[inline]
pub fn log(x: Real) -> Real {
    x.ln()
}

/// Exponential of `x`
#[inline]
pub fn exp(x: Real) -> Real {
    x.exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_exp_inverse() {
        for x in [0.5, 1.0, 2.0, 1e-8, 1e8] {
            assert!((exp(log(x)) - x).abs() <= 1e-12 * x);
        }
        assert_eq!(log(1.0), 0.0);
        assert_eq!(log(0.0), Real::NEG_INFINITY);
        assert!(log(-1.0).is_nan());
    }
}
