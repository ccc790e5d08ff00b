//! Numeric atoms for expression trees.
//!
//! Machine integers promote to `BigInt` instead of wrapping, and integer
//! division that does not divide evenly yields an exact reduced ratio
//! rather than truncating. Floats contaminate: any operation touching a
//! float produces a float.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};

// ============================================================================
// Numeric
// ============================================================================

/// A numeric value: machine integer, big integer, exact ratio, or float.
#[derive(Debug, Clone)]
pub enum Numeric {
    /// Machine integer, promoted to `Big` on overflow
    Int(i64),
    /// Arbitrary-precision integer
    Big(BigInt),
    /// Exact ratio, always reduced, denominator > 1
    Ratio(i64, i64),
    /// Double-precision float
    Float(f64),
}

impl Numeric {
    /// Build a reduced ratio. A denominator of zero is an error; a reduced
    /// denominator of one collapses to an integer.
    pub fn make_ratio(numer: i64, denom: i64) -> Result<Numeric, String> {
        if denom == 0 {
            return Err("ratio: zero denominator".to_string());
        }
        // Reduce in i128: sign normalization negates, and negating
        // i64::MIN overflows in machine width
        ratio_from_i128(numer as i128, denom as i128)
    }

    /// Approximate this value as a float.
    pub fn to_f64(&self) -> f64 {
        match self {
            Numeric::Int(n) => *n as f64,
            Numeric::Big(b) => b.to_f64().unwrap_or(0.0),
            Numeric::Ratio(n, d) => *n as f64 / *d as f64,
            Numeric::Float(f) => *f,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Numeric::Int(n) => *n == 0,
            Numeric::Big(b) => b.is_zero(),
            Numeric::Ratio(n, _) => *n == 0,
            Numeric::Float(f) => *f == 0.0,
        }
    }

    pub fn add(&self, other: &Numeric) -> Result<Numeric, String> {
        self.binary_op(other, "+", i64::checked_add, |a, b| a + b, |a, b| a + b, |a, b| a + b)
    }

    pub fn sub(&self, other: &Numeric) -> Result<Numeric, String> {
        self.binary_op(other, "-", i64::checked_sub, |a, b| a - b, |a, b| a - b, |a, b| a - b)
    }

    pub fn mul(&self, other: &Numeric) -> Result<Numeric, String> {
        self.binary_op(other, "*", i64::checked_mul, |a, b| a * b, |a, b| a * b, |a, b| a * b)
    }

    /// Exact division: integers that divide evenly stay integers, anything
    /// else exact becomes a ratio, floats stay floats.
    pub fn div(&self, other: &Numeric) -> Result<Numeric, String> {
        if other.is_zero() && !matches!((self, other), (Numeric::Float(_), _) | (_, Numeric::Float(_))) {
            return Err("/: division by zero".to_string());
        }
        match (self, other) {
            (Numeric::Float(_), _) | (_, Numeric::Float(_)) => {
                Ok(Numeric::Float(self.to_f64() / other.to_f64()))
            }
            (Numeric::Int(a), Numeric::Int(b)) => match a.checked_rem(*b) {
                Some(0) => Ok(Numeric::Int(a / b)),
                Some(_) => Numeric::make_ratio(*a, *b),
                // Overflow promotes instead of wrapping
                None => Ok(normalize_big(BigInt::from(*a) / BigInt::from(*b))),
            },
            (Numeric::Big(_), _) | (_, Numeric::Big(_)) => {
                if matches!(self, Numeric::Ratio(..)) || matches!(other, Numeric::Ratio(..)) {
                    return Ok(Numeric::Float(self.to_f64() / other.to_f64()));
                }
                let (a, b) = (self.to_big(), other.to_big());
                if (&a % &b).is_zero() {
                    Ok(normalize_big(a / b))
                } else {
                    // Inexact big division falls back to float
                    Ok(Numeric::Float(self.to_f64() / other.to_f64()))
                }
            }
            _ => {
                let (an, ad) = self.as_ratio_parts();
                let (bn, bd) = other.as_ratio_parts();
                ratio_from_i128(an * bd, ad * bn)
            }
        }
    }

    /// Shared dispatch for `+`, `-`, `*`.
    fn binary_op(
        &self,
        other: &Numeric,
        op_name: &str,
        int_op: fn(i64, i64) -> Option<i64>,
        big_op: fn(BigInt, BigInt) -> BigInt,
        ratio_op: fn(Ratio<i128>, Ratio<i128>) -> Ratio<i128>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Numeric, String> {
        match (self, other) {
            (Numeric::Float(_), _) | (_, Numeric::Float(_)) => {
                Ok(Numeric::Float(float_op(self.to_f64(), other.to_f64())))
            }
            (Numeric::Int(a), Numeric::Int(b)) => match int_op(*a, *b) {
                Some(n) => Ok(Numeric::Int(n)),
                // Overflow promotes instead of wrapping
                None => Ok(normalize_big(big_op(BigInt::from(*a), BigInt::from(*b)))),
            },
            (Numeric::Big(_), _) | (_, Numeric::Big(_)) => {
                if matches!(self, Numeric::Ratio(..)) || matches!(other, Numeric::Ratio(..)) {
                    // Big/ratio mixtures leave the exact domain
                    Ok(Numeric::Float(float_op(self.to_f64(), other.to_f64())))
                } else {
                    Ok(normalize_big(big_op(self.to_big(), other.to_big())))
                }
            }
            _ => {
                let (an, ad) = self.as_ratio_parts();
                let (bn, bd) = other.as_ratio_parts();
                let r = ratio_op(Ratio::new(an, ad), Ratio::new(bn, bd));
                ratio_from_i128(*r.numer(), *r.denom())
                    .map_err(|_| format!("{op_name}: ratio overflow"))
            }
        }
    }

    fn to_big(&self) -> BigInt {
        match self {
            Numeric::Int(n) => BigInt::from(*n),
            Numeric::Big(b) => b.clone(),
            // Only called for integral values
            Numeric::Ratio(n, _) => BigInt::from(*n),
            Numeric::Float(f) => BigInt::from(*f as i64),
        }
    }

    /// Numerator/denominator view for exact (non-float, non-big) values.
    fn as_ratio_parts(&self) -> (i128, i128) {
        match self {
            Numeric::Int(n) => (*n as i128, 1),
            Numeric::Ratio(n, d) => (*n as i128, *d as i128),
            Numeric::Big(_) | Numeric::Float(_) => (0, 1),
        }
    }
}

fn normalize_big(b: BigInt) -> Numeric {
    match b.to_i64() {
        Some(n) => Numeric::Int(n),
        None => Numeric::Big(b),
    }
}

fn ratio_from_i128(numer: i128, denom: i128) -> Result<Numeric, String> {
    if denom == 0 {
        return Err("/: division by zero".to_string());
    }
    let r = Ratio::new(numer, denom);
    let (n, d) = (*r.numer(), *r.denom());
    if d == 1 {
        return Ok(normalize_big(BigInt::from(n)));
    }
    match (i64::try_from(n), i64::try_from(d)) {
        (Ok(n), Ok(d)) => Ok(Numeric::Ratio(n, d)),
        // Out of machine range: keep the value, lose exactness
        _ => Ok(Numeric::Float(n as f64 / d as f64)),
    }
}

// ============================================================================
// Equality and Ordering
// ============================================================================

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a == b,
            (Numeric::Ratio(an, ad), Numeric::Ratio(bn, bd)) => an == bn && ad == bd,
            (Numeric::Big(a), Numeric::Big(b)) => a == b,
            (Numeric::Int(a), Numeric::Big(b)) | (Numeric::Big(b), Numeric::Int(a)) => {
                BigInt::from(*a) == *b
            }
            (Numeric::Float(_), _) | (_, Numeric::Float(_)) => self.to_f64() == other.to_f64(),
            // Ratios are reduced with denominator > 1 at construction, so
            // they never equal an integer
            _ => false,
        }
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a.partial_cmp(b),
            (Numeric::Big(a), Numeric::Big(b)) => a.partial_cmp(b),
            (Numeric::Ratio(an, ad), Numeric::Ratio(bn, bd)) => {
                (*an as i128 * *bd as i128).partial_cmp(&(*bn as i128 * *ad as i128))
            }
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(n) => write!(f, "{n}"),
            Numeric::Big(b) => write!(f, "{b}"),
            Numeric::Ratio(n, d) => write!(f, "{n}/{d}"),
            // {:?} keeps the decimal point, so "2.0" reads back as a float
            Numeric::Float(x) => write!(f, "{x:?}"),
        }
    }
}
