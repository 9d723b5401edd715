//! Naive reference implementation for testing
//!
//! Follows R's `quantile.default` step by step: the sorted sample is padded
//! with two copies of each extreme so every rank lookup is in bounds, and the
//! continuous types use the weighted form `(1 - h) x_j + h x_{j+1}`.
//! Slow and allocation-heavy; used only to check the production engine.

#![allow(dead_code)]

/// Plotting-position constants `(a, b)` for types 4-9
fn plotting_position(qtype: u8) -> (f64, f64) {
    match qtype {
        4 => (0.0, 1.0),
        5 => (0.5, 0.5),
        6 => (0.0, 0.0),
        7 => (1.0, 1.0),
        8 => (1.0 / 3.0, 1.0 / 3.0),
        9 => (3.0 / 8.0, 3.0 / 8.0),
        _ => panic!("no plotting position for type {qtype}"),
    }
}

pub struct NaiveQuantile;

impl NaiveQuantile {
    pub fn quantile(data: &[f64], p: f64, qtype: u8) -> f64 {
        let mut x = data.to_vec();
        x.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = x.len();
        let fuzz = 4.0 * f64::EPSILON;

        if qtype <= 3 {
            let nppm = if qtype == 3 { n as f64 * p - 0.5 } else { n as f64 * p };
            let j = (nppm + fuzz).floor();
            let h = match qtype {
                1 => {
                    if nppm > j {
                        1.0
                    } else {
                        0.0
                    }
                }
                2 => {
                    if nppm > j {
                        1.0
                    } else {
                        0.5
                    }
                }
                _ => {
                    if nppm != j || (j as i64).rem_euclid(2) == 1 {
                        1.0
                    } else {
                        0.0
                    }
                }
            };

            // x_0 = x_-1 = x_1 and x_{n+1} = x_{n+2} = x_n
            let mut padded = vec![x[0], x[0]];
            padded.extend_from_slice(&x);
            padded.push(x[n - 1]);
            padded.push(x[n - 1]);
            let at = |rank: f64| padded[(rank + 1.0) as usize];

            let lo = at(j);
            let hi = at(j + 1.0);
            if h == 0.0 {
                lo
            } else if h == 1.0 {
                hi
            } else if lo == hi {
                lo
            } else {
                (1.0 - h) * lo + h * hi
            }
        } else {
            let (a, b) = plotting_position(qtype);
            let nppm = a + p * (n as f64 + 1.0 - a - b);
            let j = (nppm + fuzz).floor();
            let mut h = nppm - j;
            if h.abs() < fuzz {
                h = 0.0;
            }

            let mut padded = vec![x[0]];
            padded.extend_from_slice(&x);
            padded.push(x[n - 1]);
            padded.push(x[n - 1]);
            let idx = |rank: f64| rank.clamp(0.0, n as f64 + 1.0) as usize;

            let lo = padded[idx(j)];
            let hi = padded[idx(j + 1.0)];
            if h == 0.0 {
                lo
            } else if h == 1.0 || lo == hi {
                hi
            } else {
                (1.0 - h) * lo + h * hi
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_type_7_median() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        assert!((NaiveQuantile::quantile(&data, 0.5, 7) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_naive_extremes() {
        let data = vec![4.0, 2.0, 9.0];
        for qtype in 1..=9 {
            assert_eq!(NaiveQuantile::quantile(&data, 0.0, qtype), 2.0);
            assert_eq!(NaiveQuantile::quantile(&data, 1.0, qtype), 9.0);
        }
    }
}
