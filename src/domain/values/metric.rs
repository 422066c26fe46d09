use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Euclidean,
    Cosine,
}

impl Metric {
    /// pgvector ranking operator for this metric.
    pub fn operator(&self) -> &'static str {
        match self {
            Metric::Euclidean => "<->",
            Metric::Cosine => "<=>",
        }
    }

    /// Reference distance computation, mirroring the store-side operators.
    /// Euclidean is the raw L2 norm of the difference; cosine is
    /// `1 - cosine_similarity`.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f64 {
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (*x as f64 - *y as f64).powi(2))
                .sum::<f64>()
                .sqrt(),
            Metric::Cosine => {
                let mut dot = 0.0_f64;
                let mut norm_a = 0.0_f64;
                let mut norm_b = 0.0_f64;
                for (x, y) in a.iter().zip(b) {
                    let x = *x as f64;
                    let y = *y as f64;
                    dot += x * y;
                    norm_a += x * x;
                    norm_b += y * y;
                }
                let denom = norm_a.sqrt() * norm_b.sqrt();
                if denom == 0.0 {
                    1.0
                } else {
                    1.0 - dot / denom
                }
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::Cosine => write!(f, "cosine"),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "cosine" => Ok(Metric::Cosine),
            _ => Err(format!("Unknown metric: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(mut v: Vec<f32>) -> Vec<f32> {
        let norm = v.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        for x in v.iter_mut() {
            *x = (*x as f64 / norm) as f32;
        }
        v
    }

    // Deterministic pseudo-random unit vectors, no rand dependency.
    fn pseudo_corpus(n: usize, dim: usize) -> Vec<Vec<f32>> {
        let mut state = 0x2545_f491_4f6c_dd1d_u64;
        (0..n)
            .map(|_| {
                let v: Vec<f32> = (0..dim)
                    .map(|_| {
                        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                        ((state >> 33) as f64 / (1u64 << 31) as f64 - 1.0) as f32
                    })
                    .collect();
                unit(v)
            })
            .collect()
    }

    #[test]
    fn operator_mapping() {
        assert_eq!(Metric::Euclidean.operator(), "<->");
        assert_eq!(Metric::Cosine.operator(), "<=>");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("COSINE".parse::<Metric>().unwrap(), Metric::Cosine);
        assert!("manhattan".parse::<Metric>().is_err());
    }

    #[test]
    fn euclidean_distance_of_identical_vectors_is_zero() {
        let v = unit(vec![1.0, 2.0, 3.0]);
        assert!(Metric::Euclidean.distance(&v, &v).abs() < 1e-9);
    }

    #[test]
    fn cosine_distance_of_orthogonal_vectors_is_one() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((Metric::Cosine.distance(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn euclidean_and_cosine_rankings_agree_on_unit_vectors() {
        let mut corpus = pseudo_corpus(13, 16);
        let query = corpus.pop().unwrap();

        let rank = |metric: Metric| -> Vec<usize> {
            let mut ids: Vec<usize> = (0..corpus.len()).collect();
            ids.sort_by(|&i, &j| {
                let di = metric.distance(&query, &corpus[i]);
                let dj = metric.distance(&query, &corpus[j]);
                di.partial_cmp(&dj).unwrap().then(i.cmp(&j))
            });
            ids
        };

        assert_eq!(rank(Metric::Euclidean), rank(Metric::Cosine));
    }
}
