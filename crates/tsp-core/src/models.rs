use crate::error::{Error, Result};
use crate::oracle::DistanceOracle;
use crate::utils::{euclidean_distance, great_circle_distance};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    #[default]
    Euclidean,
    /// `x` is longitude and `y` latitude, both in degrees; distances in km.
    GreatCircle,
}

/// Labelled points with an on-the-fly distance metric.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PointSet {
    pub points: Vec<Point>,
    #[serde(default)]
    pub metric: Metric,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PointSet {
    pub fn new(points: Vec<Point>, metric: Metric) -> Self {
        let mut set = Self {
            points,
            metric,
            index: HashMap::new(),
        };
        set.reindex();
        set
    }

    pub fn euclidean(points: Vec<Point>) -> Self {
        Self::new(points, Metric::Euclidean)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut set: PointSet = serde_json::from_str(json)?;
        set.reindex();
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn reindex(&mut self) {
        // Duplicated labels keep their first position; the search rejects them anyway.
        self.index.clear();
        for (idx, point) in self.points.iter().enumerate() {
            self.index.entry(point.label.clone()).or_insert(idx);
        }
    }

    fn point(&self, label: &str) -> Option<&Point> {
        self.index.get(label).map(|&idx| &self.points[idx])
    }
}

impl DistanceOracle for PointSet {
    type Node = String;

    fn nodes(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    fn distance(&self, from: &String, to: &String) -> f64 {
        match (self.point(from), self.point(to)) {
            (Some(a), Some(b)) => match self.metric {
                Metric::Euclidean => euclidean_distance(a, b),
                Metric::GreatCircle => great_circle_distance(a, b),
            },
            // Unknown labels surface as an invalid distance during validation.
            _ => f64::NAN,
        }
    }
}

/// Explicit row-major `n x n` distance table with labels. Need not be symmetric.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    weights: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = labels.len();
        if rows.len() != n {
            return Err(Error::invalid_graph(format!(
                "expected {n} rows, got {}",
                rows.len()
            )));
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::invalid_graph(format!(
                    "row {i} has {} columns, expected {n}",
                    row.len()
                )));
            }
            weights.extend(row);
        }

        Ok(Self { labels, weights })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl DistanceOracle for DistanceMatrix {
    type Node = String;

    fn nodes(&self) -> Vec<String> {
        self.labels.clone()
    }

    fn distance(&self, from: &String, to: &String) -> f64 {
        match (self.position(from), self.position(to)) {
            (Some(i), Some(j)) => self.weights[i * self.labels.len() + j],
            _ => f64::NAN,
        }
    }
}

/// A closed tour: `path.first() == path.last()` whenever more than one node
/// was visited. An empty path with infinite cost means no tour was found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour<N> {
    pub path: Vec<N>,
    pub cost: f64,
}

impl<N> Tour<N> {
    pub fn empty() -> Self {
        Self {
            path: Vec::new(),
            cost: 0.0,
        }
    }

    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        self.cost.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_set_deserializes_and_measures() {
        let set = PointSet::from_json_str(
            r#"{"points":[{"label":"a","x":0.0,"y":0.0},{"label":"b","x":0.0,"y":2.0}]}"#,
        )
        .unwrap();

        assert_eq!(set.metric, Metric::Euclidean);
        assert_eq!(set.nodes(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(set.distance(&"a".into(), &"b".into()), 2.0);
    }

    #[test]
    fn unknown_label_yields_nan() {
        let set = PointSet::euclidean(vec![Point::new("a", 0.0, 0.0)]);
        assert!(set.distance(&"a".into(), &"zz".into()).is_nan());
    }

    #[test]
    fn matrix_rejects_ragged_rows() {
        let err = DistanceMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![0.0, 1.0], vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidGraph(_)));
    }

    #[test]
    fn matrix_keeps_direction() {
        let m = DistanceMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![0.0, 1.0], vec![7.0, 0.0]],
        )
        .unwrap();
        assert_eq!(m.distance(&"a".into(), &"b".into()), 1.0);
        assert_eq!(m.distance(&"b".into(), &"a".into()), 7.0);
    }
}
