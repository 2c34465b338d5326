/// Samples of one chart, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    name: Option<String>,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn new<L, S>(labels: L, values: impl Into<Vec<f64>>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            labels: labels.into_iter().map(Into::into).collect(),
            values: values.into(),
        }
    }

    /// Series without category labels (e.g. doughnut slices).
    pub fn unlabeled(values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: None,
            labels: Vec::new(),
            values: values.into(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
