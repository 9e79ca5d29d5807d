//! Metric Family Model and Exposition
//!
//! Collection cycles produce plain [`MetricFamily`] values: a name, a type, a fixed label
//! schema and samples in traversal order. Rendering to the Prometheus text format goes
//! through a fresh `prometheus::Registry` per scrape, so nothing survives between scrapes
//! and a failed cycle exposes nothing.
//!
//! # Metric Types
//!
//! - **Gauge**: current value, or a constant `1` presence flag for string-valued facts
//! - **Counter**: monotonically increasing value (controller uptime)
//! - **Info**: a single `1`-valued sample whose labels carry the information; rendered as
//!   a gauge, following the `_info` naming convention

use prometheus::{CounterVec, Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
    Info,
}

/// One labeled value
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label_values: Vec<String>,
    pub value: f64,
}

/// A named, typed group of samples sharing a label schema
#[derive(Debug, Clone)]
pub struct MetricFamily {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub label_names: &'static [&'static str],
    samples: Vec<Sample>,
    index: HashMap<Vec<String>, usize>,
}

impl MetricFamily {
    pub fn new(
        name: &'static str,
        help: &'static str,
        kind: MetricKind,
        label_names: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            kind,
            label_names,
            samples: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn gauge(name: &'static str, help: &'static str, labels: &'static [&'static str]) -> Self {
        Self::new(name, help, MetricKind::Gauge, labels)
    }

    pub fn counter(
        name: &'static str,
        help: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        Self::new(name, help, MetricKind::Counter, labels)
    }

    pub fn info(name: &'static str, help: &'static str, labels: &'static [&'static str]) -> Self {
        Self::new(name, help, MetricKind::Info, labels)
    }

    /// Append a sample. A label tuple already present keeps its position and takes the new
    /// value, so label tuples stay unique within the family.
    pub fn add_sample(&mut self, label_values: Vec<String>, value: f64) {
        debug_assert_eq!(
            label_values.len(),
            self.label_names.len(),
            "label count mismatch for {}",
            self.name
        );

        if let Some(&position) = self.index.get(&label_values) {
            self.samples[position].value = value;
            return;
        }
        self.index.insert(label_values.clone(), self.samples.len());
        self.samples.push(Sample {
            label_values,
            value,
        });
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Value of the sample with exactly these label values
    pub fn value_of(&self, label_values: &[&str]) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.label_values.iter().map(String::as_str).eq(label_values.iter().copied()))
            .map(|s| s.value)
    }

    fn register(&self, registry: &Registry) -> anyhow::Result<()> {
        let opts = Opts::new(self.name, self.help);

        match self.kind {
            MetricKind::Gauge | MetricKind::Info => {
                let vec = GaugeVec::new(opts, self.label_names)?;
                for sample in &self.samples {
                    vec.get_metric_with_label_values(sample.label_refs().as_slice())?
                        .set(sample.value);
                }
                registry.register(Box::new(vec))?;
            }
            MetricKind::Counter => {
                let vec = CounterVec::new(opts, self.label_names)?;
                for sample in &self.samples {
                    // Counters reject negative increments
                    vec.get_metric_with_label_values(sample.label_refs().as_slice())?
                        .inc_by(sample.value.max(0.0));
                }
                registry.register(Box::new(vec))?;
            }
        }
        Ok(())
    }
}

impl PartialEq for MetricFamily {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.help == other.help
            && self.kind == other.kind
            && self.label_names == other.label_names
            && self.samples == other.samples
    }
}

impl Sample {
    fn label_refs(&self) -> Vec<&str> {
        self.label_values.iter().map(String::as_str).collect()
    }
}

/// Render families in Prometheus text format
pub fn render(families: &[MetricFamily]) -> anyhow::Result<String> {
    let registry = Registry::new();
    for family in families {
        family.register(&registry)?;
    }

    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
