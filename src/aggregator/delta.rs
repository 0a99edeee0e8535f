//! Running delta computation across consecutive snapshots.
//!
//! Most status variables are monotonically increasing counters, so the
//! interesting signal is the change between two samples. Gauge-like
//! variables (by default everything under `Threads_`) are recorded at their
//! raw value instead.
//!
//! The accumulator lives for one ingestion run and must see samples in
//! snapshot order.

use crate::parser::schema::{RawSample, SeriesTable};
use crate::utils::config::DEFAULT_GAUGE_PREFIXES;
use log::trace;
use std::collections::HashMap;

/// Previous-value table plus the series built from it
#[derive(Debug, Clone)]
pub struct DeltaAccumulator {
    gauge_prefixes: Vec<String>,
    previous: HashMap<String, i64>,
    series: SeriesTable,
}

impl Default for DeltaAccumulator {
    fn default() -> Self {
        Self::with_gauge_prefixes(DEFAULT_GAUGE_PREFIXES.iter().map(|p| p.to_string()))
    }
}

impl DeltaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with a custom list of gauge prefixes
    pub fn with_gauge_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            gauge_prefixes: prefixes.into_iter().map(Into::into).collect(),
            previous: HashMap::new(),
            series: SeriesTable::new(),
        }
    }

    /// Whether `name` is plotted at raw value rather than as a delta
    pub fn is_gauge(&self, name: &str) -> bool {
        self.gauge_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// Record one sample
    ///
    /// **Public** - called once per parsed row, in snapshot order
    ///
    /// The first occurrence of a counter only seeds the previous-value
    /// table. Gauges append on every occurrence.
    pub fn record(&mut self, sample: RawSample) {
        let RawSample { name, value } = sample;

        let entry = if self.is_gauge(&name) {
            Some(value)
        } else {
            self.previous
                .get(&name)
                .map(|prev| value.wrapping_sub(*prev))
        };

        if let Some(entry) = entry {
            trace!("{} += {}", name, entry);
            self.series.entry(name.clone()).or_default().push(entry);
        }

        self.previous.insert(name, value);
    }

    /// Record all samples of one snapshot, in order
    pub fn ingest(&mut self, samples: impl IntoIterator<Item = RawSample>) -> usize {
        let mut count = 0;
        for sample in samples {
            self.record(sample);
            count += 1;
        }
        count
    }

    /// Last raw value seen for `name`
    pub fn previous(&self, name: &str) -> Option<i64> {
        self.previous.get(name).copied()
    }

    /// Series recorded so far for `name`
    pub fn series(&self, name: &str) -> Option<&[i64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Number of distinct variables seen, including seed-only ones
    pub fn variables_seen(&self) -> usize {
        self.previous.len()
    }

    /// End the run and hand over the completed series
    pub fn finish(self) -> SeriesTable {
        self.series
    }
}
