use std::path::Path;
use std::slice::Iter;
use std::time::Duration;

use getset::{CopyGetters, Getters};
use rust_decimal::{Decimal, RoundingStrategy};

const LABEL_WIDTH: usize = 8;
const TOTAL_HEADER: &str = "TOTAL";

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct SalesTotal {
    #[getset(get = "pub")]
    label: String,
    #[getset(get_copy = "pub")]
    total_cost: Decimal,
    #[getset(get_copy = "pub")]
    elapsed: Duration,
}

impl SalesTotal {
    pub fn new(label: impl Into<String>, total_cost: Decimal, elapsed: Duration) -> SalesTotal {
        SalesTotal {
            label: label.into(),
            total_cost,
            elapsed,
        }
    }
}

/// File name without directory and last extension, `data/sales.json` -> `sales`.
pub fn label_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[derive(Debug, Default, PartialEq)]
pub struct Report {
    totals: Vec<SalesTotal>,
}

impl Report {
    pub fn new() -> Report {
        Report { totals: Vec::new() }
    }

    pub fn push(&mut self, total: SalesTotal) {
        self.totals.push(total);
    }

    pub fn totals_iter(&self) -> Iter<SalesTotal> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Header record followed by one `[label, total]` record per sales file.
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut records = vec![vec![format!("{:<width$}{}", "", TOTAL_HEADER, width = LABEL_WIDTH)]];
        records.extend(self.totals.iter().map(|total| {
            vec![
                format!("{:<width$}", total.label, width = LABEL_WIDTH),
                format_amount(total.total_cost),
            ]
        }));

        records
    }
}
