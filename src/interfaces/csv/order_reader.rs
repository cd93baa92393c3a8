use crate::domain::order::OrderRequest;
use crate::error::{QrisError, Result};
use std::io::Read;

/// Orders exported by the storefront, one `order,amount` row each.
///
/// Cells are trimmed, so hand-edited files with `INV-1, 50000` read the same
/// as tightly packed ones. A row with the wrong number of cells is an error.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// One item per data row. A bad amount surfaces as that row's error and
    /// the rows after it are still read.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(QrisError::from))
    }
}
