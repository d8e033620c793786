//! Panel-type catalog loading from CSV.
//!
//! The engine consumes an already-materialized `&[PanelType]`; this
//! crate is the glue that produces one, either from a shop-maintained
//! CSV file or from the bundled standing catalog. Keeping the catalog in
//! sync matters: unit-type codes the catalog does not know are priced at
//! zero by the engine.

use std::io::Read;

use proposal_core::PanelType;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a panel-type catalog.
#[derive(Debug, Error)]
pub enum PanelCatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("duplicate unit-type code '{0}'")]
    DuplicateCode(String),

    #[error("unit-type code missing on row {0}")]
    MissingCode(usize),

    #[error("negative price {price} for unit-type '{code}'")]
    NegativePrice { code: String, price: Decimal },
}

impl From<csv::Error> for PanelCatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        PanelCatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the catalog CSV file.
///
/// - `id`: the unit-type code bucking rows reference (e.g. `SH`)
/// - `label`: human-readable unit name
/// - `price`: per-unit price in USD
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct PanelTypeRecord {
    id: String,
    label: String,
    price: Decimal,
}

/// Loader for panel-type catalog data from CSV.
pub struct PanelCatalogLoader;

impl PanelCatalogLoader {
    /// Parses catalog records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a string slice. Codes are trimmed; rows are validated for
    /// blank or duplicate codes and negative prices.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PanelType>, PanelCatalogLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut catalog: Vec<PanelType> = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let record: PanelTypeRecord = result?;
            let code = record.id.trim().to_string();

            if code.is_empty() {
                // Row numbering is 1-based and skips the header.
                return Err(PanelCatalogLoaderError::MissingCode(index + 2));
            }
            if catalog.iter().any(|panel| panel.id == code) {
                return Err(PanelCatalogLoaderError::DuplicateCode(code));
            }
            if record.price < Decimal::ZERO {
                return Err(PanelCatalogLoaderError::NegativePrice {
                    code,
                    price: record.price,
                });
            }

            catalog.push(PanelType {
                id: code,
                label: record.label.trim().to_string(),
                price: record.price,
            });
        }

        tracing::debug!(entries = catalog.len(), "panel catalog loaded");
        Ok(catalog)
    }
}

/// The bundled standing catalog, for callers without a shop CSV.
pub fn default_catalog() -> Vec<PanelType> {
    const BUNDLED_CSV: &str = include_str!("../data/panel_types.csv");

    // The bundled file is validated by tests; a parse failure here would
    // be a build defect, so an empty catalog is the safe degraded answer.
    PanelCatalogLoader::parse(BUNDLED_CSV.as_bytes()).unwrap_or_default()
}
