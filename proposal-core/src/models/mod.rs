mod computed;
mod draft;
mod panel_type;
mod thresholds;

pub use computed::{
    ContractTotals, CostBreakdown, EstimateComputed, MarginChecks, Margins, PanelCounts,
    PaymentSchedule, PdfValue,
};
pub use draft::{
    BuckingLineItem, CalculatorInputs, ChangeOrderInput, EstimateDraft, EuroPricing, EuroSection,
    FeatureSelection, ProductItem, ProjectInfo,
};
pub use panel_type::PanelType;
pub use thresholds::MarginThresholds;
