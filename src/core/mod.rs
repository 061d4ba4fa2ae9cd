mod amortization;
mod cache;
mod deductions;
mod engine;
mod tax;
mod types;

pub use amortization::{BALANCE_EPSILON, MONTHS_PER_YEAR, build_schedule, compute_payment, year_totals};
pub use cache::ProjectionCache;
pub use deductions::{YearFlows, deduction_profile, hra_exemption};
pub use engine::{run_loan_vs_cash, run_projection, run_projection_with_cache};
pub use tax::{NEW_REGIME_SLABS, OLD_REGIME_SLABS, TaxSlab, compute_tax, tax_breakdown};
pub use types::{
    AmortizationPeriod, DeductionProfile, Inputs, LoanVsCashYear, Projection, ProjectionSummary,
    RegimePolicy, Strategy, TaxBreakdown, TaxDetailRow, TaxRegime, Variant, YearTotals,
    YearlyRecord,
};
