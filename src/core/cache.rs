use std::collections::HashMap;
use std::rc::Rc;

use super::amortization::build_schedule;
use super::tax::tax_breakdown;
use super::types::{AmortizationPeriod, TaxBreakdown, TaxRegime};

type ScheduleKey = (u64, u64, u32);
type TaxKey = (u64, TaxRegime, u64);

/// Memo tables for schedules and tax computations, keyed by the exact bit
/// patterns of their inputs. Owned by the caller; a fresh cache gives the same
/// results as a warm one.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    schedules: HashMap<ScheduleKey, Rc<[AmortizationPeriod]>>,
    taxes: HashMap<TaxKey, TaxBreakdown>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        principal: f64,
        annual_rate_percent: f64,
        term_months: u32,
    ) -> Rc<[AmortizationPeriod]> {
        let key = (principal.to_bits(), annual_rate_percent.to_bits(), term_months);
        self.schedules
            .entry(key)
            .or_insert_with(|| build_schedule(principal, annual_rate_percent, term_months).into())
            .clone()
    }

    /// Tax under `regime`'s own slab table.
    pub fn tax(&mut self, taxable_income: f64, regime: TaxRegime, cess: f64) -> TaxBreakdown {
        let key = (taxable_income.to_bits(), regime, cess.to_bits());
        *self
            .taxes
            .entry(key)
            .or_insert_with(|| tax_breakdown(taxable_income, regime.slabs(), regime, cess))
    }

    pub fn schedule_entries(&self) -> usize {
        self.schedules.len()
    }

    pub fn tax_entries(&self) -> usize {
        self.taxes.len()
    }
}
