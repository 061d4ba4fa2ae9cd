use super::types::{TaxBreakdown, TaxRegime};

/// One band of a progressive schedule. The last band of a table is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxSlab {
    pub width: f64,
    pub rate: f64,
}

const fn slab(width: f64, rate: f64) -> TaxSlab {
    TaxSlab { width, rate }
}

pub const OLD_REGIME_SLABS: [TaxSlab; 4] = [
    slab(250_000.0, 0.0),
    slab(250_000.0, 0.05),
    slab(500_000.0, 0.20),
    slab(f64::INFINITY, 0.30),
];

pub const NEW_REGIME_SLABS: [TaxSlab; 6] = [
    slab(300_000.0, 0.0),
    slab(300_000.0, 0.05),
    slab(300_000.0, 0.10),
    slab(300_000.0, 0.15),
    slab(300_000.0, 0.20),
    slab(f64::INFINITY, 0.30),
];

// (income above, rate), highest tier first.
const OLD_SURCHARGE_TIERS: [(f64, f64); 4] = [
    (50_000_000.0, 0.37),
    (20_000_000.0, 0.25),
    (10_000_000.0, 0.15),
    (5_000_000.0, 0.10),
];

const NEW_SURCHARGE_TIERS: [(f64, f64); 3] = [
    (20_000_000.0, 0.25),
    (10_000_000.0, 0.15),
    (5_000_000.0, 0.10),
];

impl TaxRegime {
    pub fn slabs(self) -> &'static [TaxSlab] {
        match self {
            TaxRegime::Old => &OLD_REGIME_SLABS,
            TaxRegime::New => &NEW_REGIME_SLABS,
        }
    }

    /// `(income ceiling, maximum rebate)`.
    fn rebate_rule(self) -> (f64, f64) {
        match self {
            TaxRegime::Old => (500_000.0, 12_500.0),
            TaxRegime::New => (700_000.0, 25_000.0),
        }
    }

    /// Flat rate for the tier `taxable_income` falls in. There is no marginal
    /// relief at tier boundaries.
    pub fn surcharge_rate(self, taxable_income: f64) -> f64 {
        let tiers: &[(f64, f64)] = match self {
            TaxRegime::Old => &OLD_SURCHARGE_TIERS,
            TaxRegime::New => &NEW_SURCHARGE_TIERS,
        };
        tiers
            .iter()
            .find(|(threshold, _)| taxable_income > *threshold)
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0)
    }
}

fn slab_tax(taxable_income: f64, slabs: &[TaxSlab]) -> f64 {
    let mut tax = 0.0;
    let mut remaining = taxable_income;
    for band in slabs {
        let taxed = band.width.min(remaining);
        tax += taxed.max(0.0) * band.rate;
        remaining -= taxed;
        if remaining <= 0.0 {
            break;
        }
    }
    tax.max(0.0)
}

/// Full computation: slab walk, rebate, surcharge, then cess on the sum.
///
/// `taxable_income` is expected to be non-negative; the caller validates it.
pub fn tax_breakdown(
    taxable_income: f64,
    slabs: &[TaxSlab],
    regime: TaxRegime,
    cess: f64,
) -> TaxBreakdown {
    let income = taxable_income.max(0.0);
    let base_tax = slab_tax(income, slabs);

    let (rebate_ceiling, rebate_cap) = regime.rebate_rule();
    let rebate = if income <= rebate_ceiling {
        base_tax.min(rebate_cap)
    } else {
        0.0
    };
    let after_rebate = (base_tax - rebate).max(0.0);

    let surcharge = after_rebate * regime.surcharge_rate(income);
    let before_cess = after_rebate + surcharge;
    let total = before_cess * (1.0 + cess);

    TaxBreakdown {
        base_tax,
        rebate,
        surcharge,
        cess: total - before_cess,
        total,
    }
}

pub fn compute_tax(taxable_income: f64, slabs: &[TaxSlab], regime: TaxRegime, cess: f64) -> f64 {
    tax_breakdown(taxable_income, slabs, regime, cess).total
}
