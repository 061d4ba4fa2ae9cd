use super::types::{AmortizationPeriod, YearTotals};

pub const MONTHS_PER_YEAR: u32 = 12;

/// Balances below this are treated as fully repaid.
pub const BALANCE_EPSILON: f64 = 1e-8;

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

/// Fixed monthly payment (EMI) that amortizes `principal` over `term_months`.
///
/// Callers must reject `term_months == 0` and negative principals beforehand.
pub fn compute_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    let r = monthly_rate(annual_rate_percent);
    if r == 0.0 {
        return principal / term_months as f64;
    }
    // (1+r)^n - 1 via exp_m1/ln_1p; the naive difference cancels at small rates.
    let growth_minus_one = (term_months as f64 * r.ln_1p()).exp_m1();
    principal * r * (growth_minus_one + 1.0) / growth_minus_one
}

/// Month-by-month split of the fixed payment. The final month settles whatever
/// rounding residue is left, so the closing balance is exactly zero.
pub fn build_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> Vec<AmortizationPeriod> {
    let payment = compute_payment(principal, annual_rate_percent, term_months);
    let r = monthly_rate(annual_rate_percent);
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for month in 1..=term_months {
        let interest = balance * r;
        let (payment, principal_paid) = if month == term_months {
            (interest + balance, balance)
        } else {
            (payment, payment - interest)
        };
        balance -= principal_paid;
        if balance < BALANCE_EPSILON {
            balance = 0.0;
        }
        schedule.push(AmortizationPeriod {
            month,
            payment,
            interest,
            principal: principal_paid,
            balance,
        });
    }

    schedule
}

/// Sums the months of `year` (1-based). Years past the end of the schedule
/// report no payments and a zero balance.
pub fn year_totals(schedule: &[AmortizationPeriod], year: u32) -> YearTotals {
    let start = year.saturating_sub(1).saturating_mul(MONTHS_PER_YEAR) as usize;
    let end = (year.saturating_mul(MONTHS_PER_YEAR) as usize).min(schedule.len());
    if start >= end {
        return YearTotals::default();
    }

    let months = &schedule[start..end];
    YearTotals {
        interest: months.iter().map(|p| p.interest).sum(),
        principal: months.iter().map(|p| p.principal).sum(),
        payment: months.iter().map(|p| p.payment).sum(),
        closing_balance: months.last().map(|p| p.balance).unwrap_or(0.0),
    }
}
