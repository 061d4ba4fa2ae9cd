use super::amortization::{MONTHS_PER_YEAR, year_totals};
use super::cache::ProjectionCache;
use super::deductions::{YearFlows, deduction_profile};
use super::types::{
    DeductionProfile, Inputs, LoanVsCashYear, Projection, ProjectionSummary, Strategy,
    TaxBreakdown, TaxDetailRow, TaxRegime, YearlyRecord,
};

#[derive(Debug, Clone, Copy)]
struct RegimeAssessment {
    regime: TaxRegime,
    profile: DeductionProfile,
    taxable_income: f64,
    tax: TaxBreakdown,
}

#[derive(Debug, Clone)]
struct StrategyTax {
    chosen: RegimeAssessment,
    evaluated: Vec<RegimeAssessment>,
}

impl StrategyTax {
    fn total(&self) -> f64 {
        self.chosen.tax.total
    }
}

#[derive(Debug, Clone, Copy)]
struct Holdings {
    loan: f64,
    cash: f64,
    rent: f64,
}

impl Holdings {
    fn opening(inputs: &Inputs) -> Self {
        let down_payment = inputs.house_price - inputs.loan_amount;
        Self {
            loan: (inputs.initial_cash - down_payment).max(0.0),
            cash: (inputs.initial_cash - inputs.house_price).max(0.0),
            rent: inputs.initial_cash,
        }
    }
}

pub fn run_projection(inputs: &Inputs) -> Projection {
    let mut cache = ProjectionCache::new();
    run_projection_with_cache(inputs, &mut cache)
}

pub fn run_projection_with_cache(inputs: &Inputs, cache: &mut ProjectionCache) -> Projection {
    let term_months = inputs.loan_tenure_years.saturating_mul(MONTHS_PER_YEAR);
    let schedule = cache.schedule(inputs.loan_amount, inputs.loan_interest_percent, term_months);

    let mut holdings = Holdings::opening(inputs);
    let mut house_value = inputs.house_price;
    let mut salary = inputs.starting_salary;
    let mut annual_rent = inputs.monthly_rent * MONTHS_PER_YEAR as f64;

    let mut years = Vec::with_capacity(inputs.years as usize);
    let mut tax_details = Vec::new();

    for year in 1..=inputs.years {
        let loan_year = year_totals(&schedule, year);
        let flows = YearFlows {
            salary,
            interest_paid: loan_year.interest,
            principal_paid: loan_year.principal,
            rent_paid: annual_rent,
        };

        let loan_tax = assess_strategy(inputs, cache, Strategy::Loan, &flows);
        let cash_tax = assess_strategy(inputs, cache, Strategy::Cash, &flows);
        let rent_tax = assess_strategy(inputs, cache, Strategy::Rent, &flows);

        let investable_loan = investable(inputs, salary, loan_tax.total(), loan_year.payment);
        let investable_cash = investable(inputs, salary, cash_tax.total(), 0.0);
        let investable_rent = investable(inputs, salary, rent_tax.total(), annual_rent);

        holdings.loan = grow(holdings.loan, inputs.investment_return) + investable_loan;
        holdings.cash = grow(holdings.cash, inputs.investment_return) + investable_cash;
        holdings.rent = grow(holdings.rent, inputs.investment_return) + investable_rent;
        house_value = grow(house_value, inputs.house_appreciation);

        let balance = loan_year.closing_balance;
        years.push(YearlyRecord {
            year,
            annual_salary: salary,
            interest_paid: loan_year.interest,
            principal_paid: loan_year.principal,
            emi_paid: loan_year.payment,
            rent_paid: annual_rent,
            tax_loan: loan_tax.total(),
            tax_cash: cash_tax.total(),
            tax_rent: rent_tax.total(),
            regime_loan: loan_tax.chosen.regime,
            regime_cash: cash_tax.chosen.regime,
            regime_rent: rent_tax.chosen.regime,
            investable_loan,
            investable_cash,
            investable_rent,
            investment_value_loan: holdings.loan,
            investment_value_cash: holdings.cash,
            investment_value_rent: holdings.rent,
            house_value,
            loan_outstanding_balance: balance,
            net_worth_loan: holdings.loan + house_value - balance,
            net_worth_cash: holdings.cash + house_value,
            net_worth_rent: holdings.rent,
        });

        for (strategy, assessed) in [
            (Strategy::Loan, &loan_tax),
            (Strategy::Cash, &cash_tax),
            (Strategy::Rent, &rent_tax),
        ] {
            push_detail_rows(&mut tax_details, year, strategy, salary, assessed);
        }

        salary = grow(salary, inputs.salary_growth);
        annual_rent = grow(annual_rent, inputs.rent_escalation);
    }

    let summary = summarize(&years);
    tracing::debug!(
        years = years.len(),
        tax_details = tax_details.len(),
        best = ?summary.best_strategy,
        "projection complete"
    );

    Projection {
        years,
        tax_details,
        summary,
    }
}

/// Loan-versus-cash table: the two owning strategies of the full projection.
pub fn run_loan_vs_cash(inputs: &Inputs) -> Vec<LoanVsCashYear> {
    run_projection(inputs)
        .years
        .iter()
        .map(LoanVsCashYear::from)
        .collect()
}

fn grow(value: f64, rate: f64) -> f64 {
    value * (1.0 + rate)
}

fn investable(inputs: &Inputs, salary: f64, tax: f64, mandatory_outflow: f64) -> f64 {
    let post_tax = (salary - tax).max(0.0);
    let expenses = post_tax * inputs.expense_fraction;
    (salary - tax - expenses - mandatory_outflow).max(0.0)
}

fn assess_strategy(
    inputs: &Inputs,
    cache: &mut ProjectionCache,
    strategy: Strategy,
    flows: &YearFlows,
) -> StrategyTax {
    let evaluated = inputs
        .regime_policy
        .candidates()
        .iter()
        .map(|&regime| {
            let profile = deduction_profile(inputs, strategy, regime, flows);
            let taxable_income = (flows.salary - profile.total()).max(0.0);
            RegimeAssessment {
                regime,
                profile,
                taxable_income,
                tax: cache.tax(taxable_income, regime, inputs.cess),
            }
        })
        .collect::<Vec<_>>();

    let chosen = select_regime(&evaluated);
    StrategyTax { chosen, evaluated }
}

/// Lowest total tax wins; an exact tie resolves to the old regime regardless
/// of evaluation order.
fn select_regime(evaluated: &[RegimeAssessment]) -> RegimeAssessment {
    let mut best = evaluated[0];
    for candidate in &evaluated[1..] {
        let cheaper = candidate.tax.total < best.tax.total;
        let tie_to_old =
            candidate.tax.total == best.tax.total && candidate.regime == TaxRegime::Old;
        if cheaper || tie_to_old {
            best = *candidate;
        }
    }
    best
}

fn push_detail_rows(
    rows: &mut Vec<TaxDetailRow>,
    year: u32,
    strategy: Strategy,
    gross_income: f64,
    assessed: &StrategyTax,
) {
    for entry in &assessed.evaluated {
        rows.push(TaxDetailRow {
            year,
            strategy,
            regime: entry.regime,
            gross_income,
            standard_deduction: entry.profile.standard_deduction,
            hra_exemption: entry.profile.hra_exemption,
            home_loan_interest: entry.profile.home_loan_interest,
            section_80c: entry.profile.section_80c,
            section_80ccd_1b: entry.profile.section_80ccd_1b,
            section_80ccd_2: entry.profile.section_80ccd_2,
            section_80d: entry.profile.section_80d,
            disability: entry.profile.disability,
            total_deductions: entry.profile.total(),
            taxable_income: entry.taxable_income,
            base_tax: entry.tax.base_tax,
            rebate: entry.tax.rebate,
            surcharge: entry.tax.surcharge,
            cess: entry.tax.cess,
            total_tax: entry.tax.total,
            selected: entry.regime == assessed.chosen.regime,
        });
    }
}

fn summarize(years: &[YearlyRecord]) -> ProjectionSummary {
    let last = years.last();
    let final_net_worth_loan = last.map(|r| r.net_worth_loan).unwrap_or(0.0);
    let final_net_worth_cash = last.map(|r| r.net_worth_cash).unwrap_or(0.0);
    let final_net_worth_rent = last.map(|r| r.net_worth_rent).unwrap_or(0.0);

    let mut best_strategy = Strategy::Loan;
    let mut best_value = final_net_worth_loan;
    for (strategy, value) in [
        (Strategy::Cash, final_net_worth_cash),
        (Strategy::Rent, final_net_worth_rent),
    ] {
        if value > best_value {
            best_strategy = strategy;
            best_value = value;
        }
    }

    ProjectionSummary {
        final_net_worth_loan,
        final_net_worth_cash,
        final_net_worth_rent,
        total_emi_paid: years.iter().map(|r| r.emi_paid).sum(),
        total_interest_paid: years.iter().map(|r| r.interest_paid).sum(),
        total_rent_paid: years.iter().map(|r| r.rent_paid).sum(),
        total_tax_loan: years.iter().map(|r| r.tax_loan).sum(),
        total_tax_cash: years.iter().map(|r| r.tax_cash).sum(),
        total_tax_rent: years.iter().map(|r| r.tax_rent).sum(),
        best_strategy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegimePolicy;
    use crate::core::amortization::build_schedule;
    use crate::core::tax::compute_tax;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn sample_inputs() -> Inputs {
        Inputs {
            loan_amount: 5_000_000.0,
            house_price: 5_000_000.0,
            loan_tenure_years: 20,
            loan_interest_percent: 8.0,
            investment_return: 0.105,
            house_appreciation: 0.065,
            starting_salary: 1_450_000.0,
            salary_growth: 0.10,
            initial_cash: 0.0,
            years: 20,
            regime_policy: RegimePolicy::Old,
            cess: 0.04,
            expense_fraction: 0.0,
            standard_deduction_old: 50_000.0,
            standard_deduction_new: 50_000.0,
            interest_deduction_cap: 200_000.0,
            section_80c_cap: 150_000.0,
            section_80c_other: 0.0,
            nps_self_contribution: 0.0,
            employer_nps_contribution: 0.0,
            health_insurance_premium: 0.0,
            section_80d_cap: 25_000.0,
            disability_deduction: 0.0,
            monthly_rent: 15_000.0,
            rent_escalation: 0.05,
            basic_salary_fraction: 0.5,
            hra_fraction_of_basic: 0.5,
            metro_city: true,
        }
    }

    /// Flat economy: no tax, no growth, no interest. Every flow is visible by hand.
    fn deterministic_oracle_inputs() -> Inputs {
        let mut inputs = sample_inputs();
        inputs.loan_amount = 1_200.0;
        inputs.house_price = 2_000.0;
        inputs.loan_tenure_years = 1;
        inputs.loan_interest_percent = 0.0;
        inputs.investment_return = 0.0;
        inputs.house_appreciation = 0.0;
        inputs.starting_salary = 5_000.0;
        inputs.salary_growth = 0.0;
        inputs.initial_cash = 3_000.0;
        inputs.years = 3;
        inputs.cess = 0.0;
        inputs.standard_deduction_old = 0.0;
        inputs.standard_deduction_new = 0.0;
        inputs.monthly_rent = 100.0;
        inputs.rent_escalation = 0.0;
        inputs
    }

    #[test]
    fn oracle_flat_economy_matches_hand_calculation() {
        let projection = run_projection(&deterministic_oracle_inputs());
        let years = &projection.years;
        assert_eq!(years.len(), 3);

        // Opening: loan 3000 - 800 down payment, cash 3000 - 2000, rent 3000.
        // Year 1: loan pays 1200 EMI, rent pays 1200 rent, cash pays nothing.
        let first = &years[0];
        assert_approx(first.emi_paid, 1_200.0);
        assert_approx(first.principal_paid, 1_200.0);
        assert_approx(first.interest_paid, 0.0);
        assert_approx(first.tax_loan, 0.0);
        assert_approx(first.investable_loan, 3_800.0);
        assert_approx(first.investable_cash, 5_000.0);
        assert_approx(first.investable_rent, 3_800.0);
        assert_approx(first.investment_value_loan, 6_000.0);
        assert_approx(first.investment_value_cash, 6_000.0);
        assert_approx(first.investment_value_rent, 6_800.0);
        assert_approx(first.loan_outstanding_balance, 0.0);
        assert_approx(first.net_worth_loan, 8_000.0);
        assert_approx(first.net_worth_cash, 8_000.0);
        assert_approx(first.net_worth_rent, 6_800.0);

        // Year 2: the loan is repaid, loan and cash strategies coincide.
        let second = &years[1];
        assert_approx(second.emi_paid, 0.0);
        assert_approx(second.investable_loan, 5_000.0);
        assert_approx(second.investment_value_loan, 11_000.0);
        assert_approx(second.investment_value_cash, 11_000.0);
        assert_approx(second.investment_value_rent, 10_600.0);

        let third = &years[2];
        assert_approx(third.net_worth_loan, 18_000.0);
        assert_approx(third.net_worth_rent, 14_400.0);
        assert_eq!(projection.summary.best_strategy, Strategy::Loan);
        assert_approx(projection.summary.total_emi_paid, 1_200.0);
        assert_approx(projection.summary.total_rent_paid, 3_600.0);
    }

    #[test]
    fn oracle_first_year_loan_and_cash_taxes() {
        let inputs = sample_inputs();
        let projection = run_projection(&inputs);
        let first = &projection.years[0];

        let schedule = build_schedule(5_000_000.0, 8.0, 240);
        let interest: f64 = schedule[..12].iter().map(|p| p.interest).sum();
        let principal: f64 = schedule[..12].iter().map(|p| p.principal).sum();
        let emi: f64 = schedule[..12].iter().map(|p| p.payment).sum();

        let taxable_loan = 1_450_000.0 - 50_000.0 - interest.min(200_000.0) - principal.min(150_000.0);
        let expected_tax_loan = compute_tax(
            taxable_loan,
            TaxRegime::Old.slabs(),
            TaxRegime::Old,
            0.04,
        );

        assert_approx(first.annual_salary, 1_450_000.0);
        assert_approx(first.interest_paid, interest);
        assert_approx(first.principal_paid, principal);
        assert_approx(first.emi_paid, emi);
        assert_approx(first.tax_cash, 241_800.0);
        assert_approx(first.tax_loan, expected_tax_loan);
        assert_approx(first.investable_loan, 1_450_000.0 - expected_tax_loan - emi);
        assert_approx(first.investable_cash, 1_450_000.0 - 241_800.0);
        assert_approx(first.house_value, 5_000_000.0 * 1.065);
        assert_approx(first.loan_outstanding_balance, schedule[11].balance);
    }

    #[test]
    fn loan_vs_cash_table_projects_owning_strategies() {
        let inputs = sample_inputs();
        let full = run_projection(&inputs);
        let table = run_loan_vs_cash(&inputs);

        assert_eq!(table.len(), full.years.len());
        for (row, record) in table.iter().zip(&full.years) {
            assert_eq!(row.year, record.year);
            assert_eq!(row.house_value_loan, record.house_value);
            assert_eq!(row.house_value_cash, record.house_value);
            assert_eq!(row.net_worth_loan, record.net_worth_loan);
            assert_eq!(row.net_worth_cash, record.net_worth_cash);
            assert_eq!(
                row.loan_outstanding_balance_end_of_year,
                record.loan_outstanding_balance
            );
        }
    }

    #[test]
    fn salary_grows_after_each_recorded_year() {
        let projection = run_projection(&sample_inputs());
        assert_approx(projection.years[0].annual_salary, 1_450_000.0);
        assert_approx_tol(projection.years[1].annual_salary, 1_595_000.0, 1e-6);
        assert_approx_tol(
            projection.years[4].annual_salary,
            1_450_000.0 * 1.1_f64.powi(4),
            1e-6,
        );
    }

    #[test]
    fn rent_escalates_after_each_recorded_year() {
        let projection = run_projection(&sample_inputs());
        assert_approx(projection.years[0].rent_paid, 180_000.0);
        assert_approx(projection.years[1].rent_paid, 189_000.0);
    }

    #[test]
    fn horizon_beyond_tenure_reports_zero_loan_flows() {
        let mut inputs = sample_inputs();
        inputs.loan_tenure_years = 5;
        inputs.years = 8;
        let projection = run_projection(&inputs);

        assert_eq!(projection.years.len(), 8);
        assert!(projection.years[4].emi_paid > 0.0);
        assert!(projection.years[4].loan_outstanding_balance.abs() <= EPS);
        for record in &projection.years[5..] {
            assert_eq!(record.emi_paid, 0.0);
            assert_eq!(record.interest_paid, 0.0);
            assert_eq!(record.principal_paid, 0.0);
            assert_eq!(record.loan_outstanding_balance, 0.0);
            assert_approx(record.tax_loan, record.tax_cash);
        }
    }

    #[test]
    fn horizon_shorter_than_tenure_leaves_balance_outstanding() {
        let mut inputs = sample_inputs();
        inputs.years = 3;
        let projection = run_projection(&inputs);
        let schedule = build_schedule(5_000_000.0, 8.0, 240);

        assert_eq!(projection.years.len(), 3);
        assert_approx(projection.years[2].loan_outstanding_balance, schedule[35].balance);
    }

    #[test]
    fn years_are_emitted_in_increasing_order() {
        let projection = run_projection(&sample_inputs());
        for (idx, record) in projection.years.iter().enumerate() {
            assert_eq!(record.year, idx as u32 + 1);
        }
    }

    #[test]
    fn opening_balances_reflect_each_strategy_outlay() {
        let mut inputs = deterministic_oracle_inputs();
        inputs.starting_salary = 0.0;
        inputs.years = 1;
        inputs.initial_cash = 10_000.0;
        inputs.monthly_rent = 0.0;
        inputs.loan_amount = 0.0;

        let first = &run_projection(&inputs).years[0];
        assert_approx(first.investment_value_loan, 8_000.0);
        assert_approx(first.investment_value_cash, 8_000.0);
        assert_approx(first.investment_value_rent, 10_000.0);

        inputs.initial_cash = 500.0;
        let first = &run_projection(&inputs).years[0];
        assert_approx(first.investment_value_cash, 0.0);
        assert_approx(first.investment_value_loan, 0.0);
    }

    #[test]
    fn contributions_do_not_earn_return_in_their_first_year() {
        let mut inputs = deterministic_oracle_inputs();
        inputs.investment_return = 0.10;
        inputs.initial_cash = 2_000.0;
        let first = &run_projection(&inputs).years[0];
        // cash opening is zero; only the year-end contribution lands.
        assert_approx(first.investment_value_cash, 5_000.0);
        // rent opening 2000 grows, then 3800 is added.
        assert_approx(first.investment_value_rent, 2_200.0 + 3_800.0);
    }

    #[test]
    fn expense_fraction_reduces_investable_surplus() {
        let mut inputs = deterministic_oracle_inputs();
        inputs.expense_fraction = 0.25;
        let first = &run_projection(&inputs).years[0];
        assert_approx(first.investable_cash, 3_750.0);
        assert_approx(first.investable_loan, 5_000.0 - 1_250.0 - 1_200.0);
    }

    #[test]
    fn investable_surplus_is_floored_at_zero() {
        let mut inputs = deterministic_oracle_inputs();
        inputs.starting_salary = 500.0;
        let first = &run_projection(&inputs).years[0];
        assert_eq!(first.investable_loan, 0.0);
        assert_eq!(first.investable_rent, 0.0);
        assert_approx(first.investable_cash, 500.0);
    }

    #[test]
    fn auto_policy_picks_cheaper_regime_per_strategy() {
        let mut inputs = sample_inputs();
        inputs.regime_policy = RegimePolicy::Auto;
        inputs.years = 6;
        let projection = run_projection(&inputs);

        assert_eq!(projection.tax_details.len(), 6 * 3 * 2);
        for record in &projection.years {
            for (strategy, tax, regime) in [
                (Strategy::Loan, record.tax_loan, record.regime_loan),
                (Strategy::Cash, record.tax_cash, record.regime_cash),
                (Strategy::Rent, record.tax_rent, record.regime_rent),
            ] {
                let rows = projection
                    .tax_details
                    .iter()
                    .filter(|d| d.year == record.year && d.strategy == strategy)
                    .collect::<Vec<_>>();
                assert_eq!(rows.len(), 2);
                let min = rows.iter().map(|d| d.total_tax).fold(f64::INFINITY, f64::min);
                assert_eq!(tax, min);

                let selected = rows.iter().filter(|d| d.selected).collect::<Vec<_>>();
                assert_eq!(selected.len(), 1);
                assert_eq!(selected[0].regime, regime);
                assert_eq!(selected[0].total_tax, tax);
            }
        }
    }

    #[test]
    fn fixed_policy_evaluates_only_that_regime() {
        let mut inputs = sample_inputs();
        inputs.regime_policy = RegimePolicy::New;
        inputs.years = 4;
        let projection = run_projection(&inputs);

        assert_eq!(projection.tax_details.len(), 4 * 3);
        assert!(projection.tax_details.iter().all(|d| d.regime == TaxRegime::New));
        assert!(projection.tax_details.iter().all(|d| d.selected));
        assert!(projection.years.iter().all(|r| r.regime_loan == TaxRegime::New));
    }

    #[test]
    fn auto_tie_resolves_to_old_regime() {
        let mut inputs = deterministic_oracle_inputs();
        inputs.regime_policy = RegimePolicy::Auto;
        let projection = run_projection(&inputs);
        // Income this small is untaxed under both regimes.
        for record in &projection.years {
            assert_eq!(record.tax_loan, 0.0);
            assert_eq!(record.regime_loan, TaxRegime::Old);
            assert_eq!(record.regime_cash, TaxRegime::Old);
            assert_eq!(record.regime_rent, TaxRegime::Old);
        }
    }

    #[test]
    fn select_regime_is_independent_of_evaluation_order() {
        let assessment = |regime| RegimeAssessment {
            regime,
            profile: DeductionProfile::default(),
            taxable_income: 0.0,
            tax: TaxBreakdown {
                total: 100.0,
                ..TaxBreakdown::default()
            },
        };
        let old = assessment(TaxRegime::Old);
        let new = assessment(TaxRegime::New);
        assert_eq!(select_regime(&[old, new]).regime, TaxRegime::Old);
        assert_eq!(select_regime(&[new, old]).regime, TaxRegime::Old);

        let mut cheaper_new = new;
        cheaper_new.tax.total = 99.0;
        assert_eq!(select_regime(&[old, cheaper_new]).regime, TaxRegime::New);
    }

    #[test]
    fn rent_strategy_detail_rows_carry_hra_under_old_regime() {
        let mut inputs = sample_inputs();
        inputs.regime_policy = RegimePolicy::Auto;
        inputs.years = 1;
        let projection = run_projection(&inputs);

        let rent_old = projection
            .tax_details
            .iter()
            .find(|d| d.strategy == Strategy::Rent && d.regime == TaxRegime::Old)
            .expect("rent/old detail row");
        // basic 725,000; received 362,500; rent 180,000 - 72,500 = 107,500
        assert_approx(rent_old.hra_exemption, 107_500.0);
        assert_approx(rent_old.taxable_income, 1_450_000.0 - 50_000.0 - 107_500.0);

        let rent_new = projection
            .tax_details
            .iter()
            .find(|d| d.strategy == Strategy::Rent && d.regime == TaxRegime::New)
            .expect("rent/new detail row");
        assert_eq!(rent_new.hra_exemption, 0.0);
    }

    #[test]
    fn warm_cache_gives_identical_projection() {
        let inputs = sample_inputs();
        let mut cache = ProjectionCache::new();
        let first = run_projection_with_cache(&inputs, &mut cache);
        let entries = cache.tax_entries();
        let second = run_projection_with_cache(&inputs, &mut cache);

        assert_eq!(first.years, second.years);
        assert_eq!(first.tax_details, second.tax_details);
        assert_eq!(cache.schedule_entries(), 1);
        assert_eq!(cache.tax_entries(), entries);
        assert_eq!(first.years, run_projection(&inputs).years);
    }

    #[test]
    fn summary_totals_match_yearly_rows() {
        let projection = run_projection(&sample_inputs());
        let summary = projection.summary;
        let last = projection.years.last().copied().expect("non-empty");

        assert_eq!(summary.final_net_worth_loan, last.net_worth_loan);
        assert_eq!(summary.final_net_worth_rent, last.net_worth_rent);
        let emi: f64 = projection.years.iter().map(|r| r.emi_paid).sum();
        assert_approx(summary.total_emi_paid, emi);

        let best = [
            summary.final_net_worth_loan,
            summary.final_net_worth_cash,
            summary.final_net_worth_rent,
        ]
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max);
        let reported = match summary.best_strategy {
            Strategy::Loan => summary.final_net_worth_loan,
            Strategy::Cash => summary.final_net_worth_cash,
            Strategy::Rent => summary.final_net_worth_rent,
        };
        assert_eq!(reported, best);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(32))]

        #[test]
        fn prop_net_worth_identity_holds_every_year(
            loan_share in 0u32..101,
            house_price in 500_000u32..20_000_000,
            tenure in 1u32..31,
            horizon in 1u32..41,
            rate_bp in 0u32..1_500,
            cagr_bp in 0u32..2_000,
            appreciation_bp in 0u32..1_200,
            salary in 0u32..10_000_000,
            initial_cash in 0u32..30_000_000,
            auto in proptest::bool::ANY
        ) {
            let mut inputs = sample_inputs();
            inputs.house_price = house_price as f64;
            inputs.loan_amount = house_price as f64 * loan_share as f64 / 100.0;
            inputs.loan_tenure_years = tenure;
            inputs.years = horizon;
            inputs.loan_interest_percent = rate_bp as f64 / 100.0;
            inputs.investment_return = cagr_bp as f64 / 10_000.0;
            inputs.house_appreciation = appreciation_bp as f64 / 10_000.0;
            inputs.starting_salary = salary as f64;
            inputs.initial_cash = initial_cash as f64;
            if auto {
                inputs.regime_policy = RegimePolicy::Auto;
            }

            let projection = run_projection(&inputs);
            prop_assert!(projection.years.len() == horizon as usize);
            for record in &projection.years {
                let tol = 1e-9 * (record.house_value + record.investment_value_loan).max(1.0);
                prop_assert!(
                    (record.net_worth_loan
                        - (record.investment_value_loan + record.house_value
                            - record.loan_outstanding_balance))
                        .abs() <= tol
                );
                prop_assert!(
                    (record.net_worth_cash - (record.investment_value_cash + record.house_value))
                        .abs() <= tol
                );
                prop_assert!(record.net_worth_rent == record.investment_value_rent);
                prop_assert!(record.investable_loan >= 0.0);
                prop_assert!(record.investable_cash >= 0.0);
                prop_assert!(record.investable_rent >= 0.0);
                prop_assert!(record.tax_loan >= 0.0);
                prop_assert!(record.loan_outstanding_balance >= 0.0);
                prop_assert!(record.tax_loan <= record.tax_cash + 1e-6);
            }
        }

        #[test]
        fn prop_investment_matches_closed_form_sum(
            cagr_bp in 0u32..2_000,
            initial_cash in 0u32..5_000_000,
            salary in 0u32..3_000_000,
            growth_bp in 0u32..1_500,
            horizon in 1u32..25
        ) {
            let mut inputs = sample_inputs();
            inputs.loan_amount = 0.0;
            inputs.house_price = 0.0;
            inputs.investment_return = cagr_bp as f64 / 10_000.0;
            inputs.initial_cash = initial_cash as f64;
            inputs.starting_salary = salary as f64;
            inputs.salary_growth = growth_bp as f64 / 10_000.0;
            inputs.years = horizon;

            let projection = run_projection(&inputs);
            let c = inputs.investment_return;
            let n = horizon as i32;
            let mut expected = inputs.initial_cash * (1.0 + c).powi(n);
            for (idx, record) in projection.years.iter().enumerate() {
                let i = idx as i32 + 1;
                expected += record.investable_cash * (1.0 + c).powi(n - i);
            }
            let actual = projection.years[horizon as usize - 1].investment_value_cash;
            prop_assert!(
                (actual - expected).abs() <= 1e-9 * expected.max(1.0),
                "expected {expected}, got {actual}"
            );
        }
    }
}
