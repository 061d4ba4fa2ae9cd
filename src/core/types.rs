use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    Old,
    New,
}

/// How the simulator picks the regime a scenario is taxed under each year.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegimePolicy {
    Old,
    New,
    /// Evaluate both regimes and keep the cheaper one. Exact ties go to `Old`.
    Auto,
}

impl RegimePolicy {
    pub fn candidates(self) -> &'static [TaxRegime] {
        match self {
            RegimePolicy::Old => &[TaxRegime::Old],
            RegimePolicy::New => &[TaxRegime::New],
            RegimePolicy::Auto => &[TaxRegime::Old, TaxRegime::New],
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Loan,
    Cash,
    Rent,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Loan, Strategy::Cash, Strategy::Rent];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Variant {
    LoanVsCash,
    LoanCashRent,
}

/// Projection configuration. Rates are fractions except the loan rate, which is
/// in percent. `loan_tenure_years` and `years` must be at least 1; the schedule
/// is materialized month by month, so keep the tenure to realistic spans.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub loan_amount: f64,
    pub house_price: f64,
    pub loan_tenure_years: u32,
    pub loan_interest_percent: f64,
    pub investment_return: f64,
    pub house_appreciation: f64,
    pub starting_salary: f64,
    pub salary_growth: f64,
    pub initial_cash: f64,
    pub years: u32,
    pub regime_policy: RegimePolicy,
    pub cess: f64,
    pub expense_fraction: f64,
    pub standard_deduction_old: f64,
    pub standard_deduction_new: f64,
    pub interest_deduction_cap: f64,
    pub section_80c_cap: f64,
    pub section_80c_other: f64,
    pub nps_self_contribution: f64,
    pub employer_nps_contribution: f64,
    pub health_insurance_premium: f64,
    pub section_80d_cap: f64,
    pub disability_deduction: f64,
    pub monthly_rent: f64,
    pub rent_escalation: f64,
    pub basic_salary_fraction: f64,
    pub hra_fraction_of_basic: f64,
    pub metro_city: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationPeriod {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Loan cash flows that fall inside one simulation year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearTotals {
    pub interest: f64,
    pub principal: f64,
    pub payment: f64,
    pub closing_balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionProfile {
    pub standard_deduction: f64,
    pub hra_exemption: f64,
    pub home_loan_interest: f64,
    pub section_80c: f64,
    pub section_80ccd_1b: f64,
    pub section_80ccd_2: f64,
    pub section_80d: f64,
    pub disability: f64,
}

impl DeductionProfile {
    pub fn total(&self) -> f64 {
        self.standard_deduction
            + self.hra_exemption
            + self.home_loan_interest
            + self.section_80c
            + self.section_80ccd_1b
            + self.section_80ccd_2
            + self.section_80d
            + self.disability
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub base_tax: f64,
    pub rebate: f64,
    pub surcharge: f64,
    pub cess: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRecord {
    pub year: u32,
    pub annual_salary: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub emi_paid: f64,
    pub rent_paid: f64,
    pub tax_loan: f64,
    pub tax_cash: f64,
    pub tax_rent: f64,
    pub regime_loan: TaxRegime,
    pub regime_cash: TaxRegime,
    pub regime_rent: TaxRegime,
    pub investable_loan: f64,
    pub investable_cash: f64,
    pub investable_rent: f64,
    pub investment_value_loan: f64,
    pub investment_value_cash: f64,
    pub investment_value_rent: f64,
    pub house_value: f64,
    pub loan_outstanding_balance: f64,
    pub net_worth_loan: f64,
    pub net_worth_cash: f64,
    pub net_worth_rent: f64,
}

/// Row shape of the two-strategy (loan versus cash) table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanVsCashYear {
    pub year: u32,
    pub annual_salary: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub emi_paid: f64,
    pub tax_loan: f64,
    pub tax_cash: f64,
    pub investable_loan: f64,
    pub investable_cash: f64,
    pub investment_value_loan: f64,
    pub investment_value_cash: f64,
    pub house_value_loan: f64,
    pub house_value_cash: f64,
    pub loan_outstanding_balance_end_of_year: f64,
    pub net_worth_loan: f64,
    pub net_worth_cash: f64,
}

impl From<&YearlyRecord> for LoanVsCashYear {
    fn from(record: &YearlyRecord) -> Self {
        Self {
            year: record.year,
            annual_salary: record.annual_salary,
            interest_paid: record.interest_paid,
            principal_paid: record.principal_paid,
            emi_paid: record.emi_paid,
            tax_loan: record.tax_loan,
            tax_cash: record.tax_cash,
            investable_loan: record.investable_loan,
            investable_cash: record.investable_cash,
            investment_value_loan: record.investment_value_loan,
            investment_value_cash: record.investment_value_cash,
            house_value_loan: record.house_value,
            house_value_cash: record.house_value,
            loan_outstanding_balance_end_of_year: record.loan_outstanding_balance,
            net_worth_loan: record.net_worth_loan,
            net_worth_cash: record.net_worth_cash,
        }
    }
}

/// One evaluated (strategy, regime) tax computation for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDetailRow {
    pub year: u32,
    pub strategy: Strategy,
    pub regime: TaxRegime,
    pub gross_income: f64,
    pub standard_deduction: f64,
    pub hra_exemption: f64,
    pub home_loan_interest: f64,
    pub section_80c: f64,
    pub section_80ccd_1b: f64,
    pub section_80ccd_2: f64,
    pub section_80d: f64,
    pub disability: f64,
    pub total_deductions: f64,
    pub taxable_income: f64,
    pub base_tax: f64,
    pub rebate: f64,
    pub surcharge: f64,
    pub cess: f64,
    pub total_tax: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_net_worth_loan: f64,
    pub final_net_worth_cash: f64,
    pub final_net_worth_rent: f64,
    pub total_emi_paid: f64,
    pub total_interest_paid: f64,
    pub total_rent_paid: f64,
    pub total_tax_loan: f64,
    pub total_tax_cash: f64,
    pub total_tax_rent: f64,
    pub best_strategy: Strategy,
}

#[derive(Debug, Clone)]
pub struct Projection {
    pub years: Vec<YearlyRecord>,
    pub tax_details: Vec<TaxDetailRow>,
    pub summary: ProjectionSummary,
}
