use super::types::{DeductionProfile, Inputs, Strategy, TaxRegime};

const SECTION_80CCD_1B_CAP: f64 = 50_000.0;
const EMPLOYER_NPS_SHARE_OLD: f64 = 0.10;
const EMPLOYER_NPS_SHARE_NEW: f64 = 0.14;
const HRA_RENT_EXCESS_SHARE: f64 = 0.10;
const HRA_METRO_SHARE: f64 = 0.50;
const HRA_NON_METRO_SHARE: f64 = 0.40;

/// Income and outflows of one simulation year that deductions are derived from.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearFlows {
    pub salary: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    pub rent_paid: f64,
}

fn basic_salary(inputs: &Inputs, salary: f64) -> f64 {
    (salary * inputs.basic_salary_fraction).max(0.0)
}

/// Least of HRA received, rent above 10% of basic, and the city share of basic.
pub fn hra_exemption(inputs: &Inputs, salary: f64, rent_paid: f64) -> f64 {
    let basic = basic_salary(inputs, salary);
    let hra_received = basic * inputs.hra_fraction_of_basic;
    let rent_excess = rent_paid - HRA_RENT_EXCESS_SHARE * basic;
    let city_share = if inputs.metro_city {
        HRA_METRO_SHARE
    } else {
        HRA_NON_METRO_SHARE
    };
    hra_received.min(rent_excess).min(city_share * basic).max(0.0)
}

pub fn deduction_profile(
    inputs: &Inputs,
    strategy: Strategy,
    regime: TaxRegime,
    flows: &YearFlows,
) -> DeductionProfile {
    let basic = basic_salary(inputs, flows.salary);

    match regime {
        TaxRegime::New => DeductionProfile {
            standard_deduction: inputs.standard_deduction_new,
            section_80ccd_2: inputs
                .employer_nps_contribution
                .min(EMPLOYER_NPS_SHARE_NEW * basic),
            ..DeductionProfile::default()
        },
        TaxRegime::Old => {
            let (home_loan_interest, principal_for_80c) = match strategy {
                Strategy::Loan => (
                    flows.interest_paid.min(inputs.interest_deduction_cap),
                    flows.principal_paid,
                ),
                Strategy::Cash | Strategy::Rent => (0.0, 0.0),
            };
            let hra = match strategy {
                Strategy::Rent => hra_exemption(inputs, flows.salary, flows.rent_paid),
                Strategy::Loan | Strategy::Cash => 0.0,
            };

            DeductionProfile {
                standard_deduction: inputs.standard_deduction_old,
                hra_exemption: hra,
                home_loan_interest,
                section_80c: (inputs.section_80c_other + principal_for_80c)
                    .min(inputs.section_80c_cap),
                section_80ccd_1b: inputs.nps_self_contribution.min(SECTION_80CCD_1B_CAP),
                section_80ccd_2: inputs
                    .employer_nps_contribution
                    .min(EMPLOYER_NPS_SHARE_OLD * basic),
                section_80d: inputs
                    .health_insurance_premium
                    .min(inputs.section_80d_cap),
                disability: inputs.disability_deduction,
            }
        }
    }
}
