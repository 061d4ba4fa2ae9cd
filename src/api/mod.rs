mod export;

use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub use export::{csv_string, write_csv};

use crate::core::{
    Inputs, LoanVsCashYear, Projection, ProjectionSummary, RegimePolicy, Strategy, TaxDetailRow,
    Variant, YearlyRecord, run_projection,
};
use crate::error::{ApiError, Result};

const MAX_TENURE_YEARS: u32 = 100;
const MAX_HORIZON_YEARS: u32 = 200;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRegimePolicy {
    Old,
    New,
    Auto,
}

impl From<CliRegimePolicy> for RegimePolicy {
    fn from(value: CliRegimePolicy) -> Self {
        match value {
            CliRegimePolicy::Old => RegimePolicy::Old,
            CliRegimePolicy::New => RegimePolicy::New,
            CliRegimePolicy::Auto => RegimePolicy::Auto,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliVariant {
    LoanVsCash,
    LoanCashRent,
}

impl From<CliVariant> for Variant {
    fn from(value: CliVariant) -> Self {
        match value {
            CliVariant::LoanVsCash => Variant::LoanVsCash,
            CliVariant::LoanCashRent => Variant::LoanCashRent,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ExportTable {
    Yearly,
    TaxDetails,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiRegimePolicy {
    #[serde(alias = "OLD")]
    Old,
    #[serde(alias = "NEW")]
    New,
    #[serde(alias = "AUTO")]
    Auto,
}

impl From<ApiRegimePolicy> for CliRegimePolicy {
    fn from(value: ApiRegimePolicy) -> Self {
        match value {
            ApiRegimePolicy::Old => CliRegimePolicy::Old,
            ApiRegimePolicy::New => CliRegimePolicy::New,
            ApiRegimePolicy::Auto => CliRegimePolicy::Auto,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiVariant {
    #[serde(alias = "loanVsCash", alias = "loan_vs_cash", alias = "two-way")]
    LoanVsCash,
    #[serde(alias = "loanCashRent", alias = "loan_cash_rent", alias = "three-way")]
    LoanCashRent,
}

impl From<ApiVariant> for CliVariant {
    fn from(value: ApiVariant) -> Self {
        match value {
            ApiVariant::LoanVsCash => CliVariant::LoanVsCash,
            ApiVariant::LoanCashRent => CliVariant::LoanCashRent,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiExportTable {
    Yearly,
    #[serde(alias = "taxDetails", alias = "tax_details")]
    TaxDetails,
}

impl From<ApiExportTable> for ExportTable {
    fn from(value: ApiExportTable) -> Self {
        match value {
            ApiExportTable::Yearly => ExportTable::Yearly,
            ApiExportTable::TaxDetails => ExportTable::TaxDetails,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ResponseVariant {
    LoanVsCash,
    LoanCashRent,
}

impl From<Variant> for ResponseVariant {
    fn from(value: Variant) -> Self {
        match value {
            Variant::LoanVsCash => ResponseVariant::LoanVsCash,
            Variant::LoanCashRent => ResponseVariant::LoanCashRent,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ResponseRegimePolicy {
    Old,
    New,
    Auto,
}

impl From<RegimePolicy> for ResponseRegimePolicy {
    fn from(value: RegimePolicy) -> Self {
        match value {
            RegimePolicy::Old => ResponseRegimePolicy::Old,
            RegimePolicy::New => ResponseRegimePolicy::New,
            RegimePolicy::Auto => ResponseRegimePolicy::Auto,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    loan_amount: Option<f64>,
    house_price: Option<f64>,
    loan_tenure_years: Option<u32>,
    loan_interest_rate: Option<f64>,
    investment_return: Option<f64>,
    house_appreciation: Option<f64>,
    starting_salary: Option<f64>,
    salary_growth: Option<f64>,
    initial_cash: Option<f64>,
    years: Option<u32>,

    regime_policy: Option<ApiRegimePolicy>,
    cess: Option<f64>,
    expense_ratio: Option<f64>,

    standard_deduction_old: Option<f64>,
    standard_deduction_new: Option<f64>,
    interest_deduction_cap: Option<f64>,
    section_80c_cap: Option<f64>,
    section_80c_other: Option<f64>,
    nps_self_contribution: Option<f64>,
    employer_nps_contribution: Option<f64>,
    health_insurance_premium: Option<f64>,
    section_80d_cap: Option<f64>,
    disability_deduction: Option<f64>,

    monthly_rent: Option<f64>,
    rent_escalation: Option<f64>,
    basic_salary_share: Option<f64>,
    hra_share_of_basic: Option<f64>,
    metro_city: Option<bool>,

    variant: Option<ApiVariant>,
    table: Option<ApiExportTable>,
}

#[derive(Parser, Debug)]
#[command(
    name = "homeloan",
    bin_name = "homeloan simulate",
    about = "Home financing net worth projector (loan vs cash vs rent, old/new tax regime)"
)]
struct Cli {
    #[arg(long, default_value_t = 5_000_000.0)]
    loan_amount: f64,
    #[arg(long, help = "Purchase price of the house; defaults to loan-amount")]
    house_price: Option<f64>,
    #[arg(long, default_value_t = 20)]
    loan_tenure_years: u32,
    #[arg(
        long,
        default_value_t = 8.0,
        help = "Annual loan interest rate in percent"
    )]
    loan_interest_rate: f64,
    #[arg(
        long,
        default_value_t = 10.5,
        help = "Expected annual investment return (CAGR) in percent"
    )]
    investment_return: f64,
    #[arg(
        long,
        default_value_t = 6.5,
        help = "Annual house price appreciation in percent"
    )]
    house_appreciation: f64,
    #[arg(long, default_value_t = 1_450_000.0)]
    starting_salary: f64,
    #[arg(
        long,
        default_value_t = 10.0,
        help = "Annual salary increment in percent"
    )]
    salary_growth: f64,
    #[arg(long, default_value_t = 0.0)]
    initial_cash: f64,
    #[arg(long, default_value_t = 20, help = "Simulation horizon in years")]
    years: u32,
    #[arg(
        long,
        value_enum,
        default_value_t = CliRegimePolicy::Old,
        help = "Tax regime: old, new, or auto (cheaper of the two each year)"
    )]
    regime_policy: CliRegimePolicy,
    #[arg(
        long,
        default_value_t = 4.0,
        help = "Health and education cess in percent"
    )]
    cess: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Share of post-tax salary spent on living expenses in percent"
    )]
    expense_ratio: f64,
    #[arg(long, default_value_t = 50_000.0)]
    standard_deduction_old: f64,
    #[arg(long, default_value_t = 50_000.0)]
    standard_deduction_new: f64,
    #[arg(
        long,
        default_value_t = 200_000.0,
        help = "Cap on deductible home loan interest, old regime"
    )]
    interest_deduction_cap: f64,
    #[arg(long, default_value_t = 150_000.0)]
    section_80c_cap: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Other 80C investments claimed alongside loan principal"
    )]
    section_80c_other: f64,
    #[arg(long, default_value_t = 0.0)]
    nps_self_contribution: f64,
    #[arg(long, default_value_t = 0.0)]
    employer_nps_contribution: f64,
    #[arg(long, default_value_t = 0.0)]
    health_insurance_premium: f64,
    #[arg(long, default_value_t = 25_000.0)]
    section_80d_cap: f64,
    #[arg(long, default_value_t = 0.0)]
    disability_deduction: f64,
    #[arg(long, default_value_t = 15_000.0)]
    monthly_rent: f64,
    #[arg(
        long,
        default_value_t = 5.0,
        help = "Annual rent escalation in percent"
    )]
    rent_escalation: f64,
    #[arg(
        long,
        default_value_t = 50.0,
        help = "Basic salary as percent of gross salary"
    )]
    basic_salary_share: f64,
    #[arg(
        long,
        default_value_t = 50.0,
        help = "HRA received as percent of basic salary"
    )]
    hra_share_of_basic: f64,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    metro_city: bool,
    #[arg(long, value_enum, default_value_t = CliVariant::LoanCashRent)]
    variant: CliVariant,
    #[arg(long, value_enum, default_value_t = ExportTable::Yearly)]
    table: ExportTable,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug)]
struct ApiOptions {
    variant: Variant,
    table: ExportTable,
}

#[derive(Debug)]
struct ApiRequest {
    inputs: Inputs,
    options: ApiOptions,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum YearRows {
    LoanCashRent(Vec<YearlyRecord>),
    LoanVsCash(Vec<LoanVsCashYear>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    variant: ResponseVariant,
    regime_policy: ResponseRegimePolicy,
    summary: ProjectionSummary,
    years: YearRows,
    tax_details: Vec<TaxDetailRow>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn percent(value: f64) -> f64 {
    value / 100.0
}

fn build_inputs(cli: &Cli) -> Result<Inputs> {
    if cli.loan_tenure_years == 0 {
        return Err(ApiError::invalid("--loan-tenure-years must be > 0"));
    }

    if cli.loan_tenure_years > MAX_TENURE_YEARS {
        return Err(ApiError::invalid(format!(
            "--loan-tenure-years must be <= {MAX_TENURE_YEARS}"
        )));
    }

    if cli.years == 0 {
        return Err(ApiError::invalid("--years must be > 0"));
    }

    if cli.years > MAX_HORIZON_YEARS {
        return Err(ApiError::invalid(format!(
            "--years must be <= {MAX_HORIZON_YEARS}"
        )));
    }

    let house_price = cli.house_price.unwrap_or(cli.loan_amount);

    for (name, amount) in [
        ("--loan-amount", cli.loan_amount),
        ("--house-price", house_price),
        ("--starting-salary", cli.starting_salary),
        ("--initial-cash", cli.initial_cash),
        ("--standard-deduction-old", cli.standard_deduction_old),
        ("--standard-deduction-new", cli.standard_deduction_new),
        ("--interest-deduction-cap", cli.interest_deduction_cap),
        ("--section-80c-cap", cli.section_80c_cap),
        ("--section-80c-other", cli.section_80c_other),
        ("--nps-self-contribution", cli.nps_self_contribution),
        ("--employer-nps-contribution", cli.employer_nps_contribution),
        ("--health-insurance-premium", cli.health_insurance_premium),
        ("--section-80d-cap", cli.section_80d_cap),
        ("--disability-deduction", cli.disability_deduction),
        ("--monthly-rent", cli.monthly_rent),
    ] {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ApiError::invalid(format!("{name} must be >= 0")));
        }
    }

    if cli.loan_amount > house_price {
        return Err(ApiError::invalid("--loan-amount must be <= --house-price"));
    }

    if !(0.0..=100.0).contains(&cli.loan_interest_rate) {
        return Err(ApiError::invalid(
            "--loan-interest-rate must be between 0 and 100",
        ));
    }

    for (name, rate) in [
        ("--investment-return", cli.investment_return),
        ("--house-appreciation", cli.house_appreciation),
        ("--salary-growth", cli.salary_growth),
        ("--rent-escalation", cli.rent_escalation),
    ] {
        if !rate.is_finite() || rate <= -100.0 {
            return Err(ApiError::invalid(format!("{name} must be > -100")));
        }
    }

    for (name, share) in [
        ("--cess", cli.cess),
        ("--expense-ratio", cli.expense_ratio),
        ("--basic-salary-share", cli.basic_salary_share),
        ("--hra-share-of-basic", cli.hra_share_of_basic),
    ] {
        if !(0.0..=100.0).contains(&share) {
            return Err(ApiError::invalid(format!(
                "{name} must be between 0 and 100"
            )));
        }
    }

    Ok(Inputs {
        loan_amount: cli.loan_amount,
        house_price,
        loan_tenure_years: cli.loan_tenure_years,
        loan_interest_percent: cli.loan_interest_rate,
        investment_return: percent(cli.investment_return),
        house_appreciation: percent(cli.house_appreciation),
        starting_salary: cli.starting_salary,
        salary_growth: percent(cli.salary_growth),
        initial_cash: cli.initial_cash,
        years: cli.years,
        regime_policy: cli.regime_policy.into(),
        cess: percent(cli.cess),
        expense_fraction: percent(cli.expense_ratio),
        standard_deduction_old: cli.standard_deduction_old,
        standard_deduction_new: cli.standard_deduction_new,
        interest_deduction_cap: cli.interest_deduction_cap,
        section_80c_cap: cli.section_80c_cap,
        section_80c_other: cli.section_80c_other,
        nps_self_contribution: cli.nps_self_contribution,
        employer_nps_contribution: cli.employer_nps_contribution,
        health_insurance_premium: cli.health_insurance_premium,
        section_80d_cap: cli.section_80d_cap,
        disability_deduction: cli.disability_deduction,
        monthly_rent: cli.monthly_rent,
        rent_escalation: percent(cli.rent_escalation),
        basic_salary_fraction: percent(cli.basic_salary_share),
        hra_fraction_of_basic: percent(cli.hra_share_of_basic),
        metro_city: cli.metro_city,
    })
}

/// Parses `simulate` arguments, runs the projection and renders it for stdout.
pub fn run_cli<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    render_cli_output(&cli)
}

fn render_cli_output(cli: &Cli) -> Result<String> {
    let inputs = build_inputs(cli)?;
    let variant = Variant::from(cli.variant);
    tracing::info!(
        years = inputs.years,
        policy = ?inputs.regime_policy,
        variant = ?variant,
        "running projection"
    );
    let projection = run_projection(&inputs);

    match cli.format {
        OutputFormat::Csv => export_csv(&projection, variant, cli.table),
        OutputFormat::Json => {
            let response = build_simulate_response(&inputs, projection, variant);
            let mut json = serde_json::to_string_pretty(&response)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn owning_strategy_rows(rows: Vec<TaxDetailRow>) -> Vec<TaxDetailRow> {
    rows.into_iter()
        .filter(|row| row.strategy != Strategy::Rent)
        .collect()
}

fn export_csv(projection: &Projection, variant: Variant, table: ExportTable) -> Result<String> {
    match (variant, table) {
        (Variant::LoanCashRent, ExportTable::Yearly) => csv_string(&projection.years),
        (Variant::LoanVsCash, ExportTable::Yearly) => {
            let rows = projection
                .years
                .iter()
                .map(LoanVsCashYear::from)
                .collect::<Vec<_>>();
            csv_string(&rows)
        }
        (Variant::LoanCashRent, ExportTable::TaxDetails) => csv_string(&projection.tax_details),
        (Variant::LoanVsCash, ExportTable::TaxDetails) => {
            csv_string(&owning_strategy_rows(projection.tax_details.clone()))
        }
    }
}

fn build_simulate_response(
    inputs: &Inputs,
    projection: Projection,
    variant: Variant,
) -> SimulateResponse {
    let Projection {
        years,
        tax_details,
        summary,
    } = projection;

    let (years, tax_details) = match variant {
        Variant::LoanCashRent => (YearRows::LoanCashRent(years), tax_details),
        Variant::LoanVsCash => (
            YearRows::LoanVsCash(years.iter().map(LoanVsCashYear::from).collect()),
            owning_strategy_rows(tax_details),
        ),
    };

    SimulateResponse {
        variant: variant.into(),
        regime_policy: inputs.regime_policy.into(),
        summary,
        years,
        tax_details,
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .route(
            "/api/export.csv",
            get(export_get_handler).post(export_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "homeloan HTTP API listening");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload)
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload)
}

async fn export_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    export_handler_impl(payload)
}

async fn export_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    export_handler_impl(payload)
}

fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return api_error_response(&err),
    };

    let projection = run_projection(&request.inputs);
    tracing::info!(
        years = projection.years.len(),
        best = ?projection.summary.best_strategy,
        "simulate request served"
    );
    let response = build_simulate_response(&request.inputs, projection, request.options.variant);
    json_response(StatusCode::OK, response)
}

fn export_handler_impl(payload: SimulatePayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(err) => return api_error_response(&err),
    };

    let projection = run_projection(&request.inputs);
    match export_csv(&projection, request.options.variant, request.options.table) {
        Ok(body) => csv_response(body),
        Err(err) => {
            tracing::error!(error = %err, "CSV export failed");
            api_error_response(&err)
        }
    }
}

fn with_no_store(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_no_store((status, Json(body)).into_response())
}

fn csv_response(body: String) -> Response {
    with_no_store(
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"projection.csv\"",
                ),
            ],
            body,
        )
            .into_response(),
    )
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn api_error_response(err: &ApiError) -> Response {
    error_response(err.status_code(), &err.to_string())
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest> {
    let payload = serde_json::from_str::<SimulatePayload>(json)?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: SimulatePayload) -> Result<ApiRequest> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.loan_amount {
        cli.loan_amount = v;
        // An omitted house price follows the loan amount, as on the CLI.
        if payload.house_price.is_none() {
            cli.house_price = None;
        }
    }
    if let Some(v) = payload.house_price {
        cli.house_price = Some(v);
    }
    if let Some(v) = payload.loan_tenure_years {
        cli.loan_tenure_years = v;
    }
    if let Some(v) = payload.loan_interest_rate {
        cli.loan_interest_rate = v;
    }
    if let Some(v) = payload.investment_return {
        cli.investment_return = v;
    }
    if let Some(v) = payload.house_appreciation {
        cli.house_appreciation = v;
    }
    if let Some(v) = payload.starting_salary {
        cli.starting_salary = v;
    }
    if let Some(v) = payload.salary_growth {
        cli.salary_growth = v;
    }
    if let Some(v) = payload.initial_cash {
        cli.initial_cash = v;
    }
    if let Some(v) = payload.years {
        cli.years = v;
    }

    if let Some(v) = payload.regime_policy {
        cli.regime_policy = v.into();
    }
    if let Some(v) = payload.cess {
        cli.cess = v;
    }
    if let Some(v) = payload.expense_ratio {
        cli.expense_ratio = v;
    }

    if let Some(v) = payload.standard_deduction_old {
        cli.standard_deduction_old = v;
    }
    if let Some(v) = payload.standard_deduction_new {
        cli.standard_deduction_new = v;
    }
    if let Some(v) = payload.interest_deduction_cap {
        cli.interest_deduction_cap = v;
    }
    if let Some(v) = payload.section_80c_cap {
        cli.section_80c_cap = v;
    }
    if let Some(v) = payload.section_80c_other {
        cli.section_80c_other = v;
    }
    if let Some(v) = payload.nps_self_contribution {
        cli.nps_self_contribution = v;
    }
    if let Some(v) = payload.employer_nps_contribution {
        cli.employer_nps_contribution = v;
    }
    if let Some(v) = payload.health_insurance_premium {
        cli.health_insurance_premium = v;
    }
    if let Some(v) = payload.section_80d_cap {
        cli.section_80d_cap = v;
    }
    if let Some(v) = payload.disability_deduction {
        cli.disability_deduction = v;
    }

    if let Some(v) = payload.monthly_rent {
        cli.monthly_rent = v;
    }
    if let Some(v) = payload.rent_escalation {
        cli.rent_escalation = v;
    }
    if let Some(v) = payload.basic_salary_share {
        cli.basic_salary_share = v;
    }
    if let Some(v) = payload.hra_share_of_basic {
        cli.hra_share_of_basic = v;
    }
    if let Some(v) = payload.metro_city {
        cli.metro_city = v;
    }

    if let Some(v) = payload.variant {
        cli.variant = v.into();
    }
    if let Some(v) = payload.table {
        cli.table = v.into();
    }

    let inputs = build_inputs(&cli)?;
    let options = ApiOptions {
        variant: cli.variant.into(),
        table: cli.table,
    };

    Ok(ApiRequest { inputs, options })
}

fn default_cli_for_api() -> Cli {
    Cli {
        loan_amount: 5_000_000.0,
        house_price: Some(5_000_000.0),
        loan_tenure_years: 20,
        loan_interest_rate: 8.0,
        investment_return: 10.5,
        house_appreciation: 6.5,
        starting_salary: 1_450_000.0,
        salary_growth: 10.0,
        initial_cash: 0.0,
        years: 20,
        regime_policy: CliRegimePolicy::Old,
        cess: 4.0,
        expense_ratio: 0.0,
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
        rent_escalation: 5.0,
        basic_salary_share: 50.0,
        hra_share_of_basic: 50.0,
        metro_city: true,
        variant: CliVariant::LoanCashRent,
        table: ExportTable::Yearly,
        format: OutputFormat::Csv,
    }
}
