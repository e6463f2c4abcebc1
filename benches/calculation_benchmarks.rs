//! Performance benchmarks for the payroll and forecast engine.
//!
//! The calculation layer is recomputed on every keystroke-level edit in the
//! consuming application, so the per-call targets are tight:
//! - Single employee recalculation: < 10μs mean
//! - Full projection with a 50-person roster: < 100μs mean
//! - End-to-end HTTP projection request: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use forecast_engine::api::{AppState, create_router};
use forecast_engine::calculation::{
    annual_tax, calculate_team_cost, default_resident_schedule, project, recalculate_employee,
};
use forecast_engine::config::ConfigLoader;
use forecast_engine::models::{
    BasisField, CostClassification, EmployeeCompensation, ForecastBaseline, ForecastTargets,
    PayFrequency, PayrollSettings, TeamCostAssumptions, TeamMember,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/au").expect("Failed to load config");
    AppState::new(config)
}

fn create_employee(salary: &str) -> EmployeeCompensation {
    let mut employee = EmployeeCompensation::new("Bench Employee", "Role");
    employee.annual_salary = Some(dec(salary));
    employee
}

fn create_members(count: usize) -> Vec<TeamMember> {
    (0..count)
        .map(|i| TeamMember {
            name: format!("Member {:03}", i),
            annual_salary: dec("80000") + Decimal::from(i),
            classification: if i % 3 == 0 {
                CostClassification::CostOfGoodsSold
            } else {
                CostClassification::OperatingExpense
            },
        })
        .collect()
}

/// Benchmark: annual PAYG tax lookup across the bracket schedule.
fn bench_annual_tax(c: &mut Criterion) {
    let schedule = default_resident_schedule();
    let salaries = ["18200", "45000", "90000", "200000"];

    let mut group = c.benchmark_group("annual_tax");
    for salary in salaries {
        group.bench_with_input(BenchmarkId::from_parameter(salary), salary, |b, salary| {
            let salary = dec(salary);
            b.iter(|| black_box(annual_tax(black_box(salary), &schedule)))
        });
    }
    group.finish();
}

/// Benchmark: single employee recalculation.
///
/// Target: < 10μs mean
fn bench_recalculate_employee(c: &mut Criterion) {
    let schedule = default_resident_schedule();
    let settings = PayrollSettings::new(PayFrequency::Fortnightly, dec("0.12"));

    c.bench_function("recalculate_employee", |b| {
        b.iter(|| {
            let mut employee = create_employee("78000");
            recalculate_employee(
                &mut employee,
                &settings,
                &schedule,
                BasisField::AnnualSalary,
            );
            black_box(employee)
        })
    });
}

/// Benchmark: team cost aggregation at increasing roster sizes.
fn bench_team_cost(c: &mut Criterion) {
    let assumptions = TeamCostAssumptions {
        salary_increase: dec("0.06"),
        super_rate: dec("0.12"),
    };

    let mut group = c.benchmark_group("team_cost");
    for size in [5usize, 50, 500] {
        let members = create_members(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &members, |b, members| {
            b.iter(|| black_box(calculate_team_cost(black_box(members), &[], &assumptions)))
        });
    }
    group.finish();
}

/// Benchmark: full projection with a 50-person roster.
///
/// Target: < 100μs mean
fn bench_projection(c: &mut Criterion) {
    let targets = ForecastTargets {
        revenue_target: dec("1000000"),
        net_profit_target: dec("150000"),
    };
    let baseline = ForecastBaseline {
        prior_revenue: dec("820000"),
        cogs_fraction: dec("0.35"),
        prior_operating_expenses: dec("310000"),
        opex_inflation: dec("0.03"),
    };
    let assumptions = TeamCostAssumptions {
        salary_increase: dec("0.06"),
        super_rate: dec("0.12"),
    };
    let members = create_members(50);

    c.bench_function("projection_50_members", |b| {
        b.iter(|| {
            black_box(project(
                &targets,
                &baseline,
                black_box(&members),
                &[],
                &assumptions,
                &[],
            ))
        })
    });
}

/// Benchmark: end-to-end HTTP projection request.
///
/// Target: < 1ms mean
fn bench_projection_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let body = serde_json::json!({
        "targets": {
            "revenue_target": "1000000",
            "net_profit_target": "150000"
        },
        "baseline": {
            "prior_revenue": "820000",
            "cogs_fraction": "0.35",
            "prior_operating_expenses": "310000",
            "opex_inflation": "0.03"
        },
        "assumptions": {
            "salary_increase": "0.06",
            "super_rate": "0.12"
        }
    })
    .to_string();

    c.bench_function("projection_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/forecast/project")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_annual_tax,
    bench_recalculate_employee,
    bench_team_cost,
    bench_projection,
    bench_projection_endpoint
);
criterion_main!(benches);
