// ABOUTME: Criterion benchmarks for meal-history analytics and recipe search
// ABOUTME: Measures flattening, windowed analysis, the weekly series, and the filter pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Criterion benchmarks for analytics and search.
//!
//! Plans are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use babyspoon::search::{filter_recipes, SearchQuery, SortMode};
use babyspoon_core::date_key::{days_before, to_date_key};
use babyspoon_core::models::{MealEntry, MealPlan, MealType, Recipe};
use babyspoon_intelligence::{
    build_weekly_chart_data, flatten_meal_plan, MealHistoryAnalyzer, NutritionKeywords,
    ReportType,
};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const INGREDIENT_POOL: [&str; 8] = [
    "쌀 20g, 소고기 15g, 애호박 10g",
    "감자 30g, 두부 20g, 당근 10g",
    "오트밀 30g, 바나나 1개, 우유 20ml",
    "사과 1/2개",
    "쌀 20g, 닭고기 15g, 브로콜리 10g",
    "고구마 40g, 배 1/4개",
    "쇠고기 20g, 무 30g, 시금치 10g",
    "면 30g, 계란 1개, 양파 10g",
];

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap_or_default()
}

fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            Recipe::new(
                format!("bench-{index}"),
                format!("벤치 레시피 {index}"),
                ["초기 이유식", "중기 이유식", "간식", "유아식 반찬"][index % 4],
                INGREDIENT_POOL[index % INGREDIENT_POOL.len()],
            )
        })
        .collect()
}

/// Three meals a day over `days` days ending at the reference day
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn generate_plan(days: usize, recipes: &[Recipe]) -> MealPlan {
    let mut plan = MealPlan::default();
    let mut entry_id = 1_u64;
    for day in 0..days {
        let date_key = to_date_key(days_before(reference_day(), day as i64));
        for (slot, meal_type) in [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
            .into_iter()
            .enumerate()
        {
            let recipe = &recipes[(day * 3 + slot) % recipes.len()];
            plan.record(
                &date_key,
                meal_type.label(),
                MealEntry::new(entry_id, recipe.snapshot()),
            );
            entry_id += 1;
        }
    }
    plan
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_meal_plan");
    let recipes = generate_recipes(40);

    for days in [7, 30, 365] {
        let plan = generate_plan(days, &recipes);
        group.throughput(Throughput::Elements(plan.total_entries() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &plan, |b, plan| {
            b.iter(|| flatten_meal_plan(black_box(plan)));
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_meal_history");
    let recipes = generate_recipes(40);
    let analyzer = MealHistoryAnalyzer::default();

    for days in [30, 365] {
        let history = flatten_meal_plan(&generate_plan(days, &recipes));
        group.throughput(Throughput::Elements(history.len() as u64));
        for report_type in [ReportType::Weekly, ReportType::Monthly] {
            group.bench_with_input(
                BenchmarkId::new(report_type.as_str(), days),
                &history,
                |b, history| {
                    b.iter(|| {
                        analyzer.analyze(black_box(history), report_type, reference_day())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_weekly_chart(c: &mut Criterion) {
    let recipes = generate_recipes(40);
    let history = flatten_meal_plan(&generate_plan(365, &recipes));
    let keywords = NutritionKeywords::default();

    c.bench_function("weekly_chart_365_days", |b| {
        b.iter(|| build_weekly_chart_data(black_box(&history), &keywords, reference_day()));
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_recipes");
    let recipes = generate_recipes(500);
    let queries = [
        ("relevance", SearchQuery::term("소고기")),
        ("name", SearchQuery::term("").sorted_by(SortMode::Name)),
        ("recommended", SearchQuery::term("").in_category("추천")),
    ];

    group.throughput(Throughput::Elements(recipes.len() as u64));
    for (label, query) in &queries {
        group.bench_with_input(BenchmarkId::from_parameter(label), query, |b, query| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| filter_recipes(black_box(&recipes), query, &mut rng).len());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_flatten,
    bench_analysis,
    bench_weekly_chart,
    bench_search
);
criterion_main!(benches);
