// ABOUTME: babyspoon CLI - command-line composition root for the recipe and meal-history core
// ABOUTME: Loads configuration, catalog, analytics settings, and persisted state, then runs one command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors
//!
//! Usage:
//! ```bash
//! # Weekly nutrition report
//! babyspoon-cli report --period weekly
//!
//! # Seven-day chart series
//! babyspoon-cli chart
//!
//! # Search the catalog
//! babyspoon-cli search 소고기 --category "중기 이유식" --sort name
//!
//! # Record a lunch for today, then remove it again
//! babyspoon-cli record r12 --meal 점심
//! babyspoon-cli remove --date 2026-01-03 --meal 점심 --entry-id 1767571200000
//!
//! # Toggle a favorite, check allergy risks
//! babyspoon-cli favorite r12
//! babyspoon-cli allergies r12
//! ```

mod commands;
mod display;

use anyhow::{Context, Result};
use babyspoon::catalog::RecipeCatalog;
use babyspoon::config::AppConfig;
use babyspoon::logging::LoggingConfig;
use babyspoon::search::SortMode;
use babyspoon::state::AppStore;
use babyspoon::storage::JsonFileStore;
use babyspoon_intelligence::ReportType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "babyspoon-cli",
    about = "Baby food recipe catalog and meal-history analytics",
    long_about = "Browse the recipe catalog, record meals, and report weekly or monthly nutrition balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to BABYSPOON_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Recipe catalog override (defaults to BABYSPOON_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Analytics settings override (defaults to BABYSPOON_ANALYTICS)
    #[arg(long, global = true)]
    analytics: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Windowed nutrition report
    Report {
        /// Reporting window: weekly or monthly
        #[arg(long, default_value = "weekly")]
        period: ReportType,

        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,
    },

    /// Seven-day per-category chart series
    Chart {
        /// Last day of the series (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,
    },

    /// Recorded meals grouped by date, most recent first
    History,

    /// Search the catalog
    Search {
        /// Search term (empty lists everything)
        #[arg(default_value = "")]
        term: String,

        /// Category selector: 추천, 전체보기, or a category name
        #[arg(long, default_value = "전체보기")]
        category: String,

        /// Sort mode: relevance, name, or category
        #[arg(long, default_value = "relevance")]
        sort: SortMode,

        /// Print name suggestions instead of results
        #[arg(long)]
        suggest: bool,
    },

    /// Show one recipe with parsed ingredients and steps
    Show {
        /// Recipe id
        recipe_id: String,
    },

    /// Record a meal
    Record {
        /// Recipe id
        recipe_id: String,

        /// Meal type: 아침, 점심, 저녁, 간식 (or breakfast, lunch, dinner, snack)
        #[arg(long)]
        meal: String,

        /// Date key (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Remove a recorded meal
    Remove {
        /// Date key (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Meal type label
        #[arg(long)]
        meal: String,

        /// Entry id printed by `record`
        #[arg(long)]
        entry_id: u64,
    },

    /// Toggle a favorite recipe
    Favorite {
        /// Recipe id
        recipe_id: String,
    },

    /// Allergy risks of a recipe for the saved avoid-list
    Allergies {
        /// Recipe id
        recipe_id: String,

        /// Toggle an allergen key (dairy, eggs, peanuts, treeNuts, wheat, soy, fish) first
        #[arg(long)]
        toggle: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(analytics) = cli.analytics {
        config.analytics_path = analytics;
    }

    let catalog = RecipeCatalog::from_path(&config.catalog_path)
        .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;
    let analyzer = config.load_analyzer()?;
    let store = JsonFileStore::new(config.data_dir.clone());
    let mut app = AppStore::load(store, &catalog)
        .with_recent_search_limit(config.recent_search_limit)
        .with_analyzer(analyzer);
    info!(data_dir = %config.data_dir.display(), "babyspoon-cli ready");

    match cli.command {
        Command::Report { period, today } => commands::report(&mut app, period, today.as_deref())?,
        Command::Chart { today } => commands::chart(&mut app, today.as_deref())?,
        Command::History => commands::history(&mut app)?,
        Command::Search {
            term,
            category,
            sort,
            suggest,
        } => commands::search(
            &mut app,
            &catalog,
            &config,
            &commands::SearchArgs {
                term,
                category,
                sort,
                suggest,
            },
        )?,
        Command::Show { recipe_id } => commands::show(&catalog, &recipe_id)?,
        Command::Record {
            recipe_id,
            meal,
            date,
        } => commands::record(&mut app, &catalog, &recipe_id, &meal, date.as_deref())?,
        Command::Remove {
            date,
            meal,
            entry_id,
        } => commands::remove(&mut app, &date, &meal, entry_id)?,
        Command::Favorite { recipe_id } => commands::favorite(&mut app, &catalog, &recipe_id)?,
        Command::Allergies { recipe_id, toggle } => {
            commands::allergies(&mut app, &catalog, &recipe_id, toggle.as_deref())?;
        }
    }

    Ok(())
}
