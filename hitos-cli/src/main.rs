mod cli;
mod render;
mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hitos::metrics::Dashboard;
use hitos::view::{paginate, select_milestones, MilestoneQuery};
use hitos::{encode_csv, MilestoneId, MilestoneStore, MilestoneUpdate};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use settings::Settings;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "hitos=debug" } else { "hitos=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings = settings::read_config(&cli.config_dir).with_context(|| {
        format!("Failed to read settings from {}", cli.config_dir.display())
    })?;
    settings.validate().context("Invalid settings")?;

    let mut store = MilestoneStore::seeded(settings.project.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Summary { json } => cmd_summary(&mut out, &store, &settings, json),
        Commands::Timeline => {
            let dashboard = Dashboard::compute(&store, &settings.risk);
            render::timeline(&mut out, &dashboard.timeline)?;
            Ok(())
        }
        Commands::Risk => {
            let dashboard = Dashboard::compute(&store, &settings.risk);
            render::risk(
                &mut out,
                &dashboard.risk,
                dashboard.workload.as_ref(),
                &dashboard.critical_months,
            )?;
            Ok(())
        }
        Commands::List {
            category,
            search,
            sort,
            page,
            page_size,
        } => {
            let mut query = MilestoneQuery::new();
            if let Some(category) = category {
                query = query.with_category(category);
            }
            if let Some(search) = search {
                query = query.with_search(search);
            }
            let selected =
                select_milestones(store.get_all(), &query, sort.unwrap_or(settings.view.sort));
            let page = paginate(
                &selected,
                page_size.unwrap_or(settings.view.page_size),
                page.saturating_sub(1),
            );
            render::milestone_page(&mut out, &page)?;
            Ok(())
        }
        Commands::Export { out_dir } => {
            let csv = encode_csv(store.get_all()).context("Failed to encode milestones")?;
            let today = chrono::Local::now().date_naive();
            let path = out_dir.join(store.project_info().export_file_name(today));
            std::fs::write(&path, csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), rows = store.len(), "exported milestones");
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            planned_month,
            actual_month,
            clear_actual,
            progress,
            category,
        } => {
            let id = MilestoneId::new(id);
            let current = store
                .get(id)
                .with_context(|| format!("Milestone {} not found", id))?;

            let mut update = MilestoneUpdate::from(current);
            if let Some(title) = title {
                update.title = title;
            }
            if let Some(month) = planned_month {
                update.planned_month = month;
            }
            if clear_actual {
                update.actual_month = None;
            } else if actual_month.is_some() {
                update.actual_month = actual_month;
            }
            if let Some(progress) = progress {
                update.progress_percent = progress;
            }
            if let Some(category) = category {
                update.category = category;
            }

            let updated = store
                .update(id, update)
                .with_context(|| format!("Failed to update milestone {}", id))?;
            render::milestone_row(&mut out, updated)?;
            writeln!(out)?;

            let dashboard = Dashboard::compute(&store, &settings.risk);
            render::kpis(&mut out, &dashboard.kpis)?;
            Ok(())
        }
    }
}

fn cmd_summary(
    out: &mut impl Write,
    store: &MilestoneStore,
    settings: &Settings,
    json: bool,
) -> Result<()> {
    let dashboard = Dashboard::compute(store, &settings.risk);
    if json {
        serde_json::to_writer_pretty(&mut *out, &dashboard)
            .context("Failed to serialize dashboard")?;
        writeln!(out)?;
        return Ok(());
    }

    let project = store.project_info();
    writeln!(
        out,
        "{} · Tower {} · started {}",
        project.client, project.tower, project.start_date
    )?;
    writeln!(out)?;
    render::kpis(out, &dashboard.kpis)?;
    writeln!(out)?;
    render::categories(out, &dashboard.categories, dashboard.kpis.total_count)?;
    writeln!(out)?;
    render::project_summary(out, &dashboard.summary)?;
    Ok(())
}
