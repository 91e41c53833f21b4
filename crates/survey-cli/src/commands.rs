use anyhow::{Context, Result, bail};
use comfy_table::Table;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng as _};
use tracing::{info, info_span};

use survey_core::{
    CategoryRegistry, analyze, department_analyze, department_matrix_analyze, distribution,
};
use survey_ingest::{extract_department_matrix, normalize, read_table};
use survey_model::AnalysisSettings;
use survey_report::{build_report, write_report_json};
use survey_validate::build_responses;

use crate::cli::{AnalyzeArgs, DepartmentsArgs};
use crate::summary::apply_table_style;
use crate::types::{AnalyzeOutcome, DepartmentsOutcome};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let span = info_span!("analyze", file = %args.file.display());
    let _guard = span.enter();

    let settings = settings_from_args(args)?;
    let table = read_table(&args.file)
        .with_context(|| format!("read survey file: {}", args.file.display()))?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };
    let canonical = normalize(&table, rng.as_mut());

    let registry = CategoryRegistry::default();
    let (questions, responses, validation) = build_responses(&canonical, &registry, &settings);
    info!(
        questions = questions.len(),
        respondents = responses.len(),
        errors = validation.error_count(),
        warnings = validation.warning_count(),
        "survey normalized"
    );

    let results = analyze(&responses, &questions, &settings);
    let departments = department_analyze(&responses, &questions, &results);

    let distribution = match &args.distribution {
        None => None,
        Some(key) => {
            if !questions.iter().any(|question| question.key == *key) {
                bail!("unknown question key: {key}");
            }
            let buckets = distribution(&responses, key, settings.scale_min, settings.scale_max);
            Some((key.clone(), buckets))
        }
    };

    let report_path = match &args.report {
        None => None,
        Some(path) => {
            let report = build_report(
                settings,
                results.clone(),
                departments.clone(),
                None,
                Some(validation.clone()),
            );
            Some(write_report_json(path, &report).context("write analysis report")?)
        }
    };

    let gated = args.fail_on_errors && validation.has_errors();
    Ok(AnalyzeOutcome {
        file: args.file.clone(),
        respondents: responses.len(),
        results,
        departments,
        show_departments: args.departments,
        validation,
        distribution,
        report_path,
        gated,
    })
}

pub fn run_departments(args: &DepartmentsArgs) -> Result<DepartmentsOutcome> {
    let span = info_span!("departments", file = %args.file.display());
    let _guard = span.enter();

    let table = read_table(&args.file)
        .with_context(|| format!("read department file: {}", args.file.display()))?;
    let registry = CategoryRegistry::default();
    let data = extract_department_matrix(&table, &registry)
        .with_context(|| format!("extract department matrix: {}", args.file.display()))?;
    let departments = department_matrix_analyze(&data);
    info!(
        departments = data.departments.len(),
        questions = data.questions.len(),
        "department matrix analyzed"
    );

    let report_path = match &args.report {
        None => None,
        Some(path) => {
            let settings = AnalysisSettings::new(3.0, 4.0, 1.0, 5.0);
            let report = build_report(
                settings,
                Vec::new(),
                departments.clone(),
                Some(data.clone()),
                None,
            );
            Some(write_report_json(path, &report).context("write department report")?)
        }
    };

    Ok(DepartmentsOutcome {
        file: args.file.clone(),
        data,
        departments,
        report_path,
    })
}

pub fn run_categories() -> Result<()> {
    let registry = CategoryRegistry::default();
    let mut table = Table::new();
    table.set_header(vec!["Id", "Label", "Keywords"]);
    apply_table_style(&mut table);
    for category in &registry.categories {
        table.add_row(vec![
            category.id.to_string(),
            category.label.clone(),
            category.keywords.join(", "),
        ]);
    }
    table.add_row(vec![
        registry.fallback.to_string(),
        "その他".to_string(),
        "(fallback)".to_string(),
    ]);
    println!("{table}");
    Ok(())
}

fn settings_from_args(args: &AnalyzeArgs) -> Result<AnalysisSettings> {
    if args.scale_min >= args.scale_max {
        bail!(
            "invalid scale bounds: min {} must be below max {}",
            args.scale_min,
            args.scale_max
        );
    }
    Ok(AnalysisSettings::new(
        args.issue_threshold,
        args.excellent_threshold,
        args.scale_min,
        args.scale_max,
    ))
}
