use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use smk_cli::input::{authorize, doctor, load_bundle, load_catalog, resolve_today};
use smk_core::{
    ProgressContext, build_dashboard, build_module_procedures, build_statistics,
    build_user_procedures,
};
use smk_model::{ModuleId, SmkVersion};
use smk_standards::standards_root;
use smk_validate::{preview_export, validate};

use crate::cli::{BundleArgs, ProceduresArgs, RequirementsArgs, SmkVersionArg};
use crate::summary::{
    print_dashboard, print_module_procedures, print_preview, print_requirements,
    print_statistics, print_user_procedures, print_validation,
};

/// How a successful command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ValidationFailed,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("serialize output")?);
    Ok(())
}

/// Load the bundle and catalog, check ownership, then hand a context to `run`.
fn with_context<T>(
    args: &BundleArgs,
    standards_dir: Option<&Path>,
    run: impl FnOnce(&ProgressContext<'_>) -> Result<T>,
) -> Result<T> {
    let bundle = load_bundle(&args.bundle)?;
    authorize(&bundle, args.user)?;
    let catalog = load_catalog(standards_dir)?;
    let today = resolve_today(args.today);
    let span = info_span!("specialization", id = %bundle.specialization.id, %today);
    let _guard = span.enter();
    let ctx = ProgressContext::new(&catalog, &bundle, today);
    run(&ctx)
}

pub fn run_validate(args: &BundleArgs, standards_dir: Option<&Path>) -> Result<Outcome> {
    with_context(args, standards_dir, |ctx| {
        let result = validate(ctx);
        if args.json {
            print_json(&result)?;
        } else {
            print_validation(&result);
        }
        Ok(if result.is_valid {
            Outcome::Success
        } else {
            Outcome::ValidationFailed
        })
    })
}

pub fn run_dashboard(args: &BundleArgs, standards_dir: Option<&Path>) -> Result<Outcome> {
    with_context(args, standards_dir, |ctx| {
        let dashboard = build_dashboard(ctx);
        if args.json {
            print_json(&dashboard)?;
        } else {
            print_dashboard(&dashboard);
        }
        Ok(Outcome::Success)
    })
}

pub fn run_stats(args: &BundleArgs, standards_dir: Option<&Path>) -> Result<Outcome> {
    with_context(args, standards_dir, |ctx| {
        let stats = build_statistics(ctx);
        if args.json {
            print_json(&stats)?;
        } else {
            print_statistics(&stats);
        }
        Ok(Outcome::Success)
    })
}

pub fn run_procedures(args: &ProceduresArgs, standards_dir: Option<&Path>) -> Result<Outcome> {
    let json = args.bundle.json;
    with_context(&args.bundle, standards_dir, |ctx| {
        match args.module {
            Some(module) => {
                let view = build_module_procedures(ctx, ModuleId(module))?;
                if json {
                    print_json(&view)?;
                } else {
                    print_module_procedures(&view);
                }
            }
            None => {
                let view = build_user_procedures(ctx);
                if json {
                    print_json(&view)?;
                } else {
                    print_user_procedures(&view);
                }
            }
        }
        Ok(Outcome::Success)
    })
}

pub fn run_preview(args: &BundleArgs, standards_dir: Option<&Path>) -> Result<Outcome> {
    with_context(args, standards_dir, |ctx| {
        let preview = preview_export(ctx);
        if args.json {
            print_json(&preview)?;
        } else {
            print_preview(&preview);
        }
        Ok(Outcome::Success)
    })
}

pub fn run_requirements(args: &RequirementsArgs, standards_dir: Option<&Path>) -> Result<Outcome> {
    let catalog = load_catalog(standards_dir)?;
    let version = match args.smk_version {
        SmkVersionArg::Old => SmkVersion::Old,
        SmkVersionArg::New => SmkVersion::New,
    };
    let set = catalog.get_requirements(&args.specialization, version);
    if args.json {
        print_json(&set)?;
    } else {
        print_requirements(&set);
    }
    Ok(Outcome::Success)
}

pub fn run_doctor(standards_dir: Option<&Path>) -> Result<Outcome> {
    let dir = standards_dir.map_or_else(standards_root, Path::to_path_buf);
    let report = doctor(&dir)?;
    print_json(&report)?;
    Ok(Outcome::Success)
}
