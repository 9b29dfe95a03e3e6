//! Handlers for the `patch` command group.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::adapter::inbound::cli::command::{PatchApplyArgs, PatchShowArgs};
use crate::adapter::inbound::cli::{diagnostic, output};
use crate::application::catalog::{self, BUILTIN_PLANS};
use crate::application::patcher::{self, EditOutcome, PatchOptions, PatchReport};
use crate::domain::PatchPlan;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `patch apply`.
pub fn execute_apply(config: &Config, args: &PatchApplyArgs) -> Result<()> {
    let plan = resolve_plan(args)?;
    let target = resolve_target(&plan, config, args.file.as_deref());
    let options = PatchOptions {
        strict: args.strict || config.patch.strict,
    };

    output::section("Patch");
    output::field("Plan", &plan.name);
    output::field("File", target.display());
    output::field("Edits", plan.edits.len());
    if plan.is_positional() {
        output::warning("positional plan: expects the unpatched file and must not be run twice");
    }

    let pending = patcher::prepare_file(&plan, &target, options)?;

    if args.dry_run {
        print_report(pending.report());
        output::note("dry run: nothing written");
        return Ok(());
    }
    if !pending.report().changed {
        print_report(pending.report());
        output::success("Nothing to change");
        return Ok(());
    }
    if !args.yes && !confirm(&format!("Overwrite {}?", target.display())) {
        output::warning("Patch cancelled by user");
        return Ok(());
    }

    let report = pending.write()?;
    print_report(&report);
    output::report("Fixed successfully");
    Ok(())
}

/// Execute `patch list`.
pub fn execute_list() {
    if output::is_json() {
        let plans: Vec<_> = BUILTIN_PLANS
            .iter()
            .map(|(name, description)| json!({ "name": name, "description": description }))
            .collect();
        output::json_output(json!({ "command": "patch.list", "plans": plans }));
        return;
    }

    output::section("Built-in Plans");
    for (name, description) in BUILTIN_PLANS {
        output::field(name, description);
    }
    output::hint("apply one with: livematch patch apply --plan <name>");
}

/// Execute `patch show`.
pub fn execute_show(args: &PatchShowArgs) -> Result<()> {
    let plan = catalog::builtin(&args.name)?;
    print!("{}", toml::to_string_pretty(&plan)?);
    Ok(())
}

fn resolve_plan(args: &PatchApplyArgs) -> Result<PatchPlan> {
    let Some(path) = &args.plan_file else {
        return Ok(catalog::builtin(&args.plan)?);
    };

    let content = std::fs::read_to_string(path)?;
    match patcher::parse_plan(&content) {
        Ok(plan) => Ok(plan),
        Err(err) => match diagnostic::toml_diagnostic(&err, &path.display().to_string(), &content) {
            Some(report) => {
                diagnostic::render(report);
                std::process::exit(1);
            }
            None => Err(err),
        },
    }
}

/// `--file` wins over `[patch] target`, which wins over the plan's own target.
fn resolve_target(plan: &PatchPlan, config: &Config, file: Option<&Path>) -> PathBuf {
    file.map(Path::to_path_buf)
        .or_else(|| config.patch.target.clone())
        .unwrap_or_else(|| plan.target.clone())
}

fn print_report(report: &PatchReport) {
    if output::is_json() {
        output::json_output(json!({
            "command": "patch.apply",
            "report": report,
        }));
        return;
    }

    output::field("Applied", report.applied());
    output::field("Skipped", report.skipped());
    output::field(
        "Lines",
        format!("{} -> {}", report.lines_before, report.lines_after),
    );

    for edit in &report.edits {
        match &edit.outcome {
            EditOutcome::Skipped { reason } => {
                output::warning(&format!("#{} {}: {reason}", edit.number, edit.label));
            }
            EditOutcome::Applied { replacements } if output::verbosity() > 0 => {
                output::note(&format!(
                    "#{} {} ({replacements}x)",
                    edit.number, edit.label
                ));
            }
            EditOutcome::Applied { .. } => {}
        }
    }
}

/// Ask on stderr, read the answer from stdin.
fn confirm(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_resolution_order() {
        let plan = PatchPlan::new("p", "plan.js");
        let mut config = Config::default();

        assert_eq!(resolve_target(&plan, &config, None), PathBuf::from("plan.js"));

        config.patch.target = Some(PathBuf::from("config.js"));
        assert_eq!(resolve_target(&plan, &config, None), PathBuf::from("config.js"));
        assert_eq!(
            resolve_target(&plan, &config, Some(Path::new("flag.js"))),
            PathBuf::from("flag.js")
        );
    }
}
