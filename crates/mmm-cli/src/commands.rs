use anyhow::Result;
use comfy_table::Table;

use mmm_cli::prepare::{PrepareOptions, PrepareResult, run_prepare as run_prepare_flow};
use mmm_model::Role;

use crate::cli::PrepareArgs;
use crate::summary::apply_table_style;

pub fn run_roles() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Role", "Description", "Value rule"]);
    apply_table_style(&mut table);
    for role in Role::ALLOWED {
        let (description, rule) = describe_role(role);
        table.add_row(vec![role.as_str(), description, rule]);
    }
    println!("{table}");
    println!("Column names follow <role>__<segment>[__<segment>...]; `date` is reserved.");
    Ok(())
}

fn describe_role(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Target => ("Dependent variable (e.g. sales)", "numeric, no missing"),
        Role::Media => ("Paid media activity (spend, impressions)", "numeric, >= 0"),
        Role::Control => ("Exogenous control (price, distribution)", "numeric"),
        Role::Event => ("Binary calendar event indicator", "numeric, in [0, 1]"),
        Role::Baseline => ("Structural feature (trend, seasonality)", "numeric"),
        Role::Id => ("Series identifier (future multi-series)", "numeric"),
        Role::Date => ("Reserved date sentinel", "ISO calendar day"),
    }
}

pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareResult> {
    run_prepare_flow(&PrepareOptions {
        input: args.input.clone(),
        config: args.config.clone(),
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
    })
}
