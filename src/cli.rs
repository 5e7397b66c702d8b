use crate::report::{ActionReport, RunReport};
use crate::sync::confirm::{AlwaysYes, Confirm, StdinConfirm};
use crate::sync::data_dir::scan_data_dir;
use crate::sync::entry::Schema;
use crate::sync::index::build_index;
use crate::sync::migrate::migrate;
use crate::sync::plan::{Action, build_plan};
use crate::sync::refresh::NodetoolRefresh;
use crate::sync::schema_file::load_schema;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cfsync",
    version,
    about = "Reconcile a Cassandra schema dump against the on-disk data directory"
)]
pub struct Cli {
    /// Schema dump listing keyspace, table, and table id per row
    pub schema_file: PathBuf,
    /// Data directory root (one subdirectory per keyspace)
    pub data_dir: PathBuf,
    /// Answer yes to every confirmation without prompting
    #[arg(short = 'f', long = "force")]
    pub force: bool,
    /// Print the plan and exit without touching the file system
    #[arg(long)]
    pub dry_run: bool,
    /// Emit a JSON run report on stdout (requires --force or --dry-run)
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    execute(Cli::parse())
}

fn print_listing(title: &str, schema: &Schema) {
    println!("{title}");
    println!("-----------------");
    for entry in schema {
        println!("{entry}");
    }
    println!("-----------------");
    println!();
}

fn execute(cli: Cli) -> Result<()> {
    if cli.json && !(cli.force || cli.dry_run) {
        bail!("--json needs --force or --dry-run; it cannot prompt interactively");
    }

    let mut declared = load_schema(&cli.schema_file)?;
    let mut observed = scan_data_dir(&cli.data_dir)?;
    declared.sort();
    observed.sort();

    if !cli.json {
        print_listing("From Schema File:", &declared);
        print_listing("From Data Folder:", &observed);
    }

    let (index, duplicates) = build_index(&declared);
    let mut report = RunReport::new(cli.dry_run);
    for dup in &duplicates {
        let line = format!(
            "duplicate schema entry for {}: keeping id {}, ignoring id {}",
            dup.full_name, dup.kept_id, dup.ignored_id
        );
        if !cli.json {
            eprintln!("warning: {line}");
        }
        report.duplicates.push(line);
    }

    let plan = build_plan(&observed, &index, &cli.data_dir);
    if plan.is_empty() && !cli.json {
        println!("Nothing to do.");
    }

    // Resolve the hook up front so a missing nodetool aborts before any
    // destructive work, not halfway through a migration.
    let hook = if !cli.dry_run && plan.iter().any(|a| matches!(a, Action::Migrate { .. })) {
        Some(NodetoolRefresh::resolve()?)
    } else {
        None
    };

    let mut confirm: Box<dyn Confirm> = if cli.force || cli.dry_run {
        Box::new(AlwaysYes)
    } else {
        Box::new(StdinConfirm)
    };

    for action in &plan {
        let mut action_report = ActionReport::proposed(action);
        match action {
            Action::Remove { entry, path } => {
                if !cli.json {
                    println!("Exists in data folder, not in schema: {entry}");
                }
                if cli.dry_run {
                    if !cli.json {
                        println!("Would REMOVE {}", path.display());
                        println!();
                    }
                } else if confirm.confirm(&format!("REMOVE {}?", path.display()))? {
                    if !cli.json {
                        println!("REMOVING {} ...", path.display());
                    }
                    fs::remove_dir_all(path)
                        .with_context(|| format!("failed to remove {}", path.display()))?;
                    action_report.executed = true;
                    if !cli.json {
                        println!("DONE.");
                        println!();
                    }
                }
            }
            Action::Migrate {
                entry,
                current_id,
                from,
                to,
            } => {
                if !cli.json {
                    println!(
                        "{} in data folder has ID {}, but in schema it's {}",
                        entry.full_name(),
                        entry.table_id,
                        current_id
                    );
                }
                if cli.dry_run {
                    if !cli.json {
                        println!(
                            "Would MOVE everything from {} to {}",
                            from.display(),
                            to.display()
                        );
                        println!();
                    }
                } else if confirm.confirm(&format!(
                    "MOVE everything from {} to {}?",
                    from.display(),
                    to.display()
                ))? {
                    if !cli.json {
                        println!("MOVING {} to {}", from.display(), to.display());
                    }
                    let hook = hook
                        .as_ref()
                        .context("nodetool refresh hook unavailable")?;
                    let outcome = migrate(&entry.keyspace, &entry.table, from, to, hook)?;
                    action_report.executed = true;
                    action_report.conflicts = outcome
                        .conflicts
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect();
                    if !cli.json {
                        if outcome.snapshots_removed {
                            println!("Removed old snapshots under {}", from.display());
                        }
                        for conflict in &outcome.conflicts {
                            println!(
                                "!!! {} already exists !!! left in place under the old path",
                                conflict.display()
                            );
                        }
                        println!("Moved {} entries", outcome.moved.len());
                        if outcome.source_removed {
                            println!("Removed now-empty {}", from.display());
                        } else {
                            println!("{} left in place (not empty)", from.display());
                        }
                        println!("Ran nodetool refresh {} {}", entry.keyspace, entry.table);
                        println!("DONE");
                        println!();
                    }
                }
            }
        }
        report.actions.push(action_report);
    }

    if cli.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
