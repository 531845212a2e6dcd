//! `scout scan`

use anyhow::Context;
use colored::*;
use scout_core::{FileScanStorage, ProjectScan, ScanOptions, ScanOrchestrator, ScoutConfig};
use std::sync::Arc;

use crate::args::ScanArgs;
use crate::completion::HttpCompletion;
use crate::console::CliConsole;

pub async fn execute(
    args: ScanArgs,
    config: &ScoutConfig,
    storage: FileScanStorage,
    verbose: bool,
) -> anyhow::Result<()> {
    let console = CliConsole::new(verbose);

    let completion = if args.skip_llm || config.scan.skip_llm {
        None
    } else {
        HttpCompletion::from_config(&config.llm)?
    };
    if completion.is_none() {
        console.info("Architecture synthesis disabled for this scan");
    }
    let skip_llm = completion.is_none();

    let mut orchestrator = ScanOrchestrator::new(
        Arc::new(storage),
        completion.map(|c| Arc::new(c) as Arc<dyn scout_core::TextCompletion>),
    )
    .with_scan_config(config.scan.clone())
    .with_llm_timeout(config.llm.timeout);

    let pb = console.scan_progress();
    let progress = pb.clone();
    orchestrator.subscribe(move |_, pct, message| {
        progress.set_position(u64::from(pct));
        progress.set_message(message.to_string());
    });

    let mut options = ScanOptions::new(&args.path)
        .force(args.force)
        .skip_llm(skip_llm);
    if let Some(id) = args.id {
        options = options.with_id(id);
    }
    if let Some(name) = args.name {
        options = options.with_name(name);
    }
    options.max_files = args.max_files;
    options.max_file_size_bytes = args.max_file_size_bytes;

    let result = orchestrator.perform_full_scan(&options).await;
    pb.finish_and_clear();
    let scan = result.with_context(|| format!("Scan of {} failed", args.path.display()))?;

    print_summary(&console, &scan);
    Ok(())
}

fn print_summary(console: &CliConsole, scan: &ProjectScan) {
    let overview = &scan.overview;

    console.print_header(&scan.project_name);
    println!("{}", overview.summary);
    println!();
    console.field("ID", scan.project_id.cyan());
    console.field("Type", overview.project_type);
    if !overview.languages.is_empty() {
        console.field("Languages", overview.languages.join(", "));
    }
    if !overview.frameworks.is_empty() {
        console.field("Frameworks", overview.frameworks.join(", "));
    }
    if let Some(pm) = overview.package_manager {
        console.field("Package mgr", pm);
    }
    console.field(
        "Size",
        format!("{} files, {} lines", overview.total_files, overview.total_lines),
    );
    console.field(
        "Docs",
        format!(
            "{}/100 ({})",
            scan.documentation.coverage.score, scan.documentation.coverage.level
        ),
    );
    console.field("Dependencies", scan.dependencies.total());
    if !scan.architecture.components.is_empty() {
        console.field("Components", scan.architecture.components.len());
    }
    console.field("Scanned", scan.scanned_at.format("%Y-%m-%d %H:%M UTC"));
    println!();
    console.success(&format!("Run `scout show {}` for the full report", scan.project_id));
}
