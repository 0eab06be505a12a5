//! `gemclean check`

use crate::error::Result;
use colored::Colorize;
use gemclean_core::{BundleEngine, CommandEngine, ReleaseConfig};
use gemclean_manifest::{DependencySet, SourceRef, dropped_options};

/// What releasing a manifest would remove from one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub dependency: String,
    pub source: Option<String>,
    pub dropped: Vec<String>,
}

/// Collect a finding for every dependency the released form would change.
pub fn findings(set: &DependencySet) -> Vec<Finding> {
    set.dependencies
        .iter()
        .filter_map(|dependency| {
            let source = match &dependency.source {
                Some(SourceRef::Other(descriptor)) => Some(descriptor.to_string()),
                _ => None,
            };
            let dropped: Vec<String> = dropped_options(&dependency.options)
                .into_iter()
                .map(str::to_string)
                .collect();

            (source.is_some() || !dropped.is_empty()).then(|| Finding {
                dependency: dependency.name.clone(),
                source,
                dropped,
            })
        })
        .collect()
}

/// Print what the released manifest would drop.
pub fn run_check(config: &ReleaseConfig) -> Result<()> {
    let engine = CommandEngine::from_config(config);
    let set = engine.parse_current_manifest()?;
    let findings = findings(&set);

    if findings.is_empty() {
        println!(
            "{} {} is already in released form",
            "OK".green().bold(),
            config.manifest.display()
        );
        return Ok(());
    }

    for finding in &findings {
        println!("{}", finding.dependency.bold());
        if let Some(source) = &finding.source {
            println!("  {} source {}", "strip".yellow(), source);
        }
        for option in &finding.dropped {
            println!("  {} option {}", "drop".yellow(), option);
        }
    }
    println!();
    println!("{} of {} dependencies change when released", findings.len(), set.len());

    Ok(())
}
