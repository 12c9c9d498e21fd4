//! `examguard resolve`: run a full resolution and report it.

use examguard_apps::ApplicationFactory;
use examguard_core::{ApplicationDescriptor, OutcomeKind, ResolutionOutcome};
use serde::Serialize;

use crate::commands::DescriptorArgs;

/// Exit code for a resolution that found nothing.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code for an unexpected fault (`EX_SOFTWARE`).
pub const EXIT_ERROR: i32 = 70;

/// What the CLI prints for a resolution.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveReport {
    pub display_name: String,
    pub executable_name: String,
    pub outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_path: Option<String>,
}

impl ResolveReport {
    pub fn new(descriptor: &ApplicationDescriptor, outcome: &ResolutionOutcome) -> Self {
        Self {
            display_name: descriptor.display_name.clone(),
            executable_name: descriptor.executable_name.clone(),
            outcome: outcome.kind(),
            resolved_path: outcome
                .handle()
                .map(|handle| handle.executable_path().display().to_string()),
        }
    }

    pub fn render_text(&self) -> String {
        match &self.resolved_path {
            Some(path) => format!("{} ({}): {}", self.display_name, self.executable_name, path),
            None => format!(
                "{} ({}): {}",
                self.display_name, self.executable_name, self.outcome
            ),
        }
    }
}

/// Process exit code for an outcome.
pub const fn exit_code(kind: OutcomeKind) -> i32 {
    match kind {
        OutcomeKind::Success => 0,
        OutcomeKind::NotFound => EXIT_NOT_FOUND,
        OutcomeKind::Error => EXIT_ERROR,
    }
}

pub fn execute(
    factory: &ApplicationFactory,
    args: DescriptorArgs,
    json: bool,
) -> anyhow::Result<OutcomeKind> {
    let descriptor = ApplicationDescriptor::from(args);
    let outcome = factory.try_create(&descriptor);
    let report = ResolveReport::new(&descriptor, &outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }

    Ok(report.outcome)
}
