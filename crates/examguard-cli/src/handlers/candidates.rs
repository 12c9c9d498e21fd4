//! `examguard candidates`: print the search order without probing.

use examguard_apps::ApplicationFactory;
use examguard_core::ApplicationDescriptor;

use crate::commands::DescriptorArgs;

pub fn execute(factory: &ApplicationFactory, args: DescriptorArgs, json: bool) -> anyhow::Result<()> {
    let descriptor = ApplicationDescriptor::from(args);
    let candidates: Vec<String> = factory
        .candidates(&descriptor)
        .iter()
        .map(ToString::to_string)
        .collect();
    tracing::debug!(count = candidates.len(), "Built candidate list");

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        for (position, candidate) in candidates.iter().enumerate() {
            println!("{:>2}. {candidate}", position + 1);
        }
    }

    Ok(())
}
