//! Ordered candidate generation.
//!
//! Pure: the same descriptor, folders and registry base always yield the same
//! list in the same order.

use examguard_core::ApplicationDescriptor;

use super::types::{CandidatePath, StandardFolders};

/// Build every candidate path for `descriptor`, highest priority first.
///
/// Order:
/// 1. Each available standard base (64-bit Program Files, 32-bit Program
///    Files, system, WOW64 system) + executable name
/// 2. If a path hint is set: hint + executable name, then each standard base +
///    hint + executable name
/// 3. If the registry has a base directory: registry base + executable name,
///    then registry base + hint + executable name
///
/// Registry hints stay last so that existing installations keep winning over
/// the index when several copies are present.
pub fn build_candidates(
    descriptor: &ApplicationDescriptor,
    folders: &StandardFolders,
    registry_base: Option<&str>,
) -> Vec<CandidatePath> {
    let executable = descriptor.executable_name.as_str();
    let hint = descriptor.executable_path.as_deref();
    let bases = folders.bases();

    let mut candidates: Vec<CandidatePath> = bases
        .iter()
        .map(|base| CandidatePath::new([*base, executable]))
        .collect();

    if let Some(hint) = hint {
        candidates.push(CandidatePath::new([hint, executable]));
        candidates.extend(
            bases
                .iter()
                .map(|base| CandidatePath::new([*base, hint, executable])),
        );
    }

    if let Some(registry_base) = registry_base {
        candidates.push(CandidatePath::new([registry_base, executable]));

        if let Some(hint) = hint {
            candidates.push(CandidatePath::new([registry_base, hint, executable]));
        }
    }

    candidates
}
