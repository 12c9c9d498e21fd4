//! First-match executable search.

use examguard_core::{
    ApplicationDescriptor, EnvProvider, FileProbe, InstalledAppIndex, KnownFolders,
};
use std::path::PathBuf;

use super::candidates::build_candidates;
use super::probe::PathExistenceProbe;
use super::registry::RegistryPathResolver;
use super::types::{CandidatePath, StandardFolders};

/// Drives registry lookup, candidate generation and probing.
pub struct ExecutableLocator<'a> {
    index: &'a dyn InstalledAppIndex,
    folders: &'a dyn KnownFolders,
    env: &'a dyn EnvProvider,
    fs: &'a dyn FileProbe,
}

impl<'a> ExecutableLocator<'a> {
    pub fn new(
        index: &'a dyn InstalledAppIndex,
        folders: &'a dyn KnownFolders,
        env: &'a dyn EnvProvider,
        fs: &'a dyn FileProbe,
    ) -> Self {
        Self {
            index,
            folders,
            env,
            fs,
        }
    }

    /// The full, unexpanded candidate list for `descriptor`.
    ///
    /// Queries the index and the known folders exactly once each.
    pub fn candidates(&self, descriptor: &ApplicationDescriptor) -> Vec<CandidatePath> {
        let registry_base =
            RegistryPathResolver::new(self.index).resolve(&descriptor.executable_name);
        let folders = StandardFolders::resolve(self.folders);

        build_candidates(descriptor, &folders, registry_base.as_deref())
    }

    /// The first candidate that exists, or `None` once the list is exhausted.
    pub fn locate(&self, descriptor: &ApplicationDescriptor) -> Option<PathBuf> {
        let probe = PathExistenceProbe::new(self.env, self.fs);

        self.candidates(descriptor)
            .iter()
            .find_map(|candidate| probe.probe(candidate))
    }
}
