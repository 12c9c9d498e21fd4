//! Application factory: resolution plus outcome classification.

use examguard_core::{
    ApplicationDescriptor, ApplicationHandle, EnvProvider, FileProbe, InstalledAppIndex,
    KnownFolders, ResolutionOutcome,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

use crate::resolver::{CandidatePath, ExecutableLocator};
use crate::system::{SystemEnv, SystemFs, default_app_index, default_known_folders};

/// Creates application handles for whitelisted programs.
///
/// Holds only shared references to its ports, so one factory can serve
/// concurrent requests from several threads. Each call blocks on filesystem
/// and registry I/O; there is no timeout.
#[derive(Clone)]
pub struct ApplicationFactory {
    index: Arc<dyn InstalledAppIndex>,
    folders: Arc<dyn KnownFolders>,
    env: Arc<dyn EnvProvider>,
    fs: Arc<dyn FileProbe>,
}

impl ApplicationFactory {
    pub fn new(
        index: Arc<dyn InstalledAppIndex>,
        folders: Arc<dyn KnownFolders>,
        env: Arc<dyn EnvProvider>,
        fs: Arc<dyn FileProbe>,
    ) -> Self {
        Self {
            index,
            folders,
            env,
            fs,
        }
    }

    /// Factory wired to the real host.
    pub fn system() -> Self {
        Self::new(
            default_app_index(),
            default_known_folders(),
            Arc::new(SystemEnv),
            Arc::new(SystemFs),
        )
    }

    fn locator(&self) -> ExecutableLocator<'_> {
        ExecutableLocator::new(
            self.index.as_ref(),
            self.folders.as_ref(),
            self.env.as_ref(),
            self.fs.as_ref(),
        )
    }

    /// Ordered, unexpanded candidates for `descriptor`, for diagnostics.
    pub fn candidates(&self, descriptor: &ApplicationDescriptor) -> Vec<CandidatePath> {
        self.locator().candidates(descriptor)
    }

    /// Resolve `descriptor` and classify the result.
    ///
    /// Never fails and never panics. Source failures are absorbed by the
    /// resolver; a panic in an injected port is logged and reported as
    /// [`ResolutionOutcome::Error`].
    pub fn try_create(&self, descriptor: &ApplicationDescriptor) -> ResolutionOutcome {
        let name = &descriptor.display_name;
        let executable = &descriptor.executable_name;

        let located = panic::catch_unwind(AssertUnwindSafe(|| self.locator().locate(descriptor)));

        match located {
            Ok(Some(path)) => {
                debug!(
                    path = %path.display(),
                    "Successfully initialized application '{name}' ({executable})."
                );
                ResolutionOutcome::Success(ApplicationHandle::new(descriptor.clone(), path))
            }
            Ok(None) => {
                error!("Could not find application '{name}' ({executable})!");
                ResolutionOutcome::NotFound
            }
            Err(payload) => {
                error!(
                    panic = panic_message(payload.as_ref()),
                    "Unexpected error while trying to create application '{name}' ({executable})!"
                );
                ResolutionOutcome::Error
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
