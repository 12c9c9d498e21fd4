//! Installed-application index adapters.

use examguard_core::{IndexError, InstalledAppIndex};

/// Index for hosts without an installed-application registry.
pub struct NoopAppIndex;

impl InstalledAppIndex for NoopAppIndex {
    fn base_directory(&self, _executable_name: &str) -> Result<Option<String>, IndexError> {
        Ok(None)
    }
}

#[cfg(windows)]
pub use app_paths::AppPathsRegistry;

#[cfg(windows)]
#[allow(unsafe_code)]
mod app_paths {
    use examguard_core::{IndexError, InstalledAppIndex};
    use windows::Win32::Foundation::{
        ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_SUCCESS, ERROR_UNSUPPORTED_TYPE,
        WIN32_ERROR,
    };
    use windows::Win32::System::Registry::{HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ, RegGetValueW};
    use windows::core::{HSTRING, PCWSTR, w};

    const APP_PATHS_KEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths";

    /// `HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\App Paths\<exe>`, value `Path`.
    pub struct AppPathsRegistry;

    impl InstalledAppIndex for AppPathsRegistry {
        fn base_directory(&self, executable_name: &str) -> Result<Option<String>, IndexError> {
            let subkey = HSTRING::from(format!(r"{APP_PATHS_KEY}\{executable_name}").as_str());
            let mut size = 0u32;

            // SAFETY: `subkey` and the value name are NUL-terminated and outlive
            // the call; no data buffer is passed, only its size is queried.
            let status = unsafe {
                RegGetValueW(
                    HKEY_LOCAL_MACHINE,
                    PCWSTR(subkey.as_ptr()),
                    w!("Path"),
                    RRF_RT_REG_SZ,
                    None,
                    None,
                    Some(&raw mut size),
                )
            };
            if status == ERROR_FILE_NOT_FOUND {
                return Ok(None);
            }
            check(status, executable_name)?;

            let mut buffer = vec![0u16; (size as usize).div_ceil(2)];

            // SAFETY: `buffer` holds at least `size` bytes and `size` is updated
            // to the number of bytes actually written.
            let status = unsafe {
                RegGetValueW(
                    HKEY_LOCAL_MACHINE,
                    PCWSTR(subkey.as_ptr()),
                    w!("Path"),
                    RRF_RT_REG_SZ,
                    None,
                    Some(buffer.as_mut_ptr().cast()),
                    Some(&raw mut size),
                )
            };
            if status == ERROR_FILE_NOT_FOUND {
                return Ok(None);
            }
            check(status, executable_name)?;

            let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
            String::from_utf16(&buffer[..len])
                .map(Some)
                .map_err(|e| IndexError::MalformedValue {
                    executable: executable_name.to_string(),
                    reason: e.to_string(),
                })
        }
    }

    fn check(status: WIN32_ERROR, executable_name: &str) -> Result<(), IndexError> {
        match status {
            ERROR_SUCCESS => Ok(()),
            ERROR_ACCESS_DENIED => Err(IndexError::AccessDenied {
                executable: executable_name.to_string(),
            }),
            ERROR_UNSUPPORTED_TYPE => Err(IndexError::MalformedValue {
                executable: executable_name.to_string(),
                reason: "value is not a string".to_string(),
            }),
            other => Err(IndexError::Unavailable(
                windows::core::Error::from(other.to_hresult()).to_string(),
            )),
        }
    }
}
