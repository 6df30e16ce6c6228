//! Exit codes for folioctl

use folio_shared::FolioError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code for bad input (unknown project, missing form field)
pub const EXIT_USAGE: i32 = 64;

/// Map an error from a command to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FolioError>() {
        Some(FolioError::UnknownProject(_)) | Some(FolioError::MissingField(_)) => EXIT_USAGE,
        _ => EXIT_GENERAL_ERROR,
    }
}
