#![allow(clippy::missing_safety_doc)]

//! C ABI shared between the gantry host and dynamically loaded extensions.
//!
//! An extension artifact exports [`GANTRY_EXTENSION_ENTRY_SYMBOL`] with the
//! [`GxExtensionEntry`] signature. The host resolves the symbol inside a
//! freshly opened scope, calls it, and receives a [`GxExtensionDecl`] that
//! stays valid for as long as the artifact remains mapped.

use core::ffi::c_void;

// Single in-development ABI version; may change in place until 1.0.
pub const GANTRY_EXTENSION_API_VERSION: u32 = 1;
pub const GANTRY_EXTENSION_ENTRY_SYMBOL: &str = "gantry_extension_entry";

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GxLogLevel {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

/// Immutable UTF-8 bytes. Not NUL-terminated.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GxStr {
    pub ptr: *const u8,
    pub len: usize,
}

impl GxStr {
    pub const fn empty() -> Self {
        Self {
            ptr: core::ptr::null(),
            len: 0,
        }
    }

    pub const fn from_static(s: &'static str) -> Self {
        Self {
            ptr: s.as_ptr(),
            len: s.len(),
        }
    }
}

// Immutable byte view used across FFI boundaries. Callers are responsible for lifetime validity.
unsafe impl Send for GxStr {}
unsafe impl Sync for GxStr {}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GxStatus {
    /// 0 = OK, non-zero = error.
    pub code: i32,
}

impl GxStatus {
    pub const fn ok() -> Self {
        Self { code: 0 }
    }

    pub const fn err(code: i32) -> Self {
        Self { code }
    }

    pub const fn is_ok(self) -> bool {
        self.code == 0
    }
}

// Status codes (non-exhaustive). Extensions may use other non-zero codes.
pub const GX_ERR_INVALID_ARG: i32 = 1;
pub const GX_ERR_UNSUPPORTED: i32 = 2;
pub const GX_ERR_INTERNAL: i32 = 3;

/// Host callbacks handed to an extension while it configures a target.
///
/// The table is built by the target for a single `configure` call; extensions
/// must not retain it past the call.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GxHostVTable {
    pub api_version: u32,
    pub user_data: *mut c_void,
    pub log_utf8: Option<extern "C" fn(user_data: *mut c_void, level: GxLogLevel, msg: GxStr)>,
    /// Returns the name of the target being configured as UTF-8 bytes.
    /// The returned bytes are host-owned and read-only.
    pub target_name_utf8: Option<extern "C" fn(user_data: *mut c_void) -> GxStr>,
    /// Register a named task on the target being configured.
    pub register_task_utf8:
        Option<extern "C" fn(user_data: *mut c_void, name: GxStr) -> GxStatus>,
}

// Raw pointers make this not auto-Send/Sync. The vtable is treated as immutable and requires
// `user_data` to be thread-safe when used across threads.
unsafe impl Send for GxHostVTable {}
unsafe impl Sync for GxHostVTable {}

/// A loaded extension's self-description, owned by the artifact that
/// exported it. All strings must outlive the mapping.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GxExtensionDecl {
    pub api_version: u32,
    pub id_utf8: GxStr,
    pub display_name_utf8: GxStr,
    /// Invoked once per application of the extension to a target.
    pub configure: Option<extern "C" fn(host: *const GxHostVTable) -> GxStatus>,
}

unsafe impl Send for GxExtensionDecl {}
unsafe impl Sync for GxExtensionDecl {}

pub type GxExtensionEntry = unsafe extern "C" fn() -> *const GxExtensionDecl;
