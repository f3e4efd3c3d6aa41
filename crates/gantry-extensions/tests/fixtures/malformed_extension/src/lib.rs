use gantry_extension_api::{GANTRY_EXTENSION_API_VERSION, GxExtensionDecl, GxStr};

// One artifact, several broken declarations. Each entry point below returns a
// declaration a host must refuse for a different reason.

#[unsafe(no_mangle)]
pub unsafe extern "C" fn null_decl_entry() -> *const GxExtensionDecl {
    core::ptr::null()
}

static STALE_API_DECL: GxExtensionDecl = GxExtensionDecl {
    api_version: GANTRY_EXTENSION_API_VERSION + 1,
    id_utf8: GxStr::from_static("demo.stale-api"),
    display_name_utf8: GxStr::from_static("Stale Api Fixture"),
    configure: None,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn stale_api_entry() -> *const GxExtensionDecl {
    &STALE_API_DECL
}

static BLANK_ID_DECL: GxExtensionDecl = GxExtensionDecl {
    api_version: GANTRY_EXTENSION_API_VERSION,
    id_utf8: GxStr::empty(),
    display_name_utf8: GxStr::from_static("Blank Id Fixture"),
    configure: None,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn blank_id_entry() -> *const GxExtensionDecl {
    &BLANK_ID_DECL
}

// Well-formed apart from the missing configure hook: it loads, but there is
// nothing for a host to run against a target.
static HOOKLESS_DECL: GxExtensionDecl = GxExtensionDecl {
    api_version: GANTRY_EXTENSION_API_VERSION,
    id_utf8: GxStr::from_static("demo.hookless"),
    display_name_utf8: GxStr::from_static("Hookless Fixture"),
    configure: None,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn hookless_entry() -> *const GxExtensionDecl {
    &HOOKLESS_DECL
}
