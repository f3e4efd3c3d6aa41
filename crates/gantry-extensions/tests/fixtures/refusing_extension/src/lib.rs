use gantry_extension_api::{
    GANTRY_EXTENSION_API_VERSION, GX_ERR_UNSUPPORTED, GxExtensionDecl, GxHostVTable, GxStatus,
    GxStr,
};

// Exported under a non-default entry symbol so hosts have to honor the
// resolution's entry point name to find it.
extern "C" fn configure(_host: *const GxHostVTable) -> GxStatus {
    GxStatus::err(GX_ERR_UNSUPPORTED)
}

static DECL: GxExtensionDecl = GxExtensionDecl {
    api_version: GANTRY_EXTENSION_API_VERSION,
    id_utf8: GxStr::from_static("demo.refusing"),
    display_name_utf8: GxStr::from_static("Refusing Fixture"),
    configure: Some(configure),
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn refusing_extension_entry() -> *const GxExtensionDecl {
    &DECL
}
