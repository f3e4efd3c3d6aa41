use gantry_extension_api::{
    GANTRY_EXTENSION_API_VERSION, GX_ERR_INVALID_ARG, GX_ERR_UNSUPPORTED, GxExtensionDecl,
    GxHostVTable, GxLogLevel, GxStatus, GxStr,
};

extern "C" fn configure(host: *const GxHostVTable) -> GxStatus {
    if host.is_null() {
        return GxStatus::err(GX_ERR_INVALID_ARG);
    }
    // SAFETY: the host guarantees the vtable outlives this call.
    let host = unsafe { &*host };

    if let Some(log) = host.log_utf8 {
        log(
            host.user_data,
            GxLogLevel::Info,
            GxStr::from_static("hello extension configuring"),
        );
    }

    let Some(register_task) = host.register_task_utf8 else {
        return GxStatus::err(GX_ERR_UNSUPPORTED);
    };
    register_task(host.user_data, GxStr::from_static("hello-fixture"))
}

static DECL: GxExtensionDecl = GxExtensionDecl {
    api_version: GANTRY_EXTENSION_API_VERSION,
    id_utf8: GxStr::from_static("demo.hello"),
    display_name_utf8: GxStr::from_static("Hello Fixture"),
    configure: Some(configure),
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn gantry_extension_entry() -> *const GxExtensionDecl {
    &DECL
}
