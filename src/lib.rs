use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::time::Duration;

use serde::Serialize;

// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod runtime;
pub mod shell;
pub mod types;

// Re-exports for convenience
pub use api::{EmojiHubClient, HttpTransport, RawResponse, Transport};
pub use config::ClientConfig;
pub use error::{Error, ErrorCode, Result};
pub use presentation::{render_card, RenderDescriptor, SearchResults};
pub use shell::{Session, View};
pub use types::{EmojiRecord, Mode};

// Library version information
pub const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), " (libemojihub)");

/// FFI function: Free a string allocated by this library
#[no_mangle]
pub extern "C" fn emojihub_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

// ============================================================================
// Library Initialization
// ============================================================================

/// FFI function: Initialize the library
/// Installs logging and starts the runtime. Call once before any other function.
#[no_mangle]
pub extern "C" fn emojihub_init() -> ErrorCode {
    error::clear_last_error();
    logging::init_logging();

    match runtime::init_runtime() {
        Ok(()) => ErrorCode::Success,
        Err(e) => fail(e, |code| code),
    }
}

/// FFI function: Cleanup the library
/// Clients created earlier must not be used for requests afterwards.
#[no_mangle]
pub extern "C" fn emojihub_cleanup() {
    error::clear_last_error();
    runtime::shutdown_runtime();
}

/// FFI function: Get the library version string
/// Returns a static string, do NOT free this pointer
#[no_mangle]
pub extern "C" fn emojihub_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), " (libemojihub)\0").as_ptr() as *const c_char
}

// ============================================================================
// Error Handling FFI
// ============================================================================

/// FFI function: Get the error code of the last error on this thread
/// Returns ErrorCode::Success (0) if no error has occurred
#[no_mangle]
pub extern "C" fn emojihub_last_error_code() -> ErrorCode {
    error::get_last_error()
        .map(|e| e.code)
        .unwrap_or(ErrorCode::Success)
}

/// FFI function: Get the message of the last error
/// Must be freed with emojihub_free_string(). NULL if no error has occurred.
#[no_mangle]
pub extern "C" fn emojihub_last_error_message() -> *mut c_char {
    match error::get_last_error() {
        Some(e) => CString::new(e.to_string())
            .map(CString::into_raw)
            .unwrap_or(std::ptr::null_mut()),
        None => std::ptr::null_mut(),
    }
}

/// FFI function: Get the HTTP status of the last error
/// Returns 0 unless the last error was ErrorCode::Http
#[no_mangle]
pub extern "C" fn emojihub_last_error_http_status() -> u16 {
    error::get_last_error()
        .and_then(|e| e.http_status())
        .unwrap_or(0)
}

/// FFI function: Get a human-readable description of an error code
/// Returns a static string, do NOT free this pointer
#[no_mangle]
pub extern "C" fn emojihub_error_code_string(code: ErrorCode) -> *const c_char {
    let s = match code {
        ErrorCode::Success => "Success\0",
        ErrorCode::Unknown => "Unknown error\0",
        ErrorCode::InvalidArgument => "Invalid argument\0",
        ErrorCode::NullPointer => "Null pointer\0",
        ErrorCode::InvalidUtf8 => "Invalid UTF-8 string\0",
        ErrorCode::Transport => "Transport error\0",
        ErrorCode::Http => "HTTP error\0",
        ErrorCode::Decode => "Decode error\0",
        ErrorCode::InvalidState => "Invalid state\0",
    };
    s.as_ptr() as *const c_char
}

/// FFI function: Clear the last error
#[no_mangle]
pub extern "C" fn emojihub_clear_error() {
    error::clear_last_error();
}

// ============================================================================
// Client FFI - Opaque Handle Pattern
// ============================================================================

/// Opaque handle to an EmojiHubClient
pub type ClientHandle = *mut EmojiHubClient;

/// FFI function: Create a client
/// config_json: NULL for defaults, or a JSON object:
/// {
///   "base_url": "https://emojihub.yurace.pro/api",
///   "timeout_secs": 10
/// }
/// Omitted keys fall back to defaults (EMOJIHUB_BASE_URL is honoured).
/// The handle must be freed with emojihub_client_destroy(). Returns NULL on error.
#[no_mangle]
pub extern "C" fn emojihub_client_create(config_json: *const c_char) -> ClientHandle {
    error::clear_last_error();

    let config = if config_json.is_null() {
        ClientConfig::from_env()
    } else {
        unsafe { c_str_arg(config_json) }.and_then(parse_config)
    };

    let client = config.and_then(|config| {
        // reqwest wants a runtime context while building its connector
        runtime::block_on(async { EmojiHubClient::new(config) })?
    });

    match client {
        Ok(client) => Box::into_raw(Box::new(client)),
        Err(e) => fail(e, |_| std::ptr::null_mut()),
    }
}

/// FFI function: Destroy a client and free its memory
#[no_mangle]
pub extern "C" fn emojihub_client_destroy(handle: ClientHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// FFI function: Get a random emoji
/// Returns a render descriptor as JSON, or NULL on error
#[no_mangle]
pub extern "C" fn emojihub_fetch_random(handle: ClientHandle) -> *mut c_char {
    json_call(handle, |client| {
        let record = runtime::block_on(client.fetch_random())??;
        Ok(render_card(&record))
    })
}

/// FFI function: Get all category names
/// Returns a JSON array of strings, or NULL on error
#[no_mangle]
pub extern "C" fn emojihub_fetch_categories(handle: ClientHandle) -> *mut c_char {
    json_call(handle, |client| runtime::block_on(client.fetch_categories())?)
}

/// FFI function: Get all group names
/// Returns a JSON array of strings, or NULL on error
#[no_mangle]
pub extern "C" fn emojihub_fetch_groups(handle: ClientHandle) -> *mut c_char {
    json_call(handle, |client| runtime::block_on(client.fetch_groups())?)
}

/// FFI function: Get a random emoji from a category
/// Returns a render descriptor as JSON, or NULL on error
#[no_mangle]
pub extern "C" fn emojihub_fetch_random_by_category(
    handle: ClientHandle,
    category: *const c_char,
) -> *mut c_char {
    json_call(handle, |client| {
        let category = unsafe { c_str_arg(category) }?;
        let record = runtime::block_on(client.fetch_random_by_category(category))??;
        Ok(render_card(&record))
    })
}

/// FFI function: Get a random emoji from a group
/// Returns a render descriptor as JSON, or NULL on error
#[no_mangle]
pub extern "C" fn emojihub_fetch_random_by_group(
    handle: ClientHandle,
    group: *const c_char,
) -> *mut c_char {
    json_call(handle, |client| {
        let group = unsafe { c_str_arg(group) }?;
        let record = runtime::block_on(client.fetch_random_by_group(group))??;
        Ok(render_card(&record))
    })
}

/// FFI function: Search emojis by name
/// The query is trimmed; a blank query fails with InvalidArgument and sends nothing.
/// Returns search results as JSON ({"cards": [...], "count": n, "isEmpty": bool}),
/// or NULL on error
#[no_mangle]
pub extern "C" fn emojihub_search_by_name(
    handle: ClientHandle,
    query: *const c_char,
) -> *mut c_char {
    json_call(handle, |client| {
        let query = unsafe { c_str_arg(query) }?.trim();
        if query.is_empty() {
            return Err(Error::invalid_argument("Search query is empty"));
        }
        let records = runtime::block_on(client.search_by_name(query))??;
        Ok(SearchResults::from_records(&records))
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Record `e` as the last error and produce the function's failure value
fn fail<T>(e: Error, on_error: impl FnOnce(ErrorCode) -> T) -> T {
    let code = e.code;
    error::set_last_error(e);
    on_error(code)
}

/// Borrow a C string argument as UTF-8
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated string that outlives the call.
unsafe fn c_str_arg<'a>(ptr: *const c_char) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(Error::null_pointer());
    }
    CStr::from_ptr(ptr).to_str().map_err(|_| Error::invalid_utf8())
}

/// Run `op` against the client behind `handle` and hand its result to C as JSON
fn json_call<T, F>(handle: ClientHandle, op: F) -> *mut c_char
where
    T: Serialize,
    F: FnOnce(&EmojiHubClient) -> Result<T>,
{
    error::clear_last_error();

    if handle.is_null() {
        return fail(Error::null_pointer(), |_| std::ptr::null_mut());
    }
    let client = unsafe { &*handle };

    match op(client).and_then(|value| to_c_json(&value)) {
        Ok(ptr) => ptr,
        Err(e) => fail(e, |_| std::ptr::null_mut()),
    }
}

fn to_c_json<T: Serialize>(value: &T) -> Result<*mut c_char> {
    let json = serde_json::to_string(value)
        .map_err(|e| Error::new(ErrorCode::Unknown, format!("Failed to serialize result: {e}")))?;
    CString::new(json)
        .map(CString::into_raw)
        .map_err(|_| Error::new(ErrorCode::Unknown, "Result contains a NUL byte"))
}

fn parse_config(json: &str) -> Result<ClientConfig> {
    #[derive(serde::Deserialize)]
    struct ConfigJson {
        base_url: Option<String>,
        timeout_secs: Option<f64>,
    }

    let data: ConfigJson = serde_json::from_str(json)
        .map_err(|e| Error::invalid_argument(format!("Invalid config JSON: {e}")))?;

    let config = match data.base_url {
        Some(url) => ClientConfig::new(&url)?,
        None => ClientConfig::from_env()?,
    };

    match data.timeout_secs {
        Some(secs) => {
            let timeout = Duration::try_from_secs_f64(secs)
                .map_err(|e| Error::invalid_argument(format!("Invalid timeout: {e}")))?;
            config.with_timeout(timeout)
        }
        None => Ok(config),
    }
}
