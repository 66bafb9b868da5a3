//! Files embedded by folder2rs for package `embedded`.
//!
//! Generated with template v1. Do not edit by hand, re-run folder2rs instead.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Name of the package these files were embedded for.
pub const PACKAGE: &str = "embedded";

static ENTRIES: &[(&str, &[u8])] = &[
    (
        "empty.txt",
        &[
        ],
    ),
    (
        "hello.txt",
        &[
            0x68, 0x69, 
        ],
    ),
    (
        "nested/data.bin",
        &[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10, 0x11, 0x12, 0x13, 
            0x14, 0x15, 0x16, 0x17, 0x18, 
        ],
    ),
];

/// File contents keyed by path relative to the embedded directory.
pub static DATA: LazyLock<HashMap<&'static str, &'static [u8]>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Serves [`DATA`] entries by request path.
///
/// The leading `/` of the path is dropped before the lookup. Unknown paths
/// get an empty `404 Not Found` response.
pub fn handler<B>(request: &http::Request<B>) -> http::Response<&'static [u8]> {
    let path = request.uri().path();
    let key = path.strip_prefix('/').unwrap_or(path);
    match DATA.get(key) {
        Some(body) => http::Response::new(*body),
        None => {
            let mut response = http::Response::new(<&[u8]>::default());
            *response.status_mut() = http::StatusCode::NOT_FOUND;
            response
        },
    }
}
