//! Rendering of a [VersionDescriptor] into consumer formats
//!
//! Pure formatting with no fallible paths: a valid descriptor always
//! renders. Three styles are supported, matching what a firmware build
//! consumes: a compact display string, build-time defines, and a
//! guard-wrapped C header.

use crate::domain::VersionDescriptor;

/// Include guard used by the generated header
pub const INCLUDE_GUARD: &str = "__version_h";

/// Output style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// `v<major>.<minor>.<patch>-<hash><marker>`
    Compact,
    /// `NAME=VALUE` lines for build-system capture
    Defines,
    /// Guard-wrapped header file contents
    Header,
}

/// Render a descriptor in the requested style
pub fn render(descriptor: &VersionDescriptor, style: RenderStyle) -> String {
    match style {
        RenderStyle::Compact => compact(descriptor),
        RenderStyle::Defines => {
            let mut out = String::new();
            for (name, value) in defines(descriptor) {
                out.push_str(&format!("{}={}\n", name, value));
            }
            out
        }
        RenderStyle::Header => header(descriptor),
    }
}

/// Canonical display/log format
pub fn compact(descriptor: &VersionDescriptor) -> String {
    descriptor.to_string()
}

/// Symbolic name/value pairs for injection as build-time constants
///
/// `FW_VERSION_DIRTY_INDEX` carries the dirty marker alone, not the full
/// string, so consumers can append it themselves.
pub fn defines(descriptor: &VersionDescriptor) -> Vec<(&'static str, String)> {
    vec![
        ("FW_VERSION_MAJOR", descriptor.version.major.to_string()),
        ("FW_VERSION_MINOR", descriptor.version.minor.to_string()),
        ("FW_VERSION_PATCH", descriptor.version.patch.to_string()),
        ("FW_VERSION_HASH", descriptor.commit_hash.clone()),
        ("FW_VERSION_DIRTY_INDEX", descriptor.dirty_marker().to_string()),
    ]
}

/// Contents of the generated version header
///
/// Regenerated before every compilation; never hand-edited. The numeric
/// components are unquoted integer literals so the firmware can consume
/// them without parsing.
pub fn header(descriptor: &VersionDescriptor) -> String {
    format!(
        r#"#ifndef {guard}
#define {guard}

#define FW_VERSION_FULL "{full}"
#define FW_VERSION_MAJOR {major}
#define FW_VERSION_MINOR {minor}
#define FW_VERSION_PATCH {patch}
#define FW_VERSION_HASH "{hash}"
#define FW_VERSION_DIRTY_INDEX "{dirty}"

#endif // {guard}
"#,
        guard = INCLUDE_GUARD,
        full = compact(descriptor),
        major = descriptor.version.major,
        minor = descriptor.version.minor,
        patch = descriptor.version.patch,
        hash = descriptor.commit_hash,
        dirty = descriptor.dirty_marker(),
    )
}
