//! Built-in restricted literal lists. These are configuration data shipped
//! with the crate: the comparator strips them, it does not interpret them.

/// Control, format-string, and invisible-whitespace sequences stripped from
/// a Unicode-normalized subject when common-character review is enabled.
pub const COMMON_DANGEROUS_SEQUENCES: &[&str] = &[
    "\u{0000}", // NUL
    "\r",
    "\n",
    "\t",
    "\u{0008}", // backspace
    "\u{000B}", // vertical tab
    "\u{000C}", // form feed
    "\u{001B}", // escape
    "\u{200B}", // zero-width space
    "\u{200C}",
    "\u{200D}",
    "\u{2060}", // word joiner
    "\u{FEFF}", // BOM
    "\u{202D}", // left-to-right override
    "\u{202E}", // right-to-left override
    "\u{00A0}", // no-break space
    "\u{2028}", // line separator
    "\u{2029}", // paragraph separator
    "%n",       // printf write-back specifier
];

/// Hexadecimal, format-specifier, and escape-sequence tokens prepended to
/// caller-supplied restricted values when hex-escape review is enabled.
/// Stripped from an ASCII-reduced copy of the subject.
pub const HEX_ESCAPE_TOKENS: &[&str] = &[
    "0x", "\\x", "\\u", "&#x", "%00", "%0a", "%0d", "%25", "%2e", "%2f", "%5c", "%n", "%s", "%x",
    "%p",
];

/// Markers that must never appear in a filename. Any removal is a fault even
/// though the cleansed name is still computed.
pub const FILENAME_MALICIOUS_MARKERS: &[&str] = &[
    "\u{0000}", // embedded NUL
    "\u{00A0}", // no-break space
    "\u{202D}", // left-to-right override
    "\u{202E}", // right-to-left override
    "%00",
    "% 00",
];

/// Reserved device stems rejected as filenames regardless of extension.
pub const RESERVED_DEVICE_STEMS: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "CLOCK$", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
    "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters a filename may never contain (path specials and quotes).
pub const FILENAME_FORBIDDEN_CHARS: &[char] =
    &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Full-match grammar for an ASCII-reduced filename: no control characters,
/// no path specials, and the final character may not be a space or a dot.
/// Reserved device stems are checked separately (the regex crate has no
/// lookahead), against [`RESERVED_DEVICE_STEMS`].
pub const FILENAME_PATTERN: &str =
    r#"^[^\x00-\x1f\\/:*?"<>|]*[^\x00-\x1f\\/:*?"<>|. ]$"#;
