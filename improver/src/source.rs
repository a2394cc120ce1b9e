//! The program's own source text, embedded at compile time.
//!
//! Both prompts operate on the text of the program itself. A compiled binary
//! cannot read its source from disk the way a script can, so every source
//! file and prompt template is embedded with `include_str!` and stitched back
//! together with per-file headers.

/// Every file that makes up this program, in stable order.
///
/// Test-only modules and integration tests are excluded: they are not part
/// of the program the rewrite replaces.
const FILES: &[(&str, &str)] = &[
    ("improver/Cargo.toml", include_str!("../Cargo.toml")),
    ("improver/src/main.rs", include_str!("main.rs")),
    ("improver/src/lib.rs", include_str!("lib.rs")),
    ("improver/src/logging.rs", include_str!("logging.rs")),
    ("improver/src/config.rs", include_str!("config.rs")),
    ("improver/src/api.rs", include_str!("api.rs")),
    ("improver/src/source.rs", include_str!("source.rs")),
    ("improver/src/prompts.rs", include_str!("prompts.rs")),
    ("improver/src/prompts/suggest.md", include_str!("prompts/suggest.md")),
    ("improver/src/prompts/rewrite.md", include_str!("prompts/rewrite.md")),
    ("improver/src/journal.rs", include_str!("journal.rs")),
    ("improver/src/improve.rs", include_str!("improve.rs")),
    ("improver/src/probe.rs", include_str!("probe.rs")),
];

/// Render the full source pack as one text blob.
pub fn own_source() -> String {
    let mut buf = String::new();
    for (path, contents) in FILES {
        buf.push_str("==== ");
        buf.push_str(path);
        buf.push_str(" ====\n");
        buf.push_str(contents);
        if !contents.ends_with('\n') {
            buf.push('\n');
        }
        buf.push('\n');
    }
    buf
}
