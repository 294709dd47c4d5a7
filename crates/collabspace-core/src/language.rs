use std::path::Path;

/// Language ids the completion service understands.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "rust",
    "go",
    "c",
    "cpp",
    "java",
    "ruby",
    "html",
    "css",
    "json",
    "yaml",
    "markdown",
    "shellscript",
    "plaintext",
];

pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Normalize loose aliases ("js", "py", "golang") to canonical editor ids.
/// Unknown values pass through unchanged so new server-side languages keep
/// working without a client update.
pub fn normalize(language: &str) -> String {
    match language.to_lowercase().as_str() {
        "js" | "node" => "javascript".into(),
        "ts" => "typescript".into(),
        "py" => "python".into(),
        "rs" => "rust".into(),
        "golang" => "go".into(),
        "c++" => "cpp".into(),
        "rb" => "ruby".into(),
        "md" => "markdown".into(),
        "sh" | "bash" => "shellscript".into(),
        "text" | "txt" => "plaintext".into(),
        other => other.into(),
    }
}

/// Map file extension → editor language ID.
pub fn language_id_from_path(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("rs") => "rust".into(),
        Some("py") | Some("pyw") => "python".into(),
        Some("js") | Some("mjs") | Some("cjs") | Some("jsx") => "javascript".into(),
        Some("ts") | Some("mts") | Some("tsx") => "typescript".into(),
        Some("go") => "go".into(),
        Some("c") | Some("h") => "c".into(),
        Some("cpp") | Some("cc") | Some("cxx") | Some("hpp") => "cpp".into(),
        Some("java") => "java".into(),
        Some("rb") => "ruby".into(),
        Some("sh") | Some("bash") => "shellscript".into(),
        Some("json") => "json".into(),
        Some("yaml") | Some("yml") => "yaml".into(),
        Some("md") => "markdown".into(),
        Some("html") | Some("htm") => "html".into(),
        Some("css") => "css".into(),
        _ => "plaintext".into(),
    }
}
