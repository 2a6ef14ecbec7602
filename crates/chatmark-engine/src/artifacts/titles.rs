/// Display names for fenced-code language tags, keyed by lowercase tag.
const TITLES: &[(&str, &str)] = &[
    ("javascript", "JavaScript Code"),
    ("js", "JavaScript Code"),
    ("typescript", "TypeScript Code"),
    ("ts", "TypeScript Code"),
    ("python", "Python Code"),
    ("py", "Python Code"),
    ("java", "Java Code"),
    ("cpp", "C++ Code"),
    ("c", "C Code"),
    ("go", "Go Code"),
    ("rust", "Rust Code"),
    ("html", "HTML Document"),
    ("css", "CSS Styles"),
    ("jsx", "React Component"),
    ("tsx", "React TypeScript Component"),
    ("json", "JSON Data"),
    ("sql", "SQL Query"),
    ("bash", "Bash Script"),
    ("sh", "Shell Script"),
    ("xml", "XML Document"),
    ("yaml", "YAML Config"),
    ("yml", "YAML Config"),
    ("markdown", "Markdown"),
    ("md", "Markdown"),
];

/// File extensions for downloads. Anything else saves as `.txt`.
const EXTENSIONS: &[(&str, &str)] = &[
    ("javascript", "js"),
    ("js", "js"),
    ("typescript", "ts"),
    ("ts", "ts"),
    ("python", "py"),
    ("py", "py"),
    ("html", "html"),
    ("css", "css"),
    ("json", "json"),
    ("jsx", "jsx"),
    ("tsx", "tsx"),
];

/// Languages the side panel can render live.
const PREVIEWABLE: &[&str] = &["html", "xml", "svg", "javascript", "js", "jsx", "css"];

fn lookup(table: &[(&str, &'static str)], language: &str) -> Option<&'static str> {
    let key = language.to_ascii_lowercase();
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Title for a code artifact: the known display name, else
/// `"<language> Code"` with the tag as written.
pub fn title_for(language: &str) -> String {
    lookup(TITLES, language)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{language} Code"))
}

pub fn extension_for(language: &str) -> &'static str {
    lookup(EXTENSIONS, language).unwrap_or("txt")
}

pub fn is_previewable(language: &str) -> bool {
    PREVIEWABLE.contains(&language.to_ascii_lowercase().as_str())
}
