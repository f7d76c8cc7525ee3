use std::path::Path;

/// A document submitted for comparison.
///
/// Immutable once constructed; identity is `id`. The engine never generates
/// ids itself — the caller injects them and is responsible for keeping them
/// unique for the duration of one analysis run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    /// Content-type label ("Python", "Text", ...) selecting the tokenization
    /// and weighting policy. Unrecognized extensions map to "Unknown".
    pub kind: String,
    pub size: u64,
    pub content: String,
}

impl FileRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            size: content.len() as u64,
            content,
        }
    }
}

/// Extension (without the leading dot) -> human-readable content-type label.
const EXTENSION_LABELS: &[(&str, &str)] = &[
    ("txt", "Text"),
    ("doc", "Word"),
    ("docx", "Word"),
    ("pdf", "PDF"),
    ("rtf", "Rich Text"),
    ("md", "Markdown"),
    ("py", "Python"),
    ("rb", "Ruby"),
    ("r", "R"),
    ("jl", "Julia"),
    ("pl", "Perl"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("tsx", "React"),
    ("jsx", "React"),
    ("java", "Java"),
    ("c", "C"),
    ("h", "C"),
    ("cpp", "C++"),
    ("cc", "C++"),
    ("cs", "C#"),
    ("go", "Go"),
    ("swift", "Swift"),
    ("kt", "Kotlin"),
    ("php", "PHP"),
    ("rs", "Rust"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("xml", "XML"),
    ("svg", "SVG"),
    ("sql", "SQL"),
    ("json", "JSON"),
    ("csv", "CSV"),
];

/// Classify a file name into a content-type label by its extension.
/// Unrecognized or missing extensions yield "Unknown".
#[must_use]
pub fn content_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    for &(ext, label) in EXTENSION_LABELS {
        if ext == extension {
            return label;
        }
    }
    "Unknown"
}

/// Human-readable file size for reports.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_extensions() {
        assert_eq!(content_type_for("main.py"), "Python");
        assert_eq!(content_type_for("app.js"), "JavaScript");
        assert_eq!(content_type_for("notes.txt"), "Text");
        assert_eq!(content_type_for("lib.rs"), "Rust");
        assert_eq!(content_type_for("index.html"), "HTML");
        assert_eq!(content_type_for("schema.sql"), "SQL");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(content_type_for("README.MD"), "Markdown");
        assert_eq!(content_type_for("Main.JAVA"), "Java");
    }

    #[test]
    fn unrecognized_extension_is_unknown() {
        assert_eq!(content_type_for("data.xyz"), "Unknown");
        assert_eq!(content_type_for("Makefile"), "Unknown");
    }

    #[test]
    fn record_size_tracks_content_length() {
        let record = FileRecord::new("f1", "a.txt", "Text", "hello");
        assert_eq!(record.size, 5);
    }

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }
}
