use crate::query::normalize;

pub const FALLBACK_LABEL: &str = "Livro";

/// Display label for a category code. Codes are matched after
/// normalization; unknown or blank codes get [`FALLBACK_LABEL`].
pub fn category_label(code: &str) -> &'static str {
    match normalize(code).as_str() {
        "ficcao" => "Ficção",
        "romance" => "Romance",
        "fantasia" => "Fantasia",
        "sci-fi" | "scifi" => "Sci-fi",
        "literatura" => "Literatura",
        "historia" => "História",
        "pop" => "Pop",
        _ => FALLBACK_LABEL,
    }
}
