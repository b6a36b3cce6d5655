use crate::document::HtmlDocument;
use crate::seo::types::{ImageDetail, Images, MISSING_ALT, NO_SRC};

/// Checks every `<img>` for a `src` and an `alt` attribute
///
/// An absent `alt` counts as missing. `alt=""` marks a decorative image
/// and is reported as-is. An `alt` that literally reads `[Missing alt]` is
/// indistinguishable from the placeholder and is flagged too.
pub fn check_images(doc: &dyn HtmlDocument) -> Images {
    let details: Vec<ImageDetail> = doc
        .select("img")
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let src = element.attr("src").unwrap_or(NO_SRC).to_string();
            let (alt, missing) = match element.attr("alt") {
                Some(alt) => (alt.to_string(), alt == MISSING_ALT),
                None => (MISSING_ALT.to_string(), true),
            };

            ImageDetail {
                index: i + 1,
                src,
                alt,
                missing,
            }
        })
        .collect();

    Images {
        total: details.len(),
        missing_alt: details.iter().filter(|image| image.missing).count(),
        details,
    }
}
