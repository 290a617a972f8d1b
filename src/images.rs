//! Image path resolution against the article's base URL.

use url::Url;

use crate::dom::{self, NodeRef};
use crate::fragment::ContentFragment;

/// Rewrites every `img` src in the fragment to an absolute URL.
///
/// Without a base URL only already-absolute images survive. Images with a
/// missing or empty src, or a src that cannot be resolved, are removed.
/// Running the pass twice is a no-op: absolute sources pass through
/// untouched.
pub fn resolve_image_paths(fragment: &mut ContentFragment<'_>, base_url: Option<&Url>) {
    for image in fragment.elements_by_tag("img") {
        match resolved_src(&image, base_url) {
            Resolved::Keep => {}
            Resolved::Rewrite(url) => dom::set_attr(&image, "src", url.as_str()),
            Resolved::Drop => fragment.remove_node(&image),
        }
    }
}

enum Resolved {
    Keep,
    Rewrite(Url),
    Drop,
}

fn resolved_src(image: &NodeRef, base_url: Option<&Url>) -> Resolved {
    let Some(src) = dom::attr(image, "src") else {
        return Resolved::Drop;
    };
    let src = src.trim().to_string();
    if src.is_empty() {
        return Resolved::Drop;
    }
    if src.starts_with("http://") || src.starts_with("https://") {
        return Resolved::Keep;
    }
    // protocol-relative: adopt a scheme rather than joining as a path
    if let Some(rest) = src.strip_prefix("//") {
        return match Url::parse(&format!("http://{rest}")) {
            Ok(url) => Resolved::Rewrite(url),
            Err(_) => Resolved::Drop,
        };
    }
    let Some(base) = base_url else {
        return Resolved::Drop;
    };
    match base.join(&src) {
        Ok(url) => Resolved::Rewrite(url),
        Err(_) => Resolved::Drop,
    }
}
