//! Markup minification
//!
//! A pure text transform over the source document, backed by the
//! `minify-html` engine. Whitespace collapse and redundant/default
//! attribute removal are unconditional engine behaviors; everything the
//! engine exposes a switch for is surfaced in [`MinifyOptions`].

use minify_html::{minify, Cfg};

/// Recognized minification options.
///
/// `Default` is the production profile: strip everything the engine can
/// legally strip.
#[derive(Debug, Clone)]
pub struct MinifyOptions {
    /// Strip HTML comments.
    pub remove_comments: bool,
    /// Normalize the doctype to its shortest form.
    pub use_short_doctype: bool,
    /// Minify embedded CSS in `<style>` blocks and `style` attributes.
    pub minify_css: bool,
    /// Minify embedded JS in `<script>` blocks.
    pub minify_js: bool,
    /// Drop quotes around attribute values where legal.
    pub remove_attribute_quotes: bool,
    /// Keep optional closing tags instead of omitting them.
    pub keep_closing_tags: bool,
    /// Strip `<!…>` bang directives other than the doctype.
    pub remove_bangs: bool,
    /// Strip `<?…?>` processing instructions.
    pub remove_processing_instructions: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            use_short_doctype: true,
            minify_css: true,
            minify_js: true,
            remove_attribute_quotes: true,
            keep_closing_tags: false,
            remove_bangs: true,
            remove_processing_instructions: true,
        }
    }
}

impl MinifyOptions {
    fn to_cfg(&self) -> Cfg {
        let mut cfg = Cfg::new();
        cfg.keep_comments = !self.remove_comments;
        cfg.do_not_minify_doctype = !self.use_short_doctype;
        cfg.minify_css = self.minify_css;
        cfg.minify_js = self.minify_js;
        cfg.ensure_spec_compliant_unquoted_attribute_values = !self.remove_attribute_quotes;
        cfg.keep_closing_tags = self.keep_closing_tags;
        cfg.remove_bangs = self.remove_bangs;
        cfg.remove_processing_instructions = self.remove_processing_instructions;
        cfg
    }
}

/// Minify an HTML document.
///
/// Pure function from input text to output text; the engine is lenient,
/// so malformed markup is minified best-effort rather than rejected.
pub fn minify_markup(input: &str, options: &MinifyOptions) -> String {
    let out = minify(input.as_bytes(), &options.to_cfg());
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minify_collapses_whitespace() {
        let input = "<!DOCTYPE html><html><body>   <p>Hi</p>   </body></html>";
        let out = minify_markup(input, &MinifyOptions::default());
        assert!(out.contains("Hi"));
        assert!(!out.contains("   "));
        assert!(out.len() <= input.len());
    }

    #[test]
    fn minify_strips_comments_by_default() {
        let input = "<p>keep</p><!-- drop me -->";
        let out = minify_markup(input, &MinifyOptions::default());
        assert!(out.contains("keep"));
        assert!(!out.contains("drop me"));
    }

    #[test]
    fn minify_keeps_comments_when_asked() {
        let options = MinifyOptions {
            remove_comments: false,
            ..MinifyOptions::default()
        };
        let out = minify_markup("<p>keep</p><!-- stay -->", &options);
        assert!(out.contains("stay"));
    }

    #[test]
    fn minify_is_idempotent() {
        let input = "<!DOCTYPE html>\n<html>\n  <body>\n    <p class=\"a b\">  Hello   world  </p>\n  </body>\n</html>\n";
        let options = MinifyOptions::default();
        let once = minify_markup(input, &options);
        let twice = minify_markup(&once, &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn minify_never_grows_typical_documents() {
        let input = "<!DOCTYPE html><html><head><title>t</title></head><body>\n\n  <div id=\"x\">   text   </div>\n</body></html>";
        let out = minify_markup(input, &MinifyOptions::default());
        assert!(out.len() <= input.len());
    }
}
