//! Verbatim file embedding for `@style` and `@script`.

use super::DirectiveKind;

/// Tag pair used to embed a file's raw contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Embed {
    /// `<style>` ... `</style>`
    Style,
    /// `<script>` ... `</script>`
    Script,
}

impl Embed {
    /// Directive that produces this embedding.
    #[must_use]
    pub fn directive(self) -> DirectiveKind {
        match self {
            Self::Style => DirectiveKind::Style,
            Self::Script => DirectiveKind::Script,
        }
    }

    /// Opening tag.
    #[must_use]
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Style => "<style>",
            Self::Script => "<script>",
        }
    }

    /// Closing tag.
    #[must_use]
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Style => "</style>",
            Self::Script => "</script>",
        }
    }

    /// Wrap raw file contents in the tag pair, each tag on its own line.
    ///
    /// # Example
    ///
    /// ```
    /// use shpp_compiler::directive::Embed;
    ///
    /// let wrapped = Embed::Style.wrap(b"body{}\n");
    /// assert_eq!(wrapped, b"<style>\nbody{}\n</style>\n");
    /// ```
    #[must_use]
    pub fn wrap(self, contents: &[u8]) -> Vec<u8> {
        let open = self.open_tag().as_bytes();
        let close = self.close_tag().as_bytes();

        let mut out = Vec::with_capacity(open.len() + contents.len() + close.len() + 3);
        out.extend_from_slice(open);
        out.push(b'\n');
        out.extend_from_slice(contents);
        if !contents.is_empty() && !contents.ends_with(b"\n") {
            out.push(b'\n');
        }
        out.extend_from_slice(close);
        out.push(b'\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_style_wrap() {
        assert_eq!(
            String::from_utf8(Embed::Style.wrap(b"body{}\n")).unwrap(),
            "<style>\nbody{}\n</style>\n"
        );
    }

    #[test]
    fn test_script_wrap() {
        assert_eq!(
            String::from_utf8(Embed::Script.wrap(b"let x = 1;\n")).unwrap(),
            "<script>\nlet x = 1;\n</script>\n"
        );
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(
            String::from_utf8(Embed::Style.wrap(b"body{}")).unwrap(),
            "<style>\nbody{}\n</style>\n"
        );
    }

    #[test]
    fn test_empty_contents() {
        assert_eq!(
            String::from_utf8(Embed::Script.wrap(b"")).unwrap(),
            "<script>\n</script>\n"
        );
    }

    #[test]
    fn test_contents_are_not_trimmed() {
        let css = b"  a { color: red; }\n\n\n  b {}\n";
        let wrapped = Embed::Style.wrap(css);
        assert_eq!(&wrapped[8..8 + css.len()], css);
    }

    #[test]
    fn test_directive() {
        assert_eq!(Embed::Style.directive(), DirectiveKind::Style);
        assert_eq!(Embed::Script.directive(), DirectiveKind::Script);
    }
}
