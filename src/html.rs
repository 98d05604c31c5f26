pub mod balance;
pub mod link;

pub use balance::{HtmlCorrector, TagBalancer};
pub use link::{HtmlLinkRenderer, LinkRenderer};

/// 转义文本与属性值中的 HTML 特殊字符
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(escape_html("阅读更多"), "阅读更多");
    }
}
