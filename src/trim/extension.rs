use crate::config::TrimConfig;
use crate::content::TargetLink;
use crate::format::summary::BREAK_MARKER;
use crate::html::LinkRenderer;
use regex::Regex;
use std::sync::LazyLock;

/// “阅读更多”链接的 class
pub const MORE_LINK_CLASS: &str = "more-link";

/// 字符串末尾的最后一个闭合标签，允许其后再跟一个换行符；
/// 标签前的单个空白字符不进入正文，拼接时被去掉。
/// 这只是一个窄匹配，不是 HTML 解析；匹配不上时直接追加到末尾。
static TRAILING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*?)\s?(</[^>]+>\n?)\z").unwrap());

/// 生成后缀与更多链接，并插入到末尾闭合标签之前
pub fn append_extension(
    text: &str,
    shortened: bool,
    config: &TrimConfig,
    link: Option<&TargetLink>,
    renderer: &dyn LinkRenderer,
) -> String {
    let trailing = TRAILING_TAG_RE.captures(text);
    let (body, tail) = match &trailing {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (text, ""),
    };

    let mut extension = if shortened {
        config.suffix.clone()
    } else {
        String::new()
    };
    // 正文以句点结尾时不再重复后缀开头的句点
    if body.ends_with('.') && extension.starts_with('.') {
        extension.remove(0);
    }

    if config.more_link
        && let Some(link) = link
        && !text.ends_with(BREAK_MARKER)
    {
        extension.push_str(&renderer.render(&config.more_text, &link.path, MORE_LINK_CLASS));
    }
    // 没有可插入的内容时原样返回，不动标签前的空白
    if extension.is_empty() {
        return text.to_string();
    }

    let spliced = if trailing.is_some() {
        format!("{body}{extension}{tail}")
    } else {
        text.to_string()
    };
    if spliced == text {
        format!("{text}{extension}")
    } else {
        spliced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlLinkRenderer;
    use pretty_assertions::assert_eq;

    fn compose(
        text: &str,
        shortened: bool,
        config: &TrimConfig,
        link: Option<&TargetLink>,
    ) -> String {
        append_extension(text, shortened, config, link, &HtmlLinkRenderer)
    }

    fn with_link() -> TrimConfig {
        TrimConfig {
            more_link: true,
            ..TrimConfig::default()
        }
    }

    #[test]
    fn suffix_only_when_shortened() {
        let config = TrimConfig::default();
        assert_eq!(compose("The quick brown", true, &config, None), "The quick brown...");
        assert_eq!(compose("The quick brown", false, &config, None), "The quick brown");
    }

    #[test]
    fn suffix_goes_inside_trailing_tag() {
        let config = TrimConfig::default();
        assert_eq!(
            compose("<p>One <em>two</em> three</p>", true, &config, None),
            "<p>One <em>two</em> three...</p>"
        );
    }

    #[test]
    fn whitespace_before_trailing_tag_is_dropped() {
        let config = TrimConfig::default();
        assert_eq!(compose("<p>Hello </p>", true, &config, None), "<p>Hello...</p>");
        assert_eq!(compose("<p>Hello\n</p>\n", true, &config, None), "<p>Hello...</p>\n");
        assert_eq!(compose("<p>Hello. </p>", true, &config, None), "<p>Hello...</p>");
    }

    #[test]
    fn whitespace_before_trailing_tag_is_kept_without_extension() {
        let config = TrimConfig::default();
        assert_eq!(compose("<p>Hello </p>", false, &config, None), "<p>Hello </p>");
    }

    #[test]
    fn only_last_tag_is_used_as_splice_point() {
        let config = TrimConfig::default();
        assert_eq!(
            compose("<div><p>Text</p></div>", true, &config, None),
            "<div><p>Text</p>...</div>"
        );
    }

    #[test]
    fn trailing_newline_after_tag_is_kept() {
        let config = TrimConfig::default();
        assert_eq!(compose("<p>Text</p>\n", true, &config, None), "<p>Text...</p>\n");
    }

    #[test]
    fn period_is_not_duplicated() {
        let config = TrimConfig::default();
        assert_eq!(compose("Hello world.", true, &config, None), "Hello world...");
        assert_eq!(compose("<p>Hello world.</p>", true, &config, None), "<p>Hello world...</p>");

        let single = TrimConfig {
            suffix: ".".into(),
            ..TrimConfig::default()
        };
        assert_eq!(compose("Done.", true, &single, None), "Done.");
    }

    #[test]
    fn more_link_is_appended() {
        let link = TargetLink::new("/node/5");
        assert_eq!(
            compose("<p>Short</p>", false, &with_link(), Some(&link)),
            "<p>Short<a href=\"/node/5\" class=\"more-link\">Read more</a></p>"
        );
        assert_eq!(
            compose("Cut", true, &with_link(), Some(&link)),
            "Cut...<a href=\"/node/5\" class=\"more-link\">Read more</a>"
        );
    }

    #[test]
    fn more_link_needs_target() {
        assert_eq!(compose("Cut", true, &with_link(), None), "Cut...");
    }

    #[test]
    fn break_marker_suppresses_more_link() {
        let link = TargetLink::new("/node/5");
        assert_eq!(
            compose("<p>Intro</p><!--break-->", false, &with_link(), Some(&link)),
            "<p>Intro</p><!--break-->"
        );
    }

    #[test]
    fn unmatched_structure_appends() {
        let config = TrimConfig::default();
        assert_eq!(compose("<p>Open paragraph", true, &config, None), "<p>Open paragraph...");
        assert_eq!(compose("", false, &config, None), "");
    }
}
