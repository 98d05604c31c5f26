use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r\t]").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\s+").unwrap());

/// 将 HTML 转为单行纯文本
pub fn sanitize(html: &str) -> String {
    // 先在每个 '<' 前补空格，避免相邻标签删除后单词粘连
    let spaced = html.replace('<', " <");
    let mut text = TAG_RE.replace_all(&spaced, "").into_owned();
    // 没有闭合的 '<' 之后全部视为残缺标签
    if let Some(pos) = text.find('<') {
        text.truncate(pos);
    }

    let text = LINE_BREAK_RE.replace_all(&text, " ");
    let text = text.replace("&nbsp;", " ").replace('\u{a0}', " ");
    SPACES_RE.replace_all(&text, " ").trim().to_string()
}
