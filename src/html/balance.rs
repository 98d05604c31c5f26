use regex::Regex;
use std::sync::LazyLock;

/// 注释或开/闭标签；第 1 组为闭合斜杠，第 2 组为标签名，第 3 组为自闭合斜杠
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9-]*)\b[^>]*?(/?)>").unwrap()
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// 修正被截断切开的 HTML：补全未闭合的标签
pub trait HtmlCorrector: Send + Sync {
    fn correct(&self, html: &str) -> String;
}

/// 基于标签栈的最小实现，不做完整的 HTML 解析。
///
/// - 丢弃末尾未写完的标签片段（如 `<a href="/x`）
/// - 丢弃找不到对应开标签的闭标签
/// - 按逆序补全仍未闭合的非空元素
#[derive(Debug, Clone, Copy, Default)]
pub struct TagBalancer;

impl HtmlCorrector for TagBalancer {
    fn correct(&self, html: &str) -> String {
        let html = strip_dangling_tag(html);
        let mut out = String::with_capacity(html.len() + 16);
        let mut open: Vec<String> = Vec::new();
        let mut last = 0;

        for caps in TOKEN_RE.captures_iter(html) {
            let Some(token) = caps.get(0) else { continue };
            out.push_str(&html[last..token.start()]);
            last = token.end();

            // 注释原样保留
            let Some(name) = caps.get(2) else {
                out.push_str(token.as_str());
                continue;
            };
            let name = name.as_str().to_ascii_lowercase();
            let closing = caps.get(1).is_some_and(|g| !g.is_empty());
            let self_closing = caps.get(3).is_some_and(|g| !g.is_empty());

            if closing {
                let Some(pos) = open.iter().rposition(|n| *n == name) else {
                    continue;
                };
                // 先闭合夹在中间的元素
                for inner in open.drain(pos..).skip(1).rev() {
                    out.push_str(&format!("</{inner}>"));
                }
                out.push_str(token.as_str());
            } else {
                if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
                    open.push(name);
                }
                out.push_str(token.as_str());
            }
        }
        out.push_str(&html[last..]);

        for name in open.iter().rev() {
            out.push_str(&format!("</{name}>"));
        }
        out
    }
}

/// 去掉末尾没有 `>` 收尾的标签片段
fn strip_dangling_tag(html: &str) -> &str {
    match html.rfind('<') {
        Some(pos) if !html[pos..].contains('>') && is_tag_start(&html[pos + 1..]) => {
            &html[..pos]
        }
        _ => html,
    }
}

fn is_tag_start(rest: &str) -> bool {
    match rest.chars().next() {
        Some(c) => c.is_ascii_alphabetic() || c == '/' || c == '!',
        // 末尾单独的 '<' 也视为残缺标签
        None => true,
    }
}
