use super::escape_html;

/// 生成指向内容地址的链接标记，负责转义不可信文本
pub trait LinkRenderer: Send + Sync {
    fn render(&self, text: &str, path: &str, class: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkRenderer;

impl LinkRenderer for HtmlLinkRenderer {
    fn render(&self, text: &str, path: &str, class: &str) -> String {
        format!(
            "<a href=\"{}\" class=\"{}\">{}</a>",
            escape_html(path),
            escape_html(class),
            escape_html(text)
        )
    }
}
