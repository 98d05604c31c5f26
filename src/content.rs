use serde::Deserialize;

/// 条目未声明格式时使用的文本格式
pub const DEFAULT_FORMAT: &str = "basic_html";

/// 待渲染的单个内容字段
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    /// 经过格式过滤后的正文标记
    pub body: String,
    /// 正文所用的标记方言，决定摘要时的段落与换行规则
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// 内容条目的可访问地址，仅用于生成“阅读更多”链接
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetLink {
    pub path: String,
}

impl ContentItem {
    pub fn new(body: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            format: format.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// 摘要存在且非空
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

impl TargetLink {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

fn default_format() -> String {
    DEFAULT_FORMAT.into()
}
