pub mod markdown;
pub mod summary;

pub use summary::{BoundarySummarizer, Summarizer};

use crate::config::FormatSettings;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// 标记方言的摘要相关属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    pub id: String,
    /// 换行符会被转换为 `<br>`/`<p>`，因此 `\n` 可作为断点
    pub line_breaks: bool,
    /// 生成摘要后补全被切断的标签
    pub html_corrector: bool,
}

impl TextFormat {
    pub fn new(id: impl Into<String>, line_breaks: bool, html_corrector: bool) -> Self {
        Self {
            id: id.into(),
            line_breaks,
            html_corrector,
        }
    }
}

/// 按 ID 查找文本格式
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: HashMap<String, TextFormat>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let builtin = [
            TextFormat::new("basic_html", false, true),
            TextFormat::new("restricted_html", true, true),
            TextFormat::new("full_html", false, true),
            TextFormat::new("plain_text", true, false),
            TextFormat::new("markdown", false, true),
        ];
        Self {
            formats: builtin.into_iter().map(|f| (f.id.clone(), f)).collect(),
        }
    }
}

impl FormatRegistry {
    /// 内置格式加上配置文件中的覆盖项
    pub fn with_settings(settings: &BTreeMap<String, FormatSettings>) -> Self {
        let mut registry = Self::default();
        for (id, s) in settings {
            registry.insert(TextFormat::new(id.as_str(), s.line_breaks, s.html_corrector));
        }
        registry
    }

    pub fn insert(&mut self, format: TextFormat) {
        self.formats.insert(format.id.clone(), format);
    }

    pub fn get(&self, id: &str) -> Option<&TextFormat> {
        self.formats.get(id)
    }

    /// 未知格式退化为不带任何过滤规则的格式
    pub fn resolve(&self, id: &str) -> Cow<'_, TextFormat> {
        match self.formats.get(id) {
            Some(format) => Cow::Borrowed(format),
            None => {
                tracing::warn!("未知文本格式 {id}，按无过滤规则处理");
                Cow::Owned(TextFormat::new(id, false, false))
            }
        }
    }
}
