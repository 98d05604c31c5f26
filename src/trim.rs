pub mod extension;
pub mod sanitize;
pub mod source;
pub mod truncate;

use crate::config::TrimConfig;
use crate::content::{ContentItem, TargetLink};
use crate::format::{BoundarySummarizer, FormatRegistry, Summarizer};
use crate::html::{HtmlCorrector, HtmlLinkRenderer, LinkRenderer, TagBalancer};
use rayon::prelude::*;
use std::borrow::Cow;

use extension::append_extension;
use sanitize::sanitize;
use source::select_source;
use truncate::{Truncation, truncate};

/// 内容字段的摘要截断器。
///
/// 依次执行：选择摘要或正文 → 可选的去标签 → 按字符或单词截断 → 拼接后缀与更多链接。
/// 不持有跨调用的状态，可在多个线程间共享。
pub struct Trimmer {
    config: TrimConfig,
    formats: FormatRegistry,
    summarizer: Box<dyn Summarizer>,
    corrector: Box<dyn HtmlCorrector>,
    links: Box<dyn LinkRenderer>,
}

impl Trimmer {
    pub fn new(config: TrimConfig) -> Self {
        Self {
            config,
            formats: FormatRegistry::default(),
            summarizer: Box::new(BoundarySummarizer::new()),
            corrector: Box::new(TagBalancer),
            links: Box::new(HtmlLinkRenderer),
        }
    }

    pub fn with_formats(mut self, formats: FormatRegistry) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_summarizer(mut self, summarizer: impl Summarizer + 'static) -> Self {
        self.summarizer = Box::new(summarizer);
        self
    }

    /// 单词模式下补全标签所用的修正器
    pub fn with_corrector(mut self, corrector: impl HtmlCorrector + 'static) -> Self {
        self.corrector = Box::new(corrector);
        self
    }

    pub fn with_link_renderer(mut self, links: impl LinkRenderer + 'static) -> Self {
        self.links = Box::new(links);
        self
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// 渲染单个内容条目
    pub fn render(&self, item: &ContentItem, link: Option<&TargetLink>) -> String {
        let source = select_source(item, self.config.summary_mode);
        let text = if self.config.strip_html {
            Cow::Owned(sanitize(source.text))
        } else {
            Cow::Borrowed(source.text)
        };
        if text.is_empty() {
            return String::new();
        }

        let truncation = if source.full_summary {
            Truncation::unchanged(&text)
        } else {
            let format = self.formats.resolve(&item.format);
            truncate(
                &text,
                &self.config,
                &format,
                self.summarizer.as_ref(),
                self.corrector.as_ref(),
            )
        };

        tracing::debug!(
            format = %item.format,
            full_summary = source.full_summary,
            shortened = truncation.shortened,
            "内容截断完成"
        );

        append_extension(
            &truncation.text,
            truncation.shortened,
            &self.config,
            link,
            self.links.as_ref(),
        )
    }

    /// 并行渲染同一实体下的多个条目，结果顺序与输入一致
    pub fn render_all(&self, items: &[ContentItem], link: Option<&TargetLink>) -> Vec<String> {
        items.par_iter().map(|item| self.render(item, link)).collect()
    }
}
