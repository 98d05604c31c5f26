use crate::config::SummaryMode;
use crate::content::ContentItem;

/// 选中的待处理文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    pub text: &'a str,
    /// 使用了完整摘要，后续不再截断
    pub full_summary: bool,
}

/// 在已有摘要与正文之间做选择
pub fn select_source(item: &ContentItem, mode: SummaryMode) -> Source<'_> {
    match (mode, item.summary()) {
        (SummaryMode::Full, Some(summary)) => Source {
            text: summary,
            full_summary: true,
        },
        (SummaryMode::Trim, Some(summary)) => Source {
            text: summary,
            full_summary: false,
        },
        _ => Source {
            text: &item.body,
            full_summary: false,
        },
    }
}
