use super::TextFormat;
use crate::html::{HtmlCorrector, TagBalancer};

/// 作者手动指定的截断点
pub const BREAK_MARKER: &str = "<!--break-->";

/// 结构感知的摘要提取：返回不超过预算的前缀，优先在段落或句子边界处截断
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, format: &TextFormat, budget: usize) -> String;
}

/// 断点及其命中后从末尾额外去掉的字节数
type BreakPoints = &'static [(&'static str, usize)];

const PARAGRAPHS: BreakPoints = &[("</p>", 0)];
const LINE_BREAKS: BreakPoints = &[("<br />", 6), ("<br>", 4)];
const NEWLINE: BreakPoints = &[("\n", 1)];
const SENTENCES: BreakPoints = &[(". ", 1), ("! ", 1), ("? ", 1), ("。", 0), ("؟ ", 1)];

/// 先按字符预算切片，再从切片末尾向前寻找断点：
/// 段落 > 换行 > 句子，命中的第一组里取最靠后的位置；都没有则硬切。
#[derive(Debug, Clone, Default)]
pub struct BoundarySummarizer<C = TagBalancer> {
    corrector: C,
}

impl BoundarySummarizer {
    pub fn new() -> Self {
        Self { corrector: TagBalancer }
    }
}

impl<C: HtmlCorrector> BoundarySummarizer<C> {
    pub fn with_corrector(corrector: C) -> Self {
        Self { corrector }
    }
}

impl<C: HtmlCorrector> Summarizer for BoundarySummarizer<C> {
    fn summarize(&self, text: &str, format: &TextFormat, budget: usize) -> String {
        // 手动截断点只在预算之内才生效
        if let Some(pos) = text.find(BREAK_MARKER)
            && text[..pos].chars().count() <= budget
        {
            return text[..pos].to_string();
        }
        if budget == 0 {
            return String::new();
        }
        if text.chars().count() <= budget {
            return text.to_string();
        }

        let cut = text
            .char_indices()
            .nth(budget)
            .map_or(text.len(), |(i, _)| i);
        let slice = &text[..cut];
        let end = find_break(slice, format.line_breaks).unwrap_or(slice.len());
        let summary = &slice[..end];

        tracing::debug!(
            format = %format.id,
            budget,
            kept = summary.chars().count(),
            "按结构边界提取摘要"
        );

        if format.html_corrector {
            self.corrector.correct(summary)
        } else {
            summary.to_string()
        }
    }
}

/// 返回截断位置（字节偏移）
fn find_break(slice: &str, line_breaks: bool) -> Option<usize> {
    let newline: BreakPoints = if line_breaks { NEWLINE } else { &[] };
    let line_group = [LINE_BREAKS, newline];
    let groups: [&[BreakPoints]; 3] = [&[PARAGRAPHS], &line_group, &[SENTENCES]];

    groups.iter().find_map(|group| {
        group
            .iter()
            .flat_map(|points| points.iter())
            .filter_map(|&(point, offset)| {
                slice.rfind(point).map(|pos| pos + point.len() - offset)
            })
            // 整段都被切掉时不算命中
            .filter(|&end| end > 0)
            .max()
    })
}
