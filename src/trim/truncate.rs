use crate::config::{TrimConfig, TrimUnit};
use crate::format::{Summarizer, TextFormat};
use crate::html::HtmlCorrector;

/// 截断结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub text: String,
    /// 输出确实比输入短（按 Unicode 字符数比较）
    pub shortened: bool,
}

impl Truncation {
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            shortened: false,
        }
    }
}

/// 按配置的单位截断文本
pub fn truncate(
    text: &str,
    config: &TrimConfig,
    format: &TextFormat,
    summarizer: &dyn Summarizer,
    corrector: &dyn HtmlCorrector,
) -> Truncation {
    let output = match config.trim_unit {
        TrimUnit::Words => truncate_words(text, config.trim_length, corrector),
        TrimUnit::Chars => summarizer.summarize(text, format, config.trim_length),
    };
    // 以实际长度判断，摘要器原样返回时不算截断
    let shortened = text.chars().count() != output.chars().count();
    Truncation {
        text: output,
        shortened,
    }
}

/// 保留前 `limit` 个以空白分隔的单词，再补全被切断的标签
pub fn truncate_words(text: &str, limit: usize, corrector: &dyn HtmlCorrector) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return text.to_string();
    }
    corrector.correct(&words[..limit].join(" "))
}
