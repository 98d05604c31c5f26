//! HTML 感知的内容摘要截断。
//!
//! 给定正文（或已有摘要）与截断设置，按字符或单词裁剪，保持标签结构完整，
//! 并在最后一个闭合标签前插入后缀与“阅读更多”链接。

pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod html;
pub mod trim;

pub use config::{AppConfig, SummaryMode, TrimConfig, TrimUnit};
pub use content::{ContentItem, TargetLink};
pub use error::ConfigError;
pub use format::{BoundarySummarizer, FormatRegistry, Summarizer, TextFormat};
pub use html::{HtmlCorrector, HtmlLinkRenderer, LinkRenderer, TagBalancer};
pub use trim::Trimmer;
