use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, de};
use std::collections::BTreeMap;
use std::path::Path;

/// 配置文件默认名称（位于工作目录）
pub const CONFIG_FILE: &str = "smart-trim.toml";

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub trim: TrimConfig,
    /// 按格式 ID 覆盖或新增文本格式
    #[serde(default)]
    pub formats: BTreeMap<String, FormatSettings>,
    #[serde(default)]
    pub log: LogConfig,
}

/// 截断单位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimUnit {
    #[default]
    Chars,
    Words,
}

/// 已有摘要的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// 有摘要时原样使用，不再截断
    #[default]
    Full,
    /// 有摘要时使用摘要，但仍按截断设置处理
    Trim,
    /// 始终使用正文
    Ignore,
}

/// 单次渲染使用的截断设置，构造后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrimConfig {
    #[serde(
        rename = "length",
        default = "default_trim_length",
        deserialize_with = "deserialize_length"
    )]
    pub trim_length: usize,
    #[serde(rename = "unit", default)]
    pub trim_unit: TrimUnit,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default)]
    pub more_link: bool,
    #[serde(default = "default_more_text")]
    pub more_text: String,
    #[serde(rename = "summary", default)]
    pub summary_mode: SummaryMode,
    #[serde(default)]
    pub strip_html: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatSettings {
    /// 换行符是否会被转换为段落/换行标签
    #[serde(default)]
    pub line_breaks: bool,
    /// 是否对生成的摘要做标签补全
    #[serde(default)]
    pub html_corrector: bool,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl TrimConfig {
    /// 以给定长度构造，其余字段取默认值；负数长度视为无效配置
    pub fn new(trim_length: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            trim_length: check_length(trim_length)?,
            ..Self::default()
        })
    }

    /// 设置摘要文本，例如 "300 个字符，带后缀，带更多链接"
    pub fn describe(&self) -> String {
        let unit = match self.trim_unit {
            TrimUnit::Chars => "个字符",
            TrimUnit::Words => "个单词",
        };
        let mut out = format!("{} {unit}", self.trim_length);
        if !self.suffix.trim().is_empty() {
            out.push_str("，带后缀");
        }
        if self.more_link {
            out.push_str("，带更多链接");
        }
        out
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

pub fn check_length(value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeLength(value))
}

/// 长度既可以写成整数，也可以写成数字字符串（如 "300"）
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Int(i64),
    Text(String),
}

fn deserialize_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawLength::deserialize(deserializer)? {
        RawLength::Int(n) => n,
        RawLength::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(ConfigError::InvalidLength(s.clone())))?,
    };
    check_length(value).map_err(de::Error::custom)
}

// 默认值函数
fn default_trim_length() -> usize { 300 }
fn default_suffix() -> String { "...".into() }
fn default_more_text() -> String { "Read more".into() }
fn default_log_level() -> String { "info".into() }

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            trim_length: default_trim_length(),
            trim_unit: TrimUnit::default(),
            suffix: default_suffix(),
            more_link: false,
            more_text: default_more_text(),
            summary_mode: SummaryMode::default(),
            strip_html: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
