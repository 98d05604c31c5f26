use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("截断长度不能为负数：{0}")]
    NegativeLength(i64),

    #[error("无法识别的截断长度：{0:?}")]
    InvalidLength(String),

    #[error("读取 {} 失败：{source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析 {} 失败：{source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
