use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Deserialize;
use smart_trim::config::CONFIG_FILE;
use smart_trim::content::DEFAULT_FORMAT;
use smart_trim::format::markdown::render_markdown;
use smart_trim::{AppConfig, ContentItem, FormatRegistry, TargetLink, Trimmer};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smart-trim", about = "HTML 感知的内容摘要截断", version = long_version())]
struct Cli {
    /// 配置文件（默认读取当前目录下的 smart-trim.toml）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 截断单个内容并输出标记
    Render {
        /// 正文文件，`-` 表示标准输入
        #[arg(short, long)]
        input: PathBuf,

        /// 摘要文件
        #[arg(long)]
        summary: Option<PathBuf>,

        /// 文本格式 ID
        #[arg(short, long, default_value = DEFAULT_FORMAT)]
        format: String,

        /// 内容地址，用于生成更多链接
        #[arg(long)]
        link: Option<String>,

        /// 输入为 Markdown，先渲染为 HTML
        #[arg(long)]
        markdown: bool,
    },

    /// 批量截断 JSON 数组中的内容，输出 JSON 数组
    Batch {
        /// JSON 文件，`-` 表示标准输入
        #[arg(short, long)]
        input: PathBuf,
    },

    /// 输出当前截断设置的摘要
    Describe,
}

/// 批量输入中的一项
#[derive(Deserialize)]
struct BatchEntry {
    #[serde(flatten)]
    item: ContentItem,
    #[serde(default)]
    link: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let formats = FormatRegistry::with_settings(&config.formats);
    let trimmer = Trimmer::new(config.trim).with_formats(formats);

    match cli.command {
        Commands::Render {
            input,
            summary,
            format,
            link,
            markdown,
        } => {
            let process = |raw: String| if markdown { render_markdown(&raw) } else { raw };
            let mut item = ContentItem::new(process(read_input(&input)?), format);
            if let Some(path) = summary {
                item = item.with_summary(process(read_input(&path)?));
            }
            let link = link.map(TargetLink::new);
            println!("{}", trimmer.render(&item, link.as_ref()));
        }
        Commands::Batch { input } => {
            let raw = read_input(&input)?;
            let entries: Vec<BatchEntry> = serde_json::from_str(&raw)
                .with_context(|| format!("解析批量输入 {} 失败", input.display()))?;
            tracing::info!("批量截断 {} 条内容", entries.len());

            let rendered: Vec<String> = entries
                .par_iter()
                .map(|entry| {
                    let link = entry.link.as_deref().map(TargetLink::new);
                    trimmer.render(&entry.item, link.as_ref())
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
        Commands::Describe => {
            println!("{}", trimmer.config().describe());
        }
    }

    Ok(())
}

/// 未指定配置文件时，当前目录存在 smart-trim.toml 则读取，否则使用默认设置
fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(CONFIG_FILE).exists() => Path::new(CONFIG_FILE),
        None => return Ok(AppConfig::default()),
    };
    Ok(AppConfig::load(path)?)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("读取标准输入失败")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("读取 {} 失败", path.display()))
}

const fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\ncommit:  ",
        env!("SMART_TRIM_GIT_COMMIT"),
        "\nbuild:   ",
        env!("SMART_TRIM_BUILD_TIME"),
        "\ntarget:  ",
        env!("SMART_TRIM_BUILD_TARGET"),
        "\nprofile: ",
        env!("SMART_TRIM_BUILD_PROFILE"),
    )
}
