//! rsoverride 命令行入口
//!
//! ```bash
//! # 从文件读取节点，输出 YAML
//! rsoverride -i nodes.yaml -a landing -a threshold=2
//!
//! # 从标准输入读取，查询串形式传参，输出 JSON
//! cat nodes.json | rsoverride --args "loadbalance=url-test&fakeip=true" -f json -o override.json
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rsoverride::{ConfigRenderer, InputLoader, OutputFormat, OverrideSynthesizer, FlagResolver, SynthesisInput};

#[derive(Debug, Parser)]
#[command(name = "rsoverride", version, about = "根据节点列表生成 mihomo 覆写配置")]
struct Args {
    /// 节点文档（YAML / JSON），`-` 或缺省时读取标准输入
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 参数开关 KEY[=VALUE]，可重复
    #[arg(short, long = "arg", value_name = "KEY[=VALUE]")]
    arg: Vec<String>,

    /// 查询串形式的参数，如 "landing=true&threshold=3"
    #[arg(long, value_name = "QUERY")]
    args: Option<String>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// 输出文件，缺省时写到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_input(args: &Args) -> Result<SynthesisInput> {
    let input = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => InputLoader::from_path(path)
            .with_context(|| format!("读取节点文档失败：{}", path.display()))?,
        _ => InputLoader::from_reader(io::stdin().lock()).context("从标准输入读取节点文档失败")?,
    };
    Ok(input)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut input = load_input(&args)?;

    // 参数优先级：文档内 flags < --args < -a
    if let Some(query) = &args.args {
        input.flags.extend_query(query);
    }
    for pair in &args.arg {
        input.flags.push_pair(pair);
    }

    let flags = FlagResolver::resolve(&input.flags);
    let config = OverrideSynthesizer::synthesize_with_flags(&flags, &input.proxies);
    let rendered = ConfigRenderer::render(&config, args.format).context("渲染覆写配置失败")?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("写入输出文件失败：{}", path.display()))?;
            info!("覆写配置已写入 {}（策略组{}个，规则{}条）", path.display(), config.proxy_groups.len(), config.rules.len());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
