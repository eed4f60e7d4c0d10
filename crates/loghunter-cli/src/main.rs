use anyhow::Result;
use clap::Parser;
use loghunter_core::{scan_and_write, ReportFormat, ScanOptions, ScanStats};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "loghunter", version, about = "日志取证扫描器")]
struct Cli {
    /// 待扫描的日志文件
    logfile: Option<PathBuf>,

    /// 报告格式：text 或 json（默认 text）
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// 附加文件特征分析（大小 / 熵 / 威胁打分）
    #[arg(long)]
    features: bool,

    /// 最大扫描文件大小（单位字节，例如 5242880 代表 5MB）
    #[arg(long)]
    max_file_size: Option<u64>,

    /// 多余的位置参数：忽略，不校验
    #[arg(trailing_var_arg = true, hide = true)]
    #[allow(dead_code)]
    extra: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    // 无参数：仅打印用法并正常退出，不访问任何文件
    let logfile = match cli.logfile {
        Some(p) => p,
        None => {
            println!("Usage: loghunter <logfile>");
            return ExitCode::SUCCESS;
        }
    };

    let format = match cli.format.as_str() {
        "json" => ReportFormat::Json,
        _ => ReportFormat::Text,
    };
    let opts = ScanOptions {
        max_file_size: cli.max_file_size,
        format,
        with_features: cli.features,
    };

    info!(?logfile, "starting scan");
    match run(&logfile, &opts) {
        Ok(stats) => {
            info!(
                lines_scanned = stats.lines_scanned,
                suspicious = stats.suspicious,
                "scan finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("scan failed: {:#}", e);
            // 面向用户的错误走标准输出（报告的替代物），退出码区分失败
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// 执行扫描并把报告写到标准输出
fn run(logfile: &Path, opts: &ScanOptions) -> Result<ScanStats> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_and_write(logfile, &mut out, opts)?;
    out.flush().ok();
    Ok(stats)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // 日志写 stderr，避免与标准输出上的报告混在一起
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
