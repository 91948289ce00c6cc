use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use id_stripper::{PatternStripper, StripError, StripReport, DEFAULT_TARGET, SUCCESS_MESSAGE};

#[derive(Parser)]
#[command(name = "id_stripper")]
#[command(about = "删除种子文件中硬编码的 'id' => N, 片段")]
#[command(version = "0.1.0")]
struct Cli {
    /// 目标文件路径
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    input: PathBuf,

    /// 只统计将被删除的片段，不写文件
    #[arg(long)]
    dry_run: bool,

    /// 以JSON输出结果
    #[arg(long)]
    json: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let stripper: PatternStripper = PatternStripper::default();

    if cli.dry_run {
        let report = stripper.preview(&cli.input)
            .with_context(|| format!("预览失败: {}", cli.input.display()))?;
        return print_report(&cli, &report);
    }

    let report = stripper.strip(&cli.input)
        .with_context(|| format!("处理文件失败: {}", cli.input.display()))?;
    print_report(&cli, &report)
}

/// 日志写到 stderr，默认只显示警告
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 输出结果
fn print_report(cli: &Cli, report: &StripReport) -> anyhow::Result<()> {
    if let Some(output) = render_report(cli, report).context("序列化JSON失败")? {
        println!("{}", output);
    }
    Ok(())
}

/// 根据命令行选项生成标准输出内容；静默模式返回 None
fn render_report(cli: &Cli, report: &StripReport) -> Result<Option<String>, StripError> {
    if cli.json {
        return report.to_json().map(Some);
    }

    if cli.quiet {
        return Ok(None);
    }

    if report.written {
        Ok(Some(SUCCESS_MESSAGE.to_string()))
    } else {
        Ok(Some(format!("{} 个片段将被删除: {}", report.matches_removed, report.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(written: bool) -> StripReport {
        StripReport {
            path: PathBuf::from("seeder.php"),
            matches_removed: 2,
            bytes_before: 40,
            bytes_after: 18,
            written,
        }
    }

    #[test]
    fn test_default_input_is_hardcoded_target() {
        let cli = Cli::parse_from(["id_stripper"]);
        assert_eq!(cli.input, PathBuf::from(DEFAULT_TARGET));
        assert!(!cli.dry_run && !cli.json && !cli.quiet);
    }

    #[test]
    fn test_render_success_message() {
        let cli = Cli::parse_from(["id_stripper"]);
        let output = render_report(&cli, &sample_report(true)).unwrap();
        assert_eq!(output.as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_render_dry_run_summary() {
        let cli = Cli::parse_from(["id_stripper", "--dry-run"]);
        let output = render_report(&cli, &sample_report(false)).unwrap().unwrap();
        assert_eq!(output, "2 个片段将被删除: seeder.php");
    }

    #[test]
    fn test_render_quiet() {
        let cli = Cli::parse_from(["id_stripper", "--quiet"]);
        assert!(render_report(&cli, &sample_report(true)).unwrap().is_none());
    }

    #[test]
    fn test_render_json_overrides_quiet() {
        let cli = Cli::parse_from(["id_stripper", "--json", "--quiet", "-i", "seeder.php"]);
        let output = render_report(&cli, &sample_report(true)).unwrap().unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["matches_removed"], 2);
        assert_eq!(json["written"], true);
    }
}
