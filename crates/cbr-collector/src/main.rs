//! CBR 환율 수집기 CLI.

use cbr_collector::{modules, resolve_range, CollectorConfig, Period};
use cbr_core::{
    known_currencies, parse_currency_choice, CurrencyCode, LogConfig, LogFormat, RateRecord,
};
use cbr_data::{save_rates_csv, CbrArchiveClient};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cbr-collector")]
#[command(about = "CBR historical exchange-rate collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, default_value = "pretty", global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// 기간 내 일별 환율 수집 후 CSV 저장
    Collect {
        /// 통화 코드 또는 `currencies` 목록 번호 (예: USD, EUR, 3)
        #[arg(short, long, default_value = "USD", value_parser = parse_currency_choice)]
        currency: CurrencyCode,

        /// 시작일 (YYYY-MM-DD, 프리셋보다 우선)
        #[arg(long)]
        from: Option<String>,

        /// 종료일 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        to: Option<String>,

        /// 기간 프리셋 (all, 2024, 2023-2024)
        #[arg(short, long)]
        period: Option<Period>,

        /// 출력 CSV 경로 (기본: {output_dir}/{CODE}_rates_{시작}_{종료}.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 요청 간 딜레이 (밀리초, 환경변수보다 우선)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// 완료 후 미리 보여줄 레코드 수
        #[arg(long, default_value_t = 5)]
        preview: usize,

        /// 진행률 표시 끄기
        #[arg(long)]
        no_progress: bool,
    },

    /// 주요 통화 목록 출력
    Currencies,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    let level = format!(
        "cbr_collector={0},cbr_data={0},cbr_core={0}",
        cli.log_level
    );
    cbr_core::init_logging(LogConfig::new(level).with_format(cli.log_format))?;

    match cli.command {
        Commands::Currencies => print_currencies(),
        Commands::Collect {
            currency,
            from,
            to,
            period,
            output,
            delay_ms,
            preview,
            no_progress,
        } => {
            let mut config = CollectorConfig::from_env()?;
            if let Some(delay_ms) = delay_ms {
                config.collect.request_delay_ms = delay_ms;
            }
            tracing::debug!(base_url = %config.source.base_url, "설정 로드 완료");

            let today = chrono::Local::now().date_naive();
            let range = resolve_range(from.as_deref(), to.as_deref(), period, today)?;

            let client = CbrArchiveClient::new(config.source.client_config())?;
            let collect_config = config.collect.for_currency(currency.clone());

            let progress = (!no_progress).then(|| progress_bar(range.num_days() as u64));
            let report =
                modules::collect_rates(&client, range, &collect_config, progress.as_ref()).await;
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            report.stats.log_summary("환율 수집");

            println!("{}", "=".repeat(60));
            if report.records.is_empty() {
                println!("수집된 데이터가 없습니다 ({} {})", currency, range);
                println!("{}", "=".repeat(60));
                return Ok(());
            }

            let path = output.unwrap_or_else(|| config.default_output_path(&currency, &range));
            save_rates_csv(&path, &report.records)?;

            println!("수집 완료: {} ({})", currency, range);
            println!("레코드 수: {} / {}일", report.records.len(), range.num_days());
            println!("파일: {}", path.display());
            print_preview(&report.records, preview);
            println!("{}", "=".repeat(60));
        }
    }

    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

fn print_currencies() {
    println!("{:<4} {:<6} 이름", "#", "코드");
    println!("{}", "-".repeat(40));
    for (idx, known) in known_currencies().iter().enumerate() {
        println!("{:<4} {:<6} {}", idx + 1, known.code, known.name);
    }
}

fn print_preview(records: &[RateRecord], limit: usize) {
    if limit == 0 {
        return;
    }

    println!();
    println!("처음 {}건:", limit.min(records.len()));
    println!("{}", "-".repeat(60));
    println!(
        "{:<12} {:<10} {:<8} {:<10} 통화",
        "날짜", "환율", "단위", "1단위"
    );
    println!("{}", "-".repeat(60));
    for record in records.iter().take(limit) {
        println!(
            "{:<12} {:<10} {:<8} {:<10} {}",
            record.date.to_string(),
            format!("{:.4}", record.rate),
            record.nominal,
            format!("{:.4}", record.unit_rate()),
            record.currency
        );
    }
}
