// ==========================================
// 设备维保计划系统 - 命令行入口
// ==========================================
// plan:        导入 CSV → 执行一轮计划 → 输出摘要或 JSON
// show-config: 输出生效配置（JSON）
// ==========================================

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use maint_planner::config::PlannerConfig;
use maint_planner::domain::CapacityConstraint;
use maint_planner::engine::{PlanningOrchestrator, PlanningResult};
use maint_planner::importer::{AssetCsvImporter, InspectionCsvImporter};
use maint_planner::perf::PerfGuard;
use maint_planner::{logging, APP_NAME, VERSION};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "maint-planner", about = "状态监视型设备维保计划", version)]
struct Cli {
    /// 配置文件路径（缺省时读取系统配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 导入设备与点检数据并执行一轮计划
    Plan(PlanArgs),
    /// 输出生效配置
    ShowConfig,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// 设备主数据 CSV
    #[arg(long)]
    assets: PathBuf,

    /// 点检记录 CSV（可缺失）
    #[arg(long)]
    inspections: Option<PathBuf>,

    /// 以 JSON 输出完整结果
    #[arg(long)]
    json: bool,

    /// 摘要中列出的排程明细条数
    #[arg(long, default_value_t = 10)]
    top: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!(version = VERSION, "{} 启动", APP_NAME);

    let config = PlannerConfig::load(cli.config.as_deref()).context("加载计划配置失败")?;

    match cli.command {
        Command::Plan(args) => run_plan(config, args).await,
        Command::ShowConfig => {
            let json = serde_json::to_string_pretty(&config).context("序列化配置失败")?;
            println!("{}", json);
            Ok(())
        }
    }
}

async fn run_plan(config: PlannerConfig, args: PlanArgs) -> Result<()> {
    // 1. 导入
    let load_timer = PerfGuard::new("load_inputs");
    let assets = AssetCsvImporter::new(config.task.default_repair_cost)
        .import(&args.assets)
        .with_context(|| format!("导入设备主数据失败: {}", args.assets.display()))?;
    let inspections = match &args.inspections {
        Some(path) => InspectionCsvImporter::new()
            .import(path)
            .with_context(|| format!("导入点检记录失败: {}", path.display()))?,
        None => Default::default(),
    };
    let load_ms = load_timer.elapsed_ms();
    drop(load_timer);

    // 2. 计划
    let orchestrator = PlanningOrchestrator::new(config);
    let mut result = orchestrator
        .run_cycle(assets.clone(), &inspections)
        .await
        .context("执行计划失败")?;
    result.performance = result.performance.with_load_ms(load_ms);

    // 3. 输出
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("序列化计划结果失败")?;
        println!("{}", json);
    } else {
        print_summary(&result, &assets, args.top);
    }
    Ok(())
}

fn print_summary(result: &PlanningResult, assets: &[maint_planner::Asset], top: usize) {
    let stats = &result.schedule.statistics;
    let perf = &result.performance;

    println!("==================================================");
    println!("{} v{}  cycle={}", APP_NAME, VERSION, result.cycle_id);
    println!("==================================================");

    for row in result.gantt_rows(assets).iter().take(top) {
        println!(
            "{:<30} {}  {}  priority={}  cost={:.0}  penalty={:.0}",
            row.label, row.start, row.resource, row.priority, row.cost, row.penalty
        );
    }
    if result.schedule.entries.len() > top {
        println!("... 其余 {} 条", result.schedule.entries.len() - top);
    }

    println!();
    println!(
        "已排: {}/{} ({:.1}%)",
        stats.scheduled_tasks,
        stats.total_tasks,
        stats.scheduling_ratio * 100.0
    );
    println!("未排: {}", result.schedule.unplaced.len());
    println!("总费用: {:.0}", stats.total_cost);
    println!("总罚金: {:.0}", stats.total_penalty);

    // 分期资源占用
    println!();
    for (resource, series) in &result.schedule.resource_usage {
        for (period, usage) in series {
            println!(
                "{:<8} {}  {:.0}/{:.0}  ({:.1}%)",
                resource,
                period,
                usage.used,
                usage.ceiling,
                usage.utilization() * 100.0
            );
        }
    }

    println!();
    println!(
        "加载 {:.1} ms / 评分 {:.1} ms / 排程 {:.1} ms / 合计 {:.1} ms  (workers={})",
        perf.load_ms,
        perf.scoring_ms,
        perf.solve_ms,
        perf.total_ms(),
        perf.scoring_workers
    );
    println!(
        "吞吐: {:.1} 台/s, {:.1} 任务/s",
        perf.assets_per_second, perf.tasks_per_second
    );
}
