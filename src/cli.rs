// ==========================================
// 机尾调换优化系统 - 命令行入口
// ==========================================
// 用法: tail-swap-optimizer <command> <input> [--config <path>] [--parallel]
// 输出: stdout 为格式化 JSON
// 退出码: 0 成功 / 1 运行错误 / 2 用法错误
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use crate::api::{MaintenanceRiskRequest, PlanningApi, TailSwapRequest};
use crate::engine::SystemClock;

const USAGE: &str = concat!(
    "usage: tail-swap-optimizer ",
    "<maintenance-risk|fleet-risk|validate-rotation|tail-swap|show-config> ",
    "<input> [--config <path>] [--parallel]"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MaintenanceRisk,
    FleetRisk,
    ValidateRotation,
    TailSwap,
    ShowConfig,
}

impl Command {
    fn needs_input(self) -> bool {
        !matches!(self, Command::ShowConfig)
    }
}

/// 命令行选项 (命令之后的参数)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub parallel: bool,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("maintenance-risk") => Some(Command::MaintenanceRisk),
        Some("fleet-risk") => Some(Command::FleetRisk),
        Some("validate-rotation") => Some(Command::ValidateRotation),
        Some("tail-swap") => Some(Command::TailSwap),
        Some("show-config") => Some(Command::ShowConfig),
        _ => None,
    }
}

/// 解析命令之后的选项
///
/// 未知选项、缺少 `--config` 取值、多余的位置参数均视为用法错误
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut rest = args.iter().skip(2);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--parallel" => options.parallel = true,
            "--config" => {
                let Some(path) = rest.next() else {
                    return Err("--config requires a path".to_string());
                };
                options.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option: {flag}"));
            }
            positional => {
                if options.input.is_some() {
                    return Err(format!("unexpected argument: {positional}"));
                }
                options.input = Some(PathBuf::from(positional));
            }
        }
    }

    Ok(options)
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return 2;
        }
    };

    if command.needs_input() && options.input.is_none() {
        eprintln!("missing input file");
        eprintln!("{USAGE}");
        return 2;
    }

    match execute(command, &options) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    }
}

/// 执行命令,返回格式化 JSON
pub fn execute(command: Command, options: &CliOptions) -> anyhow::Result<String> {
    let api = PlanningApi::load(options.config.as_deref(), Arc::new(SystemClock))
        .context("failed to load configuration")?;
    info!(?command, parallel = options.parallel, "执行命令");

    match command {
        Command::ShowConfig => Ok(api.config_snapshot()?),
        Command::MaintenanceRisk => {
            let request: MaintenanceRiskRequest = PlanningApi::read_request(input_path(options)?)?;
            to_pretty(&api.score_maintenance_risk(&request))
        }
        Command::FleetRisk => {
            let response = api.score_fleet_file(input_path(options)?, options.parallel)?;
            to_pretty(&response)
        }
        Command::ValidateRotation => {
            let response = api.validate_rotation_file(input_path(options)?)?;
            to_pretty(&response)
        }
        Command::TailSwap => {
            let request: TailSwapRequest = PlanningApi::read_request(input_path(options)?)?;
            to_pretty(&api.optimize_tail_swap(&request))
        }
    }
}

fn input_path(options: &CliOptions) -> anyhow::Result<&Path> {
    options
        .input
        .as_deref()
        .context("missing input file")
}

fn to_pretty<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize result")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command(&args(&["bin", "tail-swap", "req.json"])),
            Some(Command::TailSwap)
        );
        assert_eq!(
            parse_command(&args(&["bin", "show-config"])),
            Some(Command::ShowConfig)
        );
        assert_eq!(parse_command(&args(&["bin", "swap"])), None);
        assert_eq!(parse_command(&args(&["bin"])), None);
    }

    #[test]
    fn test_parse_options() {
        let options = parse_options(&args(&[
            "bin",
            "fleet-risk",
            "--parallel",
            "fleet.csv",
            "--config",
            "cfg.json",
        ]))
        .unwrap();

        assert_eq!(options.input, Some(PathBuf::from("fleet.csv")));
        assert_eq!(options.config, Some(PathBuf::from("cfg.json")));
        assert!(options.parallel);
    }

    #[test]
    fn test_parse_options_errors() {
        assert!(parse_options(&args(&["bin", "fleet-risk", "--config"])).is_err());
        assert!(parse_options(&args(&["bin", "fleet-risk", "--fast"])).is_err());
        assert!(parse_options(&args(&["bin", "fleet-risk", "a.csv", "b.csv"])).is_err());
    }

    #[test]
    fn test_usage_exit_codes() {
        assert_eq!(run_with_args(&args(&["bin"])), 2);
        assert_eq!(run_with_args(&args(&["bin", "unknown"])), 2);
        assert_eq!(run_with_args(&args(&["bin", "tail-swap"])), 2);
    }

    #[test]
    fn test_runtime_error_exit_code() {
        let code = run_with_args(&args(&[
            "bin",
            "validate-rotation",
            "/nonexistent/legs.json",
            "--config",
            "/nonexistent/config.json",
        ]));
        assert_eq!(code, 1);
    }
}
