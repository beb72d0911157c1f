//! Glowbow CLI - Lepton 调色板工具
//!
//! 子命令：
//! - info: 显示内置调色板信息
//! - lookup <index>: 查询索引对应的颜色
//! - export <path>: 按扩展名导出调色板 (.pal/.bin/.csv/.json/.png/.565)
//! - import <path>: 读取调色板文件并与内置调色板比较
//! - render <raw> <out.png>: 把原始 8 位帧渲染为 PNG

use anyhow::Context;
use clap::{Parser, Subcommand};
use glowbow::GLOWBOW;
use glowbow::formats::{self, PaletteFormat};
use glowbow::image::render::{self, LEP_HEIGHT, LEP_WIDTH, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 应用程序名称
pub const APP_NAME: &str = "glowbow";

/// 应用程序版本（从 Cargo.toml 读取）
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 命令行配置
#[derive(Parser, Debug)]
#[command(name = "glowbow", version, about = "Lepton 热成像 glowbow 调色板工具")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 同时写入按天滚动的日志文件
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Cmd {
    /// 显示内置调色板信息
    Info,
    /// 查询索引 (0-255) 对应的颜色
    Lookup {
        index: usize,
    },
    /// 导出调色板, 格式由扩展名决定
    Export {
        path: PathBuf,
    },
    /// 读取调色板并与内置调色板比较
    Import {
        path: PathBuf,
    },
    /// 把原始 8 位帧渲染为 PNG
    Render {
        input: PathBuf,
        output: PathBuf,
        /// 帧宽度
        #[arg(long, default_value_t = LEP_WIDTH)]
        width: u32,
        /// 帧高度
        #[arg(long, default_value_t = LEP_HEIGHT)]
        height: u32,
        /// 放大倍数
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        scale: u32,
        /// 输出索引 PNG (不放大)
        #[arg(long)]
        indexed: bool,
    },
}

/// 初始化日志 - 输出到 stderr, 指定目录时同时写入文件
fn init_logging(verbose: bool, log_dir: Option<&Path>) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = log_dir.map(|dir| {
        tracing_subscriber::fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, "glowbow.log"))
            .with_ansi(false)
            .with_level(true)
            .with_target(true)
    });

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}

fn run(command: Cmd) -> anyhow::Result<()> {
    match command {
        Cmd::Info => {
            info!("调色板: {}", GLOWBOW.name());
            info!("项数: {}", GLOWBOW.entries().len());
            for index in [0u8, 1, 223, 224, 254, 255] {
                info!("  [{index:3}] {}", GLOWBOW.color_at(index));
            }
        }
        Cmd::Lookup { index } => {
            let color = GLOWBOW.get(index)?;
            println!(
                "{index}: {} {} rgb565=0x{:04X}",
                color.to_hex_string(),
                color.to_rgb_string(),
                color.to_rgb565()
            );
        }
        Cmd::Export { path } => {
            let format = formats::save(&GLOWBOW, &path)
                .with_context(|| format!("导出失败: {}", path.display()))?;
            info!("已导出 {} 格式: {}", format.name(), path.display());
        }
        Cmd::Import { path } => {
            let format = PaletteFormat::from_path(&path)?;
            let palette = formats::load_as(&path, format)
                .with_context(|| format!("读取失败: {}", path.display()))?;
            info!("已读取 {} 格式调色板: {}", format.name(), palette.name());

            let differences: Vec<usize> = palette
                .iter()
                .zip(GLOWBOW.iter())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, _)| i)
                .collect();

            if differences.is_empty() {
                info!("与内置 glowbow 调色板一致");
            } else {
                warn!("与内置调色板有 {} 项不同", differences.len());
                for index in differences.iter().take(8) {
                    debug!("  [{index:3}] {}", palette.entries()[*index]);
                }
            }
        }
        Cmd::Render {
            input,
            output,
            width,
            height,
            scale,
            indexed,
        } => {
            let options = RenderOptions::default().with_scale(scale);
            render::render_file(&input, &output, width, height, &GLOWBOW, &options, indexed)
                .with_context(|| format!("渲染失败: {}", input.display()))?;
            info!("已渲染: {} -> {}", input.display(), output.display());
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_dir.as_deref());
    debug!("{APP_NAME} {APP_VERSION} 启动");

    run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbow::PaletteError;

    #[test]
    fn test_app_info() {
        assert_eq!(APP_NAME, "glowbow");
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["glowbow", "-v", "lookup", "42"]).unwrap();
        assert_eq!(cli.command, Cmd::Lookup { index: 42 });
        assert!(cli.verbose);
        assert_eq!(cli.log_dir, None);
    }

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["glowbow", "render", "frame.raw", "out.png"]).unwrap();
        assert_eq!(
            cli.command,
            Cmd::Render {
                input: PathBuf::from("frame.raw"),
                output: PathBuf::from("out.png"),
                width: LEP_WIDTH,
                height: LEP_HEIGHT,
                scale: 1,
                indexed: false,
            }
        );
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "glowbow", "render", "frame.raw", "out.png", "--scale", "2", "--width", "80",
            "--indexed", "--log-dir", "logs",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Cmd::Render {
                input: PathBuf::from("frame.raw"),
                output: PathBuf::from("out.png"),
                width: 80,
                height: LEP_HEIGHT,
                scale: 2,
                indexed: true,
            }
        );
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["glowbow"]).is_err());
        assert!(Cli::try_parse_from(["glowbow", "--bogus", "info"]).is_err());
        assert!(Cli::try_parse_from(["glowbow", "export"]).is_err());
        assert!(Cli::try_parse_from(["glowbow", "lookup", "-1"]).is_err());
        assert!(Cli::try_parse_from(["glowbow", "render", "a", "b", "--scale", "x"]).is_err());
        assert!(Cli::try_parse_from(["glowbow", "render", "a", "b", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["glowbow", "--log-dir"]).is_err());
    }

    #[test]
    fn test_run_lookup_out_of_range() {
        let err = run(Cmd::Lookup { index: 256 }).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PaletteError>(),
            Some(PaletteError::IndexOutOfRange(256))
        ));
        assert!(run(Cmd::Lookup { index: 255 }).is_ok());
    }

    #[test]
    fn test_run_export_import() {
        let path = std::env::temp_dir().join(format!("glowbow_cli_{}.json", std::process::id()));
        run(Cmd::Export { path: path.clone() }).unwrap();
        run(Cmd::Import { path: path.clone() }).unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_run_render() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("glowbow_cli_{}.raw", std::process::id()));
        let output = dir.join(format!("glowbow_cli_{}.png", std::process::id()));
        let frame: Vec<u8> = (0..=255u8).collect();
        std::fs::write(&input, &frame).unwrap();

        run(Cmd::Render {
            input: input.clone(),
            output: output.clone(),
            width: 16,
            height: 16,
            scale: 2,
            indexed: false,
        })
        .unwrap();
        let rendered = image::open(&output).unwrap().to_rgb8();
        assert_eq!(rendered.dimensions(), (32, 32));
        assert_eq!(rendered.get_pixel(31, 31).0, [46, 46, 46]);

        // 尺寸与文件长度不符
        let err = run(Cmd::Render {
            input: input.clone(),
            output: output.clone(),
            width: 16,
            height: 15,
            scale: 1,
            indexed: false,
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PaletteError>(),
            Some(PaletteError::InvalidLength { expected: 240, actual: 256 })
        ));

        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);
    }
}
