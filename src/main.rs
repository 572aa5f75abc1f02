use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use question_generator::orchestrator::{interactive, save_to_csv, save_to_json, BatchProcessor};
use question_generator::utils::{logging, ResultView};
use question_generator::{logger, Config, GenerationResponse, QuestionGenerator};

/// 演示用段落
const SAMPLE_PARAGRAPH: &str = "Artificial intelligence (AI) is a rapidly evolving field that focuses on creating machines \
capable of performing tasks that typically require human intelligence. These tasks include \
learning, reasoning, problem-solving, perception, and language understanding. Machine learning, \
a subset of AI, enables computers to learn and improve from experience without being explicitly \
programmed. Deep learning, which uses neural networks with multiple layers, has revolutionized \
areas such as image recognition, natural language processing, and autonomous vehicles. As AI \
technology continues to advance, it raises important questions about ethics, job displacement, \
and the future relationship between humans and machines.";

#[derive(Parser)]
#[command(name = "question_generator", version, about = "Generate exam questions from paragraphs")]
struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 随机种子（覆盖配置）
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 为单个段落生成题目
    Generate {
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 批量处理文本文件（段落以空行分隔）
    Batch {
        file: PathBuf,
        #[arg(long)]
        json_out: Option<PathBuf>,
        #[arg(long)]
        csv_out: Option<PathBuf>,
    },
    /// 交互模式
    Interactive,
    /// 使用内置示例段落演示
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::load(cli.config.as_deref()).context("加载配置失败")?;
    if cli.seed.is_some() {
        config.random_seed = cli.seed;
    }

    // 初始化日志
    logger::init_with_verbosity(config.verbose_logging);

    match cli.command {
        Command::Generate { text, file, json } => {
            let paragraph = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("读取文件失败: {}", path.display()))?,
                (None, None) => anyhow::bail!("需要 --text 或 --file"),
            };
            generate(config, &paragraph, json)?;
        }
        Command::Batch {
            file,
            json_out,
            csv_out,
        } => {
            logging::log_startup("batch", config.max_concurrent_paragraphs);
            let json_out = json_out.unwrap_or_else(|| PathBuf::from(&config.output_json));
            let csv_out = csv_out.unwrap_or_else(|| PathBuf::from(&config.output_csv));

            let report = BatchProcessor::new(config)
                .process_text_file(&file)
                .await
                .with_context(|| format!("批处理失败: {}", file.display()))?;

            save_to_json(&report, &json_out)?;
            logging::log_saved("JSON", &json_out.display().to_string());
            save_to_csv(&report, &csv_out)?;
            logging::log_saved("CSV", &csv_out.display().to_string());

            logging::print_final_stats(report.success, report.failed, report.skipped, report.total);
        }
        Command::Interactive => {
            let mut generator = QuestionGenerator::new(config)?;
            let stdin = std::io::stdin();
            interactive::run(&mut generator, stdin.lock(), std::io::stdout())?;
        }
        Command::Demo => {
            println!("🤖 Question Generator from Paragraphs");
            println!("{}", "=".repeat(50));
            println!("Sample paragraph:");
            println!("{}", "-".repeat(30));
            println!("{}\n", SAMPLE_PARAGRAPH);
            generate(config, SAMPLE_PARAGRAPH, false)?;
        }
    }

    Ok(())
}

fn generate(config: Config, paragraph: &str, json: bool) -> Result<()> {
    let mut generator = QuestionGenerator::new(config)?;
    info!("🔄 正在生成题目...");
    let response = generator.generate_response(paragraph)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response {
        GenerationResponse::Questions(result) => print!("{}", ResultView(&result)),
        GenerationResponse::Error { error } => {
            for message in error {
                println!("❌ Error: {}", message);
            }
        }
    }
    Ok(())
}
