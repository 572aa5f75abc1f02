//! 交互式控制台
//!
//! 逐行读取段落并输出生成结果。`quit` 退出，`help` 显示说明。

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use tracing::error;

use crate::models::GenerationResponse;
use crate::nlp::Preprocessor;
use crate::utils::ResultView;
use crate::workflow::QuestionGenerator;

const HELP: &str = "\n💡 Help:
- Enter a paragraph (at least {min} characters)
- Questions of six types will be generated from it
- Type 'quit' to exit
- Type 'help' to see this message again";

fn help_text(min_chars: usize) -> String {
    HELP.replace("{min}", &min_chars.to_string())
}

/// 运行交互循环，直到输入 `quit` 或输入流结束
pub fn run<P, R, I, O>(
    generator: &mut QuestionGenerator<P, R>,
    input: I,
    mut output: O,
) -> Result<()>
where
    P: Preprocessor,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let min_chars = generator.config().min_paragraph_chars;

    writeln!(output, "🎯 Interactive Question Generator")?;
    writeln!(output, "{}", "=".repeat(40))?;
    writeln!(output, "Enter 'quit' to exit the program")?;
    writeln!(output, "Enter 'help' for usage instructions")?;
    writeln!(output, "{}", "-".repeat(40))?;

    let mut lines = input.lines();
    loop {
        writeln!(output, "\n📝 Enter your paragraph:")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let paragraph = line.trim();

        if paragraph.eq_ignore_ascii_case("quit") {
            writeln!(output, "👋 Goodbye!")?;
            break;
        }
        if paragraph.eq_ignore_ascii_case("help") {
            writeln!(output, "{}", help_text(min_chars))?;
            continue;
        }
        if paragraph.chars().count() < min_chars {
            writeln!(
                output,
                "⚠️  Please enter a longer paragraph (at least {} characters)",
                min_chars
            )?;
            continue;
        }

        writeln!(output, "\n🔄 Generating questions...")?;
        match generator.generate_response(paragraph) {
            Ok(GenerationResponse::Questions(result)) => {
                write!(output, "{}", ResultView(&result))?;
            }
            Ok(GenerationResponse::Error { error }) => {
                for message in error {
                    writeln!(output, "❌ Error: {}", message)?;
                }
            }
            Err(e) => {
                error!("❌ 生成失败: {}", e);
                writeln!(output, "❌ Error: {}", e)?;
            }
        }
        writeln!(output, "\n{}", "-".repeat(40))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn session(input: &str) -> String {
        let mut generator = QuestionGenerator::with_seed(Config::default(), 3).unwrap();
        let mut output = Vec::new();
        run(&mut generator, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_help_then_quit() {
        let output = session("help\nquit\nnever read\n");
        assert!(output.contains("at least 50 characters"));
        assert!(output.contains("👋 Goodbye!"));
    }

    #[test]
    fn test_short_input_warns() {
        let output = session("too short\n");
        assert!(output.contains("Please enter a longer paragraph"));
        assert!(!output.contains("Generating questions"));
    }

    #[test]
    fn test_generates_for_paragraph() {
        let output = session(
            "Marie Curie discovered radium in 1898. Her discovery changed science forever.\nQUIT\n",
        );
        assert!(output.contains("📋 Analytical Questions:"));
        assert!(output.contains("Answer: Marie Curie"));
    }
}
