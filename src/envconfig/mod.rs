use crate::sample::{GenerationOptions, DEFAULT_MAX_LENGTH, DEFAULT_NUM_RETURN_SEQUENCES};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const INPUT_TEXT_ENV: &str = "INPUT_TEXT";
pub const MODEL_DIRECTORY_ENV: &str = "MODEL_DIRECTORY";
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";

pub const DEFAULT_INPUT_TEXT: &str = "Default input text";
pub const DEFAULT_MODEL_DIRECTORY: &str = "/model";
pub const DEFAULT_OUTPUT_PATH: &str = "/outputs/result.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "paraphrase-runner")]
#[command(version)]
#[command(about = "Generate paraphrases with a local T5 model and write them as JSON", long_about = None)]
pub struct RunArgs {
    /// Text to paraphrase. Invalid UTF-8 is replaced rather than rejected.
    #[arg(
        long,
        env = INPUT_TEXT_ENV,
        default_value = DEFAULT_INPUT_TEXT,
        value_parser = clap::value_parser!(OsString)
    )]
    pub input_text: OsString,

    /// Directory holding config.json, tokenizer.json and the model weights
    #[arg(long, env = MODEL_DIRECTORY_ENV, default_value = DEFAULT_MODEL_DIRECTORY)]
    pub model_directory: PathBuf,

    /// Where the result envelope is written
    #[arg(long, env = OUTPUT_PATH_ENV, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    #[arg(long, default_value_t = DEFAULT_NUM_RETURN_SEQUENCES, value_parser = positive)]
    pub num_return_sequences: usize,

    /// Token limit for the prompt and for each generated sequence
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, value_parser = positive)]
    pub max_length: usize,

    /// Fixes the sampling seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip GPU detection
    #[arg(long)]
    pub cpu: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub input_text: String,
    pub model_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub request: Request,
    pub output_path: PathBuf,
    pub generation: GenerationOptions,
    pub force_cpu: bool,
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            request: Request {
                input_text: DEFAULT_INPUT_TEXT.to_string(),
                model_directory: PathBuf::from(DEFAULT_MODEL_DIRECTORY),
            },
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            generation: GenerationOptions::default(),
            force_cpu: false,
            quiet: false,
        }
    }
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            request: Request {
                input_text: args.input_text.to_string_lossy().into_owned(),
                model_directory: args.model_directory,
            },
            output_path: args.output_path,
            generation: GenerationOptions::default()
                .num_return_sequences(args.num_return_sequences)
                .max_length(args.max_length)
                .seed(args.seed),
            force_cpu: args.cpu,
            quiet: args.quiet,
        }
    }
}
