use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use delta_tf_idf::export::arff::ArffWriter;
use delta_tf_idf::export::snapshot::save_snapshot;
use delta_tf_idf::{DeltaTfIdfVectorizer, ExportConfig, FileSource, IdfScheme, TfScheme, WeightingConfig};
use log::{error, info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Turn two files of one-line documents into a Delta TF-IDF weighted ARFF dataset
struct Args {
    /// File with the class 1 documents, one per line
    #[arg(long)]
    class1: PathBuf,
    /// File with the class 2 documents, one per line
    #[arg(long)]
    class2: PathBuf,
    /// TF scheme: natural, logarithm, augmented or boolean
    #[arg(long, default_value_t = TfScheme::Augmented)]
    tf: TfScheme,
    /// IDF scheme: normal_idf, prob, bm25, delta, delta_smoothed, delta_prob or delta_prob_smoothed
    #[arg(long, default_value_t = IdfScheme::DeltaSmoothed)]
    idf: IdfScheme,
    /// Where to write the ARFF dataset
    #[arg(short, long, default_value = "output.arff")]
    output: PathBuf,
    /// ARFF relation name
    #[arg(long, default_value = "tweets")]
    relation: String,
    /// Class 1 name in the ARFF file
    #[arg(long, default_value = "pos")]
    class1_name: String,
    /// Class 2 name in the ARFF file
    #[arg(long, default_value = "neg")]
    class2_name: String,
    /// Also write the computed model as CBOR to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {d} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("out", Box::new(console)))
        .logger(Logger::builder().build("delta_tf_idf", level))
        .build(Root::builder().appender("out").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("[warn] logger init failed: {e}");
            }
        }
        Err(e) => eprintln!("[warn] logger config invalid: {e}"),
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = WeightingConfig::new(args.tf, args.idf);
    let vectorizer = DeltaTfIdfVectorizer::from_sources(
        &FileSource::new(&args.class1),
        &FileSource::new(&args.class2),
        config,
    )?;

    let export = ExportConfig {
        relation: args.relation,
        class1_name: args.class1_name,
        class2_name: args.class2_name,
    };
    ArffWriter::new(export).write_to_path(&vectorizer, &args.output)?;

    if let Some(path) = args.snapshot {
        save_snapshot(&vectorizer, &path)?;
        info!("wrote snapshot to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
