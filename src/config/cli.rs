use crate::domain::model::ResumeSource;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-gateway")]
#[command(about = "Resume delivery and contact submission for the portfolio backend")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, global = true, value_enum, help = "Override where the resume is served from")]
    pub resume_source: Option<ResumeSourceArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the resolved configuration
    Config {
        #[arg(long, help = "Report configuration problems")]
        check: bool,
    },
    /// Open the resume in the default viewer
    ViewResume,
    /// Save the resume locally
    DownloadResume {
        #[arg(long, default_value = ".")]
        dir: String,
    },
    /// Send a message through the contact endpoint
    SendMessage {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResumeSourceArg {
    Static,
    Backend,
}

impl From<ResumeSourceArg> for ResumeSource {
    fn from(arg: ResumeSourceArg) -> Self {
        match arg {
            ResumeSourceArg::Static => ResumeSource::StaticAsset,
            ResumeSourceArg::Backend => ResumeSource::Backend,
        }
    }
}
