//! CLI argument definitions

use crate::domain::{keep_count, KeepTier, NamingTemplate, RetentionPolicy};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filetimegen")]
#[command(
    about = "Outputs a file name embedding the current time, or the names to delete under a retention policy",
    long_about = "Outputs a filename according to <TEMPLATE>. Every {now} in the template is \
    replaced with the current local time (YYYY-MM-DDTHH:MM:SS).\n\n\
    With --prune, a list of names is read from stdin (NUL separated) and the names \
    that should be discarded according to the --keep-* options are printed."
)]
#[command(version)]
pub struct Cli {
    /// Naming template; must contain {now} somewhere
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Read existing names and print those that should be deleted
    #[arg(long)]
    pub prune: bool,

    /// Use newlines instead of NUL separators for input and output
    #[arg(long)]
    pub newline: bool,

    /// Number of minutely snapshots to keep
    #[arg(short = 'M', long, value_name = "N", allow_negative_numbers = true)]
    pub keep_minutely: Option<i64>,

    /// Number of hourly snapshots to keep
    #[arg(short = 'H', long, value_name = "N", allow_negative_numbers = true)]
    pub keep_hourly: Option<i64>,

    /// Number of daily snapshots to keep
    #[arg(short = 'd', long, value_name = "N", allow_negative_numbers = true)]
    pub keep_daily: Option<i64>,

    /// Number of weekly snapshots to keep
    #[arg(short = 'w', long, value_name = "N", allow_negative_numbers = true)]
    pub keep_weekly: Option<i64>,

    /// Number of monthly snapshots to keep
    #[arg(short = 'm', long, value_name = "N", allow_negative_numbers = true)]
    pub keep_monthly: Option<i64>,

    /// TOML file with default keep counts
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Take candidate names from the entries of a directory instead of stdin
    #[arg(long, value_name = "DIR", requires = "prune")]
    pub dir: Option<PathBuf>,

    /// Log keep/prune decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn keep_flag(&self, tier: KeepTier) -> Option<i64> {
        match tier {
            KeepTier::Minutely => self.keep_minutely,
            KeepTier::Hourly => self.keep_hourly,
            KeepTier::Daily => self.keep_daily,
            KeepTier::Weekly => self.keep_weekly,
            KeepTier::Monthly => self.keep_monthly,
        }
    }

    /// Apply the --keep-* flags on top of `base`, validating each
    pub fn retention_policy(&self, base: RetentionPolicy) -> Result<RetentionPolicy> {
        let mut policy = base;
        for tier in KeepTier::ALL {
            if let Some(value) = self.keep_flag(tier) {
                policy.set(tier, Some(keep_count(value)?));
            }
        }
        Ok(policy)
    }

    pub fn naming_template(&self) -> Result<NamingTemplate> {
        NamingTemplate::parse(&self.template)
    }
}
