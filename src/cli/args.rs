// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use northwind_domain::options::QueryKind;

use super::{parsers::MoneyArg, value_enum::CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "northwind_reports",
    version = crate::VERSION,
    about = "顧客・仕入先・商品カタログの分析レポート"
)]
pub struct Args {
    /// カタログファイル（.json / .yaml）
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// 実行するクエリ（複数可, 省略時はすべて）。例: city-profiles,price-tiers
    #[arg(long, value_delimiter = ',', help_heading = "クエリ")]
    pub query: Vec<QueryKind>,

    /// 注文合計のしきい値（この値を超える顧客を対象）
    #[arg(long, default_value = "0", allow_negative_numbers = true, help_heading = "クエリ")]
    pub limit: MoneyArg,

    /// 「安価」価格帯の上限（含む）
    #[arg(long, default_value = "10", allow_negative_numbers = true, help_heading = "価格帯")]
    pub cheap: MoneyArg,

    /// 「中価格」価格帯の上限（含む）
    #[arg(long, default_value = "20", allow_negative_numbers = true, help_heading = "価格帯")]
    pub middle: MoneyArg,

    /// 「高価」価格帯の上限（含む）
    #[arg(long, default_value = "30", allow_negative_numbers = true, help_heading = "価格帯")]
    pub expensive: MoneyArg,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ログを詳細化（-v: info, -vv: debug）
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "ログ")]
    pub verbose: u8,

    /// ログを出力しない
    #[arg(short, long, help_heading = "ログ")]
    pub quiet: bool,
}
