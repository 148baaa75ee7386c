use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-ai")]
#[command(about = "ポートフォリオと求人票をAIバックエンドで評価する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドのベースURL（デフォルト: $PORTFOLIO_AI_BACKEND または http://127.0.0.1:5000）
    #[arg(long, global = true)]
    pub backend: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 利用可能なモデル一覧を表示
    Models {
        /// APIキー（デフォルト: $GEMINI_API_KEY）
        #[arg(long)]
        api_key: Option<String>,
    },

    /// ポートフォリオを求人票に照らして評価
    Analyze {
        /// ポートフォリオURL
        #[arg(short, long)]
        url: Option<String>,

        /// 求人票テキスト
        #[arg(long, conflicts_with = "jd_file")]
        jd: Option<String>,

        /// 求人票ファイル（`-` で標準入力）
        #[arg(long)]
        jd_file: Option<PathBuf>,

        /// モデルID（デフォルト: gemini-1.5-flash）
        #[arg(short, long)]
        model: Option<String>,

        /// APIキー（デフォルト: $GEMINI_API_KEY）
        #[arg(long)]
        api_key: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// APIキー未設定時に設定ダイアログを開かない
        #[arg(long)]
        no_prompt: bool,
    },

    /// 対話的にAPIキーとモデルを選ぶ（保存はしない）
    Settings {
        /// APIキー（省略時は入力を求める）
        #[arg(long)]
        api_key: Option<String>,
    },
}
