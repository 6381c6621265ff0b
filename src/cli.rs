use clap::Parser;

#[derive(Parser)]
#[command(name = "cloudinary-upload")]
#[command(about = "カテゴリ画像をCloudinaryへアップロードしURLを記録", long_about = None)]
pub struct Cli {
    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verbose() {
        let cli = Cli::try_parse_from(["cloudinary-upload", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["cloudinary-upload"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_args() {
        assert!(Cli::try_parse_from(["cloudinary-upload", "--cloud-name", "x"]).is_err());
    }
}
