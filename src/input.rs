use crate::error::{PortfolioAiError, Result};
use std::io::Read;
use std::path::Path;

/// 求人票テキストを取得する
///
/// `--jd` の値を優先し、なければ `--jd-file` を読む（`-` は標準入力）。
/// どちらも無ければ空文字を返し、空欄チェックは画面側の検証に任せる。
pub fn read_job_description(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    match file {
        Some(path) if path == Path::new("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => {
            if !path.exists() {
                return Err(PortfolioAiError::FileNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => Ok(String::new()),
    }
}
