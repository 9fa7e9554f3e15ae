// crates/rx_io/src/runner.rs

//! 脚本执行
//!
//! 阻塞式执行生成的卡片脚本。求解器的输出与退出码原样捕获返回，
//! 本模块不做任何解释：非零退出同样是 `Ok(ScriptOutput)`，
//! 由调用方自行处置。

use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// 运行器错误
///
/// 仅覆盖进程无法启动等机制性失败；求解器自身的失败不在此列。
#[derive(Debug, Error)]
pub enum RunnerError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 一次脚本执行的捕获结果
#[derive(Debug)]
pub struct ScriptOutput {
    /// 退出状态，原样返回
    pub status: ExitStatus,
    /// 标准输出
    pub stdout: String,
    /// 标准错误
    pub stderr: String,
}

impl ScriptOutput {
    /// 退出码为零
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// 以 shell 执行脚本内容，等待结束并捕获输出
pub fn run_script(document: &str) -> Result<ScriptOutput, RunnerError> {
    let output = Command::new("sh").arg("-c").arg(document).output()?;
    Ok(ScriptOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// 以 shell 执行脚本文件，等待结束并捕获输出
pub fn run_script_file(path: &Path) -> Result<ScriptOutput, RunnerError> {
    let output = Command::new("sh").arg(path).output()?;
    Ok(ScriptOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout() {
        let output = run_script("echo deck ready").unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "deck ready");
    }

    #[test]
    fn test_nonzero_exit_is_not_an_error() {
        let output = run_script("echo oops >&2; exit 3").unwrap();
        assert!(!output.success());
        assert_eq!(output.status.code(), Some(3));
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[test]
    fn test_run_script_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.sh");
        std::fs::write(&path, "echo from file\n").unwrap();
        let output = run_script_file(&path).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "from file");
    }
}
