// crates/rx_deck/src/envelope.rs

//! shell 脚本外壳
//!
//! 参数文档通过 heredoc 喂给求解器，外壳部分依次为：嵌入脚本基名的
//! 解释器行、由 `$0` 推导的工作目录变量、目录存在性保护、带输出开关
//! 与并行度的求解器调用行。外壳是文件名、开关与并行度的纯函数。

use std::path::Path;

/// 求解器输出开关
///
/// 每个开关为真时映射为一个带结尾空格的命令行标志，为假时为空串。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// 不输出投影坐标
    pub no_proj_output: bool,
    /// 不输出应力
    pub no_stress_output: bool,
    /// 不输出 VTK
    pub no_vtk_output: bool,
    /// 不输出 GRD
    pub no_grd_output: bool,
}

impl OutputOptions {
    /// 拼接命令行标志串
    pub fn flag_string(&self) -> String {
        let mut flags = String::new();
        if self.no_proj_output {
            flags.push_str("--no-proj-output ");
        }
        if self.no_stress_output {
            flags.push_str("--no-stress-output ");
        }
        if self.no_vtk_output {
            flags.push_str("--no-vtk-output ");
        }
        if self.no_grd_output {
            flags.push_str("--no-grd-output ");
        }
        flags
    }
}

/// 脚本基名：去掉最后一个扩展名段
pub fn script_base_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// 主机可用并行度，原样写入环境变量
pub fn host_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

/// 渲染外壳分区
pub fn render_envelope(script_filename: &str, options: &OutputOptions, threads: usize) -> String {
    let base = script_base_name(script_filename);
    format!(
        "#!/bin/bash {base}\n\
         WDIR=$(basename \"$0\" .sh)\n\
         \n\
         if [ ! -e $WDIR ]; then\n\
         \techo adding directory $WDIR\n\
         \tmkdir $WDIR\n\
         fi\n\
         \n\
         OMP_NUM_THREADS={threads} relax {flags}<<EOF | tee $WDIR/in.param\n",
        base = base,
        threads = threads,
        flags = options.flag_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_string_trailing_spaces() {
        let options = OutputOptions {
            no_proj_output: true,
            no_grd_output: true,
            ..OutputOptions::default()
        };
        assert_eq!(options.flag_string(), "--no-proj-output --no-grd-output ");
        assert_eq!(OutputOptions::default().flag_string(), "");
    }

    #[test]
    fn test_script_base_name() {
        assert_eq!(script_base_name("relax.sh"), "relax");
        assert_eq!(script_base_name("results/coseismic.sh"), "coseismic");
        // 带点的目录名不影响基名推导
        assert_eq!(script_base_name("run.v2/coseismic.sh"), "coseismic");
        assert_eq!(script_base_name("relax"), "relax");
    }

    #[test]
    fn test_envelope_invocation_line() {
        let options = OutputOptions {
            no_proj_output: true,
            ..OutputOptions::default()
        };
        let text = render_envelope("coseismic.sh", &options, 8);
        assert!(text.starts_with("#!/bin/bash coseismic\n"));
        assert!(text.contains("WDIR=$(basename \"$0\" .sh)"));
        assert!(text.contains("\tmkdir $WDIR\n"));
        assert!(text.ends_with(
            "OMP_NUM_THREADS=8 relax --no-proj-output <<EOF | tee $WDIR/in.param\n"
        ));
    }

    #[test]
    fn test_envelope_without_flags() {
        let text = render_envelope("relax.sh", &OutputOptions::default(), 4);
        assert!(text.contains("OMP_NUM_THREADS=4 relax <<EOF | tee $WDIR/in.param"));
    }
}
