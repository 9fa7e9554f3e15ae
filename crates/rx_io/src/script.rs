// crates/rx_io/src/script.rs

//! 卡片脚本写出
//!
//! 文档必须整体渲染完成后才写盘：失败发生在渲染阶段时磁盘上不会
//! 留下半成品文件。写入本身是一次性的 `fs::write`。

use std::path::Path;

use rx_foundation::error::{RxError, RxResult};

/// 将渲染完成的脚本文档写入文件
///
/// 父目录不存在时自动创建。
pub fn write_script<P: AsRef<Path>>(path: P, document: &str) -> RxResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RxError::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }
    }

    std::fs::write(path, document)
        .map_err(|e| RxError::io_with_source(format!("Failed to write {}", path.display()), e))
}
