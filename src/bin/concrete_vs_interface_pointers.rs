//! 参照レシーバー（参照を返す）の具象呼び出しとトレイトオブジェクト呼び出しを比較
//!
//! 引数なし。プロセス全体をCPUプロファイリングで囲み、2行を出力する。

use anyhow::Result;
use dispatch_bench::cli::{execute_run, RunOptions};
use dispatch_bench::Variant;

fn main() -> Result<()> {
    execute_run(RunOptions::faithful(Variant::Pointer))?;
    Ok(())
}
