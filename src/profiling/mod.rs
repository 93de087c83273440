//! CPUプロファイリングのスコープ管理
//!
//! `ProfileSession::start()` でサンプリングプロファイラを起動し、
//! `finish()` で停止してプロファイルを書き出す。`finish()` に到達しなかった
//! 場合（早期リターン、`?`、パニックの巻き戻し）でも `Drop` で必ず停止・書き出しする。

use crate::core::{BenchError, BenchResult, ValidationError, ValidationResult};
use std::path::PathBuf;

/// サンプリング周波数のデフォルト（Hz）
pub const DEFAULT_FREQUENCY: i32 = 100;

/// プロファイルの出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ProfileFormat {
    /// pprof プロトコルバッファ形式（`pprof` ツールで読める）
    #[default]
    Pprof,
    /// フレームグラフ SVG
    Flamegraph,
}

impl ProfileFormat {
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Pprof => "cpu.pprof",
            Self::Flamegraph => "cpu.svg",
        }
    }
}

/// プロファイリング設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    output_dir: Option<PathBuf>,
    format: ProfileFormat,
    frequency: i32,
}

impl ProfileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_format(mut self, format: ProfileFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_frequency(mut self, frequency: i32) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn format(&self) -> ProfileFormat {
        self.format
    }

    pub fn frequency(&self) -> i32 {
        self.frequency
    }

    /// 出力先ファイルのパス
    ///
    /// ディレクトリ未指定時は `<一時ディレクトリ>/profile<pid>/` を使う。
    pub fn output_path(&self) -> PathBuf {
        let dir = self.output_dir.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(format!("profile{}", std::process::id()))
        });
        dir.join(self.format.file_name())
    }

    fn validate(&self) -> ValidationResult<()> {
        if self.frequency <= 0 {
            return Err(ValidationError::new(
                "frequency",
                format!("サンプリング周波数は1以上である必要があります: {}", self.frequency),
            ));
        }
        Ok(())
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            format: ProfileFormat::default(),
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

/// 実行中のプロファイリングセッション
pub struct ProfileSession {
    inner: Option<backend::Guard>,
    output_path: PathBuf,
    format: ProfileFormat,
}

impl ProfileSession {
    /// プロファイラを起動
    pub fn start(config: ProfileConfig) -> BenchResult<Self> {
        config.validate()?;

        let output_path = config.output_path();
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BenchError::report(parent.display().to_string(), e))?;
        }

        let guard = backend::start(config.frequency())?;
        eprintln!(
            "profile: cpu profiling enabled, {}",
            output_path.display()
        );

        Ok(Self {
            inner: Some(guard),
            output_path,
            format: config.format(),
        })
    }

    /// プロファイラを停止してプロファイルを書き出す
    pub fn finish(mut self) -> BenchResult<PathBuf> {
        self.flush()?;
        Ok(self.output_path.clone())
    }

    fn flush(&mut self) -> BenchResult<()> {
        let Some(guard) = self.inner.take() else {
            return Ok(());
        };
        backend::write(guard, &self.output_path, self.format)?;
        eprintln!(
            "profile: cpu profiling disabled, {}",
            self.output_path.display()
        );
        Ok(())
    }
}

impl Drop for ProfileSession {
    fn drop(&mut self) {
        if let Err(error) = self.flush() {
            eprintln!("⚠️  プロファイルの書き出しに失敗しました: {error}");
        }
    }
}

#[cfg(unix)]
mod backend {
    use super::ProfileFormat;
    use crate::core::{BenchError, BenchResult};
    use pprof::protos::Message;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;

    pub type Guard = pprof::ProfilerGuard<'static>;

    pub fn start(frequency: i32) -> BenchResult<Guard> {
        pprof::ProfilerGuardBuilder::default()
            .frequency(frequency)
            .blocklist(&["libc", "libgcc", "pthread", "vdso"])
            .build()
            .map_err(BenchError::profiling)
    }

    pub fn write(guard: Guard, path: &Path, format: ProfileFormat) -> BenchResult<()> {
        let report = guard.report().build().map_err(BenchError::profiling)?;
        // レポート作成後にサンプリングを止める
        drop(guard);

        let report_error = |e: anyhow::Error| BenchError::report(path.display().to_string(), e);
        let mut file = File::create(path).map_err(|e| report_error(e.into()))?;

        match format {
            ProfileFormat::Pprof => {
                let profile = report.pprof().map_err(BenchError::profiling)?;
                let mut content = Vec::new();
                profile
                    .encode(&mut content)
                    .map_err(|e| report_error(e.into()))?;
                file.write_all(&content).map_err(|e| report_error(e.into()))?;
            }
            ProfileFormat::Flamegraph => {
                report
                    .flamegraph(&mut file)
                    .map_err(|e| report_error(e.into()))?;
            }
        }
        Ok(())
    }
}

#[cfg(not(unix))]
mod backend {
    use super::ProfileFormat;
    use crate::core::{BenchError, BenchResult};
    use std::path::Path;

    pub struct Guard;

    pub fn start(_frequency: i32) -> BenchResult<Guard> {
        Err(BenchError::ProfilingUnsupported)
    }

    pub fn write(_guard: Guard, _path: &Path, _format: ProfileFormat) -> BenchResult<()> {
        Err(BenchError::ProfilingUnsupported)
    }
}
