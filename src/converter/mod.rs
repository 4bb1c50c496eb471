//! Batch conversion of diagram files through the rendering tool

pub mod discovery;

pub use discovery::discover_jobs;

use crate::config::RenderSettings;
use crate::error::{GalleryError, JobFailure};
use crate::filesystem::FileSystem;
use crate::models::{BatchReport, ConversionJob, ConversionResult, ProducedFile};
use crate::observer::RunObserver;
use crate::process::CommandRunner;
use std::path::Path;

/// Renders diagrams one at a time with a fixed program and settings
pub struct BatchConverter<'a> {
    program: &'a str,
    settings: &'a RenderSettings,
    runner: &'a dyn CommandRunner,
    fs: &'a dyn FileSystem,
}

impl<'a> BatchConverter<'a> {
    pub fn new(
        program: &'a str,
        settings: &'a RenderSettings,
        runner: &'a dyn CommandRunner,
        fs: &'a dyn FileSystem,
    ) -> Self {
        Self {
            program,
            settings,
            runner,
            fs,
        }
    }

    /// Convert every job in order. A failed job never stops the batch;
    /// only an uncreatable output directory is fatal.
    pub fn convert_all(
        &self,
        jobs: &[ConversionJob],
        output_dir: &Path,
        observer: &mut dyn RunObserver,
    ) -> Result<BatchReport, GalleryError> {
        self.fs
            .create_dir_all(output_dir)
            .map_err(|source| GalleryError::OutputDirectory {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let total = jobs.len();
        observer.batch_started(total);

        let mut report = BatchReport {
            results: Vec::with_capacity(total),
        };
        for (index, job) in jobs.iter().enumerate() {
            observer.job_started(index, total, job);
            let result = self.convert_one(job, output_dir);
            if let Some(failure) = &result.failure {
                tracing::warn!(input = %job.input_path.display(), %failure, "conversion failed");
            }
            observer.job_finished(index, total, &result);
            report.results.push(result);
        }
        Ok(report)
    }

    /// One attempt, no retry
    pub fn convert_one(&self, job: &ConversionJob, output_dir: &Path) -> ConversionResult {
        if !self.fs.exists(&job.input_path) {
            return ConversionResult::failed(job.clone(), JobFailure::InputMissing);
        }

        let output_path = output_dir.join(&job.output_path);
        let args = self.settings.args(&job.input_path, &output_path);

        let failure = match self.runner.run(self.program, &args) {
            Err(e) => Some(JobFailure::ToolInvocationFailed(format!(
                "failed to run {}: {e}",
                self.program
            ))),
            Ok(output) if !output.success() => {
                Some(JobFailure::ToolInvocationFailed(output.diagnostic()))
            }
            Ok(_) if !self.fs.exists(&output_path) => Some(JobFailure::OutputMissingAfterSuccess),
            Ok(_) => None,
        };

        match failure {
            Some(failure) => ConversionResult::failed(job.clone(), failure),
            None => ConversionResult::success(job.clone()),
        }
    }
}

/// Convert `jobs` with `settings`, writing into `output_dir`
pub fn convert_all(
    jobs: &[ConversionJob],
    output_dir: &Path,
    program: &str,
    settings: &RenderSettings,
    runner: &dyn CommandRunner,
    fs: &dyn FileSystem,
    observer: &mut dyn RunObserver,
) -> Result<BatchReport, GalleryError> {
    BatchConverter::new(program, settings, runner, fs).convert_all(jobs, output_dir, observer)
}

/// Every file with `extension` in `output_dir` with its size, sorted by
/// name. A missing directory yields an empty list.
pub fn produced_files(
    fs: &dyn FileSystem,
    output_dir: &Path,
    extension: &str,
) -> std::io::Result<Vec<ProducedFile>> {
    if !fs.is_dir(output_dir) {
        return Ok(Vec::new());
    }

    let mut produced = Vec::new();
    for path in fs.list_files(output_dir, extension)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        produced.push(ProducedFile {
            file_name: name.to_string_lossy().to_string(),
            size_bytes: fs.file_size(&path)?,
        });
    }
    Ok(produced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFileSystem;
    use crate::observer::SilentObserver;
    use crate::process::CommandOutput;
    use std::cell::RefCell;
    use std::io;
    use std::path::PathBuf;

    /// Fake renderer: writes the `-o` file unless the input is listed as
    /// broken or silent.
    struct FakeRenderer<'a> {
        fs: &'a MemoryFileSystem,
        broken: Vec<&'static str>,
        silent: Vec<&'static str>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl<'a> FakeRenderer<'a> {
        fn new(fs: &'a MemoryFileSystem) -> Self {
            Self {
                fs,
                broken: Vec::new(),
                silent: Vec::new(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRenderer<'_> {
        fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
            assert_eq!(program, "mmdc");
            self.calls.borrow_mut().push(args.to_vec());
            let input = args[1].as_str();
            let output = PathBuf::from(&args[3]);

            if self.broken.iter().any(|b| *b == input) {
                return Ok(CommandOutput {
                    status: Some(1),
                    stdout: String::new(),
                    stderr: "Error: Parse error on line 2".to_string(),
                });
            }
            if !self.silent.iter().any(|s| *s == input) {
                self.fs.write(&output, b"\x89PNG")?;
            }
            Ok(CommandOutput {
                status: Some(0),
                ..Default::default()
            })
        }
    }

    fn jobs() -> Vec<ConversionJob> {
        vec![
            ConversionJob::new("d/a.mmd", "a.png"),
            ConversionJob::new("d/b.mmd", "b.png"),
            ConversionJob::new("d/c.mmd", "c.png"),
        ]
    }

    #[test]
    fn test_one_result_per_job_in_order() {
        let fs = MemoryFileSystem::new();
        fs.add_file("d/a.mmd", "graph TD; A-->B");
        fs.add_file("d/b.mmd", "graph TD; B-->C");
        fs.add_file("d/c.mmd", "graph TD; C-->D");
        let runner = FakeRenderer::new(&fs);
        let settings = RenderSettings::default();

        let report = convert_all(
            &jobs(),
            Path::new("out"),
            "mmdc",
            &settings,
            &runner,
            &fs,
            &mut SilentObserver,
        )
        .unwrap();

        let inputs: Vec<_> = report.results.iter().map(|r| r.job.input_path.clone()).collect();
        assert_eq!(
            inputs,
            vec![PathBuf::from("d/a.mmd"), PathBuf::from("d/b.mmd"), PathBuf::from("d/c.mmd")]
        );
        assert_eq!(report.summary().succeeded, 3);
        assert_eq!(fs.file_names(Path::new("out")), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_missing_input_never_spawns() {
        let fs = MemoryFileSystem::new();
        fs.add_file("d/b.mmd", "graph TD; B-->C");
        let runner = FakeRenderer::new(&fs);
        let settings = RenderSettings::default();
        let converter = BatchConverter::new("mmdc", &settings, &runner, &fs);

        let result = converter.convert_one(&ConversionJob::new("d/a.mmd", "a.png"), Path::new("out"));

        assert_eq!(result.failure, Some(JobFailure::InputMissing));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_failures_are_isolated() {
        let fs = MemoryFileSystem::new();
        fs.add_file("d/a.mmd", "broken");
        fs.add_file("d/b.mmd", "silent");
        fs.add_file("d/c.mmd", "graph TD; C-->D");
        let mut runner = FakeRenderer::new(&fs);
        runner.broken.push("d/a.mmd");
        runner.silent.push("d/b.mmd");
        let settings = RenderSettings::default();

        let report = convert_all(
            &jobs(),
            Path::new("out"),
            "mmdc",
            &settings,
            &runner,
            &fs,
            &mut SilentObserver,
        )
        .unwrap();

        assert_eq!(
            report.results[0].failure,
            Some(JobFailure::ToolInvocationFailed("Error: Parse error on line 2".to_string()))
        );
        assert_eq!(report.results[1].failure, Some(JobFailure::OutputMissingAfterSuccess));
        assert!(report.results[2].succeeded());
        assert_eq!(runner.calls.borrow().len(), 3);
    }

    #[test]
    fn test_uncreatable_output_dir_is_fatal() {
        let fs = MemoryFileSystem::new();
        fs.add_file("out", "not a directory");
        let runner = FakeRenderer::new(&fs);
        let settings = RenderSettings::default();

        let err = convert_all(
            &jobs(),
            Path::new("out"),
            "mmdc",
            &settings,
            &runner,
            &fs,
            &mut SilentObserver,
        )
        .unwrap_err();

        assert!(matches!(err, GalleryError::OutputDirectory { .. }));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_produced_files_sorted_with_sizes() {
        let fs = MemoryFileSystem::new();
        fs.add_file("out/b.png", vec![0u8; 2048]);
        fs.add_file("out/a.png", vec![0u8; 10]);
        fs.add_file("out/index.html", "<html>");

        let produced = produced_files(&fs, Path::new("out"), "png").unwrap();
        assert_eq!(
            produced,
            vec![
                ProducedFile { file_name: "a.png".to_string(), size_bytes: 10 },
                ProducedFile { file_name: "b.png".to_string(), size_bytes: 2048 },
            ]
        );
        assert!(produced_files(&fs, Path::new("missing"), "png").unwrap().is_empty());
    }
}
