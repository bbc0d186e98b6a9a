// file: src/pipeline/hottest.rs
// description: ranks profiled methods by the total of one metric column
// reference: scan, load, sum per file, sort, export

use super::context::RunContext;
use super::progress::{ProgressDisplay, RunStats};
use crate::config::HottestConfig;
use crate::discovery::FileScanner;
use crate::error::Result;
use crate::exporter::CsvExporter;
use crate::parser::TableLoader;
use crate::ranking::{MethodRanker, RankedReport};
use std::path::Path;
use tracing::info;

pub struct HottestPipeline {
    config: HottestConfig,
    display: ProgressDisplay,
}

impl HottestPipeline {
    pub fn new(config: HottestConfig) -> Self {
        Self {
            config,
            display: ProgressDisplay::Colored,
        }
    }

    pub fn with_display(mut self, display: ProgressDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn run(&self, folder: &Path) -> Result<RunStats> {
        let loader = TableLoader::new(self.config.delimiter_byte()?);
        let scanner = FileScanner::new(self.config.suffix.clone());

        let context = RunContext::collect(folder, &scanner, &loader, self.display)?;

        let ranker = MethodRanker::new(self.config.metric_column);
        info!(
            "Computing sum per method over column {}...",
            ranker.metric_column()
        );
        context.progress.set_message("ranking");
        let sums = ranker.sum_per_file(&context.tables);

        info!("Sorting data...");
        let ranked = ranker.rank(sums);

        info!("Dumping data...");
        let report = RankedReport::build(&ranked, &loader)?;
        let written = CsvExporter::new().write_ranking(&self.config.output, &report)?;

        let mut stats = context.progress.get_stats();
        if written {
            stats.output = Some(self.config.output.clone());
        }
        context.progress.finish();

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::AnalysisError;
    use std::fs;
    use tempfile::TempDir;

    fn pipeline(output: &Path) -> HottestPipeline {
        let mut config = Config::default_config().hottest;
        config.output = output.to_path_buf();
        HottestPipeline::new(config).with_display(ProgressDisplay::Hidden)
    }

    #[test]
    fn test_hottest_ranks_methods() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("hottest_methods.csv");
        fs::write(runs.path().join("a.csv"), "\"A.run()\";4\nloop;6\n").unwrap();
        fs::write(runs.path().join("b.csv"), "\"B.run()\";10\nloop;20\nend;n/a\n").unwrap();
        fs::write(runs.path().join("c.csv"), "\"C.run()\";15\nloop;5\n").unwrap();
        fs::write(runs.path().join("d.txt"), "\"D.run()\";1000\n").unwrap();

        let stats = pipeline(&output).run(runs.path()).unwrap();

        assert_eq!(stats.files_loaded, 3);
        assert_eq!(stats.output, Some(output.clone()));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"B.run()\",\"30\"\n\"C.run()\",\"20\"\n\"A.run()\",\"10\"\n"
        );
    }

    #[test]
    fn test_hottest_ties_follow_file_name_order() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("hottest_methods.csv");
        fs::write(runs.path().join("second.csv"), "Second;20\n").unwrap();
        fs::write(runs.path().join("first.csv"), "First;20\n").unwrap();

        pipeline(&output).run(runs.path()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"First\",\"20\"\n\"Second\",\"20\"\n"
        );
    }

    #[test]
    fn test_file_without_metric_values_reports_zero() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("hottest_methods.csv");
        fs::write(runs.path().join("a.csv"), "Labels;n/a\n").unwrap();
        fs::write(runs.path().join("b.csv"), "Zero;0\n").unwrap();

        pipeline(&output).run(runs.path()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"Labels\",\"0\"\n\"Zero\",\"0\"\n"
        );
    }

    #[test]
    fn test_uncolored_run_still_ranks() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("hottest_methods.csv");
        fs::write(runs.path().join("a.csv"), "A;1\n").unwrap();

        let mut config = Config::default_config().hottest;
        config.output = output.clone();
        let stats = HottestPipeline::new(config)
            .with_display(ProgressDisplay::Plain)
            .run(runs.path())
            .unwrap();

        assert_eq!(stats.output, Some(output));
    }

    #[test]
    fn test_hottest_without_inputs_writes_nothing() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("hottest_methods.csv");

        let result = pipeline(&output).run(runs.path());

        assert!(matches!(result, Err(AnalysisError::NoInput { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_hottest_missing_folder_is_validation_error() {
        let out = TempDir::new().unwrap();
        let output = out.path().join("hottest_methods.csv");

        let result = pipeline(&output).run(Path::new("/nonexistent/runs"));

        assert!(matches!(result, Err(AnalysisError::Validation(_))));
    }
}
