// file: src/pipeline/gather.rs
// description: folds every .hash.csv export of a folder into summary.csv
// reference: scan, load, aggregate, export

use super::context::RunContext;
use super::progress::{ProgressDisplay, RunStats};
use crate::aggregate::Aggregator;
use crate::config::GatherConfig;
use crate::discovery::FileScanner;
use crate::error::Result;
use crate::exporter::CsvExporter;
use crate::parser::TableLoader;
use std::path::Path;
use tracing::info;

pub struct GatherPipeline {
    config: GatherConfig,
    display: ProgressDisplay,
}

impl GatherPipeline {
    pub fn new(config: GatherConfig) -> Self {
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

        info!("Computing data...");
        context.progress.set_message("aggregating");
        let summary = Aggregator::aggregate(self.config.policy(), &context.tables);

        info!("Dumping computed data...");
        let written = CsvExporter::new().write_summary(&self.config.output, &summary)?;

        let mut stats = context.progress.get_stats();
        if written {
            stats.output = Some(self.config.output.clone());
        }
        context.progress.finish();

        info!(
            "Summarized {} files in file {}",
            summary.files,
            self.config.output.display()
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::LabelTransition;
    use crate::config::Config;
    use crate::error::AnalysisError;
    use crate::models::Cell;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn pipeline(output: &Path) -> GatherPipeline {
        let mut config = Config::default_config().gather;
        config.output = output.to_path_buf();
        GatherPipeline::new(config).with_display(ProgressDisplay::Hidden)
    }

    #[test]
    fn test_gather_writes_summary() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("summary.csv");
        fs::write(
            runs.path().join("run1.hash.csv"),
            "run1,calls,time\nfoo,1,10\nbar,2,20\n",
        )
        .unwrap();
        fs::write(
            runs.path().join("run2.hash.csv"),
            "run2,calls,time\nfoo,3,5\nbar,1,40\n",
        )
        .unwrap();
        fs::write(runs.path().join("ignored.csv"), "x,100\n").unwrap();

        let stats = pipeline(&output).run(runs.path()).unwrap();

        assert_eq!(stats.files_found, 2);
        assert_eq!(stats.files_loaded, 2);
        assert_eq!(stats.output, Some(output.clone()));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            concat!(
                "\"Max\"\n",
                "\"\",\"calls\",\"time\"\n",
                "\"foo\",\"3\",\"10\"\n",
                "\"bar\",\"2\",\"40\"\n",
                "\"Sum\"\n",
                "\"\",\"calls\",\"time\"\n",
                "\"foo\",\"4\",\"15\"\n",
                "\"bar\",\"3\",\"60\"\n",
            )
        );
    }

    #[test]
    fn test_gather_with_uniform_rules() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("summary.csv");
        fs::write(runs.path().join("a.hash.csv"), "abc,1\n").unwrap();
        fs::write(runs.path().join("b.hash.csv"), "5,2\n").unwrap();
        fs::write(runs.path().join("c.hash.csv"), "7,3\n").unwrap();

        let mut config = Config::default_config().gather;
        config.output = output.clone();
        config.skip_header_row = false;
        config.blank_corner = false;
        config.label_transition = LabelTransition::Reset;
        GatherPipeline::new(config)
            .with_display(ProgressDisplay::Hidden)
            .run(runs.path())
            .unwrap();

        let reloaded = TableLoader::default().load(&output).unwrap();
        assert_eq!(reloaded.height(), 4);
        assert_eq!(reloaded.cell(1, 0), Some(&Cell::Number(7.0)));
        assert_eq!(reloaded.cell(1, 1), Some(&Cell::Number(3.0)));
        assert_eq!(reloaded.cell(3, 0), Some(&Cell::Number(12.0)));
        assert_eq!(reloaded.cell(3, 1), Some(&Cell::Number(6.0)));
    }

    #[test]
    fn test_display_defaults_to_colored_bar() {
        let config = Config::default_config().gather;
        assert_eq!(GatherPipeline::new(config.clone()).display, ProgressDisplay::Colored);

        let plain = GatherPipeline::new(config).with_display(ProgressDisplay::Plain);
        assert_eq!(plain.display, ProgressDisplay::Plain);
    }

    #[test]
    fn test_gather_keeps_rows_aligned_across_blank_lines() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("summary.csv");
        fs::write(runs.path().join("a.hash.csv"), "h,x\nfoo,1\n\nbar,2\n").unwrap();
        fs::write(
            runs.path().join("b.hash.csv"),
            "h,x\nfoo,10\nbaz,20\nbar,30\n",
        )
        .unwrap();

        pipeline(&output).run(runs.path()).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            concat!(
                "\"Max\"\n",
                "\"\",\"x\"\n",
                "\"foo\",\"10\"\n",
                "\"baz\",\"20\"\n",
                "\"bar\",\"30\"\n",
                "\"Sum\"\n",
                "\"\",\"x\"\n",
                "\"foo\",\"11\"\n",
                "\"baz\",\"20\"\n",
                "\"bar\",\"32\"\n",
            )
        );
    }

    #[test]
    fn test_gather_without_inputs_writes_nothing() {
        let runs = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("summary.csv");
        fs::write(runs.path().join("plain.csv"), "a,1\n").unwrap();

        let result = pipeline(&output).run(runs.path());

        assert!(matches!(result, Err(AnalysisError::NoInput { .. })));
        assert!(!output.exists());
    }
}
