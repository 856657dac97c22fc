//! Text renderers for finished trajectories.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use tc_sim::{SeriesLabels, SimError, SimResult, Trajectory, TrajectorySink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Time t, Temp: x` line per step
    Table,
    /// `step,temperature,setpoint` rows
    Csv,
    /// Labels, setpoint and samples as one JSON object
    Json,
}

/// Build a sink for the chosen format writing to `out`.
pub fn sink_for<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn TrajectorySink + 'a> {
    match format {
        OutputFormat::Table => Box::new(TableSink { out }),
        OutputFormat::Csv => Box::new(CsvSink { out }),
        OutputFormat::Json => Box::new(JsonSink { out }),
    }
}

pub struct TableSink<W: Write> {
    out: W,
}

impl<W: Write> TrajectorySink for TableSink<W> {
    fn render(
        &mut self,
        series: &Trajectory,
        reference_line: f64,
        labels: &SeriesLabels,
    ) -> SimResult<()> {
        writeln!(
            self.out,
            "# {} vs {} = {:.2}",
            labels.series_label, labels.reference_label, reference_line
        )?;
        for (t, temp) in series.iter() {
            writeln!(self.out, "Time {}, Temp: {:.2}", t, temp)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> TrajectorySink for CsvSink<W> {
    fn render(
        &mut self,
        series: &Trajectory,
        reference_line: f64,
        _labels: &SeriesLabels,
    ) -> SimResult<()> {
        writeln!(self.out, "step,temperature,setpoint")?;
        for (t, temp) in series.iter() {
            writeln!(self.out, "{},{},{}", t, temp, reference_line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

pub struct JsonSink<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct JsonPlot<'a> {
    series_label: &'a str,
    reference_label: &'a str,
    setpoint: f64,
    samples: &'a Trajectory,
}

impl<W: Write> TrajectorySink for JsonSink<W> {
    fn render(
        &mut self,
        series: &Trajectory,
        reference_line: f64,
        labels: &SeriesLabels,
    ) -> SimResult<()> {
        let plot = JsonPlot {
            series_label: &labels.series_label,
            reference_label: &labels.reference_label,
            setpoint: reference_line,
            samples: series,
        };
        serde_json::to_writer_pretty(&mut self.out, &plot).map_err(|e| SimError::Render {
            message: e.to_string(),
        })?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
