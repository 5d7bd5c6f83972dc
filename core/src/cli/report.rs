use crate::types::StructuredReport;
use std::fmt;

/// Text report formatter for a structured report
pub struct TextReport<'a> {
    report: &'a StructuredReport,
    caption: Option<&'a str>,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a StructuredReport) -> Self {
        Self {
            report,
            caption: None,
        }
    }

    /// Includes the source caption above the observations
    pub fn with_caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(caption) = self.caption {
            writeln!(f, "Caption")?;
            writeln!(f, "=======")?;
            writeln!(f, "{}", caption.trim())?;
            writeln!(f)?;
        }

        writeln!(f, "Structured Observations")?;
        writeln!(f, "=======================")?;
        for (category, text) in self.report.iter() {
            writeln!(f, "- {}: {}", category, text)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ReportStructurer;

    #[test]
    fn test_text_report_format() {
        let report = ReportStructurer::default().structure("Moderate cardiomegaly is seen.");
        let output = format!("{}", TextReport::new(&report));

        assert!(output.starts_with("Structured Observations"));
        assert!(output.contains("- Cardiomegaly: Moderate cardiomegaly is seen ."));
        assert!(output.contains("- Edema: No relevant information"));
        assert_eq!(output.lines().filter(|l| l.starts_with("- ")).count(), 14);
    }

    #[test]
    fn test_text_report_with_caption() {
        let report = StructuredReport::empty();
        let output = format!("{}", TextReport::new(&report).with_caption("  Normal study.\n"));

        assert!(output.starts_with("Caption\n=======\nNormal study.\n"));
        let enlarged = output.find("- Enlarged Cardiomediastinum").unwrap();
        let no_finding = output.find("- No Finding").unwrap();
        assert!(enlarged < no_finding);
    }
}
