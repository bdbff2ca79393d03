//! Calculator session state.
//!
//! Holds the current inputs and the latest results the way the calculator
//! form does: every edit replaces the inputs and recomputes the results in
//! full. Results start out absent, so exporting before the first
//! calculation is refused.

use crate::engine::compute;
use crate::errors::Result;
use crate::io::OutputDestination;
use crate::model::{CampaignInputs, CampaignResults, InputField};
use crate::notify::{Notice, Notifier};
use crate::report::{ExportFormat, ReportExporter};

#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    inputs: CampaignInputs,
    results: Option<CampaignResults>,
}

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub format: ExportFormat,
    pub destination: String,
    pub bytes_written: usize,
}

impl CalculatorSession {
    /// A session with `inputs` and no results yet.
    pub fn new(inputs: CampaignInputs) -> Self {
        Self {
            inputs,
            results: None,
        }
    }

    pub fn inputs(&self) -> CampaignInputs {
        self.inputs
    }

    pub fn results(&self) -> Option<&CampaignResults> {
        self.results.as_ref()
    }

    pub fn recalculate(&mut self) -> &CampaignResults {
        self.results.insert(compute(self.inputs))
    }

    /// Apply one field edit and recompute.
    pub fn edit(&mut self, field: InputField, value: f64) -> &CampaignResults {
        self.inputs.set(field, value);
        self.recalculate()
    }

    /// Replace every input at once and recompute.
    pub fn replace_inputs(&mut self, inputs: CampaignInputs) -> &CampaignResults {
        self.inputs = inputs;
        self.recalculate()
    }

    /// Export the current inputs and results to `destination`.
    ///
    /// The exporter works on copies taken here, so later edits never leak
    /// into a document being saved. Success and failure are both reported
    /// through `notifier` as well as the returned result.
    pub fn export(
        &self,
        exporter: &ReportExporter,
        destination: &dyn OutputDestination,
        notifier: &dyn Notifier,
    ) -> Result<ExportReceipt> {
        let outcome = exporter
            .export(self.inputs, self.results)
            .and_then(|document| {
                destination.write_bytes(&document.bytes)?;
                Ok(ExportReceipt {
                    file_name: document.file_name,
                    format: document.format,
                    destination: destination.description(),
                    bytes_written: document.bytes.len(),
                })
            });

        match &outcome {
            Ok(receipt) => {
                log::info!(
                    "Exported {} to {}",
                    receipt.file_name,
                    receipt.destination
                );
                notifier.notify(&Notice::export_succeeded(
                    receipt.format,
                    &receipt.destination,
                ));
            }
            Err(e) => {
                log::warn!("Export failed: {}", e);
                notifier.notify(&Notice::export_failed(e));
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RoiError;
    use crate::io::MemoryDestination;
    use crate::notify::{NoticeKind, RecordingNotifier};

    struct FailingDestination;

    impl OutputDestination for FailingDestination {
        fn write_bytes(&self, _content: &[u8]) -> Result<()> {
            Err(RoiError::io("disk full"))
        }

        fn description(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_new_session_has_no_results() {
        let session = CalculatorSession::new(CampaignInputs::default());
        assert!(session.results().is_none());
    }

    #[test]
    fn test_export_before_calculation_is_refused() {
        let session = CalculatorSession::new(CampaignInputs::default());
        let destination = MemoryDestination::new();
        let notifier = RecordingNotifier::new();

        let err = session
            .export(&ReportExporter::default(), &destination, &notifier)
            .unwrap_err();

        assert!(matches!(err, RoiError::NoResultsAvailable));
        assert!(destination.is_empty());
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Failure);
        assert_eq!(notices[0].title, "Nothing to export");
    }

    #[test]
    fn test_edit_recomputes_results() {
        let mut session = CalculatorSession::new(CampaignInputs::default());
        assert_eq!(session.recalculate().number_of_emails, 40_000);

        let results = session.edit(InputField::CampaignFrequency, 8.0);
        assert_eq!(results.number_of_emails, 80_000);
        assert_eq!(session.inputs().campaign_frequency, 8);
    }

    #[test]
    fn test_replace_inputs_discards_previous_results() {
        let mut session = CalculatorSession::new(CampaignInputs::default());
        session.recalculate();
        let replacement = CampaignInputs {
            email_list_size: 1_000,
            campaign_frequency: 1,
            ..CampaignInputs::default()
        };
        assert_eq!(session.replace_inputs(replacement).number_of_emails, 1_000);
    }

    #[test]
    fn test_successful_export_writes_and_notifies() {
        let mut session = CalculatorSession::new(CampaignInputs::default());
        session.recalculate();
        let destination = MemoryDestination::new();
        let notifier = RecordingNotifier::new();

        let receipt = session
            .export(&ReportExporter::default(), &destination, &notifier)
            .unwrap();

        assert_eq!(receipt.file_name, "Email_Marketing_ROI_Analysis.pdf");
        assert_eq!(receipt.bytes_written, destination.len());
        assert!(destination.get_content().starts_with(b"%PDF"));
        assert_eq!(notifier.notices()[0].title, "PDF Generated Successfully");
    }

    #[test]
    fn test_failed_save_is_reported_and_state_untouched() {
        let mut session = CalculatorSession::new(CampaignInputs::default());
        let before = *session.recalculate();
        let notifier = RecordingNotifier::new();

        let err = session
            .export(&ReportExporter::default(), &FailingDestination, &notifier)
            .unwrap_err();

        assert!(matches!(err, RoiError::Io { .. }));
        assert_eq!(session.results(), Some(&before));
        assert_eq!(notifier.notices()[0].kind, NoticeKind::Failure);
    }
}
