//! Image-generation state machine.
//!
//! `Idle -> Submitting -> Polling -> {Succeeded, Failed} -> Idle`. The web
//! crate drives the polling loop on [`POLL_INTERVAL`]; the loop's liveness
//! condition is the phase itself, so clearing the task id (any terminal
//! transition) tears the timer down. Statuses come from the external job
//! service and are matched as strings.

use std::time::Duration;

use tracing::warn;

use crate::models::GenerateResponse;

/// Fixed delay between status polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Submitting,
    Polling {
        task_id: String,
    },
    Succeeded {
        url: String,
        thumb_url: Option<String>,
    },
    Failed {
        message: String,
    },
}

/// What the driver should do after the submit response.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Job accepted; start the poll loop on the returned task id.
    Poll(String),
    /// Synchronous success, no polling needed.
    Done { url: String },
    Failed,
}

/// What the driver should do after one status poll.
#[derive(Clone, Debug, PartialEq)]
pub enum PollOutcome {
    /// Still pending/started; poll again after the interval.
    Continue,
    /// Terminal success; persist a wallpaper from the output URL.
    Done { url: String },
    /// Terminal failure; the loop stops.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Generation {
    phase: GenerationPhase,
}

impl Generation {
    pub fn phase(&self) -> &GenerationPhase {
        &self.phase
    }

    pub fn task_id(&self) -> Option<&str> {
        match &self.phase {
            GenerationPhase::Polling { task_id } => Some(task_id),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            GenerationPhase::Submitting | GenerationPhase::Polling { .. }
        )
    }

    /// The output URL once generation has succeeded, for the preview pane
    /// and the manual save action.
    pub fn result_url(&self) -> Option<&str> {
        match &self.phase {
            GenerationPhase::Succeeded { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            GenerationPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting`, clearing any prior result or error.
    pub fn begin_submit(&mut self) {
        self.phase = GenerationPhase::Submitting;
    }

    pub fn on_submit_response(&mut self, resp: GenerateResponse) -> SubmitOutcome {
        debug_assert!(matches!(self.phase, GenerationPhase::Submitting));
        match (resp.status.as_str(), resp.task_id, resp.url_path) {
            ("pending" | "started", Some(task_id), _) => {
                self.phase = GenerationPhase::Polling {
                    task_id: task_id.clone(),
                };
                SubmitOutcome::Poll(task_id)
            }
            ("success", _, Some(url)) => {
                self.phase = GenerationPhase::Succeeded {
                    url: url.clone(),
                    thumb_url: resp.url_path_thumb,
                };
                SubmitOutcome::Done { url }
            }
            (status, _, _) => {
                let message = resp
                    .error
                    .unwrap_or_else(|| format!("unexpected generation status \"{status}\""));
                warn!(%message, "generation submit rejected");
                self.phase = GenerationPhase::Failed { message };
                SubmitOutcome::Failed
            }
        }
    }

    /// Apply one status-poll response. Only meaningful while `Polling`; a
    /// late response after a terminal transition is ignored.
    pub fn on_status(&mut self, resp: GenerateResponse) -> PollOutcome {
        if !matches!(self.phase, GenerationPhase::Polling { .. }) {
            return PollOutcome::Failed;
        }
        match (resp.status.as_str(), resp.url_path) {
            ("success", Some(url)) => {
                self.phase = GenerationPhase::Succeeded {
                    url: url.clone(),
                    thumb_url: resp.url_path_thumb,
                };
                PollOutcome::Done { url }
            }
            ("failed", _) => {
                let message = resp
                    .error
                    .unwrap_or_else(|| "image generation failed".to_string());
                self.phase = GenerationPhase::Failed { message };
                PollOutcome::Failed
            }
            _ => PollOutcome::Continue,
        }
    }

    /// Any transport failure (submit or poll) lands here; clears the task id
    /// so the poll loop exits.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = GenerationPhase::Failed {
            message: message.into(),
        };
    }

    pub fn reset(&mut self) {
        self.phase = GenerationPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(status: &str) -> GenerateResponse {
        GenerateResponse {
            status: status.into(),
            task_id: None,
            url_path: None,
            url_path_thumb: None,
            error: None,
        }
    }

    #[test]
    fn started_submit_enters_polling() {
        let mut gen = Generation::default();
        gen.begin_submit();

        let mut r = resp("started");
        r.task_id = Some("t1".into());
        assert_eq!(gen.on_submit_response(r), SubmitOutcome::Poll("t1".into()));
        assert_eq!(gen.task_id(), Some("t1"));
        assert!(gen.is_busy());
    }

    #[test]
    fn synchronous_success_skips_polling() {
        let mut gen = Generation::default();
        gen.begin_submit();

        let mut r = resp("success");
        r.url_path = Some("/img.png".into());
        assert_eq!(
            gen.on_submit_response(r),
            SubmitOutcome::Done {
                url: "/img.png".into()
            }
        );
        assert!(gen.task_id().is_none());
        assert_eq!(gen.result_url(), Some("/img.png"));
    }

    #[test]
    fn unexpected_submit_status_fails() {
        let mut gen = Generation::default();
        gen.begin_submit();
        assert_eq!(gen.on_submit_response(resp("weird")), SubmitOutcome::Failed);
        assert!(gen.error().unwrap().contains("weird"));
    }

    #[test]
    fn submit_then_first_poll_success_yields_save_url() {
        // {status:"started", task_id:"t1"} followed by
        // {status:"success", url_path:"/img.png"}.
        let mut gen = Generation::default();
        gen.begin_submit();
        let mut r = resp("started");
        r.task_id = Some("t1".into());
        gen.on_submit_response(r);

        let mut r = resp("success");
        r.url_path = Some("/img.png".into());
        assert_eq!(
            gen.on_status(r),
            PollOutcome::Done {
                url: "/img.png".into()
            }
        );
        assert!(gen.task_id().is_none(), "timer condition cleared");
    }

    #[test]
    fn pending_polls_continue() {
        let mut gen = Generation::default();
        gen.begin_submit();
        let mut r = resp("pending");
        r.task_id = Some("t1".into());
        gen.on_submit_response(r);

        assert_eq!(gen.on_status(resp("pending")), PollOutcome::Continue);
        assert_eq!(gen.on_status(resp("started")), PollOutcome::Continue);
        assert_eq!(gen.task_id(), Some("t1"));
    }

    #[test]
    fn failed_status_surfaces_the_reported_message() {
        let mut gen = Generation::default();
        gen.begin_submit();
        let mut r = resp("started");
        r.task_id = Some("t1".into());
        gen.on_submit_response(r);

        let mut r = resp("failed");
        r.error = Some("out of VRAM".into());
        assert_eq!(gen.on_status(r), PollOutcome::Failed);
        assert_eq!(gen.error(), Some("out of VRAM"));
        assert!(gen.task_id().is_none());
    }

    #[test]
    fn transport_failure_while_polling_clears_the_task_id() {
        let mut gen = Generation::default();
        gen.begin_submit();
        let mut r = resp("started");
        r.task_id = Some("t1".into());
        gen.on_submit_response(r);

        gen.fail("network error");
        assert!(gen.task_id().is_none());
        assert_eq!(gen.error(), Some("network error"));
    }

    #[test]
    fn begin_submit_clears_prior_result_and_error() {
        let mut gen = Generation::default();
        gen.fail("old error");
        gen.begin_submit();
        assert!(gen.error().is_none());
        assert!(gen.result_url().is_none());
    }
}
