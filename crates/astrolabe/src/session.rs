//! Fetch, lay out and replace: one chart view's refresh cycle.
//!
//! Every refresh takes a generation number. A response that arrives after a
//! newer refresh was issued is dropped, so the drawing always reflects the
//! latest request.

use crate::chart::{
    validate_chart_input, ChartInput, ChartInputError, ChartKind, ChartSettings, ProcessDate,
    Step, StepError,
};
use crate::layout::{layout_chart, ChartLayout};
use crate::viewport::{fit_wheel_size, WheelSize};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("calculation service failed: {0}")]
    Upstream(String),
    #[error("service returned unusable data: {0}")]
    Input(#[from] ChartInputError),
    #[error(transparent)]
    Step(#[from] StepError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub long: f64,
    pub lat: f64,
}

/// What to ask the calculation service for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub native_date: NaiveDateTime,
    pub process_date: ProcessDate,
    pub geo: GeoPosition,
}

/// The external calculation service.
#[async_trait]
pub trait HoroscopeService: Send + Sync {
    async fn fetch(&self, request: &ChartRequest) -> Result<ChartInput, SessionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Drawn(ChartLayout),
    /// A newer refresh was issued while this one was in flight
    Stale { generation: u64, latest: u64 },
}

struct SessionState {
    request: ChartRequest,
    /// Last width passed to `resize`
    viewport: Option<f64>,
    wheel: WheelSize,
    layout: Option<ChartLayout>,
}

pub struct ChartSession<S> {
    service: S,
    settings: ChartSettings,
    generation: AtomicU64,
    state: Mutex<SessionState>,
}

impl<S: HoroscopeService> ChartSession<S> {
    pub fn new(service: S, settings: ChartSettings, request: ChartRequest) -> Self {
        let wheel = WheelSize {
            size: settings.size_for(request.kind),
            font_size: settings.font_size,
        };
        Self {
            service,
            settings,
            generation: AtomicU64::new(0),
            state: Mutex::new(SessionState {
                request,
                viewport: None,
                wheel,
                layout: None,
            }),
        }
    }

    pub async fn request(&self) -> ChartRequest {
        self.state.lock().await.request.clone()
    }

    /// Replace the request. A viewport set by `resize` still applies.
    pub async fn set_request(&self, request: ChartRequest) {
        let mut state = self.state.lock().await;
        state.wheel = self.wheel_for(request.kind, state.viewport);
        state.request = request;
    }

    /// Fit the image to a viewport of `width` for subsequent layouts.
    pub async fn resize(&self, width: f64) -> WheelSize {
        let mut state = self.state.lock().await;
        state.viewport = Some(width);
        state.wheel = self.wheel_for(state.request.kind, state.viewport);
        state.wheel
    }

    fn wheel_for(&self, kind: ChartKind, viewport: Option<f64>) -> WheelSize {
        let natural = self.settings.size_for(kind);
        match viewport {
            Some(width) => fit_wheel_size(natural, self.settings.font_size, width),
            None => WheelSize {
                size: natural,
                font_size: self.settings.font_size,
            },
        }
    }

    /// Last layout that was drawn.
    pub async fn layout(&self) -> Option<ChartLayout> {
        self.state.lock().await.layout.clone()
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Fetch the current request and replace the drawing.
    ///
    /// On failure the previous layout is kept.
    pub async fn refresh(&self) -> Result<RefreshOutcome, SessionError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let request = self.state.lock().await.request.clone();

        let input = match self.service.fetch(&request).await {
            Ok(input) => input,
            Err(e) => {
                log::warn!("Refresh {} failed: {}", generation, e);
                return Err(e);
            }
        };
        validate_chart_input(&input)?;

        let mut state = self.state.lock().await;
        let latest = self.latest_generation();
        if generation < latest {
            log::debug!("Discarding stale response {} (latest {})", generation, latest);
            return Ok(RefreshOutcome::Stale { generation, latest });
        }

        let layout = layout_chart(&input, state.wheel.size, state.wheel.font_size, &self.settings);
        state.layout = Some(layout.clone());
        Ok(RefreshOutcome::Drawn(layout))
    }

    /// Move the process date by `step` and redraw.
    pub async fn step(&self, step: Step) -> Result<RefreshOutcome, SessionError> {
        {
            let mut state = self.state.lock().await;
            state.request.process_date = state.request.process_date.step(step)?;
        }
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Body;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    fn request(kind: ChartKind) -> ChartRequest {
        ChartRequest {
            kind,
            native_date: ProcessDate::new(1990, 5, 1, 8, 0, 0).unwrap().0,
            process_date: ProcessDate::new(2024, 1, 1, 0, 0, 0).unwrap(),
            geo: GeoPosition {
                long: 116.4,
                lat: 39.9,
            },
        }
    }

    /// Echoes the process year as the Sun's longitude; the first call is slow.
    struct SlowFirst {
        first: AtomicBool,
    }

    #[async_trait]
    impl HoroscopeService for SlowFirst {
        async fn fetch(&self, request: &ChartRequest) -> Result<ChartInput, SessionError> {
            if self.first.swap(false, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            let mut input = ChartInput::new(request.kind);
            input.bodies = vec![Body::new("Sun", (request.process_date.year() % 360) as f64)];
            Ok(input)
        }
    }

    struct Failing;

    #[async_trait]
    impl HoroscopeService for Failing {
        async fn fetch(&self, _request: &ChartRequest) -> Result<ChartInput, SessionError> {
            Err(SessionError::Upstream("503 Service Unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_refresh_draws() {
        let session = ChartSession::new(
            SlowFirst {
                first: AtomicBool::new(false),
            },
            ChartSettings::default(),
            request(ChartKind::Natal),
        );
        let outcome = session.refresh().await.unwrap();
        assert!(matches!(outcome, RefreshOutcome::Drawn(_)));
        assert_eq!(session.layout().await.unwrap().labels.len(), 1);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let session = ChartSession::new(
            SlowFirst {
                first: AtomicBool::new(true),
            },
            ChartSettings::default(),
            request(ChartKind::Natal),
        );

        let slow = session.refresh();
        let fast = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            session.step(Step::years(1)).await
        };
        let (slow, fast) = tokio::join!(slow, fast);

        assert!(matches!(
            slow.unwrap(),
            RefreshOutcome::Stale {
                generation: 1,
                latest: 2
            }
        ));
        assert!(matches!(fast.unwrap(), RefreshOutcome::Drawn(_)));

        let layout = session.layout().await.unwrap();
        assert_eq!(layout.labels[0].body.longitude, (2025 % 360) as f64);
    }

    /// Answers the first fetch, then fails.
    struct FailsAfterFirst {
        served: AtomicBool,
    }

    #[async_trait]
    impl HoroscopeService for FailsAfterFirst {
        async fn fetch(&self, request: &ChartRequest) -> Result<ChartInput, SessionError> {
            if self.served.swap(true, Ordering::SeqCst) {
                return Err(SessionError::Upstream("502 Bad Gateway".to_string()));
            }
            let mut input = ChartInput::new(request.kind);
            input.bodies = vec![Body::new("Sun", 42.0)];
            Ok(input)
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_without_layout() {
        let session = ChartSession::new(Failing, ChartSettings::default(), request(ChartKind::Natal));
        let err = session.refresh().await.unwrap_err();
        assert!(matches!(err, SessionError::Upstream(_)));
        assert!(session.layout().await.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_previous_layout() {
        let session = ChartSession::new(
            FailsAfterFirst {
                served: AtomicBool::new(false),
            },
            ChartSettings::default(),
            request(ChartKind::Natal),
        );
        let drawn = match session.refresh().await.unwrap() {
            RefreshOutcome::Drawn(layout) => layout,
            other => panic!("unexpected outcome {:?}", other),
        };

        let err = session.step(Step::days(1)).await.unwrap_err();
        assert!(matches!(err, SessionError::Upstream(_)));

        let kept = session.layout().await.unwrap();
        assert_eq!(kept.id, drawn.id);
        assert_eq!(kept, drawn);
    }

    #[tokio::test]
    async fn test_set_request_keeps_viewport() {
        let session = ChartSession::new(
            SlowFirst {
                first: AtomicBool::new(false),
            },
            ChartSettings::default(),
            request(ChartKind::Natal),
        );
        session.resize(350.0).await;
        session.set_request(request(ChartKind::Transit)).await;
        match session.refresh().await.unwrap() {
            RefreshOutcome::Drawn(layout) => {
                assert_eq!(layout.size, 350.0);
                assert_eq!(layout.font_size, 10.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resize_scales_font() {
        let session = ChartSession::new(
            SlowFirst {
                first: AtomicBool::new(false),
            },
            ChartSettings::default(),
            request(ChartKind::SevenGovernors),
        );
        let wheel = session.resize(400.0).await;
        assert_eq!(wheel.size, 400.0);
        assert_eq!(wheel.font_size, 10.0);
    }

    #[tokio::test]
    async fn test_step_moves_process_date() {
        let session = ChartSession::new(
            SlowFirst {
                first: AtomicBool::new(false),
            },
            ChartSettings::default(),
            request(ChartKind::Natal),
        );
        session.step(Step::months(-1)).await.unwrap();
        let process = session.request().await.process_date;
        assert_eq!((process.year(), process.month()), (2023, 12));
    }
}
