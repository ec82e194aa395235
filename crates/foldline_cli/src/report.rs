//! Per-frame records for `foldline run --json`

use foldline_view::{Direction, FoldingView};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub time_ms: u64,
    pub current: usize,
    pub direction: Direction,
    pub animating: bool,
    pub scales: Vec<f32>,
    /// Draw commands recorded for the frame
    pub commands: usize,
}

impl FrameRecord {
    pub fn capture(view: &FoldingView, now: Duration) -> Self {
        let snapshot = view.snapshot();
        Self {
            frame: view.frames_drawn(),
            time_ms: now.as_millis() as u64,
            current: snapshot.current,
            direction: snapshot.direction,
            animating: snapshot.animating,
            scales: snapshot.scales,
            commands: view.last_frame().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldline_platform::headless::HeadlessSurface;
    use foldline_view::ViewConfig;

    #[test]
    fn test_record_serializes_flat() {
        let mut view = FoldingView::new(&ViewConfig::default().with_node_count(2)).unwrap();
        let surface = HeadlessSurface::new(200, 100);
        view.on_draw(&surface);

        let record = FrameRecord::capture(&view, Duration::from_millis(150));
        let json = serde_json::to_string(&record).unwrap();
        // clear, then per node: translate, two rotated segments, unwind
        assert_eq!(
            json,
            r#"{"frame":1,"time_ms":150,"current":0,"direction":"forward","animating":false,"scales":[0.0,0.0],"commands":17}"#
        );
    }
}
