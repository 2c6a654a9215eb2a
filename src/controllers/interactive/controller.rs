use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::frame_request::FrameRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::render_frame::render_frame;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    pending_request: Mutex<Option<(u64, Arc<FrameRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn lock_pending(&self) -> MutexGuard<'_, Option<(u64, Arc<FrameRequest>)>> {
        self.pending_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders frame requests on one worker thread.
///
/// Only the newest pending request is kept: submitting while the worker is busy
/// replaces whatever was waiting. A frame that has started always runs to completion
/// and is presented, so generations reach the presenter in increasing order.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            pending_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: Arc<FrameRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut pending = self.shared.lock_pending();

            if let Some((replaced, _)) = pending.replace((generation, request)) {
                debug!("frame {} superseded by {} before rendering", replaced, generation);
            }
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // the worker checks the flag under this lock before waiting
            let _pending = self.shared.lock_pending();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let (job_generation, request) = {
                let mut pending = shared.lock_pending();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = pending.take() {
                        break job;
                    }

                    pending = shared
                        .wake
                        .wait(pending)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            let result = render_frame(request.pixel_rect, &request.snapshot);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => {
                    debug!("frame {} rendered in {:?}", job_generation, render_duration);

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(err) => {
                    warn!("frame {} failed: {}", job_generation, err);

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::explorer::state::ExplorerState;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn create_controller() -> (Arc<MockPresenterPort>, InteractiveController) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = InteractiveController::new(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>
        );

        (presenter_port, controller)
    }

    fn create_request(width: u32, height: u32) -> FrameRequest {
        let state = ExplorerState::new(f64::from(width), f64::from(height)).unwrap();

        FrameRequest {
            pixel_rect: PixelRect::from_size(width, height).unwrap(),
            snapshot: state.snapshot(),
        }
    }

    fn wait_for_generation(controller: &InteractiveController, generation: u64) {
        let start = Instant::now();

        while controller.last_completed_generation() < generation {
            assert!(
                start.elapsed() < Duration::from_secs(5),
                "timed out waiting for frame {}",
                generation
            );
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let (_, mut controller) = create_controller();

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_submit_request_emits_complete_frame() {
        let (presenter_port, mut controller) = create_controller();
        let request = create_request(8, 6);

        let generation = controller.submit_request(Arc::new(request));
        wait_for_generation(&controller, generation);
        let events = presenter_port.take_events();

        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Frame(frame) => {
                assert_eq!(frame.generation, generation);
                assert_eq!(frame.pixel_rect(), request.pixel_rect);
                assert_eq!(
                    frame.pixel_buffer,
                    render_frame(request.pixel_rect, &request.snapshot).unwrap()
                );
            }
            RenderEvent::Error(error) => panic!("unexpected render error: {}", error),
        }

        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let (presenter_port, mut controller) = create_controller();
        let request = Arc::new(create_request(4, 4));

        let gen_a = controller.submit_request(Arc::clone(&request));
        wait_for_generation(&controller, gen_a);
        let gen_b = controller.submit_request(Arc::clone(&request));
        wait_for_generation(&controller, gen_b);

        let generations: Vec<u64> = presenter_port
            .take_events()
            .iter()
            .map(RenderEvent::generation)
            .collect();

        assert_eq!(gen_a, 1);
        assert_eq!(gen_b, 2);
        assert_eq!(generations, vec![1, 2]);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_requests_end_with_newest_frame() {
        let (presenter_port, mut controller) = create_controller();
        let request = Arc::new(create_request(64, 48));

        let mut last_gen = 0;
        for _ in 0..10 {
            last_gen = controller.submit_request(Arc::clone(&request));
        }
        wait_for_generation(&controller, last_gen);

        let generations: Vec<u64> = presenter_port
            .take_events()
            .iter()
            .map(|event| match event {
                RenderEvent::Frame(frame) => frame.generation,
                RenderEvent::Error(error) => panic!("unexpected render error: {}", error),
            })
            .collect();

        assert_eq!(generations.last(), Some(&last_gen));
        assert!(generations.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(controller.last_completed_generation(), last_gen);

        controller.shutdown();
    }

    #[test]
    fn test_frame_uses_snapshot_taken_at_submit() {
        let (presenter_port, mut controller) = create_controller();
        let mut state = ExplorerState::new(16.0, 16.0).unwrap();
        let pixel_rect = PixelRect::from_size(16, 16).unwrap();
        let request = FrameRequest {
            pixel_rect,
            snapshot: state.snapshot(),
        };

        let generation = controller.submit_request(Arc::new(request));
        state.zoom(1.0);
        state.toggle_julia();
        wait_for_generation(&controller, generation);

        let events = presenter_port.take_events();
        let RenderEvent::Frame(frame) = &events[0] else {
            panic!("expected a frame event");
        };
        assert_eq!(
            frame.pixel_buffer,
            render_frame(pixel_rect, &request.snapshot).unwrap()
        );

        controller.shutdown();
    }

    #[test]
    fn test_shutdown_right_after_start_joins_worker() {
        for _ in 0..200 {
            let (_, mut controller) = create_controller();
            let (done_tx, done_rx) = std::sync::mpsc::channel();

            thread::spawn(move || {
                controller.shutdown();
                let _ = done_tx.send(());
            });

            assert!(
                done_rx.recv_timeout(Duration::from_secs(5)).is_ok(),
                "shutdown did not join the worker"
            );
        }
    }

    #[test]
    fn test_shutdown_after_idle_wait_joins_worker() {
        let (presenter_port, mut controller) = create_controller();
        let generation = controller.submit_request(Arc::new(create_request(4, 4)));
        wait_for_generation(&controller, generation);
        thread::sleep(Duration::from_millis(20));

        controller.shutdown();

        assert_eq!(presenter_port.take_events().len(), 1);
        assert!(controller.worker.is_none());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (_, mut controller) = create_controller();

        controller.shutdown();
        controller.shutdown();

        assert_eq!(controller.last_completed_generation(), 0);
    }
}
