//! Capture binder behaviour against the mock host
//!
//! Covers the success and failure paths, request counting, absent surfaces
//! and the non-blocking contract of `bind`.

use capbind_media::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;
use tokio_test::assert_pending;

/// Sink that keeps every report for inspection
#[derive(Default)]
struct RecordingSink {
    reports: RefCell<Vec<(String, MediaError)>>,
}

impl RecordingSink {
    fn count(&self) -> usize {
        self.reports.borrow().len()
    }

    fn rendered(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .map(|(message, error)| format!("{}{}", message, error))
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str, error: &MediaError) {
        self.reports
            .borrow_mut()
            .push((message.to_string(), error.clone()));
    }
}

#[derive(Default)]
struct TestPage {
    elements: HashMap<String, VideoElement>,
}

impl TestPage {
    fn with_element(id: &str) -> Self {
        let mut page = Self::default();
        page.elements.insert(id.to_string(), VideoElement::new(id));
        page
    }
}

impl SurfaceLookup for TestPage {
    type Surface = VideoElement;

    fn get_element_by_id(&self, id: &str) -> Option<VideoElement> {
        self.elements.get(id).cloned()
    }
}

struct Harness {
    event_loop: Rc<EventLoop>,
    device: Rc<MockDeviceAccess>,
    sink: Rc<RecordingSink>,
    binder: CaptureBinder<MockDeviceAccess>,
}

fn harness(device: MockDeviceAccess) -> Harness {
    let event_loop = Rc::new(EventLoop::new().unwrap());
    let device = Rc::new(device);
    let sink = Rc::new(RecordingSink::default());
    let binder = CaptureBinder::new(device.clone(), event_loop.clone(), sink.clone());
    Harness {
        event_loop,
        device,
        sink,
        binder,
    }
}

// ============================================================================
// SUCCESS PATH
// ============================================================================

#[test]
fn test_granted_stream_assigned_exactly_once() {
    let h = harness(MockDeviceAccess::granting());
    let element = VideoElement::new("webcam");

    let mut handle = h.binder.bind(Some(element.clone()));
    let state = h.event_loop.block_on(handle.settled());

    assert_eq!(state, BindState::Bound);
    assert_eq!(element.assignment_count(), 1);

    let granted = h.device.granted_streams();
    assert_eq!(granted.len(), 1);
    let bound = element.src_object().expect("stream should be bound");
    assert!(bound.same_session(&granted[0]));
    assert!(bound.has_video());
    assert_eq!(h.sink.count(), 0);
}

#[test]
fn test_default_request_is_video_only() {
    let h = harness(MockDeviceAccess::granting());
    let mut handle = h.binder.bind(Some(VideoElement::new("webcam")));
    h.event_loop.block_on(handle.settled());

    assert_eq!(
        h.device.requests(),
        vec![MediaStreamConstraints {
            video: true,
            audio: false,
        }]
    );
}

#[test]
fn test_bind_in_looks_up_configured_surface() {
    let h = harness(MockDeviceAccess::granting());
    let page = TestPage::with_element("preview");
    let binder = h.binder.with_surface_id("preview");

    let mut handle = binder.bind_in(&page);
    let state = h.event_loop.block_on(handle.settled());

    assert!(state.is_bound());
    assert_eq!(page.elements["preview"].assignment_count(), 1);
}

// ============================================================================
// FAILURE PATH
// ============================================================================

#[test]
fn test_denied_request_reports_once_and_leaves_surface_alone() {
    let h = harness(MockDeviceAccess::denying(AccessFailureCause::PermissionDenied));
    let element = VideoElement::new("webcam");

    let mut handle = h.binder.bind(Some(element.clone()));
    let state = h.event_loop.block_on(handle.settled());

    match state.error() {
        Some(MediaError::DeviceAccess { cause, .. }) => {
            assert_eq!(*cause, AccessFailureCause::PermissionDenied)
        }
        other => panic!("Expected DeviceAccess failure, got {:?}", other),
    }
    assert_eq!(element.assignment_count(), 0);
    assert!(!element.is_playing());

    assert_eq!(h.sink.count(), 1);
    let report = &h.sink.rendered()[0];
    assert!(report.starts_with(WEBCAM_ERROR_MESSAGE));
    assert!(report.contains("permission denied"));
}

#[test]
fn test_every_failure_cause_handled_the_same_way() {
    for cause in [
        AccessFailureCause::PermissionDenied,
        AccessFailureCause::NoDevice,
        AccessFailureCause::DeviceBusy,
        AccessFailureCause::Unknown,
    ] {
        let h = harness(MockDeviceAccess::denying(cause));
        let element = VideoElement::new("webcam");

        let mut handle = h.binder.bind(Some(element.clone()));
        let state = h.event_loop.block_on(handle.settled());

        assert!(matches!(state, BindState::Failed(MediaError::DeviceAccess { .. })));
        assert_eq!(element.assignment_count(), 0);
        assert_eq!(h.sink.count(), 1);
        assert_eq!(h.device.request_count(), 1);
    }
}

#[test]
fn test_invalid_constraints_fail_without_request() {
    let h = harness(MockDeviceAccess::granting());
    let binder = h.binder.with_constraints(MediaStreamConstraints {
        video: false,
        audio: false,
    });

    let mut handle = binder.bind(Some(VideoElement::new("webcam")));
    let state = h.event_loop.block_on(handle.settled());

    assert!(matches!(
        state,
        BindState::Failed(MediaError::InvalidConstraints { .. })
    ));
    assert_eq!(h.device.request_count(), 0);
    assert_eq!(h.sink.count(), 1);
}

// ============================================================================
// REQUEST COUNTING
// ============================================================================

#[test]
fn test_each_bind_issues_an_independent_request() {
    let h = harness(MockDeviceAccess::granting());
    let first = VideoElement::new("webcam");
    let second = VideoElement::new("webcam");

    let mut a = h.binder.bind(Some(first.clone()));
    let mut b = h.binder.bind(Some(second.clone()));
    h.event_loop.block_on(async {
        a.settled().await;
        b.settled().await;
    });

    assert_eq!(h.device.request_count(), 2);
    let streams = h.device.granted_streams();
    assert_ne!(streams[0], streams[1]);
    assert_eq!(first.assignment_count(), 1);
    assert_eq!(second.assignment_count(), 1);
}

// ============================================================================
// ABSENT SURFACE
// ============================================================================

#[test]
fn test_missing_surface_reported_and_execution_continues() {
    let h = harness(MockDeviceAccess::granting());
    let page = TestPage::default();

    let mut missing = h.binder.bind_in(&page);
    let state = h.event_loop.block_on(missing.settled());

    assert_eq!(
        state,
        BindState::Failed(MediaError::SurfaceNotFound {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
        })
    );
    assert_eq!(h.device.request_count(), 1);
    assert_eq!(h.sink.count(), 1);

    // The rest of the program keeps working.
    let element = VideoElement::new("webcam");
    let mut handle = h.binder.bind(Some(element.clone()));
    assert!(h.event_loop.block_on(handle.settled()).is_bound());
    assert_eq!(element.assignment_count(), 1);
}

// ============================================================================
// NON-BLOCKING CONTRACT
// ============================================================================

#[test]
fn test_bind_returns_before_resolution() {
    let h = harness(MockDeviceAccess::granting());
    let element = VideoElement::new("webcam");

    let mut handle = h.binder.bind(Some(element.clone()));

    // Nothing ran yet: the request sits on the queue.
    assert!(handle.is_pending());
    assert_eq!(h.device.request_count(), 0);
    assert_eq!(element.assignment_count(), 0);

    let mut observer = handle.clone();
    {
        let mut settled = tokio_test::task::spawn(observer.settled());
        assert_pending!(settled.poll());
    }

    assert!(h.event_loop.block_on(handle.settled()).is_bound());
}

#[test]
fn test_unanswered_request_stays_pending() {
    let h = harness(MockDeviceAccess::never_resolving());
    let element = VideoElement::new("webcam");

    let mut handle = h.binder.bind(Some(element.clone()));
    let waited = h.event_loop.block_on(async {
        tokio::time::timeout(Duration::from_millis(20), handle.settled()).await
    });

    assert!(waited.is_err());
    assert!(handle.is_pending());
    assert_eq!(h.device.request_count(), 1);
    assert_eq!(element.assignment_count(), 0);
    assert_eq!(h.sink.count(), 0);
}

#[test]
fn test_settled_returns_pending_when_event_loop_dropped() {
    let event_loop = Rc::new(EventLoop::new().unwrap());
    let device = Rc::new(MockDeviceAccess::never_resolving());
    let sink = Rc::new(RecordingSink::default());
    let binder = CaptureBinder::new(device.clone(), event_loop.clone(), sink.clone());

    let mut handle = binder.bind(Some(VideoElement::new("webcam")));
    event_loop.block_on(tokio::task::yield_now());
    assert_eq!(device.request_count(), 1);

    // Dropping the loop drops the outstanding request with it.
    drop(binder);
    drop(event_loop);

    assert_eq!(tokio_test::block_on(handle.settled()), BindState::Pending);
    assert_eq!(sink.count(), 0);
}

#[tokio::test]
async fn test_binds_inside_running_local_set() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let device = Rc::new(MockDeviceAccess::granting());
            let binder = CaptureBinder::new(
                device.clone(),
                Rc::new(CurrentLocalSet),
                Rc::new(TracingSink),
            );
            let element = VideoElement::new("webcam");

            let mut handle = binder.bind(Some(element.clone()));
            assert!(handle.is_pending());

            assert!(handle.settled().await.is_bound());
            assert_eq!(element.assignment_count(), 1);
        })
        .await;
}
